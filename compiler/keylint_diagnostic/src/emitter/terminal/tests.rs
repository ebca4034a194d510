use super::*;
use crate::LintCode;
use keylint_ir::Span;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::warning(LintCode::ArrayAsKeyOfSetOrMap)
        .with_message("array used as the element type of a HashSet")
        .with_label(Span::new(8, 27), "element type is `int[]`")
        .with_secondary_label(Span::new(0, 3), "declared here")
        .with_note("arrays compare by reference")
}

fn render(emitter_setup: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut output = Vec::new();
    emitter_setup(&mut output);
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    });

    assert!(text.starts_with("warning[ArrayAsKeyOfSetOrMap]: array used"));
    assert!(text.contains("--> 8..27: element type is `int[]`"));
    assert!(text.contains("0..3: declared here"));
    assert!(text.contains("= note: arrays compare by reference"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Always, false);
        emitter.emit(&sample_diagnostic());
    });

    assert!(text.contains("\x1b[1;33mwarning"));
    assert!(text.contains("ArrayAsKeyOfSetOrMap"));
}

#[test]
fn test_terminal_emitter_with_source_prints_line_col() {
    let source = "Set<int[]> s =\n    new HashSet<>();\n";
    let diag = Diagnostic::warning(LintCode::ArrayAsKeyOfSetOrMap)
        .with_message("array key")
        .with_label(Span::new(19, 34), "here");

    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
            .with_source("src/Keys.java", source);
        emitter.emit(&diag);
    });

    assert!(text.contains("--> src/Keys.java:2:5: here"), "got:\n{text}");
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::warning(LintCode::ArrayAsKeyOfSetOrMap).with_message("first"),
        Diagnostic::warning(LintCode::ArrayAsKeyOfSetOrMap).with_message("second"),
    ];
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_all(&diagnostics);
    });

    assert!(text.contains("first"));
    assert!(text.contains("second"));
}

#[test]
fn test_emit_summary_warnings_only() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 3);
    });
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_emit_summary_single_warning() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 1);
    });
    assert_eq!(text, "warning: 1 warning emitted\n");
}

#[test]
fn test_emit_summary_errors_and_warnings() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(2, 1);
    });
    assert_eq!(text, "error: 2 errors, 1 warning emitted\n");
}

#[test]
fn test_emit_summary_nothing() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 0);
    });
    assert!(text.is_empty());
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("sometimes".parse::<ColorMode>(), Err(()));
}
