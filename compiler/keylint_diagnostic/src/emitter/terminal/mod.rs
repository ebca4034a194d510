//! Human-readable output with optional ANSI color.
//!
//! ```text
//! warning[ArrayAsKeyOfSetOrMap]: Arrays do not override equals() ...
//!   --> src/Keys.java:2:5: hash set constructed with an array element type
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// Text roles, each with its own ANSI sequence.
#[derive(Copy, Clone)]
enum Style {
    Error,
    Warning,
    Note,
    Help,
    Bold,
    Secondary,
}

impl Style {
    const RESET: &'static str = "\x1b[0m";

    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Note => "\x1b[1;36m",
            Style::Help => "\x1b[1;32m",
            Style::Bold => "\x1b[1m",
            Style::Secondary => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
            Severity::Note => Style::Note,
            Severity::Help => Style::Help,
        }
    }
}

/// When to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ColorMode::Auto, ColorMode::Always, ColorMode::Never]
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(())
    }
}

/// The file label offsets are resolved against.
struct SourceFile<'src> {
    path: &'src str,
    text: &'src str,
    lines: LineOffsetTable,
}

/// Terminal emitter.
///
/// Without a source file, label locations print as byte spans (`8..27`).
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// `is_tty` is consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Print label locations as `path:line:col` within `text`.
    #[must_use]
    pub fn with_source(mut self, path: &'src str, text: &'src str) -> Self {
        self.source = Some(SourceFile {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    fn paint(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{}", style.ansi(), Style::RESET)
        } else {
            write!(self.writer, "{text}")
        };
    }

    fn location(&self, offset: u32, fallback: impl std::fmt::Display) -> String {
        match &self.source {
            Some(file) => {
                let (line, col) = file.lines.offset_to_line_col(file.text, offset);
                format!("{}:{line}:{col}", file.path)
            }
            None => fallback.to_string(),
        }
    }
}

impl TerminalEmitter<'_, io::Stdout> {
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = Style::for_severity(diagnostic.severity);
        self.paint(diagnostic.severity.as_str(), severity);
        self.paint(&format!("[{}]", diagnostic.code), Style::Bold);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let (marker, style) = if label.is_primary {
                let style = match diagnostic.severity {
                    Severity::Error => Style::Error,
                    _ => Style::Warning,
                };
                ("-->", style)
            } else {
                ("   ", Style::Secondary)
            };
            let at = self.location(label.span.start, label.span);
            let _ = write!(self.writer, "  {marker} {at}: ");
            self.paint(&label.message, style);
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", Style::Bold);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let (head, style, counts) = match (error_count, warning_count) {
            (0, 0) => return,
            (0, w) => ("warning", Style::Warning, plural(w, "warning")),
            (e, 0) => ("error", Style::Error, plural(e, "error")),
            (e, w) => (
                "error",
                Style::Error,
                format!("{}, {}", plural(e, "error"), plural(w, "warning")),
            ),
        };
        self.paint(head, style);
        let _ = writeln!(self.writer, ": {counts} emitted");
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
