//! Finding emitters.
//!
//! - [`TerminalEmitter`]: human-readable, optionally colored
//! - [`JsonEmitter`]: a JSON array for editor and script integrations
//! - [`SarifEmitter`]: a SARIF 2.1.0 log for code-scanning services

mod json;
mod json_writer;
mod sarif;
mod terminal;

pub use json::JsonEmitter;
pub use sarif::SarifEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for findings in one output format.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|diag| self.emit(diag));
    }

    /// Flush buffered output to the underlying writer.
    fn flush(&mut self);

    /// Report totals, for formats that have a place for them.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Escape a string for use inside a JSON string literal.
pub(crate) fn escape_json(s: &str) -> String {
    s.chars().fold(String::with_capacity(s.len()), |mut out, c| {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
        out
    })
}
