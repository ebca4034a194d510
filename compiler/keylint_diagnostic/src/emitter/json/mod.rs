//! Machine-readable output as a JSON array of findings.

use std::io::Write;

use crate::Diagnostic;

use super::json_writer::JsonWriter;
use super::DiagnosticEmitter;

/// Streams findings as one JSON array.
///
/// Call [`begin`](Self::begin) before the first finding and
/// [`end`](Self::end) after the last.
pub struct JsonEmitter<W: Write> {
    json: JsonWriter<W>,
    /// Path attached to every finding, when known.
    path: Option<String>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            json: JsonWriter::new(writer),
            path: None,
        }
    }

    /// Attach a unit path to findings emitted from now on.
    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    pub fn begin(&mut self) {
        self.json.open_array(None);
    }

    pub fn end(&mut self) {
        self.json.close_array();
        self.json.newline();
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let json = &mut self.json;
        json.open_object(None);
        json.string(Some("code"), diagnostic.code.as_str());
        json.string(Some("severity"), diagnostic.severity.as_str());
        if let Some(path) = &self.path {
            json.string(Some("path"), path);
        }
        json.string(Some("message"), &diagnostic.message);

        json.open_array(Some("labels"));
        for label in &diagnostic.labels {
            json.open_object(None);
            json.scalar(Some("start"), label.span.start);
            json.scalar(Some("end"), label.span.end);
            json.string(Some("message"), &label.message);
            json.scalar(Some("primary"), label.is_primary);
            json.close_object();
        }
        json.close_array();

        json.open_array(Some("notes"));
        for note in &diagnostic.notes {
            json.string(None, note);
        }
        json.close_array();
        json.close_object();
    }

    fn flush(&mut self) {
        self.json.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array is the report; counts are derivable from it.
    }
}
