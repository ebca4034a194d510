//! Pretty-printed JSON for the machine-readable emitters.
//!
//! Members are written in call order with two-space indentation. Write
//! errors are ignored here; callers flush and report through their writer.

use std::fmt::Display;
use std::io::Write;

use super::escape_json;

pub(crate) struct JsonWriter<W: Write> {
    out: W,
    /// One entry per open container: has it written a member yet?
    open: Vec<bool>,
}

impl<W: Write> JsonWriter<W> {
    pub(crate) fn new(out: W) -> Self {
        JsonWriter {
            out,
            open: Vec::new(),
        }
    }

    /// Start a member of the innermost container, writing `"key": ` if given.
    fn member(&mut self, key: Option<&str>) {
        if let Some(has_members) = self.open.last_mut() {
            let comma = if *has_members { "," } else { "" };
            *has_members = true;
            let depth = self.open.len();
            let _ = write!(self.out, "{comma}\n{:width$}", "", width = depth * 2);
        }
        if let Some(key) = key {
            let _ = write!(self.out, "\"{}\": ", escape_json(key));
        }
    }

    fn close(&mut self, bracket: char) {
        if self.open.pop() == Some(true) {
            let depth = self.open.len();
            let _ = write!(self.out, "\n{:width$}", "", width = depth * 2);
        }
        let _ = write!(self.out, "{bracket}");
    }

    pub(crate) fn open_object(&mut self, key: Option<&str>) {
        self.member(key);
        let _ = write!(self.out, "{{");
        self.open.push(false);
    }

    pub(crate) fn close_object(&mut self) {
        self.close('}');
    }

    pub(crate) fn open_array(&mut self, key: Option<&str>) {
        self.member(key);
        let _ = write!(self.out, "[");
        self.open.push(false);
    }

    pub(crate) fn close_array(&mut self) {
        self.close(']');
    }

    pub(crate) fn string(&mut self, key: Option<&str>, value: &str) {
        self.member(key);
        let _ = write!(self.out, "\"{}\"", escape_json(value));
    }

    /// A number or boolean, written as its `Display` form.
    pub(crate) fn scalar(&mut self, key: Option<&str>, value: impl Display) {
        self.member(key);
        let _ = write!(self.out, "{value}");
    }

    /// `"key": { "text": value }`, the SARIF message shape.
    pub(crate) fn text_object(&mut self, key: &str, value: &str) {
        self.open_object(Some(key));
        self.string(Some("text"), value);
        self.close_object();
    }

    pub(crate) fn newline(&mut self) {
        let _ = writeln!(self.out);
    }

    pub(crate) fn flush(&mut self) {
        let _ = self.out.flush();
    }
}
