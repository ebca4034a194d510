//! SARIF 2.1.0 output for CI/CD integration.
//!
//! See: <https://sarifweb.azurewebsites.net/>

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, LintCode, Severity};

use super::json_writer::JsonWriter;
use super::DiagnosticEmitter;

const SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// SARIF emitter.
///
/// Results are buffered; [`finish`](Self::finish) writes the log. Findings
/// are located against the unit set by [`set_unit`](Self::set_unit) at the
/// time they are emitted.
pub struct SarifEmitter<'src, W: Write> {
    json: JsonWriter<W>,
    tool_name: String,
    tool_version: String,
    unit: Unit<'src>,
    results: Vec<SarifResult>,
}

#[derive(Default)]
struct Unit<'src> {
    uri: Option<String>,
    source: Option<(&'src str, LineOffsetTable)>,
}

impl Unit<'_> {
    /// 1-based (line, column); `(1, 1)` without source text.
    fn line_col(&self, offset: u32) -> (u32, u32) {
        self.source
            .as_ref()
            .map_or((1, 1), |(text, table)| table.offset_to_line_col(text, offset))
    }
}

struct SarifResult {
    code: LintCode,
    severity: Severity,
    message: String,
    locations: Vec<Location>,
    related: Vec<Location>,
}

struct Location {
    uri: Option<String>,
    start: (u32, u32),
    end: (u32, u32),
    message: Option<String>,
}

fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Note | Severity::Help => "note",
    }
}

impl<'src, W: Write> SarifEmitter<'src, W> {
    pub fn new(writer: W, tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        SarifEmitter {
            json: JsonWriter::new(writer),
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            unit: Unit::default(),
            results: Vec::new(),
        }
    }

    /// Set the artifact URI (file path) for locations.
    #[must_use]
    pub fn with_artifact(mut self, uri: impl Into<String>) -> Self {
        self.unit.uri = Some(uri.into());
        self
    }

    /// Set the source text for computing line/column from byte offsets.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.unit.source = Some((source, LineOffsetTable::build(source)));
        self
    }

    /// Switch the unit subsequent findings are reported against.
    pub fn set_unit(&mut self, uri: Option<String>, source: Option<&'src str>) {
        self.unit = Unit {
            uri,
            source: source.map(|text| (text, LineOffsetTable::build(text))),
        };
    }

    /// Write the complete SARIF log.
    pub fn finish(&mut self) {
        let results = std::mem::take(&mut self.results);

        self.json.open_object(None);
        self.json.string(Some("$schema"), SCHEMA);
        self.json.string(Some("version"), "2.1.0");
        self.json.open_array(Some("runs"));
        self.json.open_object(None);
        self.write_tool(&results);
        self.json.open_array(Some("results"));
        for result in &results {
            self.write_result(result);
        }
        self.json.close_array();
        self.json.close_object();
        self.json.close_array();
        self.json.close_object();
        self.json.newline();

        self.results = results;
    }

    /// Driver metadata, listing only the rules that were reported.
    fn write_tool(&mut self, results: &[SarifResult]) {
        let json = &mut self.json;
        json.open_object(Some("tool"));
        json.open_object(Some("driver"));
        json.string(Some("name"), &self.tool_name);
        json.string(Some("version"), &self.tool_version);
        json.open_array(Some("rules"));
        for code in LintCode::ALL {
            if results.iter().any(|r| r.code == *code) {
                json.open_object(None);
                json.string(Some("id"), code.as_str());
                json.text_object("shortDescription", code.summary());
                json.close_object();
            }
        }
        json.close_array();
        json.close_object();
        json.close_object();
    }

    fn write_result(&mut self, result: &SarifResult) {
        self.json.open_object(None);
        self.json.string(Some("ruleId"), result.code.as_str());
        self.json.string(Some("level"), level(result.severity));
        self.json.text_object("message", &result.message);

        self.json.open_array(Some("locations"));
        for loc in &result.locations {
            self.write_location(loc, None);
        }
        self.json.close_array();

        if !result.related.is_empty() {
            self.json.open_array(Some("relatedLocations"));
            for (id, loc) in result.related.iter().enumerate() {
                self.write_location(loc, Some(id));
            }
            self.json.close_array();
        }
        self.json.close_object();
    }

    fn write_location(&mut self, loc: &Location, id: Option<usize>) {
        let json = &mut self.json;
        json.open_object(None);
        if let Some(id) = id {
            json.scalar(Some("id"), id);
        }
        json.open_object(Some("physicalLocation"));
        if let Some(uri) = &loc.uri {
            json.open_object(Some("artifactLocation"));
            json.string(Some("uri"), uri);
            json.close_object();
        }
        json.open_object(Some("region"));
        json.scalar(Some("startLine"), loc.start.0);
        json.scalar(Some("startColumn"), loc.start.1);
        json.scalar(Some("endLine"), loc.end.0);
        json.scalar(Some("endColumn"), loc.end.1);
        json.close_object();
        json.close_object();
        if let Some(message) = &loc.message {
            json.text_object("message", message);
        }
        json.close_object();
    }
}

impl<W: Write> DiagnosticEmitter for SarifEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let (mut locations, related): (Vec<_>, Vec<_>) = diagnostic
            .labels
            .iter()
            .map(|label| {
                let loc = Location {
                    uri: self.unit.uri.clone(),
                    start: self.unit.line_col(label.span.start),
                    end: self.unit.line_col(label.span.end),
                    message: (!label.message.is_empty()).then(|| label.message.clone()),
                };
                (label.is_primary, loc)
            })
            .partition(|(primary, _)| *primary);

        // SARIF results need a location even when the finding has no label.
        if locations.is_empty() {
            locations.push((
                true,
                Location {
                    uri: self.unit.uri.clone(),
                    start: (1, 1),
                    end: (1, 1),
                    message: None,
                },
            ));
        }

        self.results.push(SarifResult {
            code: diagnostic.code,
            severity: diagnostic.severity,
            message: diagnostic.message.clone(),
            locations: locations.into_iter().map(|(_, loc)| loc).collect(),
            related: related.into_iter().map(|(_, loc)| loc).collect(),
        });
    }

    fn flush(&mut self) {
        self.json.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // SARIF has no summary; call finish() instead.
    }
}
