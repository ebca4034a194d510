//! Output selection and report rendering.
//!
//! Findings from each unit pass through a [`DiagnosticQueue`] for ordering
//! and deduplication, then render in one of three formats.

use std::io::Write;
use std::str::FromStr;

use keylint_diagnostic::emitter::{
    ColorMode, DiagnosticEmitter, JsonEmitter, SarifEmitter, TerminalEmitter,
};
use keylint_diagnostic::{Diagnostic, DiagnosticQueue, QueueConfig};
use keylint_rules::CompilationUnit;

use crate::CliError;

/// Report format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, optionally colored.
    #[default]
    Terminal,
    /// A JSON array of findings.
    Json,
    /// A SARIF 2.1.0 log.
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            _ => Err(()),
        }
    }
}

/// How a report is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl OutputConfig {
    /// Parse `--format=<fmt>` and `--color=<mode>` from a command's options.
    ///
    /// Later occurrences override earlier ones. Anything else is an error.
    pub fn parse(command: &'static str, args: &[String]) -> Result<Self, CliError> {
        let mut config = OutputConfig::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--format=") {
                config.format = value.parse().map_err(|()| CliError::InvalidValue {
                    option: "format",
                    value: value.to_string(),
                    expected: "terminal, json, sarif",
                })?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                config.color = value.parse().map_err(|()| CliError::InvalidValue {
                    option: "color",
                    value: value.to_string(),
                    expected: "auto, always, never",
                })?;
            } else {
                return Err(CliError::UnknownOption {
                    command,
                    option: arg.clone(),
                });
            }
        }
        Ok(config)
    }
}

/// Findings of one unit, in display order.
pub struct UnitReport<'u> {
    pub unit: &'u CompilationUnit,
    pub findings: Vec<Diagnostic>,
}

/// Findings across a set of units, ready to render.
pub struct Report<'u> {
    units: Vec<UnitReport<'u>>,
    error_count: usize,
    warning_count: usize,
}

impl<'u> Report<'u> {
    /// Queue each unit's findings and order them by position.
    ///
    /// `results` pairs with `units` by index, as returned by
    /// `LintRunner::check_units`.
    pub fn collect(
        units: &'u [CompilationUnit],
        results: Vec<Vec<Diagnostic>>,
        config: &QueueConfig,
    ) -> Self {
        let mut report = Report {
            units: Vec::with_capacity(units.len()),
            error_count: 0,
            warning_count: 0,
        };

        for (unit, findings) in units.iter().zip(results) {
            let mut queue = DiagnosticQueue::with_config(config.clone());
            queue.extend_with_source(findings, &unit.source);
            report.error_count += queue.error_count();
            report.warning_count += queue.warning_count();
            report.units.push(UnitReport {
                unit,
                findings: queue.flush(),
            });
        }
        report
    }

    pub fn units(&self) -> &[UnitReport<'u>] {
        &self.units
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn finding_count(&self) -> usize {
        self.units.iter().map(|u| u.findings.len()).sum()
    }

    /// Write the report in the configured format.
    ///
    /// `is_tty` decides color for [`ColorMode::Auto`].
    pub fn render<W: Write>(&self, config: OutputConfig, is_tty: bool, writer: &mut W) {
        match config.format {
            OutputFormat::Terminal => self.render_terminal(config.color, is_tty, writer),
            OutputFormat::Json => self.render_json(writer),
            OutputFormat::Sarif => self.render_sarif(writer),
        }
    }

    fn render_terminal<W: Write>(&self, color: ColorMode, is_tty: bool, writer: &mut W) {
        for report in &self.units {
            if report.findings.is_empty() {
                continue;
            }
            let mut emitter = TerminalEmitter::with_color_mode(&mut *writer, color, is_tty)
                .with_source(&report.unit.path, &report.unit.source);
            emitter.emit_all(&report.findings);
        }

        let mut emitter = TerminalEmitter::with_color_mode(&mut *writer, color, is_tty);
        emitter.emit_summary(self.error_count, self.warning_count);
        emitter.flush();
    }

    fn render_json<W: Write>(&self, writer: &mut W) {
        let mut emitter = JsonEmitter::new(writer);
        emitter.begin();
        for report in &self.units {
            emitter.set_path(Some(report.unit.path.clone()));
            emitter.emit_all(&report.findings);
        }
        emitter.end();
        emitter.flush();
    }

    fn render_sarif<W: Write>(&self, writer: &mut W) {
        let mut emitter = SarifEmitter::new(writer, "keylint", env!("CARGO_PKG_VERSION"));
        for report in &self.units {
            emitter.set_unit(Some(report.unit.path.clone()), Some(report.unit.source.as_str()));
            emitter.emit_all(&report.findings);
        }
        emitter.finish();
        emitter.flush();
    }
}
