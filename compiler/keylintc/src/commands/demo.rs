//! The `demo` command: check the built-in example units and report.

use std::io::Write;
use std::sync::Arc;

use keylint_diagnostic::QueueConfig;
use keylint_ir::StringInterner;
use keylint_rules::LintRunner;

use crate::scenarios::demo_units;
use crate::{CliError, OutputConfig, Report};

/// Check every demo unit and write the report.
///
/// `args` are the options after `demo`.
pub fn run_demo(args: &[String], is_tty: bool, out: &mut impl Write) -> Result<(), CliError> {
    let config = OutputConfig::parse("demo", args)?;

    let interner = Arc::new(StringInterner::new());
    let runner = LintRunner::with_default_passes(Arc::clone(&interner));
    let units = demo_units(&interner);
    let results = runner.check_units(&units);

    let report = Report::collect(&units, results, &QueueConfig::default());
    tracing::debug!(
        units = units.len(),
        findings = report.finding_count(),
        format = ?config.format,
        "demo checked"
    );

    let mut buffer = Vec::new();
    report.render(config, is_tty, &mut buffer);
    out.write_all(&buffer)?;
    out.flush()?;
    Ok(())
}
