//! The `rules` command: list every lint code.

use std::io::Write;

use keylint_diagnostic::{LintCode, LintDocs};

use crate::CliError;

/// Print each code with its severity and summary.
pub fn list_rules(out: &mut impl Write) -> Result<(), CliError> {
    for code in LintCode::ALL {
        let docs = if LintDocs::has_docs(*code) {
            ""
        } else {
            " (undocumented)"
        };
        writeln!(out, "{code} [{}]{docs}", code.default_severity())?;
        writeln!(out, "    {}", code.summary())?;
    }
    writeln!(out)?;
    writeln!(out, "Run `keylint explain <CODE>` for details.")?;
    Ok(())
}
