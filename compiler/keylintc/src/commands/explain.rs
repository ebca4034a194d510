//! The `explain` command: display documentation for lint codes.

use std::io::Write;

use keylint_diagnostic::{LintCode, LintDocs};

use crate::CliError;

/// Write the documentation for `code_str`, matched case-insensitively.
pub fn explain_code(code_str: &str, out: &mut impl Write) -> Result<(), CliError> {
    let code = code_str
        .parse::<LintCode>()
        .map_err(|()| CliError::UnknownCode(code_str.to_string()))?;
    let doc = LintDocs::get(code).ok_or(CliError::MissingDocs(code))?;
    writeln!(out, "{doc}")?;
    Ok(())
}
