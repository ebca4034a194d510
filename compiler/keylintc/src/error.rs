//! Driver errors.

use keylint_diagnostic::LintCode;

/// Everything the `keylint` binary can fail with.
///
/// Rules themselves never fail; these cover command-line handling and
/// writing the report.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown lint code: {0}")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    MissingDocs(LintCode),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown option `{option}` for `{command}`")]
    UnknownOption {
        command: &'static str,
        option: String,
    },

    #[error("invalid value `{value}` for --{option} (expected one of: {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("missing argument; usage: keylint {0}")]
    MissingArgument(&'static str),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
