//! Command handlers for the `keylint` CLI.
//!
//! Each handler writes to the writer it is given and reports failure as a
//! [`CliError`](crate::CliError); `main` decides the exit code.

mod demo;
mod explain;
mod rules;

pub use demo::run_demo;
pub use explain::explain_code;
pub use rules::list_rules;
