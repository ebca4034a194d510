//! The keylint driver.
//!
//! Hosts that embed keylint use `keylint_rules` directly. This crate is the
//! thin layer around it: the `keylint` binary's commands, output selection,
//! report rendering, and logging setup.
//!
//! ```text
//! CompilationUnit ──► LintRunner::check_units ──► Report::collect ──► render
//!                                                  (DiagnosticQueue)   (terminal | json | sarif)
//! ```

pub mod commands;
mod error;
pub mod output;
pub mod scenarios;
mod tracing_setup;

pub use error::CliError;
pub use output::{OutputConfig, OutputFormat, Report};
pub use tracing_setup::{init_tracing, LOG_ENV, LOG_TREE_ENV};
