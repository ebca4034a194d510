//! Findings and how they are reported.
//!
//! A rule produces a [`Diagnostic`]: a stable [`LintCode`], a severity, a
//! message, and a primary label on the offending expression. Hosts collect
//! findings in a [`DiagnosticQueue`](queue::DiagnosticQueue) and render
//! them with one of the [`emitter`]s.

mod diagnostic;
mod docs;
pub mod emitter;
mod lint_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use docs::LintDocs;
pub use lint_code::LintCode;
pub use queue::{DiagnosticQueue, QueueConfig};
