//! Lint passes over typed expression arenas.
//!
//! A host hands the runner [`CompilationUnit`]s whose symbols and generic
//! type arguments are already resolved. Each registered [`LintPass`] sees
//! every call and instantiation in the unit and reports findings through
//! its [`LintContext`].
//!
//! # Pipeline for [`ArrayAsKeyOfSetOrMap`]
//!
//! ```text
//! site ──recognize──▶ shape ──key_type_argument──▶ key ──is_array_key──▶ finding
//! ```
//!
//! Every stage is total: anything unrecognized, raw, or unresolved ends in
//! "no finding", never in an error.

mod array_key;
mod context;
pub mod matchers;
mod pass;
mod runner;
mod unit;

pub use array_key::ArrayAsKeyOfSetOrMap;
pub use context::LintContext;
pub use matchers::{CollectionShape, ConstructionSites, SiteMatcher};
pub use pass::LintPass;
pub use runner::LintRunner;
pub use unit::{CompilationUnit, UnitBuilder};
