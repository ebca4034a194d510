//! Embedded rule documentation for `keylint explain`.
//!
//! Each lint code has a markdown file in this directory, embedded at
//! compile time.

use crate::LintCode;

/// Registry of embedded rule documentation.
pub struct LintDocs;

impl LintDocs {
    /// Get the documentation for a code, `None` if it has none.
    pub fn get(code: LintCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented codes.
    pub fn all_codes() -> impl Iterator<Item = LintCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: LintCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(LintCode, &str)] = &[(
    LintCode::ArrayAsKeyOfSetOrMap,
    include_str!("ArrayAsKeyOfSetOrMap.md"),
)];
