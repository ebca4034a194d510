//! Stable identifiers for every rule.
//!
//! A code is what users search for, what `keylint explain` looks up, and
//! what SARIF reports as the `ruleId`.

use std::fmt;

use crate::Severity;

/// Lint rule identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LintCode {
    /// Array used as the key type of a hash-based set or map.
    ArrayAsKeyOfSetOrMap,
}

impl LintCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [LintCode] = &[LintCode::ArrayAsKeyOfSetOrMap];

    /// Get the code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LintCode::ArrayAsKeyOfSetOrMap => "ArrayAsKeyOfSetOrMap",
        }
    }

    /// Severity the rule reports at.
    pub fn default_severity(&self) -> Severity {
        match self {
            LintCode::ArrayAsKeyOfSetOrMap => Severity::Warning,
        }
    }

    /// One-line description used in rule listings and SARIF metadata.
    pub fn summary(&self) -> &'static str {
        match self {
            LintCode::ArrayAsKeyOfSetOrMap => {
                "Arrays do not override equals() or hashCode(), so comparisons \
                 will be done on reference equality only. If neither deduplication \
                 nor lookup are needed, consider using a List instead. Otherwise, \
                 use IdentityHashMap/Set, a Map from a library that handles object \
                 arrays, or an Iterable/List of pairs."
            }
        }
    }
}

impl fmt::Display for LintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"ArrayAsKeyOfSetOrMap"`.
///
/// Case-insensitive. Derived from [`LintCode::ALL`] and [`LintCode::as_str()`].
impl std::str::FromStr for LintCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
