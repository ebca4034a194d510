//! The lint pass interface.

use keylint_diagnostic::LintCode;
use keylint_ir::{CallExpr, ExprId, NewExpr};

use crate::LintContext;

/// A rule that inspects construction sites.
///
/// Passes are shared across threads checking different units, so they
/// must not hold per-unit state; everything per-unit lives in the
/// [`LintContext`].
pub trait LintPass: Send + Sync {
    /// Stable code of the findings this pass reports.
    fn code(&self) -> LintCode;

    /// Inspect a call expression.
    fn check_call(&self, cx: &mut LintContext<'_>, id: ExprId, call: &CallExpr) {
        let _ = (cx, id, call);
    }

    /// Inspect a constructor invocation.
    fn check_new(&self, cx: &mut LintContext<'_>, id: ExprId, new: &NewExpr) {
        let _ = (cx, id, new);
    }
}
