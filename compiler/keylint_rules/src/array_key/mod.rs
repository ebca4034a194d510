//! Arrays used as the key type of a hash-based set or map.
//!
//! Arrays inherit identity `equals`/`hashCode`, so a `HashSet<byte[]>` or a
//! `HashMap<int[], V>` deduplicates and looks up by reference. The rule
//! flags the construction site; only the first type argument is consulted,
//! since a map's value type takes no part in hashing.

use keylint_diagnostic::{Diagnostic, LintCode};
use keylint_ir::{CallExpr, ExprId, ExprKind, NewExpr, Span, StringInterner, TypeId};
use keylint_types::TypeQuery;

use crate::{CollectionShape, ConstructionSites, LintContext, LintPass};

/// Flags hash-collection construction whose key type is an array.
#[derive(Clone, Debug)]
pub struct ArrayAsKeyOfSetOrMap {
    sites: ConstructionSites,
}

impl ArrayAsKeyOfSetOrMap {
    /// Build the rule with the standard hash-collection sites.
    ///
    /// Units checked by this rule must intern names through `interner`.
    pub fn new(interner: &StringInterner) -> Self {
        Self::with_sites(ConstructionSites::hash_collections(interner))
    }

    /// Build the rule over a custom site table.
    pub fn with_sites(sites: ConstructionSites) -> Self {
        ArrayAsKeyOfSetOrMap { sites }
    }

    /// Stage 1: is this a recognized construction site, and of which shape?
    pub fn recognize(&self, kind: &ExprKind) -> Option<CollectionShape> {
        self.sites.match_kind(kind)
    }

    /// Stage 2: the first resolved type argument of the result type.
    ///
    /// `None` for raw or non-generic results.
    pub fn key_type_argument(types: &dyn TypeQuery, result: TypeId) -> Option<TypeId> {
        types.type_arguments(result).first().copied()
    }

    /// Stage 3: does the key type hash by identity because it is an array?
    pub fn is_array_key(types: &dyn TypeQuery, key: TypeId) -> bool {
        types.descriptor(key).is_array()
    }

    /// Stage 4: the finding for a matching site.
    pub fn finding(span: Span, shape: CollectionShape) -> Diagnostic {
        let code = LintCode::ArrayAsKeyOfSetOrMap;
        Diagnostic::warning(code)
            .with_message(code.summary())
            .with_label(
                span,
                format!("{shape} constructed with an array {} type", shape.key_role()),
            )
    }

    /// Run stages 2-4 for a site whose shape is already known.
    fn evaluate(cx: &mut LintContext<'_>, id: ExprId, shape: CollectionShape) {
        let result = cx.result_type(id);
        let Some(key) = Self::key_type_argument(cx.types(), result) else {
            tracing::trace!(expr = ?id, %shape, "raw construction site");
            return;
        };

        let array = Self::is_array_key(cx.types(), key);
        tracing::trace!(expr = ?id, %shape, array, "construction site evaluated");
        if array {
            let span = cx.span(id);
            tracing::debug!(expr = ?id, ?span, %shape, "array key");
            cx.report(Self::finding(span, shape));
        }
    }

    /// Check any expression, regardless of kind.
    pub fn check_expr(&self, cx: &mut LintContext<'_>, id: ExprId) {
        if let Some(shape) = self.recognize(cx.arena().kind(id)) {
            Self::evaluate(cx, id, shape);
        }
    }
}

impl LintPass for ArrayAsKeyOfSetOrMap {
    fn code(&self) -> LintCode {
        LintCode::ArrayAsKeyOfSetOrMap
    }

    fn check_call(&self, cx: &mut LintContext<'_>, id: ExprId, call: &CallExpr) {
        if let Some(shape) = self.sites.match_call(call) {
            Self::evaluate(cx, id, shape);
        }
    }

    fn check_new(&self, cx: &mut LintContext<'_>, id: ExprId, new: &NewExpr) {
        if let Some(shape) = self.sites.match_new(new) {
            Self::evaluate(cx, id, shape);
        }
    }
}
