//! Expression arena.
//!
//! Struct-of-arrays layout: `kinds`, `spans` and `types` are parallel arrays
//! indexed by [`ExprId`]; child lists live in the flat `expr_lists` and are
//! addressed by [`ExprRange`].

use crate::{Expr, ExprId, ExprKind, ExprRange, Span, TypeId};

/// Convert a length to `u32`, panicking on overflow.
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Arena owning every expression of one unit.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    kinds: Vec<ExprKind>,
    spans: Vec<Span>,
    types: Vec<TypeId>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(expr.kind);
        self.spans.push(expr.span);
        self.types.push(expr.ty);
        id
    }

    /// Allocate a list of child IDs, returning the range addressing it.
    ///
    /// # Panics
    /// Panics if the list is longer than `u16::MAX`.
    pub fn alloc_list(&mut self, ids: &[ExprId]) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "list entries");
        let len = u16::try_from(ids.len())
            .unwrap_or_else(|_| panic!("expression list of {} exceeds u16::MAX", ids.len()));
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, len)
    }

    /// Get the expression kind for a node.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the source span for a node.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Get the resolved static result type for a node.
    #[inline]
    pub fn ty(&self, id: ExprId) -> TypeId {
        self.types[id.index()]
    }

    /// Get the IDs addressed by a range.
    #[inline]
    pub fn list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of expressions in the arena.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the arena holds no expressions.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
