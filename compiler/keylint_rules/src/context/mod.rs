//! Per-unit view handed to lint passes.

use keylint_diagnostic::Diagnostic;
use keylint_ir::{ExprArena, ExprId, Span, StringInterner, TypeId};
use keylint_types::TypeQuery;

/// Borrowed view of one unit plus the sink its findings go to.
///
/// A context lives for one traversal of one unit. Passes read the arena
/// and the resolved types through it and call [`report`](Self::report)
/// for every finding; nothing is deduplicated here.
pub struct LintContext<'a> {
    arena: &'a ExprArena,
    types: &'a dyn TypeQuery,
    interner: &'a StringInterner,
    findings: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(
        arena: &'a ExprArena,
        types: &'a dyn TypeQuery,
        interner: &'a StringInterner,
    ) -> Self {
        LintContext {
            arena,
            types,
            interner,
            findings: Vec::new(),
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a ExprArena {
        self.arena
    }

    #[inline]
    pub fn types(&self) -> &'a dyn TypeQuery {
        self.types
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Resolved static result type of an expression.
    #[inline]
    pub fn result_type(&self, id: ExprId) -> TypeId {
        self.arena.ty(id)
    }

    /// Source location of an expression.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.arena.span(id)
    }

    /// Record a finding.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.findings.push(diagnostic);
    }

    /// Findings reported so far, in report order.
    pub fn findings(&self) -> &[Diagnostic] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Diagnostic> {
        self.findings
    }
}
