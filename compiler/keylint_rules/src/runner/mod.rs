//! Walks units and dispatches construction sites to lint passes.

use keylint_diagnostic::{Diagnostic, LintCode};
use keylint_ir::visitor::{walk_call, walk_new, Visitor};
use keylint_ir::{CallExpr, ExprArena, ExprId, NewExpr, SharedInterner};
use rayon::prelude::*;

use crate::{ArrayAsKeyOfSetOrMap, CompilationUnit, LintContext, LintPass};

/// Runs registered passes over compilation units.
pub struct LintRunner {
    interner: SharedInterner,
    passes: Vec<Box<dyn LintPass>>,
}

impl LintRunner {
    /// A runner with no passes.
    pub fn new(interner: SharedInterner) -> Self {
        LintRunner {
            interner,
            passes: Vec::new(),
        }
    }

    /// A runner with every built-in pass registered.
    pub fn with_default_passes(interner: SharedInterner) -> Self {
        let mut runner = Self::new(interner);
        let array_key = ArrayAsKeyOfSetOrMap::new(&runner.interner);
        runner.register(array_key);
        runner
    }

    pub fn register(&mut self, pass: impl LintPass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Codes of the registered passes, in registration order.
    pub fn codes(&self) -> impl Iterator<Item = LintCode> + '_ {
        self.passes.iter().map(|pass| pass.code())
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Check one unit, returning findings in traversal order.
    ///
    /// A unit whose root is outside its arena has nothing to check.
    #[tracing::instrument(level = "debug", skip_all, fields(
        path = %unit.path,
        nodes = unit.arena.len(),
    ))]
    pub fn check_unit(&self, unit: &CompilationUnit) -> Vec<Diagnostic> {
        if !unit.root.is_valid() || unit.root.index() >= unit.arena.len() {
            tracing::debug!(root = ?unit.root, "unit root is not in its arena");
            return Vec::new();
        }

        let mut dispatcher = PassDispatcher {
            passes: &self.passes,
            cx: LintContext::new(&unit.arena, &unit.pool, &self.interner),
        };
        dispatcher.visit_expr(unit.root, &unit.arena);

        let findings = dispatcher.cx.into_findings();
        tracing::debug!(findings = findings.len(), "unit checked");
        findings
    }

    /// Check many units in parallel.
    ///
    /// Results are per unit, in the order the units were given.
    #[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
    pub fn check_units(&self, units: &[CompilationUnit]) -> Vec<Vec<Diagnostic>> {
        units.par_iter().map(|unit| self.check_unit(unit)).collect()
    }
}

/// Visitor forwarding every call and instantiation to each pass.
struct PassDispatcher<'p, 'a> {
    passes: &'p [Box<dyn LintPass>],
    cx: LintContext<'a>,
}

impl<'a> Visitor<'a> for PassDispatcher<'_, 'a> {
    fn visit_call(&mut self, id: ExprId, call: &'a CallExpr, arena: &'a ExprArena) {
        for pass in self.passes {
            pass.check_call(&mut self.cx, id, call);
        }
        walk_call(self, call, arena);
    }

    fn visit_new(&mut self, id: ExprId, new: &'a NewExpr, arena: &'a ExprArena) {
        for pass in self.passes {
            pass.check_new(&mut self.cx, id, new);
        }
        walk_new(self, new, arena);
    }
}
