//! Expression visitor.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes; call the
//! matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_call(&mut self, id: ExprId, call: &'ast CallExpr, arena: &'ast ExprArena) {
//!         self.count += 1;
//!         walk_call(self, call, arena);
//!     }
//! }
//! ```

use crate::{CallExpr, ExprArena, ExprId, ExprKind, NewExpr};

/// Expression visitor.
///
/// The visitor can mutate its own state during traversal; the arena stays
/// immutable.
pub trait Visitor<'ast> {
    /// Visit any expression. Dispatches to the kind-specific hooks.
    fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
        walk_expr(self, id, arena);
    }

    /// Visit a call expression.
    fn visit_call(&mut self, id: ExprId, call: &'ast CallExpr, arena: &'ast ExprArena) {
        let _ = id;
        walk_call(self, call, arena);
    }

    /// Visit a constructor invocation.
    fn visit_new(&mut self, id: ExprId, new: &'ast NewExpr, arena: &'ast ExprArena) {
        let _ = id;
        walk_new(self, new, arena);
    }
}

/// Dispatch on the node kind and walk its children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast ExprArena,
) {
    match arena.kind(id) {
        ExprKind::Literal(_) | ExprKind::Ident(_) | ExprKind::Return(None) => {}
        ExprKind::Call(call) => visitor.visit_call(id, call, arena),
        ExprKind::New(new) => visitor.visit_new(id, new, arena),
        ExprKind::Let { init, .. } => visitor.visit_expr(*init, arena),
        ExprKind::Block(stmts) => {
            for &stmt in arena.list(*stmts) {
                visitor.visit_expr(stmt, arena);
            }
        }
        ExprKind::Return(Some(value)) => visitor.visit_expr(*value, arena),
    }
}

/// Walk the receiver and arguments of a call.
pub fn walk_call<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    call: &'ast CallExpr,
    arena: &'ast ExprArena,
) {
    if let Some(receiver) = call.receiver {
        visitor.visit_expr(receiver, arena);
    }
    for &arg in arena.list(call.args) {
        visitor.visit_expr(arg, arena);
    }
}

/// Walk the constructor arguments.
pub fn walk_new<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    new: &'ast NewExpr,
    arena: &'ast ExprArena,
) {
    for &arg in arena.list(new.args) {
        visitor.visit_expr(arg, arena);
    }
}
