//! Checked units and the builder hosts use to assemble them.

use keylint_ir::{
    CallExpr, Expr, ExprArena, ExprId, ExprKind, Literal, MethodRef, Name, NewExpr,
    SharedInterner, Span, StringInterner, TypeId,
};
use keylint_types::{Pool, WildcardBound};

/// One resolved, typed source unit.
///
/// `arena` and `pool` are the host's resolution output; `root` is the
/// expression traversal starts from. Names in the arena must come from the
/// same interner the checking rules were built with.
#[derive(Clone, Debug)]
pub struct CompilationUnit {
    pub path: String,
    pub source: String,
    pub arena: ExprArena,
    pub pool: Pool,
    pub root: ExprId,
}

/// Incremental construction of a [`CompilationUnit`].
///
/// Children are allocated before their parents, so a unit is built bottom
/// up and closed with [`finish`](Self::finish) on its root.
pub struct UnitBuilder {
    interner: SharedInterner,
    path: String,
    source: String,
    arena: ExprArena,
    pool: Pool,
}

impl UnitBuilder {
    pub fn new(interner: SharedInterner, path: impl Into<String>) -> Self {
        UnitBuilder {
            interner,
            path: path.into(),
            source: String::new(),
            arena: ExprArena::new(),
            pool: Pool::new(),
        }
    }

    /// Attach source text; spans index into it.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    // === Types ===

    pub fn class_type(&mut self, name: &str, args: &[TypeId]) -> TypeId {
        let name = self.name(name);
        self.pool.class(name, args)
    }

    pub fn interface_type(&mut self, name: &str, args: &[TypeId]) -> TypeId {
        let name = self.name(name);
        self.pool.interface(name, args)
    }

    pub fn array_type(&mut self, component: TypeId) -> TypeId {
        self.pool.array(component)
    }

    pub fn type_var(&mut self, name: &str) -> TypeId {
        let name = self.name(name);
        self.pool.type_var(name)
    }

    pub fn wildcard(&mut self, bound: WildcardBound) -> TypeId {
        self.pool.wildcard(bound)
    }

    // === Spans ===

    /// Span of the `n`th (0-based) occurrence of `snippet` in the source.
    ///
    /// `Span::DUMMY` when the snippet does not occur that often.
    pub fn span_of_nth(&self, snippet: &str, n: usize) -> Span {
        self.source
            .match_indices(snippet)
            .nth(n)
            .and_then(|(start, text)| Span::try_from_range(start..start + text.len()).ok())
            .unwrap_or(Span::DUMMY)
    }

    /// Span of the first occurrence of `snippet` in the source.
    pub fn span_of(&self, snippet: &str) -> Span {
        self.span_of_nth(snippet, 0)
    }

    // === Expressions ===

    fn push(&mut self, kind: ExprKind, span: Span, ty: TypeId) -> ExprId {
        self.arena.alloc(Expr::new(kind, span, ty))
    }

    /// A static call `owner.method(args)` returning `ty`.
    pub fn static_call(
        &mut self,
        owner: &str,
        method: &str,
        args: &[ExprId],
        ty: TypeId,
        span: Span,
    ) -> ExprId {
        let callee = MethodRef::static_method(self.name(owner), self.name(method));
        let args = self.arena.alloc_list(args);
        self.push(
            ExprKind::Call(CallExpr {
                callee,
                receiver: None,
                args,
            }),
            span,
            ty,
        )
    }

    /// An instance call `receiver.method(args)` resolved to `owner#method`.
    pub fn instance_call(
        &mut self,
        owner: &str,
        method: &str,
        receiver: Option<ExprId>,
        args: &[ExprId],
        ty: TypeId,
        span: Span,
    ) -> ExprId {
        let callee = MethodRef::instance_method(self.name(owner), self.name(method));
        let args = self.arena.alloc_list(args);
        self.push(
            ExprKind::Call(CallExpr {
                callee,
                receiver,
                args,
            }),
            span,
            ty,
        )
    }

    /// An instantiation `new class(args)` whose resolved type is `ty`.
    pub fn new_instance(&mut self, class: &str, args: &[ExprId], ty: TypeId, span: Span) -> ExprId {
        let class = self.name(class);
        let args = self.arena.alloc_list(args);
        self.push(ExprKind::New(NewExpr { class, args }), span, ty)
    }

    pub fn ident(&mut self, name: &str, ty: TypeId, span: Span) -> ExprId {
        let name = self.name(name);
        self.push(ExprKind::Ident(name), span, ty)
    }

    pub fn int(&mut self, value: i64, span: Span) -> ExprId {
        self.push(ExprKind::Literal(Literal::Int(value)), span, TypeId::INT)
    }

    pub fn string(&mut self, value: &str, ty: TypeId, span: Span) -> ExprId {
        let value = self.name(value);
        self.push(ExprKind::Literal(Literal::Str(value)), span, ty)
    }

    /// A local declaration `name = init`.
    pub fn let_binding(&mut self, name: &str, init: ExprId, span: Span) -> ExprId {
        let name = self.name(name);
        self.push(ExprKind::Let { name, init }, span, TypeId::NONE)
    }

    pub fn block(&mut self, stmts: &[ExprId], span: Span) -> ExprId {
        let stmts = self.arena.alloc_list(stmts);
        self.push(ExprKind::Block(stmts), span, TypeId::NONE)
    }

    pub fn ret(&mut self, value: Option<ExprId>, span: Span) -> ExprId {
        self.push(ExprKind::Return(value), span, TypeId::NONE)
    }

    /// Close the unit with `root` as its traversal entry.
    pub fn finish(self, root: ExprId) -> CompilationUnit {
        CompilationUnit {
            path: self.path,
            source: self.source,
            arena: self.arena,
            pool: self.pool,
            root,
        }
    }
}
