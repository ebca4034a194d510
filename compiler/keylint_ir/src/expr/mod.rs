//! Typed expression nodes.
//!
//! Every node carries its resolved static result type. Calls carry the
//! resolved callee, instantiations carry the exact constructed class, both
//! as fully qualified interned names.

use std::fmt;

use crate::{Name, Span, TypeId};

/// Index into an [`ExprArena`](crate::ExprArena).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Placeholder for "no expression"; never allocated.
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// False only for [`ExprId::INVALID`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "e{}", self.0)
        } else {
            f.write_str("e<invalid>")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Range of expression IDs in the arena's flattened list storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ExprRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.start + u32::from(self.len);
        write!(f, "list[{}..{end}]", self.start)
    }
}

/// Resolved callee of a call expression.
///
/// `owner` is the fully qualified name of the declaring type, `name` the
/// member name. Resolution happened in the host; rules only compare names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodRef {
    pub owner: Name,
    pub name: Name,
    pub is_static: bool,
}

impl MethodRef {
    /// A static method `owner.name`.
    pub const fn static_method(owner: Name, name: Name) -> Self {
        MethodRef {
            owner,
            name,
            is_static: true,
        }
    }

    /// An instance method `owner#name`.
    pub const fn instance_method(owner: Name, name: Name) -> Self {
        MethodRef {
            owner,
            name,
            is_static: false,
        }
    }
}

/// A call to a resolved method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpr {
    pub callee: MethodRef,
    /// Receiver expression for instance calls written as `recv.m(..)`.
    pub receiver: Option<ExprId>,
    pub args: ExprRange,
}

/// A constructor invocation `new C<..>(..)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NewExpr {
    /// Fully qualified name of the exact class being instantiated.
    pub class: Name,
    pub args: ExprRange,
}

/// Literal values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(Name),
    Null,
}

/// Expression kinds.
///
/// `Call` and `New` are the two construction-site shapes lints inspect.
/// The remaining kinds exist so units look like real method bodies and the
/// visitor has something to walk through.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Ident(Name),
    Call(CallExpr),
    New(NewExpr),
    /// Local variable declaration with initializer.
    Let {
        name: Name,
        init: ExprId,
    },
    Block(ExprRange),
    Return(Option<ExprId>),
}

/// A node ready to be pushed into the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Resolved static result type, `TypeId::NONE` for statements.
    pub ty: TypeId,
}

impl Expr {
    /// Create a node.
    pub const fn new(kind: ExprKind, span: Span, ty: TypeId) -> Self {
        Expr { kind, span, ty }
    }
}
