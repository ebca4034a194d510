//! keylint IR - the host's typed expression tree.
//!
//! This crate holds the data the lint rules read while visiting a unit:
//! - Spans for source locations
//! - Names for interned qualified identifiers
//! - `TypeId` handles into the type pool (see `keylint_types`)
//! - The expression arena with resolved callees and result types
//! - A visitor for walking the arena
//!
//! Rules never parse source. They receive an already-resolved, fully typed
//! arena and query it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod expr;
mod interner;
mod name;
mod span;
mod type_id;
pub mod visitor;

pub use arena::ExprArena;
pub use expr::{
    CallExpr, Expr, ExprId, ExprKind, ExprRange, Literal, MethodRef, NewExpr,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use type_id::TypeId;
