//! Type model for keylint.
//!
//! The host's symbol resolution and generic inference have already run by
//! the time a rule sees a unit. This crate stores their output:
//!
//! - [`Pool`]: interned resolved types addressed by [`TypeId`]
//! - [`Tag`]: the kind of each pooled type
//! - [`TypeDescriptor`]: the coarse classification rules consult
//! - [`TypeQuery`]: the capability rules use, so they never depend on how
//!   types are stored
//!
//! # Layout
//!
//! Each type is an `Item { tag, data }`. Arrays store their component in
//! `data`; class and interface types store an index into `extra` holding
//! `[name, list_start, list_len]`, where the list addresses the pool's
//! flattened type-argument storage.

mod descriptor;
mod item;
mod pool;
mod query;
mod tag;

pub use descriptor::TypeDescriptor;
pub use item::Item;
pub use keylint_ir::TypeId;
pub use pool::{Pool, WildcardBound};
pub use query::TypeQuery;
pub use tag::Tag;
