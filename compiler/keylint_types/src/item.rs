//! Compact type item storage.
//!
//! Each type in the pool is stored as an `Item` with a tag and data field.
//! The interpretation of `data` depends on the tag.

use crate::{Tag, TypeId};

/// A single type item in the pool.
///
/// - `tag`: Identifies the type kind (see [`Tag`])
/// - `data`: Meaning depends on tag (component id, extra index, or name)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Item {
    pub tag: Tag,
    pub data: u32,
}

impl Item {
    /// Create a new item with the given tag and data.
    #[inline]
    pub const fn new(tag: Tag, data: u32) -> Self {
        Self { tag, data }
    }

    /// Create a primitive type item.
    #[inline]
    pub const fn primitive(tag: Tag) -> Self {
        Self { tag, data: 0 }
    }

    /// Create an array item; `component` is stored directly in `data`.
    #[inline]
    pub const fn array(component: TypeId) -> Self {
        Self {
            tag: Tag::Array,
            data: component.raw(),
        }
    }
}
