//! Interned pool of resolved types.
//!
//! Primitive types are pre-interned at the fixed indices named on
//! [`TypeId`]. Everything else is interned on construction, so structurally
//! equal types share one `TypeId`.

mod construct;
mod format;

use keylint_ir::Name;
use rustc_hash::FxHashMap;

use crate::{Item, Tag, TypeId};

/// Bound of a wildcard type argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WildcardBound {
    /// `?`
    Unbounded,
    /// `? extends B`
    Extends(TypeId),
    /// `? super B`
    Super(TypeId),
}

/// Primitive items in `TypeId` order.
const PRIMITIVES: [Tag; 10] = [
    Tag::Boolean,
    Tag::Byte,
    Tag::Char,
    Tag::Short,
    Tag::Int,
    Tag::Long,
    Tag::Float,
    Tag::Double,
    Tag::Void,
    Tag::Error,
];

/// Interned type storage.
///
/// # Index Spaces
///
/// - `items`: indexed by [`TypeId`]
/// - `extra`: per-tag payloads, addressed by `Item::data` for tags where
///   [`Tag::uses_extra`] holds
/// - `type_lists`: flattened generic argument lists
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    type_lists: Vec<TypeId>,
    /// Dedup map from (tag, logical payload) to the interned type.
    interned: FxHashMap<(Tag, Vec<u32>), TypeId>,
}

impl Pool {
    /// Create a pool with the primitive types pre-interned.
    pub fn new() -> Self {
        let mut pool = Pool {
            items: Vec::with_capacity(64),
            extra: Vec::new(),
            type_lists: Vec::new(),
            interned: FxHashMap::default(),
        };
        for tag in PRIMITIVES {
            pool.items.push(Item::primitive(tag));
        }
        debug_assert_eq!(pool.items.len(), TypeId::FIRST_DYNAMIC as usize);
        pool
    }

    /// Get the item for a type.
    ///
    /// Handles outside the pool (including `TypeId::NONE`) read as the
    /// error type.
    #[inline]
    pub fn item(&self, id: TypeId) -> Item {
        self.items
            .get(id.index())
            .copied()
            .unwrap_or(Item::primitive(Tag::Error))
    }

    /// Get the tag for a type.
    #[inline]
    pub fn tag(&self, id: TypeId) -> Tag {
        self.item(id).tag
    }

    /// Get the raw data field for a type.
    #[inline]
    pub fn data(&self, id: TypeId) -> u32 {
        self.item(id).data
    }

    /// Number of types in the pool, including primitives.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: primitives are pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Component type of an array, `None` for non-arrays.
    pub fn component(&self, id: TypeId) -> Option<TypeId> {
        let item = self.item(id);
        (item.tag == Tag::Array).then(|| TypeId::from_raw(item.data))
    }

    /// Declared name of a class or interface type.
    pub fn declared_name(&self, id: TypeId) -> Option<Name> {
        let item = self.item(id);
        item.tag
            .is_declared()
            .then(|| Name::from_raw(self.extra[item.data as usize]))
    }

    /// Generic type arguments of a class or interface type, in declaration
    /// order.
    ///
    /// Raw and non-generic types, and every other tag, have none.
    pub fn type_args(&self, id: TypeId) -> &[TypeId] {
        let item = self.item(id);
        if !item.tag.is_declared() {
            return &[];
        }
        let base = item.data as usize;
        let start = self.extra[base + 1] as usize;
        let len = self.extra[base + 2] as usize;
        &self.type_lists[start..start + len]
    }

    /// Bound of a wildcard, `None` for non-wildcards.
    pub fn wildcard_bound(&self, id: TypeId) -> Option<WildcardBound> {
        let item = self.item(id);
        if item.tag != Tag::Wildcard {
            return None;
        }
        let base = item.data as usize;
        let bound = TypeId::from_raw(self.extra[base + 1]);
        Some(match self.extra[base] {
            1 => WildcardBound::Extends(bound),
            2 => WildcardBound::Super(bound),
            _ => WildcardBound::Unbounded,
        })
    }

    /// Name of a type variable, `None` for other tags.
    pub fn type_var_name(&self, id: TypeId) -> Option<Name> {
        let item = self.item(id);
        (item.tag == Tag::TypeVar).then(|| Name::from_raw(item.data))
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
