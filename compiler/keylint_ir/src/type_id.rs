//! Handle to a resolved type.
//!
//! The IR only stores the handle. The type pool that gives it meaning lives
//! in `keylint_types`, which depends on this crate.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Types are interned, so equality of handles is equality of types.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned primitive types (fixed indices, see `keylint_types::Pool`)
    pub const BOOLEAN: TypeId = TypeId(0);
    pub const BYTE: TypeId = TypeId(1);
    pub const CHAR: TypeId = TypeId(2);
    pub const SHORT: TypeId = TypeId(3);
    pub const INT: TypeId = TypeId(4);
    pub const LONG: TypeId = TypeId(5);
    pub const FLOAT: TypeId = TypeId(6);
    pub const DOUBLE: TypeId = TypeId(7);
    pub const VOID: TypeId = TypeId(8);
    /// Placeholder for types the host failed to resolve.
    pub const ERROR: TypeId = TypeId(9);

    /// First ID for dynamically interned types.
    pub const FIRST_DYNAMIC: u32 = 10;

    /// Sentinel for nodes with no resolved type.
    pub const NONE: TypeId = TypeId(u32::MAX);

    /// Create a handle from a raw pool index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the pool's item table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "TypeId::NONE")
        } else {
            write!(f, "TypeId({})", self.0)
        }
    }
}

impl Default for TypeId {
    fn default() -> Self {
        Self::NONE
    }
}
