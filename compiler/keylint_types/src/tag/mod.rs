//! The kind byte of every pooled type.
//!
//! A tag says what an `Item`'s `data` word holds. Discriminants are grouped
//! in ranges of 16 so kinds can grow without renumbering:
//!
//! - 0-15: Primitives and the error type (data unused)
//! - 16-31: Arrays (data = component `TypeId`)
//! - 32-47: Declared types (data = extra index)
//! - 48-63: Type variables (data = name)
//! - 64-79: Wildcards (data = extra index)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Primitives (0-15) ===
    Boolean = 0,
    Byte = 1,
    Char = 2,
    Short = 3,
    Int = 4,
    Long = 5,
    Float = 6,
    Double = 7,
    Void = 8,
    /// Unresolved type (host resolution failed).
    Error = 9,

    // === Arrays (16-31) ===
    /// Array type `T[]`, any component including another array.
    Array = 16,

    // === Declared types (32-47) ===
    /// Class type, possibly parameterized.
    Class = 32,
    /// Interface type, possibly parameterized.
    Interface = 33,

    // === Type variables (48-63) ===
    /// Declared type parameter `T`.
    TypeVar = 48,

    // === Wildcards (64-79) ===
    /// Wildcard type argument `?`, `? extends B`, `? super B`.
    Wildcard = 64,
}

impl Tag {
    /// `data` indexes `extra` rather than holding the payload itself.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::Wildcard)
    }

    /// One of the eight primitives or `void`.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) < 16 && !matches!(self, Self::Error)
    }

    /// Check if this tag represents an array type.
    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::Array)
    }

    /// Check if this tag can carry generic type arguments.
    #[inline]
    pub const fn is_declared(self) -> bool {
        matches!(self, Self::Class | Self::Interface)
    }

    /// Lowercase kind name; primitives use their Java keyword.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
            Self::Error => "<error>",
            Self::Array => "array",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::TypeVar => "type_var",
            Self::Wildcard => "wildcard",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1, "Tag is stored as one byte per item");
