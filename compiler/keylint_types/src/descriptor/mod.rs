//! Coarse classification of a resolved type.
//!
//! Rules that only need to know "what shape is this type" read a
//! `TypeDescriptor` instead of the pool's storage tags.

use std::fmt;

use crate::Tag;

/// Shape of a single resolved type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDescriptor {
    /// Array of any component type, including arrays of arrays.
    Array,
    Class,
    Interface,
    Primitive,
    TypeVariable,
    Wildcard,
    /// The host could not resolve the type.
    Error,
}

impl TypeDescriptor {
    /// Classify a pool tag.
    pub const fn from_tag(tag: Tag) -> Self {
        match tag {
            Tag::Boolean
            | Tag::Byte
            | Tag::Char
            | Tag::Short
            | Tag::Int
            | Tag::Long
            | Tag::Float
            | Tag::Double
            | Tag::Void => TypeDescriptor::Primitive,
            Tag::Error => TypeDescriptor::Error,
            Tag::Array => TypeDescriptor::Array,
            Tag::Class => TypeDescriptor::Class,
            Tag::Interface => TypeDescriptor::Interface,
            Tag::TypeVar => TypeDescriptor::TypeVariable,
            Tag::Wildcard => TypeDescriptor::Wildcard,
        }
    }

    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(self, TypeDescriptor::Array)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeDescriptor::Array => "array type",
            TypeDescriptor::Class => "class type",
            TypeDescriptor::Interface => "interface type",
            TypeDescriptor::Primitive => "primitive type",
            TypeDescriptor::TypeVariable => "type variable",
            TypeDescriptor::Wildcard => "wildcard",
            TypeDescriptor::Error => "unresolved type",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(TypeDescriptor::from_tag(Tag::Array), TypeDescriptor::Array);
        assert_eq!(TypeDescriptor::from_tag(Tag::Byte), TypeDescriptor::Primitive);
        assert_eq!(TypeDescriptor::from_tag(Tag::Class), TypeDescriptor::Class);
        assert_eq!(
            TypeDescriptor::from_tag(Tag::Interface),
            TypeDescriptor::Interface
        );
        assert_eq!(
            TypeDescriptor::from_tag(Tag::TypeVar),
            TypeDescriptor::TypeVariable
        );
        assert_eq!(
            TypeDescriptor::from_tag(Tag::Wildcard),
            TypeDescriptor::Wildcard
        );
        assert_eq!(TypeDescriptor::from_tag(Tag::Error), TypeDescriptor::Error);
    }

    #[test]
    fn test_only_array_descriptor_is_array() {
        assert!(TypeDescriptor::Array.is_array());
        assert!(!TypeDescriptor::Class.is_array());
        assert!(!TypeDescriptor::Primitive.is_array());
    }
}
