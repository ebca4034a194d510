//! The type-resolution capability rules consume.

use crate::{Pool, TypeDescriptor, TypeId};

/// Read-only access to resolved types.
///
/// Rules depend on this trait rather than on [`Pool`], so a host with its
/// own type representation only has to answer these two questions.
pub trait TypeQuery: Sync {
    /// Classify a type.
    fn descriptor(&self, ty: TypeId) -> TypeDescriptor;

    /// Resolved generic type arguments in declaration order.
    ///
    /// Empty for raw uses, non-generic types, and non-declared types.
    fn type_arguments(&self, ty: TypeId) -> &[TypeId];
}

impl TypeQuery for Pool {
    fn descriptor(&self, ty: TypeId) -> TypeDescriptor {
        TypeDescriptor::from_tag(self.tag(ty))
    }

    fn type_arguments(&self, ty: TypeId) -> &[TypeId] {
        self.type_args(ty)
    }
}
