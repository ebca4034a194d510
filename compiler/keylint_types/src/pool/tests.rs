use keylint_ir::StringInterner;
use pretty_assertions::assert_eq;

use super::*;
use crate::{TypeDescriptor, TypeQuery};

#[test]
fn test_primitives_are_pre_interned() {
    let pool = Pool::new();
    assert_eq!(pool.tag(TypeId::BOOLEAN), Tag::Boolean);
    assert_eq!(pool.tag(TypeId::BYTE), Tag::Byte);
    assert_eq!(pool.tag(TypeId::INT), Tag::Int);
    assert_eq!(pool.tag(TypeId::DOUBLE), Tag::Double);
    assert_eq!(pool.tag(TypeId::ERROR), Tag::Error);
    assert_eq!(pool.len(), TypeId::FIRST_DYNAMIC as usize);
}

#[test]
fn test_out_of_range_reads_as_error() {
    let pool = Pool::new();
    assert_eq!(pool.tag(TypeId::NONE), Tag::Error);
    assert!(pool.type_args(TypeId::NONE).is_empty());
    assert_eq!(pool.descriptor(TypeId::NONE), TypeDescriptor::Error);
}

#[test]
fn test_structural_interning() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let string = pool.class(interner.intern("java.lang.String"), &[]);

    let a = pool.array(TypeId::BYTE);
    let b = pool.array(TypeId::BYTE);
    assert_eq!(a, b);

    let set_a = pool.class(interner.intern("java.util.HashSet"), &[a]);
    let set_b = pool.class(interner.intern("java.util.HashSet"), &[b]);
    assert_eq!(set_a, set_b);

    let set_s = pool.class(interner.intern("java.util.HashSet"), &[string]);
    assert_ne!(set_a, set_s);
}

#[test]
fn test_class_and_interface_with_same_name_differ() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let name = interner.intern("java.util.Set");
    assert_ne!(pool.class(name, &[]), pool.interface(name, &[]));
}

#[test]
fn test_type_args_in_declaration_order() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let string = pool.class(interner.intern("java.lang.String"), &[]);
    let key = pool.array(TypeId::INT);
    let map = pool.class(interner.intern("java.util.HashMap"), &[key, string]);

    assert_eq!(pool.type_args(map), &[key, string]);
    assert_eq!(pool.type_arguments(map), &[key, string]);
}

#[test]
fn test_raw_type_has_no_args() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let raw = pool.class(interner.intern("java.util.HashSet"), &[]);
    assert!(pool.type_args(raw).is_empty());
    assert_eq!(pool.descriptor(raw), TypeDescriptor::Class);
}

#[test]
fn test_array_component_and_depth() {
    let mut pool = Pool::new();
    let matrix = pool.array_of_depth(TypeId::INT, 2);
    let row = pool.component(matrix);
    assert_eq!(row, Some(pool.array(TypeId::INT)));
    assert_eq!(pool.array_of_depth(TypeId::INT, 0), TypeId::INT);
    assert_eq!(pool.component(TypeId::INT), None);
}

#[test]
fn test_descriptors() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let array = pool.array(TypeId::CHAR);
    let class = pool.class(interner.intern("java.lang.Integer"), &[]);
    let iface = pool.interface(interner.intern("java.util.List"), &[array]);
    let var = pool.type_var(interner.intern("T"));
    let wild = pool.wildcard(WildcardBound::Unbounded);

    assert_eq!(pool.descriptor(array), TypeDescriptor::Array);
    assert_eq!(pool.descriptor(class), TypeDescriptor::Class);
    assert_eq!(pool.descriptor(iface), TypeDescriptor::Interface);
    assert_eq!(pool.descriptor(var), TypeDescriptor::TypeVariable);
    assert_eq!(pool.descriptor(wild), TypeDescriptor::Wildcard);
    assert_eq!(pool.descriptor(TypeId::LONG), TypeDescriptor::Primitive);
}

#[test]
fn test_wildcard_bounds() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let number = pool.class(interner.intern("java.lang.Number"), &[]);

    let ext = pool.wildcard(WildcardBound::Extends(number));
    let sup = pool.wildcard(WildcardBound::Super(number));
    let any = pool.wildcard(WildcardBound::Unbounded);

    assert_eq!(pool.wildcard_bound(ext), Some(WildcardBound::Extends(number)));
    assert_eq!(pool.wildcard_bound(sup), Some(WildcardBound::Super(number)));
    assert_eq!(pool.wildcard_bound(any), Some(WildcardBound::Unbounded));
    assert_eq!(pool.wildcard(WildcardBound::Unbounded), any);
    assert_eq!(pool.wildcard_bound(number), None);
}

#[test]
fn test_format_type() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let string = pool.class(interner.intern("java.lang.String"), &[]);
    let key = pool.array_of_depth(TypeId::INT, 2);
    let map = pool.class(interner.intern("java.util.HashMap"), &[key, string]);
    assert_eq!(
        pool.format_type(map, &interner),
        "java.util.HashMap<int[][], java.lang.String>"
    );

    let t = pool.type_var(interner.intern("T"));
    let ext = pool.wildcard(WildcardBound::Extends(t));
    let list = pool.interface(interner.intern("java.util.List"), &[ext]);
    assert_eq!(
        pool.format_type(list, &interner),
        "java.util.List<? extends T>"
    );

    let any = pool.wildcard(WildcardBound::Unbounded);
    let set = pool.class(interner.intern("java.util.HashSet"), &[any]);
    assert_eq!(pool.format_type(set, &interner), "java.util.HashSet<?>");
}
