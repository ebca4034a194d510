use super::*;

#[test]
fn test_intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("java.util.HashMap");
    let b = interner.intern("java.util.HashMap");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "java.util.HashMap");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let set = interner.intern("java.util.HashSet");
    let map = interner.intern("java.util.HashMap");
    assert_ne!(set, map);
}

#[test]
fn test_empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("newHashSet"), None);
    assert_eq!(interner.len(), 1);

    let name = interner.intern("newHashSet");
    assert_eq!(interner.get("newHashSet"), Some(name));
}

#[test]
fn test_lookup_unknown_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}

#[test]
fn test_shared_interner_across_threads() {
    let interner: SharedInterner = Arc::new(StringInterner::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interner = Arc::clone(&interner);
            std::thread::spawn(move || interner.intern("com.google.common.collect.Sets"))
        })
        .collect();

    let names: Vec<Name> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_else(|_| panic!("interning thread panicked")))
        .collect();
    assert!(names.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_intern_error_display() {
    let msg = InternError::Overflow { count: 7 }.to_string();
    assert!(msg.contains("exceeded capacity"));
    assert!(msg.contains('7'));
}
