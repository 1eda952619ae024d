use pretty_assertions::assert_eq;

use super::*;

#[test]
fn intern_is_stable() {
    let interner = StringInterner::new();
    let a = interner.intern("Either");
    let b = interner.intern("Either");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "Either");
}

#[test]
fn distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("Box");
    let b = interner.intern("box");
    assert_ne!(a, b);
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
    assert!(!interner.is_empty());
}

#[test]
fn shared_interner_clones_share_storage() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let name = shared.intern("mona.comprehension.MonadicForWrapper");
    assert_eq!(other.lookup(name), "mona.comprehension.MonadicForWrapper");
}
