use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.len(), 1);
    assert!(!interner.is_empty());
}

#[test]
fn same_string_same_name() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    assert_eq!(a, b);
    assert_eq!(interner.len(), 2);
}

#[test]
fn different_strings_different_names() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_ne!(x, y);
    assert_eq!(interner.lookup(x), "x");
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn foreign_name_resolves_to_empty() {
    let big = StringInterner::new();
    for i in 0..10 {
        big.intern(&format!("v{i}"));
    }
    let late = big.intern("late");

    let small = StringInterner::new();
    assert_eq!(small.lookup(late), "");
}

#[test]
fn shared_interner_clones_see_same_table() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let name = shared.intern("fib");
    assert_eq!(other.lookup(name), "fib");
    assert_eq!(other.intern("fib"), name);
}

#[test]
fn concurrent_interning_is_consistent() {
    let shared = SharedInterner::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interner = shared.clone();
            std::thread::spawn(move || {
                (0..50)
                    .map(|i| interner.intern(&format!("name{i}")))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<Name>> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_default())
        .collect();

    for names in &results[1..] {
        assert_eq!(names, &results[0]);
    }
    assert_eq!(shared.len(), 51);
}
