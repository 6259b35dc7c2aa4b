use super::*;
use crate::record::CallSite;
use pretty_assertions::assert_eq;

fn render(store: &RecordStore) -> String {
    let mut out = Vec::new();
    write_report(store, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn scenario() -> RecordStore {
    let mut store = RecordStore::new();
    for _ in 0..3 {
        store
            .record_success(CallSite::new("testA", "f.c", 10), "x equals y")
            .unwrap();
    }
    store
        .record_failure(CallSite::new("testA", "f.c", 11), "z is nonzero")
        .unwrap();
    store
}

#[test]
fn test_report_with_successes() {
    let mut store = scenario();
    store.set_print_successes(true);
    assert_eq!(
        render(&store),
        "\x1b[1;32mf.c:10 - x equals y\x1b[0m\n\
         \x1b[1;31mf.c:11 - z is nonzero\x1b[0m\n\
         \x1b[0;32mPassed: 1\x1b[0m\n\
         \x1b[0;31mDid NOT pass: 1\x1b[0m\n"
    );
}

#[test]
fn test_report_hides_successes_by_default() {
    let store = scenario();
    let text = render(&store);
    assert!(!text.contains("x equals y"));
    assert!(text.contains("Passed: 1"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_toggle_is_not_retroactive() {
    let mut store = scenario();
    let hidden = render(&store);
    store.set_print_successes(true);
    let shown = render(&store);
    store.set_print_successes(false);
    assert_eq!(render(&store), hidden);
    assert_ne!(shown, hidden);
}

#[test]
fn test_report_is_repeatable() {
    let mut store = scenario();
    store.set_print_successes(true);
    let first = render(&store);
    let second = render(&store);
    assert_eq!(first, second);
    assert_eq!(store.tally().passed, 1);
}

#[test]
fn test_empty_report_is_just_the_tally() {
    let store = RecordStore::new();
    assert_eq!(
        render(&store),
        "\x1b[0;32mPassed: 0\x1b[0m\n\x1b[0;31mDid NOT pass: 0\x1b[0m\n"
    );
}

#[test]
fn test_report_lists_failures_in_order() {
    let mut store = RecordStore::new();
    for (line, desc) in [(30, "third"), (10, "first"), (20, "second")] {
        store
            .record_failure(CallSite::new("t", "order.rs", line), desc)
            .unwrap();
    }
    let text = render(&store);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "\x1b[1;31morder.rs:30 - third\x1b[0m");
    assert_eq!(lines[1], "\x1b[1;31morder.rs:10 - first\x1b[0m");
    assert_eq!(lines[2], "\x1b[1;31morder.rs:20 - second\x1b[0m");
}
