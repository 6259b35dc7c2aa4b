use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_concurrent_identical_checks_collapse() {
    let store = SharedStore::new();
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    store
                        .check(true, CallSite::new("worker", "w.rs", 1), "same site")
                        .unwrap();
                }
            });
        }
    });
    assert_eq!(store.tally(), Tally { passed: 1, failed: 0 });
}

#[test]
fn test_concurrent_distinct_checks_all_land() {
    let store = SharedStore::new();
    std::thread::scope(|scope| {
        for worker in 0..4_u32 {
            let store = &store;
            scope.spawn(move || {
                for i in 0..25 {
                    let site = CallSite::new("worker", "w.rs", worker * 100 + i);
                    store.record_failure(site, "d").unwrap();
                }
            });
        }
    });
    assert_eq!(store.tally().failed, 100);
}

#[test]
fn test_capacity_is_shared_across_threads() {
    let store = SharedStore::with_capacity(10);
    let rejected = std::sync::atomic::AtomicUsize::new(0);
    std::thread::scope(|scope| {
        for worker in 0..4_u32 {
            let (store, rejected) = (&store, &rejected);
            scope.spawn(move || {
                for i in 0..5 {
                    let site = CallSite::new("worker", "w.rs", worker * 10 + i);
                    if store.record_success(site, "d").is_err() {
                        rejected.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    }
                }
            });
        }
    });
    assert_eq!(store.tally().passed, 10);
    assert_eq!(rejected.into_inner(), 10);
}

#[test]
fn test_into_inner_keeps_records() {
    let store = SharedStore::from(RecordStore::with_capacity(2));
    store.set_print_successes(true);
    let record = Record::new(CallSite::new("f", "a.rs", 1), "p");
    store.record(RecordKind::Success, record).unwrap();
    assert_eq!(store.with(|s| s.successes().len()), 1);

    let mut out = Vec::new();
    store.report_to(&mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("a.rs:1 - p"));

    let inner = store.into_inner();
    assert!(inner.print_successes());
    assert_eq!(inner.capacity(), 2);
}
