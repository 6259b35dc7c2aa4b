//! Minimal run: time a section, check two predicates, print the report.
//!
//! `cargo run -p glitch --example basic`

use glitch::cmpx::vec2_is_equal;
use glitch::{check, RecordStore, Stopwatch, StoreError};

fn main() -> Result<(), StoreError> {
    glitch::init_tracing();

    let mut t = RecordStore::new();
    let mut clock = Stopwatch::new();

    clock.begin();
    clock.end();

    let a = [0.0_f32, 0.0];
    let b = [0.0_f32, 0.0];

    check!(t, vec2_is_equal(&a, &b), "a")?;
    check!(t, clock.elapsed_ms() < 1.0, "b")?;

    t.report();
    std::process::exit(t.tally().exit_code());
}
