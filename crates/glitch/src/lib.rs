//! glitch - in-process assertion results with an end-of-run report.
//!
//! A [`RecordStore`] collects the outcome of every [`check!`], collapsing
//! repeats of the same call site, and prints a colored summary when
//! [`RecordStore::report`] is called.
//!
//! ```no_run
//! use glitch::{check, RecordStore, Stopwatch, StoreError};
//!
//! fn run_thing() -> u32 {
//!     3
//! }
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut t = RecordStore::new();
//!     let mut clock = Stopwatch::new();
//!
//!     clock.begin();
//!     let hits = run_thing();
//!     clock.end();
//!
//!     check!(t, hits == 3, "three hits")?;
//!     check!(t, clock.elapsed_ms() < 1.0, "fast enough")?;
//!     t.report();
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - [`clock`]: begin/end stopwatch
//! - [`cmpx`]: vector and color equality predicates
//! - [`random`]: inclusive random ranges for generating inputs
//!
//! # Tracing
//!
//! Recording emits `tracing` events (`debug` on insert, `trace` on duplicates,
//! `warn` on a full log). Call [`init_tracing`] and set
//! `RUST_LOG=glitch=debug` to see them.

mod record;
mod report;
mod shared;
mod store;

pub use record::{CallSite, Record, RecordKind};
pub use shared::SharedStore;
pub use store::{RecordStore, Recorded, StoreError, Tally, MAXIMUM};

pub use glitch_clock as clock;
pub use glitch_clock::Stopwatch;
pub use glitch_cmpx as cmpx;
pub use glitch_rand as random;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Fails only if the host already installed a global subscriber; keep theirs.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Name of the function the macro is expanded in.
///
/// Closures report the function that contains them.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::__private::enclosing_function(::core::any::type_name_of_val(&__here))
    }};
}

/// [`CallSite`] of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), ::core::file!(), ::core::line!())
    };
}

/// Record `condition` against `store` under the current call site.
///
/// Works with both [`RecordStore`] and [`SharedStore`] and returns the
/// store's `Result<Recorded, StoreError>`.
///
/// ```no_run
/// # use glitch::{check, RecordStore, StoreError};
/// # use glitch::cmpx::vec2_is_equal;
/// # fn main() -> Result<(), StoreError> {
/// let mut t = RecordStore::new();
/// let (a, b) = ([0.0_f32, 0.0], [0.0_f32, 0.0]);
/// check!(t, vec2_is_equal(&a, &b), "a equals b")?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! check {
    ($store:expr, $condition:expr, $description:expr $(,)?) => {
        $store.check($condition, $crate::call_site!(), $description)
    };
}

#[doc(hidden)]
pub mod __private {
    /// Trim the type path of a nested marker fn down to its enclosing function.
    ///
    /// `app::tests::my_test::__here` becomes `my_test`, and
    /// `app::run::{{closure}}::__here` becomes `run`.
    pub fn enclosing_function(marker: &'static str) -> &'static str {
        let mut path = marker.strip_suffix("::__here").unwrap_or(marker);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path.rsplit("::").next().unwrap_or(path)
    }
}
