//! Bounded, deduplicating record store.
//!
//! Successes and failures are kept in two separate logs. Each log preserves
//! arrival order for the report and keeps a content-hashed index beside it, so
//! a call site that runs many times (a loop, a repeated helper) is counted
//! once. The same description at a different line or function is a
//! different record.

use std::borrow::Cow;
use std::io;

use rustc_hash::FxHashSet;

use crate::record::{CallSite, Record, RecordKind};
use crate::report;

/// Default number of distinct records each log may hold.
pub const MAXIMUM: usize = 0x1000;

/// What a recording call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recorded {
    /// The record was new and was appended.
    Inserted,
    /// An identical record was already present; nothing changed.
    Duplicate,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A new record did not fit. The store is unchanged.
    #[error("cannot record {kind}: log already holds {capacity} distinct records")]
    CapacityExceeded { kind: RecordKind, capacity: usize },
}

/// Pass/fail counts of a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Get exit code: 0 = all pass, 1 = failures, 2 = nothing recorded.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}

/// One insertion-ordered log with its dedup index.
#[derive(Clone, Debug, Default)]
struct RecordLog {
    entries: Vec<Record>,
    index: FxHashSet<Record>,
}

impl RecordLog {
    fn insert(
        &mut self,
        record: Record,
        kind: RecordKind,
        capacity: usize,
    ) -> Result<Recorded, StoreError> {
        if self.index.contains(&record) {
            tracing::trace!(%kind, site = %record.site(), "duplicate record ignored");
            return Ok(Recorded::Duplicate);
        }
        if self.entries.len() >= capacity {
            tracing::warn!(%kind, capacity, site = %record.site(), "record log is full");
            return Err(StoreError::CapacityExceeded { kind, capacity });
        }

        tracing::debug!(
            %kind,
            function = record.function(),
            site = %record.site(),
            description = record.description(),
            "recorded"
        );
        self.index.insert(record.clone());
        self.entries.push(record);
        Ok(Recorded::Inserted)
    }
}

/// Result store for one test run.
///
/// Lifecycle is `new → record_* → report`. Reporting does not reset anything;
/// build a fresh store for the next run.
#[derive(Clone, Debug)]
pub struct RecordStore {
    successes: RecordLog,
    failures: RecordLog,
    capacity: usize,
    print_successes: bool,
}

impl RecordStore {
    /// Empty store holding up to [`MAXIMUM`] records per log.
    pub fn new() -> Self {
        Self::with_capacity(MAXIMUM)
    }

    /// Empty store holding up to `capacity` records per log.
    pub fn with_capacity(capacity: usize) -> Self {
        RecordStore {
            successes: RecordLog::default(),
            failures: RecordLog::default(),
            capacity,
            print_successes: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record_success(
        &mut self,
        site: CallSite,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Recorded, StoreError> {
        self.record(RecordKind::Success, Record::new(site, description))
    }

    pub fn record_failure(
        &mut self,
        site: CallSite,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Recorded, StoreError> {
        self.record(RecordKind::Failure, Record::new(site, description))
    }

    /// Record `record` in the log for `kind`.
    pub fn record(&mut self, kind: RecordKind, record: Record) -> Result<Recorded, StoreError> {
        let log = match kind {
            RecordKind::Success => &mut self.successes,
            RecordKind::Failure => &mut self.failures,
        };
        log.insert(record, kind, self.capacity)
    }

    /// Record a success if `condition` holds, a failure otherwise.
    ///
    /// This is what [`check!`](crate::check) expands to.
    pub fn check(
        &mut self,
        condition: bool,
        site: CallSite,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Recorded, StoreError> {
        self.record(
            RecordKind::from_condition(condition),
            Record::new(site, description),
        )
    }

    /// Whether future reports list passing records. Off by default.
    pub fn set_print_successes(&mut self, enable: bool) {
        self.print_successes = enable;
    }

    pub fn print_successes(&self) -> bool {
        self.print_successes
    }

    pub fn successes(&self) -> &[Record] {
        &self.successes.entries
    }

    pub fn failures(&self) -> &[Record] {
        &self.failures.entries
    }

    pub fn tally(&self) -> Tally {
        Tally {
            passed: self.successes.entries.len(),
            failed: self.failures.entries.len(),
        }
    }

    /// Print the report to stdout.
    ///
    /// A failed write to stdout is logged, not returned.
    pub fn report(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(error) = self.report_to(&mut out) {
            tracing::warn!(%error, "failed to write report to stdout");
        }
    }

    /// Write the report to `out`.
    ///
    /// Passing records (when enabled), then failing records, then the tally.
    /// Repeated calls produce identical output.
    pub fn report_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        report::write_report(self, out)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
