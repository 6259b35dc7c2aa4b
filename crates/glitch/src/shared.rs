//! Store shared between threads.
//!
//! One mutex guards both logs and is held across the whole
//! lookup-then-append, so two threads racing on the same call site still
//! produce a single record.

use std::borrow::Cow;
use std::io;

use parking_lot::Mutex;

use crate::record::{CallSite, Record, RecordKind};
use crate::store::{RecordStore, Recorded, StoreError, Tally};

#[derive(Debug, Default)]
pub struct SharedStore {
    inner: Mutex<RecordStore>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::from(RecordStore::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(RecordStore::with_capacity(capacity))
    }

    pub fn record_success(
        &self,
        site: CallSite,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Recorded, StoreError> {
        self.inner.lock().record_success(site, description)
    }

    pub fn record_failure(
        &self,
        site: CallSite,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Recorded, StoreError> {
        self.inner.lock().record_failure(site, description)
    }

    pub fn record(&self, kind: RecordKind, record: Record) -> Result<Recorded, StoreError> {
        self.inner.lock().record(kind, record)
    }

    pub fn check(
        &self,
        condition: bool,
        site: CallSite,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Recorded, StoreError> {
        self.inner.lock().check(condition, site, description)
    }

    pub fn set_print_successes(&self, enable: bool) {
        self.inner.lock().set_print_successes(enable);
    }

    pub fn tally(&self) -> Tally {
        self.inner.lock().tally()
    }

    /// Run `f` against the store while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&RecordStore) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn report(&self) {
        self.inner.lock().report();
    }

    pub fn report_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.inner.lock().report_to(out)
    }

    pub fn into_inner(self) -> RecordStore {
        self.inner.into_inner()
    }
}

impl From<RecordStore> for SharedStore {
    fn from(store: RecordStore) -> Self {
        SharedStore {
            inner: Mutex::new(store),
        }
    }
}

#[cfg(test)]
mod tests;
