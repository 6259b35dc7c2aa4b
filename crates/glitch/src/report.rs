//! End-of-run report rendering.
//!
//! Layout, one line each:
//!
//! ```text
//! file:line - description      (bold green, passing records, optional)
//! file:line - description      (bold red, failing records)
//! Passed: N                    (green)
//! Did NOT pass: M              (red)
//! ```

use std::io::{self, Write};

use crate::record::Record;
use crate::store::RecordStore;

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paint {
    Pass,
    Fail,
    PassedCount,
    FailedCount,
}

impl Paint {
    fn code(self) -> &'static str {
        match self {
            Paint::Pass => "\x1b[1;32m",
            Paint::Fail => "\x1b[1;31m",
            Paint::PassedCount => "\x1b[0;32m",
            Paint::FailedCount => "\x1b[0;31m",
        }
    }
}

fn write_record<W: Write + ?Sized>(out: &mut W, record: &Record, paint: Paint) -> io::Result<()> {
    writeln!(out, "{}{record}{RESET}", paint.code())
}

pub(crate) fn write_report<W: Write + ?Sized>(store: &RecordStore, out: &mut W) -> io::Result<()> {
    if store.print_successes() {
        for record in store.successes() {
            write_record(out, record, Paint::Pass)?;
        }
    }
    for record in store.failures() {
        write_record(out, record, Paint::Fail)?;
    }

    let tally = store.tally();
    writeln!(out, "{}Passed: {}{RESET}", Paint::PassedCount.code(), tally.passed)?;
    writeln!(
        out,
        "{}Did NOT pass: {}{RESET}",
        Paint::FailedCount.code(),
        tally.failed
    )?;
    out.flush()
}

#[cfg(test)]
mod tests;
