//! Record model: where an assertion ran and what it claimed.

use std::borrow::Cow;
use std::fmt;

/// Source location of an assertion, as captured by [`call_site!`](crate::call_site).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    function: Cow<'static, str>,
    file: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    pub fn new(
        function: impl Into<Cow<'static, str>>,
        file: impl Into<Cow<'static, str>>,
        line: u32,
    ) -> Self {
        CallSite {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One observed assertion outcome.
///
/// Two records are the same record when function, file, line and description
/// all match by content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    site: CallSite,
    description: Cow<'static, str>,
}

impl Record {
    pub fn new(site: CallSite, description: impl Into<Cow<'static, str>>) -> Self {
        Record {
            site,
            description: description.into(),
        }
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }

    pub fn function(&self) -> &str {
        self.site.function()
    }

    pub fn file(&self) -> &str {
        self.site.file()
    }

    pub fn line(&self) -> u32 {
        self.site.line()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.site, self.description)
    }
}

/// Which log of a store a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Success,
    Failure,
}

impl RecordKind {
    pub fn from_condition(condition: bool) -> Self {
        if condition {
            RecordKind::Success
        } else {
            RecordKind::Failure
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Success => f.write_str("success"),
            RecordKind::Failure => f.write_str("failure"),
        }
    }
}
