//! Log signal model: batches of log records grouped by resource and scope.

use crate::domain::value::{AttributeValue, Attributes};
use crate::model::common::{InstrumentationScope, Resource, ResourceSection, ScopeSection};
use serde::{Deserialize, Serialize};

/// A batch of log data submitted in a single consume call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogBatch {
    /// Resource-level groupings, in producer order. Entries may be `None`.
    #[serde(default)]
    pub resource_logs: Vec<Option<ResourceLogs>>,
}

impl LogBatch {
    /// Creates an empty batch.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Log records grouped under one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLogs {
    /// The producing entity, if known.
    #[serde(default)]
    pub resource: Option<Resource>,

    /// Scope-level groupings, in producer order. Entries may be `None`.
    #[serde(default)]
    pub scope_logs: Vec<Option<ScopeLogs>>,
}

/// Log records grouped under one instrumentation scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeLogs {
    /// The generating library, if known.
    #[serde(default)]
    pub scope: Option<InstrumentationScope>,

    /// The records themselves, in producer order. Entries may be `None`.
    #[serde(default)]
    pub records: Vec<Option<LogRecord>>,
}

/// A single log record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Emission timestamp in nanoseconds since the Unix epoch.
    #[serde(default)]
    pub time_unix_nano: u64,

    /// Severity as text (e.g. `INFO`, `ERROR`), possibly empty.
    #[serde(default)]
    pub severity: String,

    /// The log message body, which may itself be a nested container value.
    #[serde(default)]
    pub body: AttributeValue,

    /// Attributes attached to this record.
    #[serde(default)]
    pub attributes: Attributes,
}

impl ResourceSection for ResourceLogs {
    type Scope = ScopeLogs;

    fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    fn scopes(&self) -> &[Option<ScopeLogs>] {
        &self.scope_logs
    }
}

impl ScopeSection for ScopeLogs {
    type Item = LogRecord;

    fn scope(&self) -> Option<&InstrumentationScope> {
        self.scope.as_ref()
    }

    fn items(&self) -> &[Option<LogRecord>] {
        &self.records
    }
}
