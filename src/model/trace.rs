//! Trace signal model: batches of spans grouped by resource and scope.

use crate::domain::value::Attributes;
use crate::model::common::{InstrumentationScope, Resource, ResourceSection, ScopeSection};
use serde::{Deserialize, Serialize};

/// A batch of trace data submitted in a single consume call.
///
/// The batch may be empty, and any entry in `resource_spans` may be `None`;
/// both yield zero output lines rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceBatch {
    /// Resource-level groupings, in producer order.
    #[serde(default)]
    pub resource_spans: Vec<Option<ResourceSpans>>,
}

impl TraceBatch {
    /// Creates an empty batch.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Spans grouped under one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpans {
    /// The producing entity, if known.
    #[serde(default)]
    pub resource: Option<Resource>,

    /// Scope-level groupings, in producer order. Entries may be `None`.
    #[serde(default)]
    pub scope_spans: Vec<Option<ScopeSpans>>,
}

/// Spans grouped under one instrumentation scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeSpans {
    /// The generating library, if known.
    #[serde(default)]
    pub scope: Option<InstrumentationScope>,

    /// The spans themselves, in producer order. Entries may be `None`.
    #[serde(default)]
    pub spans: Vec<Option<Span>>,
}

/// A single trace span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Operation name (e.g. `GET /users`).
    pub name: String,

    /// 16-byte trace identifier, rendered as 32 hex characters.
    #[serde(default)]
    pub trace_id: [u8; 16],

    /// 8-byte span identifier, rendered as 16 hex characters.
    #[serde(default)]
    pub span_id: [u8; 8],

    /// Role of the span relative to its trace.
    #[serde(default)]
    pub kind: SpanKind,

    /// Start timestamp in nanoseconds since the Unix epoch.
    #[serde(default)]
    pub start_time_unix_nano: u64,

    /// End timestamp in nanoseconds since the Unix epoch.
    #[serde(default)]
    pub end_time_unix_nano: u64,

    /// Completion status of the operation.
    #[serde(default)]
    pub status: SpanStatus,

    /// Attributes attached to this span.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Span {
    /// Creates a span with the given name and all other fields defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trace_id: [0; 16],
            span_id: [0; 8],
            kind: SpanKind::default(),
            start_time_unix_nano: 0,
            end_time_unix_nano: 0,
            status: SpanStatus::default(),
            attributes: Attributes::new(),
        }
    }
}

/// Role of a span relative to the trace it belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    /// No kind was recorded.
    #[default]
    Unspecified,
    /// An internal operation within an application.
    Internal,
    /// Handling of a synchronous inbound request.
    Server,
    /// A synchronous outbound request.
    Client,
    /// Creation of an async message.
    Producer,
    /// Processing of an async message.
    Consumer,
}

impl SpanKind {
    /// Lowercase textual form used in rendered lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Internal => "internal",
            Self::Server => "server",
            Self::Client => "client",
            Self::Producer => "producer",
            Self::Consumer => "consumer",
        }
    }
}

/// Completion status of a span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SpanStatus {
    /// No status was recorded.
    #[default]
    Unset,
    /// The operation completed successfully.
    Ok,
    /// The operation failed, with a human-readable description.
    Error {
        /// Description of the failure.
        message: String,
    },
}

impl ResourceSection for ResourceSpans {
    type Scope = ScopeSpans;

    fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    fn scopes(&self) -> &[Option<ScopeSpans>] {
        &self.scope_spans
    }
}

impl ScopeSection for ScopeSpans {
    type Item = Span;

    fn scope(&self) -> Option<&InstrumentationScope> {
        self.scope.as_ref()
    }

    fn items(&self) -> &[Option<Span>] {
        &self.spans
    }
}
