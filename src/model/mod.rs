//! Telemetry batch model.
//!
//! Batches of all three signal kinds share the same shape: a batch holds
//! resource-level sections, each resource section holds scope-level sections,
//! and each scope section holds the signal-specific items. At every level an
//! element may be absent (`None`) or empty — the source data these types model
//! is allowed to carry nil entries, and the exporter's contract is to skip
//! them silently rather than fail.
//!
//! The [`ResourceSection`] and [`ScopeSection`] traits are the seam the record
//! walker traverses through, so one traversal implementation serves traces,
//! metrics, and logs alike.
//!
//! # Organization
//!
//! - [`common`]: [`Resource`], [`InstrumentationScope`], and the section traits
//! - [`trace`]: [`TraceBatch`] down to [`Span`]
//! - [`metric`]: [`MetricBatch`] down to [`MetricPoint`]
//! - [`log`]: [`LogBatch`] down to [`LogRecord`]

pub mod common;
pub mod log;
pub mod metric;
pub mod trace;

pub use common::{InstrumentationScope, Resource, ResourceSection, ScopeSection};
pub use log::{LogBatch, LogRecord, ResourceLogs, ScopeLogs};
pub use metric::{MetricBatch, MetricPoint, MetricValue, ResourceMetrics, ScopeMetrics};
pub use trace::{ResourceSpans, ScopeSpans, Span, SpanKind, SpanStatus, TraceBatch};
