//! Telelog: a debug logging exporter core for telemetry pipelines.
//!
//! Telelog converts structured telemetry batches — trace spans, metric data
//! points, and log records — into human-readable text lines and hands them to
//! an injected sink. It is the rendering core of a "logging exporter": the
//! piece a pipeline points at a console or log file to see what is flowing
//! through it.
//!
//! Two guarantees define the crate:
//!
//! - **Total conversion**: consuming a batch never fails. Telemetry arriving
//!   at a debug exporter is often partially malformed — nil sub-collections,
//!   empty resource groups, unrecognized value kinds — and every such gap is
//!   skipped or rendered as a placeholder, never surfaced as an error.
//! - **Deterministic output**: lines follow the batch's own ordering, and map
//!   attributes render in lexicographic key order, so the same batch always
//!   produces the same text.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Pipeline stage (host application)                  │  ← builds batches,
//! └─────────────────────────────────────────────────────┘    owns the sink
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Exporter surface (export/exporter)                 │  ← level parsing
//! │  - consume_traces / consume_metrics / consume_logs  │  ← no-op shutdown
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────────┐
//! │ Record Walker     │        │ Value Formatter       │
//! │ (export/walker)   │───────▶│ (export/formatter)    │
//! │ - skip absent     │        │ - recursive rendering │
//! │ - one line/item   │        │ - stable key order    │
//! └───────────────────┘        └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Sink seam (export/sink)                            │  ← injected,
//! │  - Sink trait, Level, TracingSink                   │    host-configured
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Out of scope by design: network delivery, persistence, batching, retry,
//! sampling, rate limiting, authentication, and sink construction. Those live
//! in the surrounding pipeline.
//!
//! # Modules
//!
//! - [`domain`]: error types and the recursive [`AttributeValue`] model
//! - [`model`]: batch types for the three signal kinds
//! - [`export`]: walker, formatter, sink seam, and the [`TextExporter`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use telelog::{AttributeValue, Span, TextExporter, TracingSink};
//! use telelog::{ResourceSpans, ScopeSpans, TraceBatch};
//!
//! let exporter = TextExporter::new("debug", Arc::new(TracingSink))?;
//!
//! let mut span = Span::named("GET /users");
//! span.attributes.insert("http.status".into(), AttributeValue::from(200));
//! let batch = TraceBatch {
//!     resource_spans: vec![Some(ResourceSpans {
//!         resource: None,
//!         scope_spans: vec![Some(ScopeSpans {
//!             scope: None,
//!             spans: vec![Some(span), None], // nil entries are skipped
//!         })],
//!     })],
//! };
//!
//! exporter.consume_traces(&batch)?;
//! exporter.shutdown()?;
//! # Ok::<(), telelog::TelelogError>(())
//! ```
//!
//! # Concurrency
//!
//! The exporter holds only its level and an `Arc` to the sink; consume calls
//! take `&self` and share no mutable state, so one exporter may serve many
//! pipeline threads without locking. Lines within a single consume call reach
//! the sink in traversal order; interleaving between concurrent calls is the
//! sink's concern.

pub mod domain;
pub mod export;
pub mod model;

pub use domain::error::{Result, TelelogError};
pub use domain::value::{AttributeValue, Attributes};
pub use export::{Level, Sink, TextExporter, TracingSink};
pub use model::{
    InstrumentationScope, LogBatch, LogRecord, MetricBatch, MetricPoint, MetricValue, Resource,
    ResourceLogs, ResourceMetrics, ResourceSpans, ScopeLogs, ScopeMetrics, ScopeSpans, Span,
    SpanKind, SpanStatus, TraceBatch,
};
