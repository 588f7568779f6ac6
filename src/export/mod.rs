//! Text export pipeline: walker, formatter, sink seam, and exporter surface.
//!
//! The pieces compose in a straight line:
//!
//! ```text
//! TelemetryBatch → walker (traverse, skip gaps) → formatter (render values)
//!                → TextExporter → Sink (injected, host-owned)
//! ```
//!
//! # Modules
//!
//! - [`walker`]: defensive Resource → Scope → Item traversal, one line per item
//! - [`formatter`]: canonical textual rendering of attribute values
//! - [`sink`]: the [`Sink`] trait, severity [`Level`], and [`TracingSink`]
//! - [`exporter`]: [`TextExporter`] construction, per-signal consume, shutdown

pub mod exporter;
pub mod formatter;
pub mod sink;
pub mod walker;

pub use exporter::TextExporter;
pub use sink::{Level, Sink, TracingSink};
