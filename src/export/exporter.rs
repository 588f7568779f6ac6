//! The text exporter surface.
//!
//! [`TextExporter`] ties the record walker and value formatter to an injected
//! sink. Construction parses the configured severity level — the only operation
//! that can fail. Consuming a batch of any signal kind always succeeds, and
//! shutdown is a no-op because the exporter owns no resources beyond its sink
//! handle.
//!
//! The exporter holds no mutable state: it is `Send + Sync` and safe to share
//! across pipeline threads without locking, provided the sink tolerates
//! concurrent writes (the sink's contract, not the exporter's).

use crate::domain::error::Result;
use crate::export::sink::{Level, Sink};
use crate::export::walker;
use crate::model::log::LogBatch;
use crate::model::metric::MetricBatch;
use crate::model::trace::TraceBatch;
use std::sync::Arc;

/// Renders telemetry batches as text lines and hands them to a sink.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use telelog::{TextExporter, TracingSink, TraceBatch};
///
/// let exporter = TextExporter::new("debug", Arc::new(TracingSink))?;
/// exporter.consume_traces(&TraceBatch::empty())?;
/// exporter.shutdown()?;
/// # Ok::<(), telelog::TelelogError>(())
/// ```
pub struct TextExporter {
    /// Severity level attached to every exported line.
    level: Level,

    /// Destination for rendered lines.
    sink: Arc<dyn Sink>,
}

impl TextExporter {
    /// Creates an exporter from a severity level name and a sink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TelelogError::Config`] if `level` is not a recognized
    /// severity level name. This is the only failure the exporter can report;
    /// every operation on a constructed exporter succeeds.
    pub fn new(level: &str, sink: Arc<dyn Sink>) -> Result<Self> {
        let level: Level = level.parse()?;
        tracing::debug!(%level, "constructed text exporter");
        Ok(Self { level, sink })
    }

    /// Configured severity level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Renders one trace batch, writing one line per present span.
    ///
    /// Never fails: absent or empty groups, scopes, and spans contribute zero
    /// lines and do not interrupt the rest of the batch.
    pub fn consume_traces(&self, batch: &TraceBatch) -> Result<()> {
        self.emit(walker::trace_lines(batch));
        Ok(())
    }

    /// Renders one metric batch, writing one line per present data point.
    pub fn consume_metrics(&self, batch: &MetricBatch) -> Result<()> {
        self.emit(walker::metric_lines(batch));
        Ok(())
    }

    /// Renders one log batch, writing one line per present record.
    pub fn consume_logs(&self, batch: &LogBatch) -> Result<()> {
        self.emit(walker::log_lines(batch));
        Ok(())
    }

    /// Shuts the exporter down.
    ///
    /// A no-op that always succeeds: the exporter owns nothing to release.
    /// The sink's own lifecycle belongs to whoever constructed it.
    pub fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    /// Writes lines to the sink in traversal order.
    fn emit(&self, lines: Vec<String>) {
        for line in &lines {
            self.sink.write(self.level, line);
        }
    }
}

impl std::fmt::Debug for TextExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextExporter")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trace::{ResourceSpans, ScopeSpans, Span};
    use std::sync::Mutex;

    struct RecordingSink {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                lines: Mutex::new(Vec::new()),
            })
        }
    }

    impl Sink for RecordingSink {
        fn write(&self, level: Level, line: &str) {
            self.lines.lock().unwrap().push((level, line.to_string()));
        }
    }

    #[test]
    fn invalid_level_is_a_construction_error() {
        let sink = RecordingSink::new();
        assert!(TextExporter::new("loud", sink).is_err());
    }

    #[test]
    fn valid_level_constructs_and_shutdown_succeeds() {
        let sink = RecordingSink::new();
        let exporter = TextExporter::new("debug", sink).unwrap();
        assert_eq!(exporter.level(), Level::Debug);
        assert!(exporter.shutdown().is_ok());
        assert!(exporter.shutdown().is_ok());
    }

    #[test]
    fn consume_tolerates_every_gap_shape() {
        let sink = RecordingSink::new();
        let exporter = TextExporter::new("debug", Arc::clone(&sink) as Arc<dyn Sink>).unwrap();

        assert!(exporter.consume_traces(&TraceBatch::empty()).is_ok());
        assert!(exporter
            .consume_traces(&TraceBatch {
                resource_spans: vec![None, Some(ResourceSpans::default())],
            })
            .is_ok());
        assert!(exporter
            .consume_traces(&TraceBatch {
                resource_spans: vec![Some(ResourceSpans {
                    resource: None,
                    scope_spans: vec![None, Some(ScopeSpans::default())],
                })],
            })
            .is_ok());
        assert!(exporter
            .consume_traces(&TraceBatch {
                resource_spans: vec![Some(ResourceSpans {
                    resource: None,
                    scope_spans: vec![Some(ScopeSpans {
                        scope: None,
                        spans: vec![None],
                    })],
                })],
            })
            .is_ok());
        assert!(exporter.consume_metrics(&MetricBatch::empty()).is_ok());
        assert!(exporter.consume_logs(&LogBatch::empty()).is_ok());

        // Only gaps were submitted, so nothing reached the sink.
        assert!(sink.lines.lock().unwrap().is_empty());
    }

    #[test]
    fn lines_reach_sink_at_configured_level() {
        let sink = RecordingSink::new();
        let exporter = TextExporter::new("info", Arc::clone(&sink) as Arc<dyn Sink>).unwrap();
        let batch = TraceBatch {
            resource_spans: vec![Some(ResourceSpans {
                resource: None,
                scope_spans: vec![Some(ScopeSpans {
                    scope: None,
                    spans: vec![Some(Span::named("one")), Some(Span::named("two"))],
                })],
            })],
        };
        exporter.consume_traces(&batch).unwrap();

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(level, _)| *level == Level::Info));
        assert!(lines[0].1.contains("name=one"));
        assert!(lines[1].1.contains("name=two"));
    }
}
