//! Defensive batch traversal and line production.
//!
//! This module is the record walker half of the exporter core. It turns one
//! telemetry batch into a sequence of text lines, exactly one line per item
//! actually present, visiting resources, then scopes, then items in producer
//! order. That ordering is an observable contract: downstream readers rely on
//! output lines matching input order.
//!
//! The defining behavior here is the skip-absent-never-fail policy. Source
//! batches may carry nil entries at any level of the Resource → Scope → Item
//! hierarchy, and any sequence may be empty. Every such gap contributes zero
//! lines and never aborts the remaining traversal — traversal is a total
//! operation with no error outcome.

use crate::export::formatter::{hex, render_attributes, render_value};
use crate::model::common::{InstrumentationScope, Resource, ResourceSection, ScopeSection};
use crate::model::log::LogBatch;
use crate::model::metric::{MetricBatch, MetricValue};
use crate::model::trace::{SpanStatus, TraceBatch};
use std::fmt::Write;

/// Visits every present item in a batch hierarchy, in traversal order.
///
/// Shared by all three signal kinds through the section trait seam. `None`
/// entries at the group, scope, and item level are skipped silently, which is
/// the whole of the defensive traversal policy: one `flatten` per level.
fn visit_items<G, S, I>(
    groups: &[Option<G>],
    mut visit: impl FnMut(Option<&Resource>, Option<&InstrumentationScope>, &I),
) where
    G: ResourceSection<Scope = S>,
    S: ScopeSection<Item = I>,
{
    for group in groups.iter().flatten() {
        for scope in group.scopes().iter().flatten() {
            for item in scope.items().iter().flatten() {
                visit(group.resource(), scope.scope(), item);
            }
        }
    }
}

/// Appends the owning-scope and owning-resource context to a line.
///
/// Scope renders as `scope=<name>` (plus `@<version>` when recorded); resource
/// renders as its attribute set. Either is omitted when absent, and an empty
/// resource attribute set is omitted too — context never turns a gap into noise.
fn push_context(
    line: &mut String,
    resource: Option<&Resource>,
    scope: Option<&InstrumentationScope>,
) {
    if let Some(scope) = scope {
        let _ = write!(line, " scope={}", scope.name);
        if let Some(version) = &scope.version {
            let _ = write!(line, "@{version}");
        }
    }
    if let Some(resource) = resource {
        if !resource.attributes.is_empty() {
            let _ = write!(line, " resource={}", render_attributes(&resource.attributes));
        }
    }
}

fn render_status(status: &SpanStatus) -> String {
    match status {
        SpanStatus::Unset => "unset".to_string(),
        SpanStatus::Ok => "ok".to_string(),
        SpanStatus::Error { message } => format!("error({message})"),
    }
}

fn render_metric_value(value: &MetricValue) -> String {
    match value {
        MetricValue::Unspecified => "<unspecified>".to_string(),
        MetricValue::Int(i) => i.to_string(),
        MetricValue::Double(d) => d.to_string(),
        MetricValue::Histogram { count, sum } => {
            format!("histogram(count={count}, sum={sum})")
        }
    }
}

/// Renders a trace batch as one line per present span.
pub fn trace_lines(batch: &TraceBatch) -> Vec<String> {
    let mut lines = Vec::new();
    visit_items(&batch.resource_spans, |resource, scope, span| {
        let mut line = format!(
            "Span name={} trace_id={} span_id={} kind={} start={} end={} status={}",
            span.name,
            hex(&span.trace_id),
            hex(&span.span_id),
            span.kind.as_str(),
            span.start_time_unix_nano,
            span.end_time_unix_nano,
            render_status(&span.status),
        );
        if !span.attributes.is_empty() {
            let _ = write!(line, " attributes={}", render_attributes(&span.attributes));
        }
        push_context(&mut line, resource, scope);
        lines.push(line);
    });
    lines
}

/// Renders a metric batch as one line per present data point.
pub fn metric_lines(batch: &MetricBatch) -> Vec<String> {
    let mut lines = Vec::new();
    visit_items(&batch.resource_metrics, |resource, scope, point| {
        let mut line = format!(
            "Metric name={} unit={} time={} value={}",
            point.name,
            point.unit,
            point.time_unix_nano,
            render_metric_value(&point.value),
        );
        if !point.attributes.is_empty() {
            let _ = write!(line, " attributes={}", render_attributes(&point.attributes));
        }
        push_context(&mut line, resource, scope);
        lines.push(line);
    });
    lines
}

/// Renders a log batch as one line per present record.
pub fn log_lines(batch: &LogBatch) -> Vec<String> {
    let mut lines = Vec::new();
    visit_items(&batch.resource_logs, |resource, scope, record| {
        let mut line = format!(
            "LogRecord time={} severity={} body={}",
            record.time_unix_nano,
            record.severity,
            render_value(&record.body),
        );
        if !record.attributes.is_empty() {
            let _ = write!(line, " attributes={}", render_attributes(&record.attributes));
        }
        push_context(&mut line, resource, scope);
        lines.push(line);
    });
    lines
}
