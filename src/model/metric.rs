//! Metric signal model: batches of data points grouped by resource and scope.

use crate::domain::value::Attributes;
use crate::model::common::{InstrumentationScope, Resource, ResourceSection, ScopeSection};
use serde::{Deserialize, Serialize};

/// A batch of metric data submitted in a single consume call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBatch {
    /// Resource-level groupings, in producer order. Entries may be `None`.
    #[serde(default)]
    pub resource_metrics: Vec<Option<ResourceMetrics>>,
}

impl MetricBatch {
    /// Creates an empty batch.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Metric points grouped under one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetrics {
    /// The producing entity, if known.
    #[serde(default)]
    pub resource: Option<Resource>,

    /// Scope-level groupings, in producer order. Entries may be `None`.
    #[serde(default)]
    pub scope_metrics: Vec<Option<ScopeMetrics>>,
}

/// Metric points grouped under one instrumentation scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeMetrics {
    /// The generating library, if known.
    #[serde(default)]
    pub scope: Option<InstrumentationScope>,

    /// The data points themselves, in producer order. Entries may be `None`.
    #[serde(default)]
    pub points: Vec<Option<MetricPoint>>,
}

/// A single metric data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Name of the metric this point belongs to (e.g. `http.server.requests`).
    pub name: String,

    /// Unit of measure, possibly empty.
    #[serde(default)]
    pub unit: String,

    /// Observation timestamp in nanoseconds since the Unix epoch.
    #[serde(default)]
    pub time_unix_nano: u64,

    /// The recorded measurement.
    #[serde(default)]
    pub value: MetricValue,

    /// Attributes attached to this point.
    #[serde(default)]
    pub attributes: Attributes,
}

/// The measurement carried by a metric point.
///
/// Producers occasionally emit points whose type tag the exporter does not
/// recognize; those arrive as [`MetricValue::Unspecified`] and render as a
/// placeholder rather than failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// No recognizable measurement was recorded.
    #[default]
    Unspecified,
    /// An integer measurement (counters, up/down counters).
    Int(i64),
    /// A floating point measurement (gauges).
    Double(f64),
    /// A histogram summary.
    Histogram {
        /// Number of observations in the population.
        count: u64,
        /// Sum of the observed values.
        sum: f64,
    },
}

impl ResourceSection for ResourceMetrics {
    type Scope = ScopeMetrics;

    fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    fn scopes(&self) -> &[Option<ScopeMetrics>] {
        &self.scope_metrics
    }
}

impl ScopeSection for ScopeMetrics {
    type Item = MetricPoint;

    fn scope(&self) -> Option<&InstrumentationScope> {
        self.scope.as_ref()
    }

    fn items(&self) -> &[Option<MetricPoint>] {
        &self.points
    }
}
