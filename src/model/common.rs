//! Shared telemetry model types: resources and instrumentation scopes.
//!
//! Every signal kind groups its items the same way: a batch holds resource
//! sections, each resource section holds scope sections, and each scope section
//! holds the items themselves. The [`Resource`] and [`InstrumentationScope`]
//! descriptors defined here are common to all three signals; the signal-specific
//! grouping structs live in the sibling `trace`, `metric`, and `log` modules.

use crate::domain::value::Attributes;
use serde::{Deserialize, Serialize};

/// Describes the entity that produced a group of telemetry.
///
/// A resource is nothing more than an attribute set — typically entries like
/// `service.name`, `host.name`, or `process.pid`. It may be entirely empty, and a
/// resource section may omit it altogether; both cases are tolerated everywhere
/// in the crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Attributes describing the producing entity.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Resource {
    /// Creates a resource from an attribute set.
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }
}

/// Identifies the library or component that generated a group of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentationScope {
    /// Name of the instrumentation library (e.g. `io.opentelemetry.http`).
    pub name: String,

    /// Optional version of the instrumentation library.
    #[serde(default)]
    pub version: Option<String>,

    /// Attributes attached to the scope itself.
    #[serde(default)]
    pub attributes: Attributes,
}

impl InstrumentationScope {
    /// Creates a scope descriptor with the given name and no version.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            attributes: Attributes::new(),
        }
    }
}

/// A resource-level section of a telemetry batch.
///
/// Implemented by the signal-specific grouping structs (`ResourceSpans`,
/// `ResourceMetrics`, `ResourceLogs`) so the traversal logic can walk all three
/// hierarchies through one seam.
pub trait ResourceSection {
    /// The scope-level section type nested under this resource section.
    type Scope: ScopeSection;

    /// The resource descriptor, if the producer attached one.
    fn resource(&self) -> Option<&Resource>;

    /// The scope sections under this resource. Entries may be `None` (a nil
    /// element in the source data) and must be skipped, not treated as errors.
    fn scopes(&self) -> &[Option<Self::Scope>];
}

/// A scope-level section of a telemetry batch.
pub trait ScopeSection {
    /// The signal-specific item type (span, metric point, or log record).
    type Item;

    /// The scope descriptor, if the producer attached one.
    fn scope(&self) -> Option<&InstrumentationScope>;

    /// The items under this scope. Entries may be `None` and must be skipped.
    fn items(&self) -> &[Option<Self::Item>];
}
