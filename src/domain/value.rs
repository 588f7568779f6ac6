//! Recursive attribute value model.
//!
//! Telemetry attributes carry values that may themselves be containers of further
//! values: an array of strings, a map whose entries hold nested arrays, and so on.
//! This module defines [`AttributeValue`], a closed sum type over every value kind
//! the exporter understands, and [`Attributes`], the key/value map attached to
//! resources, scopes, and individual telemetry items.
//!
//! # Design
//!
//! Representing values as a closed enum (rather than open-ended dynamic typing)
//! means rendering is exhaustive by construction: there is no "unknown tag" case
//! left for the formatter to trip over. Absence is modeled explicitly with the
//! [`AttributeValue::Empty`] variant — a constructed `Array` or `Map` may be empty
//! but is never nil.
//!
//! Value trees are acyclic and bounded only by the producer. Depth in the tens of
//! levels is handled with plain recursion; pathologically deep trees are out of
//! scope for hardening.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value metadata attached to resources, scopes, and telemetry items.
///
/// A `BTreeMap` is used deliberately: attribute iteration order in upstream
/// producers is not guaranteed, and the exporter pins rendering to lexicographic
/// key order so output is stable and reproducible.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A single telemetry attribute value.
///
/// The variants cover the scalar kinds (string, integer, double, boolean, raw
/// bytes), two recursive container kinds (array, map), and an explicit empty
/// sentinel. Containers hold further `AttributeValue` instances, never raw
/// unwrapped primitives, so the tree stays well-formed at every level.
///
/// # Examples
///
/// ```
/// use telelog::AttributeValue;
///
/// let nested = AttributeValue::Array(vec![
///     AttributeValue::from("foo"),
///     AttributeValue::from(42),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A UTF-8 string value.
    String(String),

    /// A signed 64-bit integer value.
    Int(i64),

    /// A 64-bit floating point value.
    Double(f64),

    /// A boolean value.
    Bool(bool),

    /// An opaque byte sequence.
    Bytes(Vec<u8>),

    /// An ordered sequence of further values. May be empty, never nil.
    Array(Vec<AttributeValue>),

    /// A map from string keys to further values, iterated in key order.
    Map(BTreeMap<String, AttributeValue>),

    /// An explicitly unset value.
    ///
    /// Producers use this instead of omitting the value entirely, which keeps
    /// "no value" representable inside arrays and maps.
    Empty,
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
