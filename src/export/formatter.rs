//! Canonical textual rendering of attribute values.
//!
//! This module is the value formatter half of the exporter core: given one
//! [`AttributeValue`] — possibly a recursively nested tree of arrays and maps —
//! it produces a deterministic textual form. Rendering is a total function over
//! the whole value domain: every variant has a defined form, so formatting can
//! never fail or abort a batch.
//!
//! # Rendering rules
//!
//! - `String` → the raw content, unquoted
//! - `Int`/`Double` → standard decimal formatting
//! - `Bool` → `true` / `false`
//! - `Bytes` → lowercase hex
//! - `Array` → `[` + `, `-joined element renderings + `]`; empty → `[]`
//! - `Map` → `{` + `, `-joined `key=value` entries in key order + `}`
//! - `Empty` → the empty string
//!
//! Map entries render in lexicographic key order, which makes output stable
//! even when the producing side iterated its attributes in arbitrary order.
//! Nesting recurses without an explicit depth limit; realistic depths (tens of
//! levels) are fine, and pathologically deep trees are out of scope.

use crate::domain::value::{AttributeValue, Attributes};
use std::fmt::Write;

/// Renders one attribute value as text.
///
/// # Examples
///
/// ```
/// use telelog::{export::formatter::render_value, AttributeValue};
///
/// let value = AttributeValue::Array(vec![
///     AttributeValue::from("foo"),
///     AttributeValue::from(42),
/// ]);
/// assert_eq!(render_value(&value), "[foo, 42]");
/// ```
pub fn render_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::String(s) => s.clone(),
        AttributeValue::Int(i) => i.to_string(),
        AttributeValue::Double(d) => d.to_string(),
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Bytes(bytes) => hex(bytes),
        AttributeValue::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        AttributeValue::Map(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{key}={}", render_value(value)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
        AttributeValue::Empty => String::new(),
    }
}

/// Renders an attribute set as `{key=value, ...}` in key order.
pub fn render_attributes(attributes: &Attributes) -> String {
    let rendered: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{key}={}", render_value(value)))
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

/// Encodes bytes as lowercase hex.
pub fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}
