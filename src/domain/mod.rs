//! Domain layer for the telelog exporter core.
//!
//! This module contains the foundational types the rest of the crate builds on,
//! independent of any particular telemetry signal: the crate-wide error type and
//! the recursive attribute value model.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`value`]: The recursive [`AttributeValue`] sum type and [`Attributes`] map
//!
//! # Examples
//!
//! ```
//! use telelog::{AttributeValue, Attributes};
//!
//! let mut attrs = Attributes::new();
//! attrs.insert("service.name".to_string(), AttributeValue::from("frontend"));
//! ```

pub mod error;
pub mod value;

pub use error::{Result, TelelogError};
pub use value::{AttributeValue, Attributes};
