//! Error types for the telelog exporter core.
//!
//! This module defines the centralized error type [`TelelogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The error surface is deliberately small: construction-time misconfiguration is
//! the only failure the exporter can report. Every runtime operation (consuming a
//! batch, formatting a value) is total by design — structural gaps in the input are
//! skipped and unrecognized value kinds render as placeholders, so there is nothing
//! for those paths to return an error about.

use thiserror::Error;

/// The main error type for telelog operations.
///
/// This enum consolidates all error conditions that can occur when using the
/// exporter. In practice that means configuration problems caught at construction
/// time; once an exporter is built, its consume and shutdown operations cannot fail.
///
/// # Examples
///
/// ```
/// use telelog::TelelogError;
///
/// fn validate_level(level: &str) -> Result<(), TelelogError> {
///     Err(TelelogError::Config(format!("unrecognized level: {level}")))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TelelogError {
    /// Configuration is invalid.
    ///
    /// Occurs when an exporter is constructed with an unrecognized severity
    /// level string. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for telelog operations.
///
/// This is a type alias for `std::result::Result<T, TelelogError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TelelogError>;
