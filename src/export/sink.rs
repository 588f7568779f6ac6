//! Output sink seam and severity levels.
//!
//! The exporter core never performs I/O of its own; every rendered line is
//! handed to an injected [`Sink`] together with the severity level the exporter
//! was configured with. Sink construction and configuration belong to the host
//! application, as does the guarantee that the sink tolerates concurrent writes.

use crate::domain::error::{Result, TelelogError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level attached to every exported line.
///
/// Parsed from the level string given at exporter construction; an
/// unrecognized string is the one configuration error the crate reports.
///
/// # Examples
///
/// ```
/// use telelog::Level;
///
/// let level: Level = "debug".parse()?;
/// assert_eq!(level, Level::Debug);
/// assert!("verbose".parse::<Level>().is_err());
/// # Ok::<(), telelog::TelelogError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Finest-grained output.
    Trace,
    /// Diagnostic output, the conventional choice for a debug exporter.
    Debug,
    /// Informational output.
    Info,
    /// Warning output.
    Warn,
    /// Error output.
    Error,
}

impl Level {
    /// Lowercase textual form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = TelelogError;

    /// Parses a level name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`TelelogError::Config`] for anything other than `trace`,
    /// `debug`, `info`, `warn`/`warning`, or `error`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(TelelogError::Config(format!(
                "unrecognized severity level: {other:?}"
            ))),
        }
    }
}

/// Destination for rendered telemetry lines.
///
/// Implementations must be safe for concurrent use: the exporter may be shared
/// across pipeline threads, and each consume call writes its lines through the
/// same sink. The exporter guarantees that lines belonging to one consume call
/// are written in traversal order; interleaving between concurrent calls is the
/// sink's concern.
pub trait Sink: Send + Sync {
    /// Accepts one rendered line at the given severity level.
    fn write(&self, level: Level, line: &str);
}

/// A [`Sink`] that forwards lines to the `tracing` facade.
///
/// Each line becomes a `tracing` event at the corresponding level, so the
/// exporter output flows through whatever subscriber the host application has
/// installed. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, level: Level, line: &str) {
        match level {
            Level::Trace => tracing::trace!(target: "telelog", "{line}"),
            Level::Debug => tracing::debug!(target: "telelog", "{line}"),
            Level::Info => tracing::info!(target: "telelog", "{line}"),
            Level::Warn => tracing::warn!(target: "telelog", "{line}"),
            Level::Error => tracing::error!(target: "telelog", "{line}"),
        }
    }
}
