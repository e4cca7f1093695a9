//! Structured logging support
//!
//! Tensor operations emit `tracing` events unconditionally: `trace` for
//! allocations and `debug` for arithmetic, including rejected operands. Nothing
//! is printed unless the application installs a subscriber. With the
//! `subscriber` feature enabled, [`init_tracing`] installs one built on
//! `tracing-subscriber`.
//!
//! # Example
//!
//! ```ignore
//! use mllib_core::tracing_support::{init_tracing, TracingConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(TracingConfig::default())?;
//!     // ... rest of application ...
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=mllib_core=debug`)
//! - `MLLIB_LOG_FORMAT`: output format (`json`, `compact` or `pretty`, default: `pretty`)

use anyhow::Result;
#[cfg(feature = "subscriber")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "MLLIB_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "mllib_core=info,warn";

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    Pretty,
    /// JSON format for structured logging
    Json,
    /// Compact format (single line per event)
    Compact,
}

impl TracingFormat {
    /// Parse from string, falling back to `Pretty` for unknown names
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Filter directive (e.g., "mllib_core=debug,info")
    pub filter: String,
    /// Enable ANSI colors (ignored by the `Json` format)
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
    /// Show file locations
    pub with_file: bool,
    /// Show line numbers
    pub with_line_number: bool,
}

impl TracingConfig {
    /// Build a configuration from explicit format and filter values
    pub fn from_values(format: Option<&str>, filter: Option<String>) -> Self {
        Self {
            format: format.map(TracingFormat::parse).unwrap_or(TracingFormat::Pretty),
            filter: filter.unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            with_ansi: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

impl Default for TracingConfig {
    /// Read `MLLIB_LOG_FORMAT` and `RUST_LOG` from the environment
    fn default() -> Self {
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        let filter = std::env::var("RUST_LOG").ok();
        Self::from_values(format.as_deref(), filter)
    }
}

/// Install a global subscriber for the given configuration
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already installed.
#[cfg(feature = "subscriber")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}

/// Stub for when the subscriber feature is disabled
#[cfg(not(feature = "subscriber"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}
