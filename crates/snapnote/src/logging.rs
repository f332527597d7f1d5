//! Logging initialization for snapnote.
//!
//! Thin wrapper around `tracing-subscriber` that maps the CLI verbosity
//! flags onto an env-filter directive. `RUST_LOG` always wins.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (info and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
    /// Very verbose output (trace level).
    Trace,
}

impl Verbosity {
    /// Convert verbosity to the corresponding tracing level.
    #[must_use]
    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Initialize the logging system.
///
/// Call once at startup. The effective filter is `snapnote=<level>`
/// unless `RUST_LOG` is set, in which case the environment directive is
/// used verbatim. Repeated calls are harmless; only the first one
/// installs a subscriber.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("snapnote={}", verbosity.to_level());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
