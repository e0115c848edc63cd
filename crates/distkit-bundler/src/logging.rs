//! Logging helpers for embedding distkit-bundler in a binary.
//!
//! Only available with the `logging` feature. The library itself just emits
//! `tracing` events; callers that already install a subscriber don't need this.

use std::sync::Once;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Verbosity of packaging output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    /// One line per pipeline step.
    #[default]
    Info,
    /// Every file written and every bundler invocation.
    Debug,
}

impl LogLevel {
    fn as_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Silent => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(name)
    }
}

fn install(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).without_time())
        .init();
}

/// Install a global subscriber at `level`. `RUST_LOG` directives still apply.
///
/// Only the first call in a process has an effect.
///
/// ```rust,no_run
/// use distkit_bundler::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        install(
            EnvFilter::builder()
                .with_default_directive(level.as_level_filter().into())
                .from_env_lossy(),
        );
    });
}

/// Install a global subscriber configured from `RUST_LOG`, falling back to
/// `info`.
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy()
        });
        install(filter);
    });
}
