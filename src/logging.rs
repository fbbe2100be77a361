//! Logger setup for binaries and tests
//!
//! The library only emits through the `log` facade. Binaries call [`init`]
//! once; `RUST_LOG` still overrides the configured level per module.

use crate::config::LogLevel;
use env_logger::{Builder, Env};

/// Install the global logger at `level`
///
/// Returns `false` if a logger was already installed.
pub fn init(level: LogLevel) -> bool {
    let filter: log::LevelFilter = level.into();

    Builder::from_env(Env::default().default_filter_or(filter.as_str()))
        .format_timestamp_millis()
        .format_target(false)
        .try_init()
        .is_ok()
}

/// Level to use for a CLI verbosity count on top of the configured level
pub fn level_for_verbosity(base: LogLevel, verbose: u8) -> LogLevel {
    let ordered = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];
    let start = ordered.iter().position(|l| *l == base).unwrap_or(2);
    ordered[(start + verbose as usize).min(ordered.len() - 1)]
}
