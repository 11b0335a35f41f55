//! Tracing initialization and configuration.

use std::io::IsTerminal;
use std::sync::{Once, OnceLock};

use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Reload handle for the active filter. Absent when `BRANDCLICK_LOG` pinned it.
static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Initialize the brandclick tracing/logging system.
///
/// Reads `BRANDCLICK_LOG` for per-target log levels, e.g.
/// `BRANDCLICK_LOG=brandclick_prediction=debug,brandclick_core=info`.
/// Falls back to `default_level` for every brandclick crate when unset or invalid.
///
/// Output goes to stderr. Idempotent.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_env(ENV_LOG).ok();
        let pinned = env_filter.is_some();
        let filter = env_filter.unwrap_or_else(|| default_filter(default_level));
        let (filter, handle) = reload::Layer::new(filter);
        if !pinned {
            let _ = FILTER_HANDLE.set(handle);
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true)
                    .with_line_number(true),
            )
            .init();
    });
}

/// Swap the fallback level once configuration has been resolved.
///
/// No-op before `init_tracing` or when `BRANDCLICK_LOG` is set.
pub fn set_log_level(level: &str) {
    if let Some(handle) = FILTER_HANDLE.get() {
        if let Err(e) = handle.reload(default_filter(level)) {
            tracing::warn!(error = %e, level, "could not apply configured log level");
        }
    }
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "brandclick={level},brandclick_core={level},brandclick_prediction={level}"
    ))
}
