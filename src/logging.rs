// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber once at startup. `RUST_LOG` takes precedence over the
//! configured level.

use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` if set and valid, else `level`, else `info`.
#[must_use]
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Installs a formatted stderr subscriber.
///
/// Returns `false` when a global subscriber was already set (later calls
/// are no-ops).
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        let _ = init("debug");
        assert!(!init("info"));
    }

    #[test]
    fn invalid_level_falls_back() {
        let filter = filter("definitely[not a directive");
        assert!(!filter.to_string().is_empty());
    }
}
