//! Timeout helpers used by hardware transports.
//!
//! The reader facade never imposes timeouts itself; transports that can
//! bound a hardware probe read their default from here.

use std::time::Duration;

/// Default upper bound in milliseconds for one presence probe.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 200;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default probe timeout as Duration.
pub fn default_probe_timeout() -> Duration {
    ms(DEFAULT_PROBE_TIMEOUT_MS)
}
