//! Shared timing primitives.
//!
//! All measurements use the monotonic wall clock (`Instant`).

use std::time::{Duration, Instant};

/// Read the current time
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Duration {
    start.elapsed()
}

/// Nanoseconds per call for `calls` calls that took `total` in sum.
pub fn per_call_nanos(total: Duration, calls: usize) -> f64 {
    if calls == 0 {
        return 0.0;
    }
    total.as_nanos() as f64 / calls as f64
}

/// Get the measurement unit name
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a per-call cost for display, e.g. `  12.345ns`.
pub fn format_nanos(ns: f64) -> String {
    format!("{:8.3}{}", ns, unit_name())
}
