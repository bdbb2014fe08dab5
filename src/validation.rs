#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Result as AnyResult};
use std::time::Duration;
use tracing::warn;

/// Negative durations clamp to zero, overflowing ones (including +inf) to
/// `Duration::MAX`. Only NaN is rejected.
pub fn seconds_to_duration(name: &str, seconds: f64) -> AnyResult<Duration> {
    if seconds.is_nan() {
        bail!("{name} must be a number of seconds, got NaN");
    }
    if seconds < 0.0 {
        warn!(parameter = name, seconds, "negative duration clamped to zero");
        return Ok(Duration::ZERO);
    }
    Ok(Duration::try_from_secs_f64(seconds).unwrap_or_else(|_| {
        warn!(parameter = name, seconds, "duration clamped to the maximum");
        Duration::MAX
    }))
}
