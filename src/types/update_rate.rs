//! Render pacing for frame subscriptions.

use serde::{Deserialize, Serialize};

/// Emission rate for frame streams.
///
/// The clock itself ticks at the source rate (1Hz for the system clock),
/// but list mutations also trigger emissions, so a burst of adds can
/// re-render faster than the tick. `Max` coalesces those bursts with
/// latest-wins pacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum UpdateRate {
    /// Emit every recomputation.
    Native,

    /// Throttle to at most this many frames per second.
    /// Requests at or above the source rate fall back to `Native`.
    Max(u32),
}

impl UpdateRate {
    /// Normalize against the source tick rate, collapsing `Max` values
    /// that cannot throttle anything.
    pub fn normalize(self, source_hz: f64) -> Self {
        match self {
            UpdateRate::Native => UpdateRate::Native,
            UpdateRate::Max(hz) if hz as f64 >= source_hz => UpdateRate::Native,
            UpdateRate::Max(hz) => UpdateRate::Max(hz),
        }
    }

    /// Pacing interval, if throttling is in effect at all.
    pub fn throttle_interval(self, source_hz: f64) -> Option<std::time::Duration> {
        match self.normalize(source_hz) {
            UpdateRate::Native => None,
            UpdateRate::Max(hz) => Some(std::time::Duration::from_secs_f64(1.0 / hz as f64)),
        }
    }
}
