//! User-defined time intervals.

use serde::{Deserialize, Serialize};

/// A colored time interval overlaid on the clock face.
///
/// Immutable once created. The widget owns the display list; the
/// geometry layer receives a reference for the duration of one render
/// pass and mutates nothing. An interval's stacking index is its
/// position in the display list, not a stored field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Interval {
    /// Creation timestamp in milliseconds since the UNIX epoch, made
    /// strictly monotonic within a process so rapid adds never collide.
    pub id: u64,
    /// Start time as "HH:MM".
    pub start: String,
    /// End time as "HH:MM". At or before `start` means the interval
    /// wraps across 12 o'clock.
    pub end: String,
    /// Fill color as an RGB hex string, e.g. "#ff0000".
    pub color: String,
}

/// Parameters for adding an interval, as submitted by the hosting form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct IntervalRequest {
    pub start: String,
    pub end: String,
    pub color: String,
}

impl IntervalRequest {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self { start: start.into(), end: end.into(), color: color.into() }
    }
}
