//! Display ticks and per-render frame snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Sector, compute_sector};
use crate::types::Interval;

/// One tick of display time on the 24-hour wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct WallTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl WallTime {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Hour-hand rotation in degrees, clockwise from 12 o'clock.
    ///
    /// The hand creeps with the minutes, as on a physical movement.
    pub fn hour_angle(&self) -> f64 {
        ((self.hours % 12) as f64 + self.minutes as f64 / 60.0) / 12.0 * 360.0
    }

    /// Minute-hand rotation in degrees.
    pub fn minute_angle(&self) -> f64 {
        (self.minutes as f64 + self.seconds as f64 / 60.0) / 60.0 * 360.0
    }

    /// Second-hand rotation in degrees.
    pub fn second_angle(&self) -> f64 {
        self.seconds as f64 / 60.0 * 360.0
    }

    /// The tick one second later, wrapping at midnight.
    pub fn next_second(&self) -> Self {
        let total = (self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32 + 1)
            % 86_400;
        Self {
            hours: (total / 3600) as u8,
            minutes: (total / 60 % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// A complete snapshot of the face for one render pass.
///
/// Recomputed from the interval list and the current tick on every
/// emission; never stored between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ClockFrame {
    pub time: WallTime,
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    /// One sector per interval, in display order, nested by stack index.
    pub sectors: Vec<Sector>,
}

impl ClockFrame {
    /// Project the current tick and interval list into a frame.
    pub fn project(time: WallTime, intervals: &[Interval]) -> Self {
        let sectors = intervals
            .iter()
            .enumerate()
            .map(|(index, interval)| {
                compute_sector(&interval.start, &interval.end, &interval.color, index)
            })
            .collect();

        Self {
            time,
            hour_angle: time.hour_angle(),
            minute_angle: time.minute_angle(),
            second_angle: time.second_angle(),
            sectors,
        }
    }
}
