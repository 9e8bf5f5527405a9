//! Core types for the clock face data model.
//!
//! - [`WallTime`] is one tick of display time with the hand-angle
//!   projections for a 12-hour face.
//! - [`Interval`] is a user-defined overlay, owned by the widget's
//!   display list.
//! - [`ClockFrame`] is the derived per-render snapshot: hand angles plus
//!   one [`crate::geometry::Sector`] per interval.
//! - [`UpdateRate`] paces frame subscriptions.

mod frame;
mod interval;
mod update_rate;

pub use frame::{ClockFrame, WallTime};
pub use interval::{Interval, IntervalRequest};
pub use update_rate::UpdateRate;
