//! Time source trait for display ticks

use crate::Result;
use crate::types::WallTime;

/// Trait for display-time sources
///
/// Sources abstract over where ticks come from (the system clock, a
/// scripted sequence) and handle their own pacing internally. The
/// driver owns the source and pulls ticks; nothing else touches it.
#[async_trait::async_trait]
pub trait TimeSource: Send + 'static {
    /// Get the next display tick
    ///
    /// Returns:
    /// - `Ok(Some(time))` - new tick available
    /// - `Ok(None)` - source ended (normal termination)
    /// - `Err(e)` - error occurred
    ///
    /// Each source paces itself:
    /// - System: one tick per wall-clock second
    /// - Scripted: configured replay rate
    async fn next_tick(&mut self) -> Result<Option<WallTime>>;

    /// Native tick rate in Hz (1.0 for the system clock)
    fn tick_rate(&self) -> f64;
}
