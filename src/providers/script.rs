//! Scripted source replaying a fixed tick sequence

use async_trait::async_trait;
use tokio::time::{Duration, Interval, interval};
use tracing::{debug, trace};

use crate::Result;
use crate::provider::TimeSource;
use crate::types::WallTime;

/// Deterministic source that replays a prepared sequence of ticks.
///
/// Ticks are paced at the configured rate; the source ends once the
/// sequence is exhausted, which in turn ends every subscribed frame
/// stream. Used by tests and by hosts that drive display time
/// externally.
pub struct ScriptedSource {
    script: std::vec::IntoIter<WallTime>,
    interval: Interval,
    tick_rate: f64,
}

impl ScriptedSource {
    /// Replay `ticks` at one per second.
    pub fn new(ticks: Vec<WallTime>) -> Self {
        Self::with_rate(ticks, 1.0)
    }

    /// Replay `ticks` at `rate` Hz, clamped to a sane range.
    pub fn with_rate(ticks: Vec<WallTime>, rate: f64) -> Self {
        let rate = rate.clamp(0.1, 1000.0);
        debug!("scripted source: {} ticks at {}Hz", ticks.len(), rate);
        Self {
            script: ticks.into_iter(),
            interval: interval(Duration::from_secs_f64(1.0 / rate)),
            tick_rate: rate,
        }
    }

    /// Script counting one second at a time from `start`, wrapping at
    /// midnight.
    pub fn counting_from(start: WallTime, ticks: usize) -> Self {
        let mut sequence = Vec::with_capacity(ticks);
        let mut current = start;
        for _ in 0..ticks {
            sequence.push(current);
            current = current.next_second();
        }
        Self::new(sequence)
    }

    /// Ticks left in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl TimeSource for ScriptedSource {
    async fn next_tick(&mut self) -> Result<Option<WallTime>> {
        let Some(tick) = self.script.next() else {
            debug!("script exhausted");
            return Ok(None);
        };

        self.interval.tick().await;
        trace!("scripted tick {}", tick);

        Ok(Some(tick))
    }

    fn tick_rate(&self) -> f64 {
        self.tick_rate
    }
}
