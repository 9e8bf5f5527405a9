//! System-clock source

use async_trait::async_trait;
use chrono::{Local, Timelike};
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};
use tracing::trace;

use crate::Result;
use crate::provider::TimeSource;
use crate::types::WallTime;

/// Wall-clock source emitting the local time once per second.
///
/// Ticks are paced by a tokio interval but the emitted value is read
/// from the clock, so a delayed tick still shows the right time. Never
/// ends on its own; teardown happens through the driver's cancellation
/// token.
pub struct SystemSource {
    interval: Interval,
}

impl SystemSource {
    pub fn new() -> Self {
        let mut interval = interval(Duration::from_secs(1));
        // A display clock has no use for catch-up bursts after a stall
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeSource for SystemSource {
    async fn next_tick(&mut self) -> Result<Option<WallTime>> {
        self.interval.tick().await;

        let now = Local::now();
        let tick = WallTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8);
        trace!("system tick {}", tick);

        Ok(Some(tick))
    }

    fn tick_rate(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn system_source_always_has_a_next_tick() {
        let mut source = SystemSource::new();
        let first = source.next_tick().await.expect("tick");
        let tick = first.expect("system source never ends");
        assert!(tick.hours < 24);
        assert!(tick.minutes < 60);
        assert!(tick.seconds < 60);
        assert_eq!(source.tick_rate(), 1.0);
    }
}
