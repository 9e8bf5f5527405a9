//! Driver spawns and manages the tick-publishing task

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use crate::provider::TimeSource;
use crate::types::WallTime;

/// Result of spawning the driver task
pub struct DriverChannels {
    /// Receiver for display ticks; `None` until the first tick arrives
    /// and again once the source has ended.
    pub ticks: watch::Receiver<Option<WallTime>>,
    /// Cancellation token for graceful shutdown
    pub cancel: CancellationToken,
}

/// Driver spawns and manages the tick reader task
///
/// The task owns the time source, publishes each tick on a watch
/// channel, and shuts down on cancellation, receiver drop, or source
/// end. Transient source errors are retried with bounded backoff.
pub struct Driver;

impl Driver {
    /// Spawn the tick reader for the given source
    pub fn spawn<S>(source: S) -> DriverChannels
    where
        S: TimeSource,
    {
        let (tick_tx, tick_rx) = watch::channel(None);
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::tick_reader_task(source, tick_tx, cancel_task).await;
        });

        DriverChannels { ticks: tick_rx, cancel }
    }

    async fn tick_reader_task<S>(
        mut source: S,
        tick_tx: watch::Sender<Option<WallTime>>,
        cancel: CancellationToken,
    ) where
        S: TimeSource,
    {
        info!("tick reader task started");
        let mut tick_count = 0u64;
        let mut error_count = 0u32;
        const MAX_ERRORS: u32 = 10;

        loop {
            // Allow cancellation while waiting out the source's pacing
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("tick reader cancelled");
                    break;
                }
                result = source.next_tick() => result,
            };

            match result {
                Ok(Some(tick)) => {
                    tick_count += 1;
                    error_count = 0;
                    trace!("tick {}: {}", tick_count, tick);

                    if tick_tx.send(Some(tick)).is_err() {
                        debug!("tick receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(None) => {
                    info!("time source ended after {} ticks", tick_count);
                    // Publish the end marker so subscribers can finish
                    let _ = tick_tx.send(None);
                    break;
                }
                Err(e) => {
                    error_count += 1;
                    error!("time source error ({}/{}): {}", error_count, MAX_ERRORS, e);

                    if error_count >= MAX_ERRORS {
                        error!("too many source errors, shutting down");
                        let _ = tick_tx.send(None);
                        break;
                    }

                    // Exponential backoff: 100ms, 200ms, 400ms, ...
                    let backoff =
                        std::time::Duration::from_millis(50 * (1 << error_count.min(5)));
                    tokio::time::sleep(backoff).await;
                }
            }
        }

        info!("tick reader task ended ({} ticks)", tick_count);
    }
}
