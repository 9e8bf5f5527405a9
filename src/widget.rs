//! The clock widget: interval list, status notices, frame streaming.
//!
//! One widget owns one time source (through the driver), one interval
//! display list, and one notice slot. Everything else is derived: frames
//! are recomputed per emission from the latest tick and the current
//! list, and notices auto-dismiss on a timer tied to the widget's
//! lifetime.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures::{Stream, StreamExt};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::driver::Driver;
use crate::error::{Result, WidgetError};
use crate::locale::{Locale, Notice};
use crate::provider::TimeSource;
use crate::render;
use crate::stream::ThrottleExt;
use crate::theme::Theme;
use crate::types::{ClockFrame, Interval, IntervalRequest, UpdateRate, WallTime};

/// How long a status notice stays up before auto-dismissing.
const NOTICE_DISMISS: Duration = Duration::from_secs(3);

/// How long to wait for the first tick before giving up on a renderable
/// initial state.
const FIRST_TICK_TIMEOUT: Duration = Duration::from_secs(5);

/// Construction options for [`ClockWidget`].
#[derive(Debug, Clone, Default)]
pub struct WidgetOptions {
    pub locale: Locale,
    pub theme: Theme,
}

/// Live clock face with user-defined interval overlays.
///
/// Mutating methods take `&self`; the list lives behind a watch channel
/// so every mutation also wakes the frame streams.
pub struct ClockWidget {
    /// Tick watch receiver, fed by the driver task
    ticks: watch::Receiver<Option<WallTime>>,

    /// Interval display list; the sender side doubles as shared storage
    intervals: watch::Sender<Arc<Vec<Interval>>>,

    /// Current status notice, localized at publish time
    notice_tx: watch::Sender<Option<String>>,
    notice_rx: watch::Receiver<Option<String>>,

    /// Generation stamp so a stale dismiss timer never clears a newer
    /// notice
    notice_generation: Arc<AtomicU64>,

    /// Last allocated interval id
    last_id: AtomicU64,

    locale: Locale,
    theme: Theme,

    /// Source frequency
    source_hz: f64,

    /// Cancellation token for the driver task and dismiss timers
    cancel: CancellationToken,
}

impl ClockWidget {
    /// Attach a widget to a time source.
    ///
    /// Spawns the driver and waits for the first tick so the widget is
    /// immediately renderable. A source that produces nothing within the
    /// timeout still yields a widget; frames start once ticks do.
    pub async fn attach<S>(source: S, options: WidgetOptions) -> Result<Self>
    where
        S: TimeSource,
    {
        let source_hz = source.tick_rate();
        let channels = Driver::spawn(source);

        let mut tick_rx = channels.ticks.clone();
        let first_tick = tokio::time::timeout(FIRST_TICK_TIMEOUT, async {
            loop {
                if tick_rx.borrow().is_some() {
                    break;
                }
                if tick_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await;

        if first_tick.is_err() {
            warn!("timeout waiting for first tick");
        }

        info!("clock widget attached ({}Hz)", source_hz);

        let (intervals, _) = watch::channel(Arc::new(Vec::new()));
        let (notice_tx, notice_rx) = watch::channel(None);

        Ok(Self {
            ticks: channels.ticks,
            intervals,
            notice_tx,
            notice_rx,
            notice_generation: Arc::new(AtomicU64::new(0)),
            last_id: AtomicU64::new(0),
            locale: options.locale,
            theme: options.theme,
            source_hz,
            cancel: channels.cancel,
        })
    }

    /// Add an interval from a form submission.
    ///
    /// The only validation is the emptiness check on the time fields;
    /// anything else a user types degrades per the geometry fallback
    /// rules. Returns the new interval's id.
    pub fn add_interval(&self, request: IntervalRequest) -> Result<u64> {
        if request.start.is_empty() {
            self.publish_notice(Notice::MissingTimes);
            return Err(WidgetError::EmptyField { field: "start" });
        }
        if request.end.is_empty() {
            self.publish_notice(Notice::MissingTimes);
            return Err(WidgetError::EmptyField { field: "end" });
        }

        let id = self.allocate_id();
        let interval =
            Interval { id, start: request.start, end: request.end, color: request.color };
        debug!("adding interval {}: {}-{}", id, interval.start, interval.end);

        let notice =
            Notice::IntervalAdded { start: interval.start.clone(), end: interval.end.clone() };
        self.intervals.send_modify(|list| Arc::make_mut(list).push(interval));
        self.publish_notice(notice);

        Ok(id)
    }

    /// Remove an interval by id.
    pub fn remove_interval(&self, id: u64) -> Result<()> {
        let mut found = false;
        self.intervals.send_if_modified(|list| {
            if !list.iter().any(|interval| interval.id == id) {
                return false;
            }
            Arc::make_mut(list).retain(|interval| interval.id != id);
            found = true;
            true
        });

        if !found {
            return Err(WidgetError::IntervalNotFound { id });
        }

        debug!("removed interval {}", id);
        self.publish_notice(Notice::IntervalRemoved);
        Ok(())
    }

    /// Remove every interval.
    pub fn clear_intervals(&self) {
        self.intervals.send_if_modified(|list| {
            if list.is_empty() {
                return false;
            }
            *list = Arc::new(Vec::new());
            true
        });

        debug!("cleared all intervals");
        self.publish_notice(Notice::IntervalsCleared);
    }

    /// Snapshot of the display list, in stacking order.
    pub fn intervals(&self) -> Arc<Vec<Interval>> {
        self.intervals.borrow().clone()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.borrow().len()
    }

    /// The current status notice, if one is up.
    pub fn current_notice(&self) -> Option<String> {
        self.notice_rx.borrow().clone()
    }

    /// Stream of notice changes; `None` marks a dismissal.
    ///
    /// The stream is detached from the widget's borrow (`use<>`) so it
    /// can outlive the call site and move into spawned tasks.
    pub fn notice_updates(&self) -> impl Stream<Item = Option<String>> + 'static + use<> {
        WatchStream::new(self.notice_rx.clone())
    }

    /// Latest renderable frame, if a tick has arrived yet.
    pub fn current_frame(&self) -> Option<ClockFrame> {
        let tick = (*self.ticks.borrow())?;
        Some(ClockFrame::project(tick, &self.intervals.borrow()))
    }

    /// Subscribe to frame snapshots.
    ///
    /// Emits on every tick and on every list mutation, reading the
    /// latest of both at emission time. Ends when the time source ends.
    pub fn subscribe(&self, rate: UpdateRate) -> impl Stream<Item = ClockFrame> + 'static + use<> {
        let tick_rx = self.ticks.clone();
        let interval_rx = self.intervals.subscribe();

        let tick_events = WatchStream::new(self.ticks.clone()).map(|_| ());
        let mutation_events = WatchStream::new(self.intervals.subscribe()).map(|_| ());
        let events = futures::stream::select(tick_events, mutation_events);

        let frames = events
            .map(move |()| {
                let tick = *tick_rx.borrow();
                tick.map(|time| ClockFrame::project(time, &interval_rx.borrow()))
            })
            // Quiet until the first tick, then a later None is the end
            // of the source
            .skip_while(|frame| {
                let pending = frame.is_none();
                async move { pending }
            })
            .take_while(|frame| {
                let live = frame.is_some();
                async move { live }
            })
            .filter_map(|frame| async move { frame });

        match rate.normalize(self.source_hz) {
            UpdateRate::Native => frames.boxed(),
            UpdateRate::Max(hz) => {
                let pace = Duration::from_secs_f64(1.0 / hz as f64);
                frames.throttle(pace).boxed()
            }
        }
    }

    /// Render a frame with this widget's theme.
    pub fn render_svg(&self, frame: &ClockFrame) -> String {
        render::render_svg(frame, &self.theme)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Source tick frequency in Hz.
    pub fn source_hz(&self) -> f64 {
        self.source_hz
    }

    /// Publish a localized notice and schedule its dismissal.
    ///
    /// Dismissal is generation-checked: a newer notice owns the slot and
    /// a stale timer leaves it alone. Timers die with the widget.
    fn publish_notice(&self, notice: Notice) {
        let text = self.locale.notice(&notice);
        let generation = self.notice_generation.fetch_add(1, Ordering::Relaxed) + 1;
        self.notice_tx.send_replace(Some(text));

        let notice_tx = self.notice_tx.clone();
        let generation_counter = Arc::clone(&self.notice_generation);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(NOTICE_DISMISS) => {
                    if generation_counter.load(Ordering::Relaxed) == generation {
                        notice_tx.send_replace(None);
                    }
                }
            }
        });
    }

    /// Creation-timestamp id, bumped past the previous one on collision.
    fn allocate_id(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis() as u64;

        let mut prev = self.last_id.load(Ordering::Relaxed);
        loop {
            let id = now.max(prev + 1);
            match self.last_id.compare_exchange_weak(
                prev,
                id,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return id,
                Err(observed) => prev = observed,
            }
        }
    }
}

impl Drop for ClockWidget {
    fn drop(&mut self) {
        debug!("dropping clock widget");
        // Stops the driver task and any pending dismiss timers
        self.cancel.cancel();
    }
}
