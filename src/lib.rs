//! Type-safe Rust library for live analog clock faces with interval overlays.
//!
//! Dialface models an analog clock face that renders user-defined,
//! colored time-interval sectors (e.g. "meeting 09:00-17:00") on top of
//! a live 12-hour dial, and hands back SVG the hosting UI can drop
//! straight into a view.
//!
//! # Features
//!
//! - **Live face**: one-second display ticks from the system clock
//! - **Interval overlays**: add/remove/clear colored annular sectors,
//!   nested by display order
//! - **Deterministic replay**: scripted time sources for tests and demos
//! - **Localized**: all user-facing strings keyed by locale
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dialface::{Dialface, IntervalRequest, UpdateRate};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> dialface::Result<()> {
//!     let widget = Dialface::live().await?;
//!     widget.add_interval(IntervalRequest::new("09:00", "17:00", "#ff0000"))?;
//!
//!     let mut frames = widget.subscribe(UpdateRate::Native);
//!     while let Some(frame) = frames.next().await {
//!         println!("{}", widget.render_svg(&frame));
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod geometry;
pub mod locale;
pub mod render;
pub mod theme;
pub mod types;

// Stream-based widget architecture
pub mod driver;
pub mod provider;
pub mod providers;
pub mod stream;
pub mod widget;

// Core exports
pub use error::*;
pub use geometry::{Sector, compute_sector, time_to_angle};
pub use locale::{Label, Locale, Notice};
pub use render::render_svg;
pub use theme::Theme;
pub use types::{ClockFrame, Interval, IntervalRequest, UpdateRate, WallTime};

// Main API exports
pub use providers::{ScriptedSource, SystemSource};
pub use widget::{ClockWidget, WidgetOptions};

/// Unified entry point for clock widgets.
///
/// This factory provides a consistent API for attaching a widget to the
/// live system clock or to a deterministic scripted source.
///
/// # Examples
///
/// ## Live clock
/// ```rust,no_run
/// use dialface::Dialface;
///
/// #[tokio::main]
/// async fn main() -> dialface::Result<()> {
///     let widget = Dialface::live().await?;
///     // Use widget...
///     Ok(())
/// }
/// ```
///
/// ## Scripted replay
/// ```rust,no_run
/// use dialface::{Dialface, WallTime};
///
/// #[tokio::main]
/// async fn main() -> dialface::Result<()> {
///     let widget = Dialface::scripted(WallTime::new(9, 0, 0), 60).await?;
///     // Use widget...
///     Ok(())
/// }
/// ```
pub struct Dialface;

impl Dialface {
    /// Attach to the system wall clock, ticking once per second, with
    /// default options.
    pub async fn live() -> Result<ClockWidget> {
        ClockWidget::attach(SystemSource::new(), WidgetOptions::default()).await
    }

    /// Attach to the system wall clock with explicit options.
    pub async fn live_with(options: WidgetOptions) -> Result<ClockWidget> {
        ClockWidget::attach(SystemSource::new(), options).await
    }

    /// Attach to a deterministic source counting seconds from `start`.
    ///
    /// The widget's frame streams end once the script is exhausted.
    pub async fn scripted(start: WallTime, ticks: usize) -> Result<ClockWidget> {
        ClockWidget::attach(ScriptedSource::counting_from(start, ticks), WidgetOptions::default())
            .await
    }
}
