//! logpane - In-place terminal status renderer
//!
//! One progress bar, one title bar, one elapsed-time/memory stats row and a
//! bounded scrolling log pane, redrawn in place so a long-running operation
//! can stream output without scrolling the terminal uncontrollably.
//! Warnings and errors are additionally collected for an optional summary
//! table offered when the operation finishes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ ProgressRenderer │  Public API: title, logs, advance, finish
//! └────────┬─────────┘
//!          │ owns
//!          ▼
//! ┌──────────────────┐ ┌───────────┐ ┌────────────────┐ ┌─────────────────┐
//! │    LayoutPlan    │ │ LogBuffer │ │ RedrawThrottle │ │ SummaryReporter │
//! └──────────────────┘ └───────────┘ └────────────────┘ └─────────────────┘
//!          │ renders through
//!          ▼
//! ┌──────────────────┐
//! │ TerminalSurface  │  width/height + in-place block redraw (crossterm)
//! └──────────────────┘
//! ```
//!
//! The renderer is single-threaded and synchronous: every call runs to
//! completion, and the terminal is treated as exclusively owned by the
//! session. Redraws are rate-limited; a repaint requested inside the
//! interval is dropped, not deferred.
//!
//! # Example
//!
//! ```no_run
//! use logpane::{ProgressRenderer, TermSurface};
//!
//! # fn main() -> Result<(), logpane::RenderError> {
//! let mut status = ProgressRenderer::new(TermSurface::new(), 3)?;
//! status.set_title("Syncing")?;
//! for step in ["fetch", "verify", "install"] {
//!     status.write_info(format!("{step} ok"))?;
//!     status.advance(1)?;
//! }
//! status.finish(true)?;
//! # Ok(())
//! # }
//! ```

pub mod bar;
pub mod error;
pub mod layout;
pub mod logbuf;
pub mod renderer;
pub mod summary;
pub mod surface;
pub mod theme;
pub mod throttle;

pub use bar::Bar;
pub use error::RenderError;
pub use layout::LayoutPlan;
pub use logbuf::{LogBuffer, LogEntry, Severity};
pub use renderer::ProgressRenderer;
pub use summary::SummaryReporter;
pub use surface::{TermSurface, TerminalSurface};
pub use theme::Theme;
pub use throttle::RedrawThrottle;
