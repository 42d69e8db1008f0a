//! Progress Renderer - The public-facing orchestrator
//!
//! Owns the title, log buffer, redraw throttle, layout plan, bar primitive
//! and summary reporter, and turns mutations (set title, log a line,
//! advance) into throttled in-place repaints of the fixed template:
//!
//! ```text
//! [title]
//! [current/max] [bar] [percent%]
//! [estimated time]      [memory]
//! [log lines][blank-line padding]
//! ```
//!
//! The blank-line padding keeps the frame at a stable row count no matter
//! how many log lines are visible, so the display never jitters.

use crate::bar::{self, Bar};
use crate::error::RenderError;
use crate::layout::LayoutPlan;
use crate::logbuf::{LogBuffer, LogEntry, Severity};
use crate::summary::{self, SummaryReporter};
use crate::surface::TerminalSurface;
use crate::theme::{self, Theme};
use crate::throttle::RedrawThrottle;
use crossterm::style::Stylize;
use std::time::{Duration, Instant};

/// Default minimum wall-clock interval between repaints
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Default requested line length in character cells
pub const DEFAULT_LINE_LENGTH: u16 = 60;

/// One long-lived status display for one operation
#[derive(Debug)]
pub struct ProgressRenderer<S: TerminalSurface> {
    surface: S,
    theme: Theme,
    plan: LayoutPlan,
    bar: Bar,
    logs: LogBuffer,
    throttle: RedrawThrottle,
    summary: SummaryReporter,
    title: String,
    counter: String,
}

impl<S: TerminalSurface> ProgressRenderer<S> {
    /// Create a session with the default redraw interval and line length,
    /// paint the initial frame, and mark step 0 as current.
    pub fn new(surface: S, max_steps: u64) -> Result<Self, RenderError> {
        Self::with_options(surface, max_steps, DEFAULT_REDRAW_INTERVAL, DEFAULT_LINE_LENGTH)
    }

    /// Create a session with explicit throttling and line length.
    ///
    /// Terminal width is sampled here, once; only the height is re-read on
    /// later redraws. Construction performs the first repaint, so a broken
    /// surface fails loudly up front.
    pub fn with_options(
        surface: S,
        max_steps: u64,
        min_redraw_interval: Duration,
        line_length: u16,
    ) -> Result<Self, RenderError> {
        let plan = LayoutPlan::compute(max_steps, line_length, surface.width());
        tracing::debug!(
            max_steps,
            line_length = plan.effective_line_length,
            bar_width = plan.bar_width,
            "starting status session"
        );

        let mut renderer = Self {
            surface,
            theme: Theme::default(),
            plan,
            bar: Bar::new(max_steps),
            logs: LogBuffer::new(),
            throttle: RedrawThrottle::new(min_redraw_interval),
            summary: SummaryReporter::new(),
            title: String::new(),
            counter: format!("0/{max_steps}"),
        };

        renderer.display()?;
        renderer.bar.start();
        Ok(renderer)
    }

    /// Replace the title shown on the first row
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), RenderError> {
        self.title = title.into();
        self.display()
    }

    /// Append an informational line to the log pane
    pub fn write_info(&mut self, message: impl Into<String>) -> Result<(), RenderError> {
        self.logs.append(LogEntry::new(message, Severity::Info));
        self.display()
    }

    /// Append a warning to the log pane and record it for the summary
    pub fn write_warning(&mut self, message: impl Into<String>) -> Result<(), RenderError> {
        let message = message.into();
        self.summary.record_warning(message.clone());
        self.logs.append(LogEntry::new(message, Severity::Warning));
        self.display()
    }

    /// Append an error to the log pane and record it for the summary
    pub fn write_error(&mut self, message: impl Into<String>) -> Result<(), RenderError> {
        let message = message.into();
        self.summary.record_error(message.clone());
        self.logs.append(LogEntry::new(message, Severity::Error));
        self.display()
    }

    /// Advance the step counter by `step`.
    ///
    /// The visible log pane is reset at the moment the step increments, so
    /// each step starts with a blank scroll region. Advancing past the
    /// maximum is a caller error; the display just overflows past 100 %.
    pub fn advance(&mut self, step: u64) -> Result<(), RenderError> {
        self.counter = format!(
            "{}/{}",
            self.bar.current() + step,
            self.bar.max_steps()
        );
        self.logs.clear();
        self.display()?;
        self.bar.advance(step);
        Ok(())
    }

    /// Finalize the bar at 100 % and, when asked and anything was recorded,
    /// offer the warnings/errors table through the default stdin prompt and
    /// comfy-table capabilities.
    pub fn finish(&mut self, ask_for_summary: bool) -> Result<(), RenderError> {
        let mut prompt_err = None;
        self.finish_with(
            ask_for_summary,
            |question, default_yes| match summary::confirm(question, default_yes) {
                Ok(answer) => answer,
                Err(err) => {
                    prompt_err = Some(err);
                    false
                }
            },
            summary::print_table,
        )?;
        prompt_err.map_or(Ok(()), |err| Err(err.into()))
    }

    /// `finish` with injected prompt and table capabilities (test seam).
    ///
    /// The final frame bypasses the throttle: it is always painted.
    pub fn finish_with(
        &mut self,
        ask_for_summary: bool,
        ask: impl FnOnce(&str, bool) -> bool,
        render_table: impl FnOnce(&[&str], &[[String; 2]]),
    ) -> Result<(), RenderError> {
        self.bar.finish();
        self.counter = format!("{}/{}", self.bar.current(), self.bar.max_steps());
        self.redraw_at(Instant::now())?;
        self.surface.finish()?;
        tracing::debug!(
            warnings = self.summary.warnings().len(),
            errors = self.summary.errors().len(),
            "status session finished"
        );

        if ask_for_summary {
            self.summary.prompt_and_render(ask, render_table);
        }
        Ok(())
    }

    /// The layout computed at construction
    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    /// The step counter state
    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    /// The collected warnings/errors
    pub fn summary(&self) -> &SummaryReporter {
        &self.summary
    }

    /// Number of log lines currently buffered
    pub fn log_len(&self) -> usize {
        self.logs.len()
    }

    /// Throttled repaint: drops the request entirely inside the interval
    fn display(&mut self) -> Result<(), RenderError> {
        let now = Instant::now();
        if !self.throttle.should_redraw(now) {
            tracing::trace!("redraw suppressed by throttle");
            return Ok(());
        }
        self.redraw_at(now)
    }

    /// Unthrottled repaint at `now`
    fn redraw_at(&mut self, now: Instant) -> Result<(), RenderError> {
        let height = self.surface.height();
        self.logs.trim_to_capacity(LayoutPlan::log_capacity(height));
        let lines = self.compose_frame(height);
        self.throttle.mark(now);
        self.surface.redraw(&lines)
    }

    /// Build the full frame for a terminal of `height` rows
    fn compose_frame(&self, height: u16) -> Vec<String> {
        let width = usize::from(self.plan.effective_line_length);
        let mut lines = Vec::new();

        // Row 0: title bar, padded to the full line length.
        let title = format!("{:<width$}", self.title);
        lines.push(
            title
                .with(self.theme.colors.title_fg)
                .on(self.theme.colors.title_bg)
                .to_string(),
        );

        // Row 1: counter, bar fill, percent.
        let fill = self.bar.render_fill(self.plan.bar_width, &self.theme);
        lines.push(format!(
            "{:<cw$} [{}] {:>3}%",
            self.counter,
            fill,
            self.bar.percent(),
            cw = usize::from(self.plan.progress_field_width),
        ));

        // Row 2: estimated run time and peak memory.
        lines.push(format!(
            "{:<ew$} {:>mw$}",
            bar::format_duration(self.bar.estimated()),
            theme::format_size(bar::peak_rss()),
            ew = usize::from(self.plan.estimated_column_width),
            mw = usize::from(self.plan.memory_column_width),
        ));

        // Log region: the buffered lines (or a single empty slot), then
        // blank padding so the region always spans height - 3 rows.
        let log_lines = self.logs.styled_lines(&self.theme);
        let shown = log_lines.len().max(1);
        lines.extend(log_lines);
        if shown == 1 && self.logs.is_empty() {
            lines.push(String::new());
        }
        let padding = usize::from(height)
            .saturating_sub(usize::from(LayoutPlan::FIXED_ROWS))
            .saturating_sub(shown);
        lines.extend(std::iter::repeat_n(String::new(), padding));

        lines
    }
}
