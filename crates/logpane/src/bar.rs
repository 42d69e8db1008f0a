//! Bar Primitive - Step counting, fill rendering, and run statistics
//!
//! The underlying drawing primitive for the progress row and the stats row:
//! it owns the step counter, renders the ▓/░ fill at a given cell width, and
//! computes the elapsed-time estimate and peak-memory readout shown on the
//! third display row.

use crate::theme::Theme;
use crossterm::style::Stylize;
use std::time::{Duration, Instant};

/// Progress state and statistics for one session
#[derive(Debug, Clone)]
pub struct Bar {
    current: u64,
    max: u64,
    started: Option<Instant>,
    finished: bool,
}

impl Bar {
    /// Create a bar for `max` steps (0 is allowed and purely cosmetic)
    pub fn new(max: u64) -> Self {
        Self {
            current: 0,
            max,
            started: None,
            finished: false,
        }
    }

    /// Mark step 0 as current and start the elapsed clock
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Advance the step counter.
    ///
    /// Advancing past `max` is a caller error; the percent simply renders
    /// past 100 %. Nothing is clamped.
    pub fn advance(&mut self, step: u64) {
        self.current = self.current.saturating_add(step);
    }

    /// Jump to the terminal state (current = max, 100 %)
    pub fn finish(&mut self) {
        self.current = self.max;
        self.finished = true;
    }

    /// Current step
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Fixed maximum step count
    pub fn max_steps(&self) -> u64 {
        self.max
    }

    /// Completion percentage; past-max counters overflow past 100
    pub fn percent(&self) -> u64 {
        if self.max == 0 {
            if self.finished { 100 } else { 0 }
        } else {
            self.current * 100 / self.max
        }
    }

    /// Render the fill cells at `width`, styled with the theme glyph colors
    pub fn render_fill(&self, width: u16, theme: &Theme) -> String {
        let width = usize::from(width);
        let ratio = if self.max == 0 {
            if self.finished { 1.0 } else { 0.0 }
        } else {
            (self.current as f64 / self.max as f64).min(1.0)
        };
        let filled = (ratio * width as f64).floor() as usize;

        if filled >= width {
            return theme
                .glyphs
                .filled
                .repeat(width)
                .with(theme.colors.bar_filled)
                .to_string();
        }

        // Tip glyph marks the fill boundary while in flight.
        let head = format!("{}{}", theme.glyphs.filled.repeat(filled), theme.glyphs.tip);
        let tail = theme.glyphs.empty.repeat(width - filled - 1);
        format!(
            "{}{}",
            head.with(theme.colors.bar_filled),
            tail.with(theme.colors.bar_empty)
        )
    }

    /// Wall-clock time since `start`
    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    /// Estimated total run time: elapsed scaled by `max / current`.
    /// Before the first step this is just the elapsed time.
    pub fn estimated(&self) -> Duration {
        estimate(self.elapsed(), self.current, self.max)
    }
}

/// Scale `elapsed` to a full-run estimate given progress so far
fn estimate(elapsed: Duration, current: u64, max: u64) -> Duration {
    if current == 0 || max == 0 {
        return elapsed;
    }
    elapsed.mul_f64(max as f64 / current as f64)
}

/// Humanize a duration for the stats row
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 1 {
        "< 1 sec".to_string()
    } else if secs < 60 {
        format!("{secs} secs")
    } else if secs < 3600 {
        format!("{} mins", secs / 60)
    } else {
        format!("{} hrs", secs / 3600)
    }
}

/// Peak resident set size of this process, in bytes
#[cfg(unix)]
pub fn peak_rss() -> u64 {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage writes a plain struct into the pointer we own.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return 0;
    }
    // SAFETY: rc == 0 means the struct was fully initialized.
    let usage = unsafe { usage.assume_init() };
    let maxrss = usage.ru_maxrss.max(0) as u64;
    // macOS reports bytes, everything else kilobytes.
    if cfg!(target_os = "macos") {
        maxrss
    } else {
        maxrss * 1024
    }
}

/// Peak resident set size of this process, in bytes (unsupported platform)
#[cfg(not(unix))]
pub fn peak_rss() -> u64 {
    0
}
