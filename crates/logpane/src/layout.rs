//! Layout Plan - Column arithmetic for the fixed four-row template
//!
//! The display template is fixed:
//!
//! ```text
//! [title]
//! [current/max] [bar] [percent%]
//! [estimated time]      [memory]
//! [log lines][blank-line padding]
//! ```
//!
//! All widths derive from the requested line length, the terminal width and
//! the step count, sampled exactly once at construction. Terminal *height*
//! is re-sampled on every redraw (the log capacity tracks it); width is not.

/// Computed column widths and the effective line length for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// `min(requested_line_length, terminal_width)` at construction time
    pub effective_line_length: u16,
    /// Room reserved for the `current/max` counter: `2 * digits(max) + 1`
    pub progress_field_width: u16,
    /// Cells available to the bar itself; clamped to at least 1
    pub bar_width: u16,
    /// Left half of the stats row (estimated time), left-aligned
    pub estimated_column_width: u16,
    /// Right half of the stats row (memory), right-aligned
    pub memory_column_width: u16,
}

impl LayoutPlan {
    /// Rows consumed by the fixed template above the log region
    pub const FIXED_ROWS: u16 = 3;

    /// Compute the plan from construction-time inputs.
    ///
    /// A line length that cannot fit the counter and percent decorations
    /// yields a degenerate one-cell bar rather than an error.
    pub fn compute(max_steps: u64, requested_line_length: u16, terminal_width: u16) -> Self {
        let effective_line_length = requested_line_length.min(terminal_width);
        let progress_field_width = 2 * decimal_digits(max_steps) + 1;

        // 8 cells go to the brackets, spaces and "nnn%" suffix.
        let bar_width = i32::from(effective_line_length)
            - 8
            - i32::from(progress_field_width);
        let bar_width = bar_width.max(1) as u16;

        let estimated_column_width = (effective_line_length / 2).saturating_sub(1);
        let memory_column_width = effective_line_length.div_ceil(2);

        Self {
            effective_line_length,
            progress_field_width,
            bar_width,
            estimated_column_width,
            memory_column_width,
        }
    }

    /// Log-pane capacity for a given terminal height: everything below the
    /// three fixed rows, minus one row kept free for the cursor.
    pub fn log_capacity(terminal_height: u16) -> usize {
        usize::from(terminal_height.saturating_sub(4))
    }
}

/// Number of decimal digits in `n` (1 for 0)
fn decimal_digits(n: u64) -> u16 {
    if n == 0 {
        1
    } else {
        (n.ilog10() + 1) as u16
    }
}
