//! Log Buffer - Bounded scrolling log pane state
//!
//! Holds the styled lines shown below the stats row. The buffer is trimmed
//! to the visible capacity on every redraw (terminal height can change mid
//! operation); trimming always drops the oldest entries first.

use crate::theme::Theme;
use crossterm::style::Stylize;

/// Severity of a log line.
///
/// Severity only selects the line color and routes warnings/errors into the
/// end-of-run summary; there is no filtering and no level threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational output (green)
    Info,
    /// Warning (yellow), also collected for the summary table
    Warning,
    /// Error (red), also collected for the summary table
    Error,
}

/// One line of the log pane
#[derive(Debug, Clone)]
pub struct LogEntry {
    text: String,
    severity: Severity,
}

impl LogEntry {
    /// Create an entry
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Raw, unstyled text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Severity tag
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Render with the severity color from `theme`
    pub fn styled(&self, theme: &Theme) -> String {
        let color = match self.severity {
            Severity::Info => theme.colors.info,
            Severity::Warning => theme.colors.warning,
            Severity::Error => theme.colors.error,
        };
        self.text.as_str().with(color).to_string()
    }
}

/// Ordered sequence of log entries, trimmed to the visible capacity
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: Vec<LogEntry>,
}

impl LogBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; insertion order is preserved, nothing is deduplicated
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Keep only the most recent `capacity` entries, dropping from the front
    pub fn trim_to_capacity(&mut self, capacity: usize) {
        if self.entries.len() > capacity {
            self.entries.drain(..self.entries.len() - capacity);
        }
    }

    /// Current entries, oldest first
    pub fn snapshot(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Styled lines in display order
    pub fn styled_lines(&self, theme: &Theme) -> Vec<String> {
        self.entries.iter().map(|e| e.styled(theme)).collect()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of buffered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> LogBuffer {
        let mut buf = LogBuffer::new();
        for i in 0..n {
            buf.append(LogEntry::new(format!("line {i}"), Severity::Info));
        }
        buf
    }

    #[test]
    fn test_trim_keeps_most_recent_in_order() {
        let mut buf = filled(5);
        buf.trim_to_capacity(3);
        let texts: Vec<&str> = buf.snapshot().iter().map(LogEntry::text).collect();
        assert_eq!(texts, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_trim_below_capacity_is_noop() {
        let mut buf = filled(2);
        buf.trim_to_capacity(10);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_trim_to_zero_empties_buffer() {
        let mut buf = filled(4);
        buf.trim_to_capacity(0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_trim_leaves_min_of_size_and_capacity() {
        for size in 0..6 {
            for capacity in 0..6 {
                let mut buf = filled(size);
                buf.trim_to_capacity(capacity);
                assert_eq!(buf.len(), size.min(capacity));
            }
        }
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut buf = filled(3);
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_styled_lines_carry_severity_color() {
        let theme = Theme::default();
        let mut buf = LogBuffer::new();
        buf.append(LogEntry::new("boom", Severity::Error));
        let lines = buf.styled_lines(&theme);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("boom"));
    }
}
