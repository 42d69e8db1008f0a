//! Summary Reporter - Deferred warnings/errors table
//!
//! Warnings and errors stream through the log pane like everything else, but
//! they are also collected here so `finish` can offer a readable recap once
//! the bar is done. The interactive pieces (yes/no prompt, table rendering)
//! are injected so tests can supply canned answers.

use comfy_table::Table;
use std::io::Write;

/// Accumulates warnings and errors for the end-of-run table
#[derive(Debug, Clone, Default)]
pub struct SummaryReporter {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl SummaryReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning (append-only, insertion order preserved)
    pub fn record_warning(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }

    /// Record an error (append-only, insertion order preserved)
    pub fn record_error(&mut self, text: impl Into<String>) {
        self.errors.push(text.into());
    }

    /// True iff at least one warning or error was recorded
    pub fn has_content(&self) -> bool {
        !self.warnings.is_empty() || !self.errors.is_empty()
    }

    /// Recorded warnings, oldest first
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Recorded errors, oldest first
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Offer the summary table through the injected capabilities.
    ///
    /// Headers contain only the non-empty lists ("Warnings" before
    /// "Errors"), but rows always carry two cells with warnings in column 0
    /// and errors in column 1. When only one list is populated the header
    /// row is therefore narrower than the data rows; the table capability
    /// must accept that mismatch, it is the defined behavior.
    ///
    /// Does nothing at all (no prompt) when nothing was recorded.
    pub fn prompt_and_render(
        &self,
        ask: impl FnOnce(&str, bool) -> bool,
        render_table: impl FnOnce(&[&str], &[[String; 2]]),
    ) {
        if !self.has_content() {
            return;
        }

        if !ask("Show warnings and errors?", true) {
            return;
        }

        let mut headers = Vec::new();
        if !self.warnings.is_empty() {
            headers.push("Warnings");
        }
        if !self.errors.is_empty() {
            headers.push("Errors");
        }

        let rows: Vec<[String; 2]> = (0..self.warnings.len().max(self.errors.len()))
            .map(|i| {
                [
                    self.warnings.get(i).cloned().unwrap_or_default(),
                    self.errors.get(i).cloned().unwrap_or_default(),
                ]
            })
            .collect();

        render_table(&headers, &rows);
    }
}

/// Default prompt capability: ask on stdout, read the answer from stdin.
///
/// Empty input takes the default; otherwise `y`/`yes` (any case) means yes.
pub fn confirm(question: &str, default_yes: bool) -> std::io::Result<bool> {
    let hint = if default_yes { "Yes" } else { "No" };
    print!("{question} [{hint}]: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let answer = input.trim();
    if answer.is_empty() {
        return Ok(default_yes);
    }
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Default table capability backed by comfy-table
pub fn print_table(headers: &[&str], rows: &[[String; 2]]) {
    let mut table = Table::new();
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row.to_vec());
    }
    println!("{table}");
}
