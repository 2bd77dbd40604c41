//! Output formatting and styling module.
//!
//! All console output goes through this module: styled progress and error
//! lines on stdout, plus a transient spinner on stderr while a pass runs.

use crate::file_organizer::{Operation, OrganizeError};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prints styled lines to stdout.
///
/// This struct provides methods for:
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Info messages (cyan)
/// - Summary tables with statistics
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::success("Files have been organized.");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    ///
    /// Printed to stdout, interleaved with the move confirmations.
    pub fn error(message: &str) {
        println!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a summary table of moved files per category.
    ///
    /// Rows are printed in the order given; categories with no moves are
    /// expected to be filtered out by the caller.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    ///
    /// OutputFormatter::summary_table(&[("Books", 15), ("Music", 8)], 23);
    /// ```
    pub fn summary_table(category_counts: &[(&str, usize)], total_files: usize) {
        Self::header("SUMMARY");

        let max_category_len = category_counts
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8); // "Category"

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in category_counts {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                plural(*count),
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            plural(total_files),
            width = max_category_len
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

/// Reports pass events while keeping the spinner intact.
///
/// Lines are printed with the spinner suspended so they never interleave
/// with its redraws. A hidden reporter prints the same lines without any
/// spinner, which is what the library tests use.
pub struct Reporter {
    spinner: ProgressBar,
}

impl Reporter {
    /// Creates a reporter with a ticking spinner on stderr.
    ///
    /// indicatif hides the spinner by itself when stderr is not a terminal.
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    /// Creates a reporter without a spinner.
    pub fn hidden() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    /// Updates the spinner text for the current pass.
    pub fn phase(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    /// Prints a move confirmation.
    pub fn moved(&self, operation: &Operation) {
        let file_name = operation
            .new_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        self.spinner.suspend(|| {
            OutputFormatter::plain(&format!(
                "Moved: {} -> {}/{}",
                file_name,
                operation.category.label(),
                file_name
            ))
        });
    }

    /// Prints a pruned directory.
    pub fn removed(&self, path: &std::path::Path) {
        self.spinner
            .suspend(|| OutputFormatter::info(&format!("Removed empty directory {}", path.display())));
    }

    /// Prints a non-fatal failure.
    pub fn failure(&self, error: &OrganizeError) {
        self.spinner
            .suspend(|| OutputFormatter::error(&error.to_string()));
    }

    /// Clears the spinner line.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0), "files");
        assert_eq!(plural(1), "file");
        assert_eq!(plural(2), "files");
    }

    #[test]
    fn test_hidden_reporter_is_hidden() {
        let reporter = Reporter::hidden();
        assert!(reporter.spinner.is_hidden());
        reporter.phase("pruning");
        reporter.finish();
    }
}
