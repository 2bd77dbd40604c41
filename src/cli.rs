//! Command-line interface module for dirsort.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing
//! - Reading the root path from stdin when none is given
//! - Running the prune, organize, prune sequence
//! - Printing the end-of-run summary

use crate::file_category::Category;
use crate::file_organizer::{OrganizeReport, organize_recursively};
use crate::output::{OutputFormatter, Reporter};
use crate::pruner::{PruneReport, prune_empty_dirs};
use chrono::{DateTime, Local};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Sort files into per-category folders and remove empty directories.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version, about)]
pub struct Cli {
    /// Directory to organize. Read from stdin when omitted.
    pub path: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Results of a full run.
#[derive(Debug)]
pub struct RunSummary {
    /// First pruning pass, before anything is moved.
    pub pre_prune: PruneReport,
    /// The organizing pass.
    pub organize: OrganizeReport,
    /// Second pruning pass, after the moves.
    pub post_prune: PruneReport,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl RunSummary {
    /// Total number of failures reported across all passes.
    pub fn error_count(&self) -> usize {
        self.pre_prune.errors.len() + self.organize.errors.len() + self.post_prune.errors.len()
    }

    /// Total number of directories pruned across both passes.
    pub fn removed_count(&self) -> usize {
        self.pre_prune.removed.len() + self.post_prune.removed.len()
    }
}

/// Removes one leading and one trailing double quote, if both are present.
///
/// # Examples
///
/// ```
/// use dirsort::cli::strip_quotes;
///
/// assert_eq!(strip_quotes("\"/tmp/downloads\""), "/tmp/downloads");
/// assert_eq!(strip_quotes("\"/tmp/downloads"), "\"/tmp/downloads");
/// ```
pub fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Reads the first whitespace-delimited token from `reader`.
///
/// Blank lines before the token are skipped. Returns `Ok(None)` on end of
/// input without a token.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Prompts on stdout and reads the root path from stdin.
pub fn prompt_for_root() -> io::Result<Option<PathBuf>> {
    print!("Enter the directory path to organize: ");
    io::stdout().flush()?;
    let token = read_token(&mut io::stdin().lock())?;
    Ok(token.map(|t| PathBuf::from(strip_quotes(&t))))
}

/// Runs prune, organize and prune against `root`.
pub fn run(root: &Path, reporter: &Reporter) -> RunSummary {
    let started_at = Local::now();

    reporter.phase("Removing empty directories...");
    let pre_prune = prune_empty_dirs(root, reporter);

    reporter.phase("Organizing files...");
    let organize = organize_recursively(root, reporter);

    reporter.phase("Cleaning up empty directories...");
    let post_prune = prune_empty_dirs(root, reporter);

    reporter.finish();

    RunSummary {
        pre_prune,
        organize,
        post_prune,
        started_at,
        finished_at: Local::now(),
    }
}

/// Entry point used by the binary.
///
/// Always completes normally: per-file failures are printed as they happen
/// and counted in the summary, but never turned into an error.
pub fn run_cli(cli: Cli) {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = match cli.path {
        Some(path) => PathBuf::from(strip_quotes(&path)),
        None => match prompt_for_root() {
            Ok(Some(root)) => root,
            Ok(None) => {
                OutputFormatter::error("No directory path given.");
                return;
            }
            Err(e) => {
                OutputFormatter::error(&format!("Could not read directory path: {}", e));
                return;
            }
        },
    };

    OutputFormatter::info(&format!("Organizing contents of: {}", root.display()));

    let summary = run(&root, &Reporter::new());
    print_summary(&summary);
}

fn print_summary(summary: &RunSummary) {
    OutputFormatter::success("Files have been organized.");

    let counts: Vec<(&str, usize)> = Category::ALL
        .into_iter()
        .map(|c| (c.label(), summary.organize.count_for(c)))
        .filter(|(_, count)| *count > 0)
        .collect();
    OutputFormatter::summary_table(&counts, summary.organize.moved.len());

    let elapsed = summary.finished_at - summary.started_at;
    OutputFormatter::plain(&format!(
        "\nRemoved {} empty {}, {} {} reported, finished in {} ms.",
        summary.removed_count(),
        if summary.removed_count() == 1 {
            "directory"
        } else {
            "directories"
        },
        summary.error_count(),
        if summary.error_count() == 1 {
            "error"
        } else {
            "errors"
        },
        elapsed.num_milliseconds()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"C:\\Users\\me\""), "C:\\Users\\me");
        assert_eq!(strip_quotes("/plain/path"), "/plain/path");
        assert_eq!(strip_quotes("\"only-leading"), "\"only-leading");
        assert_eq!(strip_quotes("only-trailing\""), "only-trailing\"");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn test_read_token_takes_first_word() {
        let mut input = Cursor::new("/tmp/My Downloads\n");
        assert_eq!(read_token(&mut input).unwrap(), Some("/tmp/My".to_string()));
    }

    #[test]
    fn test_read_token_skips_blank_lines() {
        let mut input = Cursor::new("\n   \n\t/data \n");
        assert_eq!(read_token(&mut input).unwrap(), Some("/data".to_string()));
    }

    #[test]
    fn test_read_token_empty_input() {
        let mut input = Cursor::new("  \n");
        assert_eq!(read_token(&mut input).unwrap(), None);
    }

    #[test]
    fn test_cli_parses_path_and_flag() {
        let cli = Cli::parse_from(["dirsort", "\"/tmp/x\"", "--no-color"]);
        assert_eq!(cli.path.as_deref(), Some("\"/tmp/x\""));
        assert!(cli.no_color);

        let cli = Cli::parse_from(["dirsort"]);
        assert!(cli.path.is_none());
        assert!(!cli.no_color);
    }
}
