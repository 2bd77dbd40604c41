//! dirsort - recursive downloads-folder cleanup
//!
//! This library sorts files into category subdirectories by extension and
//! prunes directories left empty. Every failure is reported and skipped;
//! a run never aborts part way.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod pruner;

pub use cli::{Cli, RunSummary, run, run_cli};
pub use file_category::{Category, categorize};
pub use file_organizer::{FileOrganizer, Operation, OrganizeError, organize_recursively};
pub use output::Reporter;
pub use pruner::prune_empty_dirs;
