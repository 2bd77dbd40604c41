//! Empty directory pruning.
//!
//! Directories are visited post-order, so a parent holding nothing but empty
//! children is emptied first and then removed itself. The root is treated
//! like any other directory: if it ends up empty, it is removed as well.

use crate::file_organizer::OrganizeError;
use crate::output::Reporter;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one pruning pass.
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Directories removed, children before parents.
    pub removed: Vec<PathBuf>,
    /// Every failure that was reported.
    pub errors: Vec<OrganizeError>,
}

/// Removes every empty directory at or below `root`.
///
/// Directories that cannot be listed are skipped without a report. Entry,
/// stat and removal failures are reported and the walk carries on with the
/// siblings. Symlinked directories are not descended into.
pub fn prune_empty_dirs(root: &Path, reporter: &Reporter) -> PruneReport {
    let mut report = PruneReport::default();
    prune_dir(root, reporter, &mut report);
    report
}

fn prune_dir(dir: &Path, reporter: &Reporter, report: &mut PruneReport) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                record(
                    reporter,
                    report,
                    OrganizeError::MetadataFailed {
                        path: dir.to_path_buf(),
                        source: e,
                    },
                );
                continue;
            }
        };
        let path = entry.path();
        match fs::metadata(&path) {
            Ok(metadata) => {
                let is_symlink = entry.file_type().is_ok_and(|t| t.is_symlink());
                if metadata.is_dir() && !is_symlink {
                    prune_dir(&path, reporter, report);
                }
            }
            Err(e) => record(
                reporter,
                report,
                OrganizeError::MetadataFailed { path, source: e },
            ),
        }
    }

    if !is_empty_dir(dir) {
        return;
    }

    match fs::remove_dir(dir) {
        Ok(()) => {
            reporter.removed(dir);
            report.removed.push(dir.to_path_buf());
        }
        Err(e) => record(
            reporter,
            report,
            OrganizeError::RemovalFailed {
                path: dir.to_path_buf(),
                source: e,
            },
        ),
    }
}

/// A directory that cannot be listed is treated as non-empty.
fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_none())
}

fn record(reporter: &Reporter, report: &mut PruneReport, error: OrganizeError) {
    reporter.failure(&error);
    report.errors.push(error);
}
