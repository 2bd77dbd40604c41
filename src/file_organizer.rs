/// File organization system for moving files into category directories.
///
/// The organizer walks a tree depth-first. Every regular file is moved into
/// a subdirectory of its own parent named after its category, e.g.
/// `a/b/photo.mp4` becomes `a/b/Videos/photo.mp4`. Failures are reported
/// and skipped; nothing aborts the walk.
use crate::file_category::{Category, categorize};
use crate::output::Reporter;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Represents a single file move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The path of the file before the move.
    pub original_path: PathBuf,
    /// The path of the file after the move.
    pub new_path: PathBuf,
    /// The category the file was moved into.
    pub category: Category,
}

/// Errors reported while organizing or pruning.
///
/// None of these are fatal: each is printed and the walk moves on.
#[derive(Debug)]
pub enum OrganizeError {
    /// A directory could not be listed.
    DirectoryOpenFailed { path: PathBuf, source: io::Error },
    /// An entry's metadata could not be read.
    MetadataFailed { path: PathBuf, source: io::Error },
    /// Failed to create a category directory.
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// Failed to move a file to its category directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
    /// Failed to remove an empty directory.
    RemovalFailed { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryOpenFailed { path, source } => {
                write!(f, "Could not open directory {}: {}", path.display(), source)
            }
            Self::MetadataFailed { path, source } => {
                write!(f, "Error stating {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Error creating directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Error moving file: {} -> {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::RemovalFailed { path, source } => {
                write!(f, "Error removing directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryOpenFailed { source, .. }
            | Self::MetadataFailed { source, .. }
            | Self::DirectoryCreationFailed { source, .. }
            | Self::RemovalFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
        }
    }
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Outcome of one organizer pass.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Every successful move, in the order performed.
    pub moved: Vec<Operation>,
    /// Every failure that was reported.
    pub errors: Vec<OrganizeError>,
}

impl OrganizeReport {
    /// Number of files moved into the given category.
    pub fn count_for(&self, category: Category) -> usize {
        self.moved.iter().filter(|op| op.category == category).count()
    }
}

/// Moves the files of one directory into its category subdirectories.
///
/// Tracks which category folders this directory has already materialized,
/// so each one is created at most once per scan. Dropped when the scan of
/// the directory finishes.
pub struct FileOrganizer<'a> {
    dir: &'a Path,
    materialized: HashSet<Category>,
}

impl<'a> FileOrganizer<'a> {
    /// Creates an organizer for the files directly inside `dir`.
    pub fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            materialized: HashSet::new(),
        }
    }

    /// Creates `dir/<category label>` the first time `category` is seen.
    ///
    /// Later calls for the same category do nothing, even if the first
    /// attempt failed. An existing entry at that path is not an error.
    pub fn ensure_category_dir(&mut self, category: Category) -> OrganizeResult<()> {
        if !self.materialized.insert(category) {
            return Ok(());
        }

        let category_path = self.dir.join(category.label());
        match fs::create_dir(&category_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(OrganizeError::DirectoryCreationFailed {
                path: category_path,
                source: e,
            }),
        }
    }

    /// Moves a file into `dir/<category label>/` and records the operation.
    ///
    /// An existing file at the destination is replaced according to the
    /// platform's `rename`; nothing is retried.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_category::Category;
    /// use dirsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/path/to/dir");
    /// let mut organizer = FileOrganizer::new(dir);
    /// organizer.ensure_category_dir(Category::Books).ok();
    ///
    /// match organizer.move_to_category_with_record(&dir.join("report.pdf"), Category::Books) {
    ///     Ok(op) => println!("Moved to {}", op.new_path.display()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub fn move_to_category_with_record(
        &self,
        file_path: &Path,
        category: Category,
    ) -> OrganizeResult<Operation> {
        let category_path = self.dir.join(category.label());
        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: category_path.clone(),
                source_error: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination_path = category_path.join(file_name);

        fs::rename(file_path, &destination_path).map_err(|e| OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_path.clone(),
            source_error: e,
        })?;

        Ok(Operation {
            original_path: file_path.to_path_buf(),
            new_path: destination_path,
            category,
        })
    }
}

/// Sorts every regular file under `root` into category subdirectories.
///
/// Subdirectories are recursed into as they are listed; symlinked
/// directories are not followed. Files already sitting in a directory named
/// after their own category are left alone, so a second run changes nothing.
///
/// Known limitations:
/// - A folder the user named after a category before the first run (say a
///   hand-made `Music/` holding `song.mp3`) is taken as already sorted, and
///   its matching files stay where they are.
/// - On a name collision the destination file is overwritten if the
///   platform's `rename` does so.
pub fn organize_recursively(root: &Path, reporter: &Reporter) -> OrganizeReport {
    let mut report = OrganizeReport::default();
    organize_dir(root, reporter, &mut report);
    report
}

fn organize_dir(dir: &Path, reporter: &Reporter, report: &mut OrganizeReport) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            record(
                reporter,
                report,
                OrganizeError::DirectoryOpenFailed {
                    path: dir.to_path_buf(),
                    source: e,
                },
            );
            return;
        }
    };

    // Snapshot the listing so category dirs created below are not revisited.
    let entries: Vec<_> = entries.collect();
    let mut organizer = FileOrganizer::new(dir);

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

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                record(
                    reporter,
                    report,
                    OrganizeError::MetadataFailed { path, source: e },
                );
                continue;
            }
        };

        if metadata.is_dir() {
            if !is_symlink(&entry) {
                organize_dir(&path, reporter, report);
            }
            continue;
        }

        if !metadata.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let category = categorize(&file_name.to_string_lossy());
        if is_sorted_into(dir, category) {
            continue;
        }

        if let Err(e) = organizer.ensure_category_dir(category) {
            record(reporter, report, e);
        }

        match organizer.move_to_category_with_record(&path, category) {
            Ok(operation) => {
                reporter.moved(&operation);
                report.moved.push(operation);
            }
            Err(e) => record(reporter, report, e),
        }
    }
}

/// True when `dir` is itself the category folder for `category`.
fn is_sorted_into(dir: &Path, category: Category) -> bool {
    dir.file_name()
        .and_then(|name| name.to_str())
        .and_then(Category::from_label)
        == Some(category)
}

fn is_symlink(entry: &fs::DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_symlink())
}

fn record(reporter: &Reporter, report: &mut OrganizeReport, error: OrganizeError) {
    reporter.failure(&error);
    report.errors.push(error);
}
