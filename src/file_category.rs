/// File categorization by extension.
///
/// This module maps a filename's extension to one of ten fixed categories.
/// Lookup is first-match: categories are tried in declared order, and the
/// extensions of each category in their declared order.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::{Category, categorize};
///
/// assert_eq!(categorize("report.pdf"), Category::Books);
/// assert_eq!(categorize("main.cpp"), Category::CCppFiles);
/// assert_eq!(categorize("run.sh"), Category::OtherFiles);
/// ```
use std::fmt;

/// Represents a file category.
///
/// Each category owns a directory label and an ordered list of
/// dot-inclusive extensions. `OtherFiles` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Windows batch scripts (`.bat`)
    BatchFiles,
    /// Python sources (`.py`)
    PythonFiles,
    /// C and C++ sources and headers
    CCppFiles,
    /// JSON documents
    JsonFiles,
    /// Executables and app packages
    Apps,
    /// Video files
    Videos,
    /// Ebooks, PDFs and plain text
    Books,
    /// Audio files
    Music,
    /// Archives
    Downloads,
    /// Anything not matched by an earlier category
    OtherFiles,
}

impl Category {
    /// All categories in lookup order. The catch-all is last.
    pub const ALL: [Category; 10] = [
        Category::BatchFiles,
        Category::PythonFiles,
        Category::CCppFiles,
        Category::JsonFiles,
        Category::Apps,
        Category::Videos,
        Category::Books,
        Category::Music,
        Category::Downloads,
        Category::OtherFiles,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::CCppFiles.label(), "C_CPP_Files");
    /// assert_eq!(Category::OtherFiles.label(), "Other_Files");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Category::BatchFiles => "Batch_Files",
            Category::PythonFiles => "Python_Files",
            Category::CCppFiles => "C_CPP_Files",
            Category::JsonFiles => "JSON_Files",
            Category::Apps => "Apps",
            Category::Videos => "Videos",
            Category::Books => "Books",
            Category::Music => "Music",
            Category::Downloads => "Downloads",
            Category::OtherFiles => "Other_Files",
        }
    }

    /// Returns the extensions matched by this category, in match order.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::BatchFiles => &[".bat"],
            Category::PythonFiles => &[".py"],
            Category::CCppFiles => &[".c", ".cpp", ".h"],
            Category::JsonFiles => &[".json"],
            Category::Apps => &[".exe", ".apk", ".app"],
            Category::Videos => &[".mp4", ".avi", ".mkv", ".mov"],
            Category::Books => &[".pdf", ".epub", ".mobi", ".txt"],
            Category::Music => &[".mp3", ".wav", ".flac", ".aac"],
            Category::Downloads => &[".zip", ".rar", ".tar", ".gz"],
            Category::OtherFiles => &[],
        }
    }

    /// Looks up a category by its directory label.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extracts the extension of a filename, including the dot.
///
/// The extension starts at the last `.`, unless that dot is the first
/// character of the name, in which case there is none.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::file_extension;
///
/// assert_eq!(file_extension("archive.tar.gz"), ".gz");
/// assert_eq!(file_extension(".bashrc"), "");
/// assert_eq!(file_extension("Makefile"), "");
/// ```
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &file_name[idx..],
    }
}

/// Maps an extension to its category. Matching is exact and case-sensitive.
pub fn category_for_extension(ext: &str) -> Category {
    Category::ALL
        .into_iter()
        .find(|category| category.extensions().contains(&ext))
        .unwrap_or(Category::OtherFiles)
}

/// Determines the category for a filename.
pub fn categorize(file_name: &str) -> Category {
    category_for_extension(file_extension(file_name))
}
