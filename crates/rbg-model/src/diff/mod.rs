//! Changed-file listing between two source revisions.
use serde::{Deserialize, Serialize};

/// A single file touched between the base revision and head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Repository-relative path.
    pub filename: String,
}

impl ChangedFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// Result of comparing a base revision against head.
///
/// Only the `files` array of the compare response is consumed; any other
/// fields are ignored. A response without `files` fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub files: Vec<ChangedFile>,
}

impl Comparison {
    pub fn new(files: Vec<ChangedFile>) -> Self {
        Self { files }
    }

    /// Returns the first changed file whose path starts with `prefix`.
    pub fn first_under(&self, prefix: &str) -> Option<&ChangedFile> {
        self.files.iter().find(|f| f.filename.starts_with(prefix))
    }

    /// Returns `true` if any changed path starts with `prefix`.
    pub fn touches(&self, prefix: &str) -> bool {
        self.first_under(prefix).is_some()
    }
}

impl<S: Into<String>> FromIterator<S> for Comparison {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(ChangedFile::new).collect())
    }
}
