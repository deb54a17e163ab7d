//! Constraint configuration applied by the validator.

use serde::{Deserialize, Serialize};

use crate::file::FileInfo;

/// Limits a batch of files is checked against.
///
/// Every field is optional; `None` disables the matching rule. A
/// `max_files` of `0` is treated as unset since the limit must be positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// MIME prefixes (`"image/"`, `"image/png"`) or dot-prefixed extensions (`".pdf"`).
    #[serde(default)]
    pub accepted_formats: Option<Vec<String>>,
    #[serde(default)]
    pub max_files: Option<usize>,
    /// Largest accepted size in bytes (inclusive).
    #[serde(default)]
    pub max_size: Option<u64>,
    /// Smallest accepted size in bytes (inclusive).
    #[serde(default)]
    pub min_size: Option<u64>,
}

impl Constraints {
    /// Constraints with no limits at all.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_accepted_formats<S: Into<String>>(
        self,
        formats: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            accepted_formats: Some(formats.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    #[must_use]
    pub fn with_max_files(self, max_files: usize) -> Self {
        Self {
            max_files: Some(max_files),
            ..self
        }
    }

    #[must_use]
    pub fn with_max_size(self, max_size: u64) -> Self {
        Self {
            max_size: Some(max_size),
            ..self
        }
    }

    #[must_use]
    pub fn with_min_size(self, min_size: u64) -> Self {
        Self {
            min_size: Some(min_size),
            ..self
        }
    }

    /// The effective file-count limit.
    pub fn max_files(&self) -> Option<usize> {
        self.max_files.filter(|&n| n > 0)
    }

    /// Returns `true` if a batch of `count` files exceeds `max_files`.
    pub fn too_many(&self, count: usize) -> bool {
        self.max_files().is_some_and(|max| count > max)
    }

    /// Returns `true` if `file` matches one of the accepted formats.
    ///
    /// Entries starting with `.` match a case-sensitive suffix of the file
    /// name; any other entry matches a prefix of the MIME type. An unset or
    /// empty format list accepts everything.
    pub fn accepts_type(&self, file: &FileInfo) -> bool {
        match self.accepted_formats.as_deref() {
            None | Some([]) => true,
            Some(formats) => formats.iter().any(|format| {
                if format.starts_with('.') {
                    file.name().ends_with(format.as_str())
                } else {
                    file.mime().starts_with(format.as_str())
                }
            }),
        }
    }

    pub fn exceeds_max_size(&self, file: &FileInfo) -> bool {
        self.max_size.is_some_and(|max| file.size() > max)
    }

    pub fn below_min_size(&self, file: &FileInfo) -> bool {
        self.min_size.is_some_and(|min| file.size() < min)
    }

    /// Accept hint for the native picker: the formats joined with `", "`.
    pub fn accept_attribute(&self) -> Option<String> {
        self.accepted_formats.as_ref().map(|f| f.join(", "))
    }
}
