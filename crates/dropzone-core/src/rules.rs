//! Rule registry: error kinds and their human-readable messages.
//!
//! A [`MessageCatalog`] maps each [`ErrorKind`] to the message attached to a
//! rejection. [`build_default_catalog`] computes the defaults for the current
//! constraints and [`merge_catalog`] layers caller overrides on top.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four fixed validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The batch holds more files than `max_files`.
    TooManyFiles,
    /// The file matches none of the accepted formats.
    FileInvalidType,
    /// The file is larger than `max_size`.
    FileTooLarge,
    /// The file is smaller than `min_size`.
    FileTooSmall,
}

impl ErrorKind {
    /// Every kind, in rule evaluation order.
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::TooManyFiles,
        ErrorKind::FileInvalidType,
        ErrorKind::FileTooLarge,
        ErrorKind::FileTooSmall,
    ];

    /// The kebab-case error code (e.g. `"file-too-large"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TooManyFiles => "too-many-files",
            Self::FileInvalidType => "file-invalid-type",
            Self::FileTooLarge => "file-too-large",
            Self::FileTooSmall => "file-too-small",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownErrorKind(s.to_string()))
    }
}

/// A single validation failure: its kind and the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Kind → message mapping consulted by the validator.
///
/// Holds at most one entry per kind, kept in [`ErrorKind::ALL`] order. A
/// kind with no entry disables its rule. Only [`MessageCatalog::from_entries`],
/// [`build_default_catalog`] and [`merge_catalog`] construct one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: Vec<FileError>,
}

impl MessageCatalog {
    /// Builds a catalog from arbitrary entries.
    ///
    /// Entries are reordered into evaluation order; when a kind appears more
    /// than once the first occurrence wins.
    pub fn from_entries(entries: impl IntoIterator<Item = FileError>) -> Self {
        let entries: Vec<FileError> = entries.into_iter().collect();
        let entries = ErrorKind::ALL
            .into_iter()
            .filter_map(|kind| entries.iter().find(|e| e.kind == kind).cloned())
            .collect();
        Self { entries }
    }

    /// Message for `kind`, or `None` when the rule is disabled.
    pub fn get(&self, kind: ErrorKind) -> Option<&str> {
        self.entry(kind).map(|e| e.message.as_str())
    }

    /// The full entry for `kind`.
    pub fn entry(&self, kind: ErrorKind) -> Option<&FileError> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    pub fn entries(&self) -> &[FileError] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the default catalog for the given constraints.
///
/// The accepted formats (joined with `", "`, or `*` when unset) and the
/// `max_files` figure (or `*` when unset) are embedded into the
/// invalid-type and too-many-files messages.
pub fn build_default_catalog(
    accepted_formats: Option<&[String]>,
    max_files: Option<usize>,
) -> MessageCatalog {
    let formats = accepted_formats
        .map(|formats| formats.join(", "))
        .unwrap_or_else(|| "*".to_string());
    let max_files = max_files
        .map(|n| n.to_string())
        .unwrap_or_else(|| "*".to_string());

    MessageCatalog {
        entries: vec![
            FileError::new(
                ErrorKind::TooManyFiles,
                format!("Maximum number of files exceeded. You can upload at most {max_files} files."),
            ),
            FileError::new(
                ErrorKind::FileInvalidType,
                format!("Invalid file type. Only the following types are supported: {formats}."),
            ),
            FileError::new(ErrorKind::FileTooLarge, "File size is too large."),
            FileError::new(ErrorKind::FileTooSmall, "File size is too small."),
        ],
    }
}

/// Layers `overrides` onto `defaults`.
///
/// For every kind present in `defaults` the first override with the same
/// kind replaces the message; all other entries are kept. Neither input is
/// modified. Override kinds absent from `defaults` are ignored.
pub fn merge_catalog(defaults: &MessageCatalog, overrides: Option<&[FileError]>) -> MessageCatalog {
    let Some(overrides) = overrides else {
        return defaults.clone();
    };

    let entries = defaults
        .entries
        .iter()
        .map(|default| {
            overrides
                .iter()
                .find(|o| o.kind == default.kind)
                .unwrap_or(default)
                .clone()
        })
        .collect();

    MessageCatalog { entries }
}
