//! File value handed to the engine by the rendering collaborator.

use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{CoreError, CoreResult};

/// A candidate file: name, size in bytes and MIME type.
///
/// `FileInfo` is immutable. Identity for de-duplication is the name alone:
/// two files sharing a name are the same logical file even when their sizes
/// or contents differ (see [`FileInfo::same_file`]).
///
/// # Examples
///
/// ```
/// use dropzone_core::FileInfo;
///
/// let file = FileInfo::new("photo.png", 2048, "image/png");
/// assert_eq!(file.name(), "photo.png");
/// assert_eq!(file.size(), 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    name: String,
    size: u64,
    #[serde(rename = "type", default)]
    mime: String,
}

impl FileInfo {
    /// Creates a new `FileInfo`. `mime` may be empty when the type is unknown.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Builds a `FileInfo` from a file on disk.
    ///
    /// The name is the NFC-normalised last path component; the MIME type
    /// comes from [`mime_from_name`].
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] / [`CoreError::PermissionDenied`] when the
    ///   metadata cannot be read.
    /// - [`CoreError::InvalidName`] when the path has no file name.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(path, e))?;
        let name: String = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect())
            .ok_or_else(|| CoreError::InvalidName(path.to_path_buf()))?;
        let mime = mime_from_name(&name);
        Ok(Self::new(name, metadata.len(), mime))
    }

    /// Returns a copy of this file carrying a different MIME type.
    #[must_use]
    pub fn with_mime(self, mime: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// MIME type string, possibly empty.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Returns `true` if `other` is the same logical file (same name).
    pub fn same_file(&self, other: &FileInfo) -> bool {
        self.name == other.name
    }
}

const MIME_TABLE: &[(&str, &[&str])] = &[
    (
        "image",
        &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"],
    ),
    (
        "video",
        &[".mp4", ".avi", ".mov", ".mkv", ".flv", ".wmv", ".webm"],
    ),
    (
        "document",
        &[".pdf", ".doc", ".docx", ".txt", ".ppt", ".pptx", ".xls", ".xlsx"],
    ),
    ("audio", &[".mp3", ".wav", ".ogg", ".flac", ".aac"]),
    ("archive", &[".zip", ".rar", ".tar", ".7z"]),
];

/// Guesses a coarse MIME type from a file name's extension.
///
/// Matching is a case-insensitive suffix test over a fixed category table,
/// first hit wins. The result is `"<category>/<ext>"` (e.g. `"image/png"`,
/// `"document/pdf"`) or `"unknown/unknown"`.
pub fn mime_from_name(name: &str) -> String {
    let lower = name.to_lowercase();
    MIME_TABLE
        .iter()
        .flat_map(|(category, exts)| exts.iter().map(move |ext| (*category, *ext)))
        .find(|(_, ext)| lower.ends_with(*ext))
        .map(|(category, ext)| format!("{category}/{}", &ext[1..]))
        .unwrap_or_else(|| "unknown/unknown".to_string())
}

/// Browser-style display path for a selected file (`C:\fakepath\<name>`).
pub fn fake_path(name: &str) -> String {
    format!("C:\\fakepath\\{name}")
}

/// [`fake_path`] applied to each name, preserving order.
pub fn fake_paths<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| fake_path(n.as_ref())).collect()
}
