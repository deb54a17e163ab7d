//! Pure batch validation.

use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::file::FileInfo;
use crate::rules::{ErrorKind, FileError, MessageCatalog};

/// A rejected file and every rule it failed, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub file: FileInfo,
    #[serde(rename = "error")]
    pub errors: Vec<FileError>,
}

impl Rejection {
    /// Returns `true` if this rejection carries an error of `kind`.
    pub fn has(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }
}

/// Validates `files` against `constraints`.
///
/// Each file is checked against too-many-files, invalid-type, too-large and
/// too-small, in that order; every failing rule whose kind has a message in
/// `catalog` contributes one [`FileError`]. The too-many-files rule is a
/// property of the whole batch and therefore hits every file. Files with no
/// errors are omitted; batch order is preserved.
pub fn validate(
    files: &[FileInfo],
    constraints: &Constraints,
    catalog: &MessageCatalog,
) -> Vec<Rejection> {
    let too_many = constraints.too_many(files.len());

    files
        .iter()
        .filter_map(|file| {
            let errors: Vec<FileError> = ErrorKind::ALL
                .into_iter()
                .filter(|kind| match kind {
                    ErrorKind::TooManyFiles => too_many,
                    ErrorKind::FileInvalidType => !constraints.accepts_type(file),
                    ErrorKind::FileTooLarge => constraints.exceeds_max_size(file),
                    ErrorKind::FileTooSmall => constraints.below_min_size(file),
                })
                .filter_map(|kind| catalog.entry(kind).cloned())
                .collect();

            if errors.is_empty() {
                return None;
            }
            tracing::trace!(file = file.name(), ?errors, "file rejected");
            Some(Rejection {
                file: file.clone(),
                errors,
            })
        })
        .collect()
}

/// Returns the files whose name does not appear in `rejections`.
pub fn find_valid_files(files: &[FileInfo], rejections: &[Rejection]) -> Vec<FileInfo> {
    files
        .iter()
        .filter(|file| !rejections.iter().any(|r| r.file.same_file(file)))
        .cloned()
        .collect()
}
