//! Session file list bookkeeping.
//!
//! The [`Reconciler`] owns the authoritative list of selected files together
//! with the constraints and message catalog they are judged against. Every
//! [`Outcome`] it hands out is computed from the list as it is at that
//! moment, so callers never observe a stale validation.

use serde::Serialize;

use crate::constraints::Constraints;
use crate::file::FileInfo;
use crate::rules::{build_default_catalog, merge_catalog, FileError, MessageCatalog};
use crate::validator::{find_valid_files, validate, Rejection};

/// The accepted/rejected split of a file list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub accepted: Vec<FileInfo>,
    pub rejections: Vec<Rejection>,
}

impl Outcome {
    /// `accepted.len() + rejections.len()`.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The rejected files, in order.
    pub fn rejected_files(&self) -> Vec<FileInfo> {
        self.rejections.iter().map(|r| r.file.clone()).collect()
    }
}

/// A request to remove files from the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Files to drop, matched by name.
    pub deleted_files: Vec<FileInfo>,
    /// The list to delete from; defaults to the current session list.
    pub all_files: Option<Vec<FileInfo>>,
    /// Internal removal of files the validator itself rejected: only the
    /// picker mirror is synchronised, the session list and the caller are
    /// left alone.
    pub auto_remove: bool,
}

impl DeleteRequest {
    pub fn new(deleted_files: Vec<FileInfo>) -> Self {
        Self {
            deleted_files,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_all_files(self, all_files: Vec<FileInfo>) -> Self {
        Self {
            all_files: Some(all_files),
            ..self
        }
    }

    #[must_use]
    pub fn auto_remove(self) -> Self {
        Self {
            auto_remove: true,
            ..self
        }
    }
}

/// Result of [`Reconciler::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    /// Baseline minus the deleted files.
    pub remaining: Vec<FileInfo>,
    /// Validation of `remaining`.
    pub outcome: Outcome,
    /// Whether the session list was replaced by `remaining`.
    pub committed: bool,
}

/// Owner of the session file list.
#[derive(Debug, Clone)]
pub struct Reconciler {
    files: Vec<FileInfo>,
    constraints: Constraints,
    overrides: Vec<FileError>,
    catalog: MessageCatalog,
}

impl Reconciler {
    /// Creates an empty reconciler; the catalog is the defaults for
    /// `constraints` with `overrides` layered on top.
    pub fn new(constraints: Constraints, overrides: Vec<FileError>) -> Self {
        let catalog = Self::catalog_for(&constraints, &overrides);
        Self {
            files: Vec::new(),
            constraints,
            overrides,
            catalog,
        }
    }

    fn catalog_for(constraints: &Constraints, overrides: &[FileError]) -> MessageCatalog {
        let defaults = build_default_catalog(
            constraints.accepted_formats.as_deref(),
            constraints.max_files(),
        );
        merge_catalog(&defaults, Some(overrides))
    }

    /// The current session file list.
    pub fn files(&self) -> &[FileInfo] {
        &self.files
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Validates an arbitrary list against the current configuration.
    pub fn evaluate(&self, files: &[FileInfo]) -> Outcome {
        let rejections = validate(files, &self.constraints, &self.catalog);
        let accepted = find_valid_files(files, &rejections);
        Outcome {
            accepted,
            rejections,
        }
    }

    /// Validates the current session list.
    pub fn current(&self) -> Outcome {
        self.evaluate(&self.files)
    }

    /// Replaces the session list with `batch` and validates it as a whole.
    pub fn replace(&mut self, batch: Vec<FileInfo>) -> Outcome {
        self.files = batch;
        self.current()
    }

    /// Empties the session list.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Removes `request.deleted_files` (by name) from the baseline and
    /// validates what is left.
    ///
    /// The session list is replaced by the remaining files unless the
    /// request is in auto-remove mode. Returns `None` for an empty
    /// deletion list.
    pub fn delete(&mut self, request: &DeleteRequest) -> Option<Deletion> {
        if request.deleted_files.is_empty() {
            return None;
        }

        let baseline = request.all_files.as_deref().unwrap_or(&self.files);
        let remaining: Vec<FileInfo> = baseline
            .iter()
            .filter(|file| !request.deleted_files.iter().any(|d| d.same_file(file)))
            .cloned()
            .collect();
        let outcome = self.evaluate(&remaining);

        let committed = !request.auto_remove;
        if committed {
            self.files = remaining.clone();
        }
        tracing::debug!(
            deleted = request.deleted_files.len(),
            remaining = remaining.len(),
            committed,
            "files deleted"
        );

        Some(Deletion {
            remaining,
            outcome,
            committed,
        })
    }

    /// Swaps in new constraints, rebuilding the catalog, and re-validates
    /// the unchanged session list.
    pub fn set_constraints(&mut self, constraints: Constraints) -> Outcome {
        self.catalog = Self::catalog_for(&constraints, &self.overrides);
        self.constraints = constraints;
        self.revalidate()
    }

    /// Swaps in new message overrides and re-validates.
    pub fn set_overrides(&mut self, overrides: Vec<FileError>) -> Outcome {
        self.catalog = Self::catalog_for(&self.constraints, &overrides);
        self.overrides = overrides;
        self.revalidate()
    }

    /// Re-runs validation of the session list.
    pub fn revalidate(&self) -> Outcome {
        self.current()
    }
}
