//! Mirror of the native file picker's selected-file list.
//!
//! The session writes the files the picker should hold; the rendering
//! collaborator reads them back and pushes them into its widget.

use serde::Serialize;

use crate::file::FileInfo;

/// Owned stand-in for the picker element's file list.
///
/// A detached mirror (no picker element yet) turns seeding and deletion
/// into no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerMirror {
    attached: bool,
    files: Vec<FileInfo>,
}

impl PickerMirror {
    /// A mirror bound to a live picker element.
    pub fn attached() -> Self {
        Self {
            attached: true,
            files: Vec::new(),
        }
    }

    /// A mirror with no picker element behind it.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Detaches the mirror and forgets its files.
    pub fn detach(&mut self) {
        self.attached = false;
        self.files.clear();
    }

    /// Files the picker currently holds.
    pub fn files(&self) -> &[FileInfo] {
        &self.files
    }

    /// Overwrites the picker's file list. Ignored while detached.
    pub fn set_files(&mut self, files: Vec<FileInfo>) {
        if !self.attached {
            return;
        }
        self.files = files;
    }
}

/// Attributes the rendering collaborator applies to the picker element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputAttributes {
    /// Accept hint (formats joined with `", "`), if any formats are set.
    pub accept: Option<String>,
    pub multiple: bool,
}
