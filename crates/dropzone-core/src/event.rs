//! Commands and notifications between the rendering collaborator and the core.
//!
//! The collaborator translates user input into [`Command`]s and hands them
//! to [`Session::dispatch`](crate::session::Session::dispatch). The core
//! reports back through an [`UploadListener`].

use crate::constraints::Constraints;
use crate::file::FileInfo;
use crate::reconciler::DeleteRequest;
use crate::rules::FileError;
use crate::validator::Rejection;

/// Which native event delivered a batch of files.
///
/// Only decides which passthrough hook is called; validation is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Files dropped onto the zone.
    Drop,
    /// Files chosen through the picker dialog.
    Change,
}

/// An action the collaborator requests the core to perform.
#[derive(Debug, Clone)]
pub enum Command {
    /// Initial files supplied at mount time.
    Seed(Vec<FileInfo>),
    /// A drop or picker selection.
    Input { kind: InputKind, files: Vec<FileInfo> },
    /// Remove files from the selection.
    Delete(DeleteRequest),
    /// The picker was clicked (opened).
    Click,
    DragEnter,
    DragLeave,
    /// Replace the constraint configuration.
    SetConstraints(Constraints),
    /// Replace the validation message overrides.
    SetValidationMessages(Vec<FileError>),
}

/// Receives the session's notifications.
///
/// Every method has an empty default so implementors only override what
/// they care about. For one logical change `on_upload`,
/// `on_upload_rejected` and `on_upload_accepted` are called together, in
/// that order, with the same data.
pub trait UploadListener {
    /// All results: the accepted files and the rejections.
    fn on_upload(&mut self, _accepted: &[FileInfo], _rejections: &[Rejection]) {}

    fn on_upload_accepted(&mut self, _accepted: &[FileInfo]) {}

    fn on_upload_rejected(&mut self, _rejections: &[Rejection]) {}

    /// Native drop passthrough, carrying only the accepted files.
    fn on_drop(&mut self, _accepted: &[FileInfo]) {}

    /// Native change passthrough, carrying only the accepted files.
    fn on_change(&mut self, _accepted: &[FileInfo]) {}
}

/// A listener that ignores everything.
impl UploadListener for () {}

impl<L: UploadListener + ?Sized> UploadListener for &mut L {
    fn on_upload(&mut self, accepted: &[FileInfo], rejections: &[Rejection]) {
        (**self).on_upload(accepted, rejections);
    }

    fn on_upload_accepted(&mut self, accepted: &[FileInfo]) {
        (**self).on_upload_accepted(accepted);
    }

    fn on_upload_rejected(&mut self, rejections: &[Rejection]) {
        (**self).on_upload_rejected(rejections);
    }

    fn on_drop(&mut self, accepted: &[FileInfo]) {
        (**self).on_drop(accepted);
    }

    fn on_change(&mut self, accepted: &[FileInfo]) {
        (**self).on_change(accepted);
    }
}
