//! Session controller: turns collaborator input into reconciler operations
//! and listener notifications.
//!
//! A [`Session`] owns the [`Reconciler`], the [`PickerMirror`], the drop-zone
//! [`DropzoneState`] and a queue of [`Deferred`] continuations. Work that
//! the collaborator must observe *after* it has applied the current pass
//! (the initial seed, the post-deletion echo, the click reset) is queued and
//! runs on [`Session::run_deferred`].
//!
//! Notifications are always built from the outcome computed right after the
//! mutation, never from an earlier snapshot.

use crate::config::DropzoneConfig;
use crate::constraints::Constraints;
use crate::drag::{DropzoneState, InputGate};
use crate::event::{Command, InputKind, UploadListener};
use crate::file::FileInfo;
use crate::picker::{InputAttributes, PickerMirror};
use crate::reconciler::{DeleteRequest, Outcome, Reconciler};
use crate::rules::FileError;
use crate::schedule::{Deferred, DeferredQueue};

/// A single file-intake session.
///
/// # Examples
///
/// ```
/// use dropzone_core::{Constraints, DropzoneConfig, FileInfo, InputKind, Session};
///
/// let config = DropzoneConfig::default().with_constraints(Constraints::new().with_max_size(1024));
/// let mut session = Session::new(config, ());
///
/// session.handle_input(
///     InputKind::Change,
///     vec![FileInfo::new("a.txt", 10, "text/plain"), FileInfo::new("b.iso", 4096, "")],
/// );
///
/// let outcome = session.outcome();
/// assert_eq!(outcome.accepted.len(), 1);
/// assert_eq!(outcome.rejections[0].file.name(), "b.iso");
/// assert_eq!(session.picker().files().len(), 1);
/// ```
#[derive(Debug)]
pub struct Session<L> {
    reconciler: Reconciler,
    picker: PickerMirror,
    state: DropzoneState,
    deferred: DeferredQueue,
    multiple: bool,
    listener: L,
}

impl<L: UploadListener> Session<L> {
    /// Creates a session with an attached picker and an empty file list.
    pub fn new(config: DropzoneConfig, listener: L) -> Self {
        Self {
            reconciler: Reconciler::new(config.constraints, config.validation_messages),
            picker: PickerMirror::attached(),
            state: DropzoneState::default(),
            deferred: DeferredQueue::new(),
            multiple: config.multiple,
            listener,
        }
    }

    /// Replaces the picker mirror (e.g. with a detached one).
    #[must_use]
    pub fn with_picker(self, picker: PickerMirror) -> Self {
        Self { picker, ..self }
    }

    /// The session file list, including files that failed validation.
    pub fn files(&self) -> &[FileInfo] {
        self.reconciler.files()
    }

    /// Current accepted/rejected split of the session file list.
    pub fn outcome(&self) -> Outcome {
        self.reconciler.current()
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn picker(&self) -> &PickerMirror {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut PickerMirror {
        &mut self.picker
    }

    pub fn state(&self) -> DropzoneState {
        self.state
    }

    pub fn is_drag_active(&self) -> bool {
        self.state.is_drag_active()
    }

    /// Attributes for the picker element.
    pub fn input_attributes(&self) -> InputAttributes {
        InputAttributes {
            accept: self.reconciler.constraints().accept_attribute(),
            multiple: self.multiple,
        }
    }

    /// Number of continuations waiting for [`Session::run_deferred`].
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Routes a [`Command`] to the matching handler.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Seed(files) => self.seed(files),
            Command::Input { kind, files } => self.handle_input(kind, files),
            Command::Delete(request) => self.handle_files_delete(request),
            Command::Click => self.handle_click(),
            Command::DragEnter => self.drag_enter(),
            Command::DragLeave => self.drag_leave(),
            Command::SetConstraints(constraints) => self.set_constraints(constraints),
            Command::SetValidationMessages(messages) => self.set_validation_messages(messages),
        }
    }

    /// Schedules the initial files to be loaded into the picker and run as
    /// a selection on the next [`Session::run_deferred`].
    pub fn seed(&mut self, files: Vec<FileInfo>) {
        if files.is_empty() {
            return;
        }
        self.deferred.push(Deferred::Seed(files));
    }

    /// Handles a drop or picker selection.
    ///
    /// The batch replaces the session list wholesale. Files the validator
    /// rejects are pruned from the picker mirror before the listener hears
    /// about them, then the native passthrough and the upload notification
    /// fire with the accepted files. An empty batch is ignored.
    ///
    /// Real input supersedes queued deletion echoes and click resets: they
    /// are discarded together with the suppression armed for the echo.
    pub fn handle_input(&mut self, kind: InputKind, files: Vec<FileInfo>) {
        let stale = self
            .deferred
            .discard(|task| matches!(task, Deferred::EchoChange | Deferred::ClickReset));
        if stale > 0 || self.state.is_suppressing() {
            tracing::debug!(?kind, stale, "pending echo and reset superseded");
        }
        self.state = self.state.disarm_suppression();
        self.process_input(kind, files);
    }

    fn process_input(&mut self, kind: InputKind, files: Vec<FileInfo>) {
        if files.is_empty() {
            return;
        }

        let previous_total = self.reconciler.files().len();
        if kind == InputKind::Change {
            self.picker.set_files(files.clone());
        }

        let outcome = self.reconciler.replace(files.clone());
        tracing::debug!(
            ?kind,
            accepted = outcome.accepted.len(),
            rejected = outcome.rejections.len(),
            "input validated"
        );

        if !outcome.rejections.is_empty() {
            self.handle_files_delete(
                DeleteRequest::new(outcome.rejected_files())
                    .with_all_files(files)
                    .auto_remove(),
            );
        }

        match kind {
            InputKind::Drop => {
                self.picker.set_files(outcome.accepted.clone());
                self.listener.on_drop(&outcome.accepted);
            }
            InputKind::Change => self.listener.on_change(&outcome.accepted),
        }

        self.notify(&outcome, Some(previous_total));
    }

    /// Removes files from the selection.
    ///
    /// The picker mirror always receives the accepted part of the remaining
    /// files. Outside auto-remove mode the session list is replaced, the
    /// listener is notified, and the deferred echo of the pruned picker list
    /// is queued with a suppression so it is not taken for a new selection.
    /// No-op while the picker is detached or when nothing is to be deleted.
    pub fn handle_files_delete(&mut self, request: DeleteRequest) {
        if !self.picker.is_attached() || request.deleted_files.is_empty() {
            return;
        }

        let previous_total = self.reconciler.files().len();
        let Some(deletion) = self.reconciler.delete(&request) else {
            return;
        };
        self.picker.set_files(deletion.outcome.accepted.clone());

        if !deletion.committed {
            return;
        }

        self.notify(&deletion.outcome, Some(previous_total));
        self.deferred.discard(|task| matches!(task, Deferred::EchoChange));
        self.state = self.state.arm_suppression();
        self.deferred.push(Deferred::EchoChange);
    }

    /// Schedules the picker-cancel reset that follows a click.
    pub fn handle_click(&mut self) {
        self.deferred.push(Deferred::ClickReset);
    }

    pub fn drag_enter(&mut self) {
        self.state = self.state.drag_enter();
    }

    pub fn drag_leave(&mut self) {
        self.state = self.state.drag_leave();
    }

    /// Applies new constraints and re-validates the current list.
    /// Always notifies.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        let outcome = self.reconciler.set_constraints(constraints);
        self.notify(&outcome, None);
    }

    /// Applies new message overrides and re-validates the current list.
    /// Always notifies.
    pub fn set_validation_messages(&mut self, messages: Vec<FileError>) {
        let outcome = self.reconciler.set_overrides(messages);
        self.notify(&outcome, None);
    }

    /// Re-validates the current list and notifies.
    pub fn revalidate(&mut self) {
        let outcome = self.reconciler.revalidate();
        self.notify(&outcome, None);
    }

    /// Runs every deferred continuation, including ones queued while
    /// draining, in order. Returns how many ran.
    pub fn run_deferred(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.deferred.pop() {
            ran += 1;
            match task {
                Deferred::Seed(files) => {
                    if !self.picker.is_attached() {
                        tracing::debug!("seed skipped, picker detached");
                        continue;
                    }
                    self.picker.set_files(files);
                    let files = self.picker.files().to_vec();
                    self.process_input(InputKind::Change, files);
                }
                Deferred::EchoChange => {
                    let (state, gate) = self.state.gate_input();
                    self.state = state;
                    if gate == InputGate::Suppressed {
                        tracing::debug!("deletion echo suppressed");
                        continue;
                    }
                    let files = self.picker.files().to_vec();
                    self.process_input(InputKind::Change, files);
                }
                Deferred::ClickReset => {
                    let previous_total = self.reconciler.files().len();
                    self.reconciler.clear();
                    self.picker.set_files(Vec::new());
                    self.notify(&Outcome::default(), Some(previous_total));
                }
            }
        }
        ran
    }

    /// Fires the three upload callbacks.
    ///
    /// With `previous_total` set, the notification is skipped when the new
    /// accepted + rejected count equals the previous list length. This also
    /// hides changes of composition that keep the count.
    fn notify(&mut self, outcome: &Outcome, previous_total: Option<usize>) {
        if previous_total == Some(outcome.total()) {
            tracing::debug!(total = outcome.total(), "notification skipped, total unchanged");
            return;
        }
        self.listener.on_upload(&outcome.accepted, &outcome.rejections);
        self.listener.on_upload_rejected(&outcome.rejections);
        self.listener.on_upload_accepted(&outcome.accepted);
    }
}
