//! Dropzone core library — validation and reconciliation for file intake.
//!
//! `dropzone-core` decides which files of a dropped or selected batch are
//! accepted, keeps the selected-file list consistent across additions,
//! deletions and configuration changes, and notifies the caller once per
//! logical change. It does no rendering and talks to no platform picker;
//! a frontend drives it through [`Session`].
//!
//! # Modules
//!
//! - [`file`] — [`FileInfo`] and name-based MIME helpers.
//! - [`rules`] — Error kinds and the [`MessageCatalog`].
//! - [`constraints`] — [`Constraints`] checked by the validator.
//! - [`validator`] — The pure [`validate`] function.
//! - [`reconciler`] — The session file list ([`Reconciler`]).
//! - [`session`] — The [`Session`] controller.
//! - [`drag`], [`picker`], [`schedule`] — Drop-zone state, picker mirror and deferred work.
//! - [`event`] — [`Command`]s in, [`UploadListener`] notifications out.
//! - [`config`] — TOML-backed [`DropzoneConfig`].
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod constraints;
pub mod drag;
pub mod error;
pub mod event;
pub mod file;
pub mod picker;
pub mod reconciler;
pub mod rules;
pub mod schedule;
pub mod session;
pub mod validator;

pub use config::DropzoneConfig;
pub use constraints::Constraints;
pub use drag::{DropzoneState, InputGate};
pub use error::{CoreError, CoreResult};
pub use event::{Command, InputKind, UploadListener};
pub use file::{fake_path, fake_paths, mime_from_name, FileInfo};
pub use picker::{InputAttributes, PickerMirror};
pub use reconciler::{DeleteRequest, Deletion, Outcome, Reconciler};
pub use rules::{build_default_catalog, merge_catalog, ErrorKind, FileError, MessageCatalog};
pub use schedule::{Deferred, DeferredQueue};
pub use session::Session;
pub use validator::{find_valid_files, validate, Rejection};
