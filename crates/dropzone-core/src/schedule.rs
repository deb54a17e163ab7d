//! Continuations deferred until the current synchronous pass completes.
//!
//! The rendering collaborator drains the queue (via
//! [`Session::run_deferred`](crate::session::Session::run_deferred)) once it
//! has applied the state changes of the pass that queued them.

use std::collections::VecDeque;

use crate::file::FileInfo;

/// A unit of deferred work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Load the initial files into the picker and run them as a selection.
    Seed(Vec<FileInfo>),
    /// Re-publish the picker's list as a change input.
    EchoChange,
    /// Treat a click as a cancelled picker dialog: clear the selection.
    ClickReset,
}

/// FIFO queue of [`Deferred`] work.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: VecDeque<Deferred>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: Deferred) {
        tracing::trace!(?task, "deferred");
        self.pending.push_back(task);
    }

    pub fn pop(&mut self) -> Option<Deferred> {
        self.pending.pop_front()
    }

    /// Removes every pending task matching `stale`, keeping the order of the
    /// rest. Returns how many were removed.
    pub fn discard(&mut self, mut stale: impl FnMut(&Deferred) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|task| !stale(task));
        let removed = before - self.pending.len();
        if removed > 0 {
            tracing::trace!(removed, "deferred work discarded");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
