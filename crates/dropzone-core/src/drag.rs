//! Drop-zone state machine.
//!
//! Tracks whether a drag is hovering the zone and whether the next
//! drop/change input must be swallowed. The suppression is armed after a
//! user deletion: the session re-publishes the pruned picker list as a
//! synthetic change, and that echo must not be treated as a new selection.
//! Only the echo consumes it; real input disarms it.

/// State of the drop zone. Transitions consume `self` and return the next state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropzoneState {
    #[default]
    Idle,
    DragActive,
    /// The next input is swallowed; `drag_active` keeps the hover flag.
    SuppressNextDrop { drag_active: bool },
}

/// Whether an incoming drop/change input should be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputGate {
    Process,
    Suppressed,
}

impl DropzoneState {
    /// Read-only hover signal for the rendering collaborator.
    pub fn is_drag_active(self) -> bool {
        match self {
            Self::Idle => false,
            Self::DragActive => true,
            Self::SuppressNextDrop { drag_active } => drag_active,
        }
    }

    pub fn is_suppressing(self) -> bool {
        matches!(self, Self::SuppressNextDrop { .. })
    }

    /// A drag entered the zone.
    #[must_use]
    pub fn drag_enter(self) -> Self {
        self.with_drag_active(true)
    }

    /// A drag left the zone.
    #[must_use]
    pub fn drag_leave(self) -> Self {
        self.with_drag_active(false)
    }

    fn with_drag_active(self, drag_active: bool) -> Self {
        match self {
            Self::SuppressNextDrop { .. } => Self::SuppressNextDrop { drag_active },
            _ if drag_active => Self::DragActive,
            _ => Self::Idle,
        }
    }

    /// Arms suppression of the next input.
    #[must_use]
    pub fn arm_suppression(self) -> Self {
        Self::SuppressNextDrop {
            drag_active: self.is_drag_active(),
        }
    }

    /// Drops a pending suppression without consuming an input.
    #[must_use]
    pub fn disarm_suppression(self) -> Self {
        match self {
            Self::SuppressNextDrop { drag_active: true } => Self::DragActive,
            Self::SuppressNextDrop { drag_active: false } => Self::Idle,
            other => other,
        }
    }

    /// Consumes a pending suppression, if any.
    ///
    /// Returns the next state and whether the input is to be processed.
    #[must_use]
    pub fn gate_input(self) -> (Self, InputGate) {
        match self {
            Self::SuppressNextDrop { .. } => (self.disarm_suppression(), InputGate::Suppressed),
            other => (other, InputGate::Process),
        }
    }
}
