//! Deletion state machine
//!
//! One deletion at a time moves through
//! `Idle -> AwaitingConfirmation -> ShiftingRows -> PlayingAnimation -> Finalizing -> Idle`.
//! The only point where control goes back to the host mid-deletion is
//! `PlayingAnimation`, which ends when the host reports the animation token
//! as finished.

use std::fmt;

use super::row::RowId;

/// Opaque handle for a host-played delete animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationToken(pub u64);

impl fmt::Display for AnimationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anim#{}", self.0)
    }
}

/// Where the in-flight deletion (if any) currently is
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DeletionPhase {
    /// Normal windowing
    #[default]
    Idle,
    /// Delegate was told about the row and must confirm
    AwaitingConfirmation {
        index: usize,
        height: f32,
        row: RowId,
    },
    /// Loading trailing rows to fill the gap
    ShiftingRows {
        index: usize,
        height: f32,
        row: RowId,
    },
    /// Host is animating the deleted row out
    PlayingAnimation {
        index: usize,
        height: f32,
        row: RowId,
        token: AnimationToken,
    },
    /// Slot removal and delegate notification
    Finalizing { index: usize, height: f32 },
}

impl DeletionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Row being deleted, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::AwaitingConfirmation { index, .. }
            | Self::ShiftingRows { index, .. }
            | Self::PlayingAnimation { index, .. }
            | Self::Finalizing { index, .. } => Some(index),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingConfirmation { .. } => "awaiting-confirmation",
            Self::ShiftingRows { .. } => "shifting-rows",
            Self::PlayingAnimation { .. } => "playing-animation",
            Self::Finalizing { .. } => "finalizing",
        }
    }

    /// Whether `next` is a legal successor of this phase
    pub fn can_advance_to(&self, next: &DeletionPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::AwaitingConfirmation { .. })
                | (Self::AwaitingConfirmation { .. }, Self::Idle)
                | (Self::AwaitingConfirmation { .. }, Self::ShiftingRows { .. })
                | (Self::ShiftingRows { .. }, Self::PlayingAnimation { .. })
                | (Self::PlayingAnimation { .. }, Self::Finalizing { .. })
                | (Self::Finalizing { .. }, Self::Idle)
        )
    }
}

/// Owner of the deletion phase
#[derive(Debug, Default)]
pub struct DeletionCoordinator {
    phase: DeletionPhase,
}

impl DeletionCoordinator {
    pub fn phase(&self) -> DeletionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }

    /// Move to `next`; illegal edges are engine bugs
    pub(crate) fn advance(&mut self, next: DeletionPhase) {
        debug_assert!(
            self.phase.can_advance_to(&next),
            "illegal deletion transition {} -> {}",
            self.phase.name(),
            next.name()
        );
        tracing::debug!(
            target: "deletion",
            from = self.phase.name(),
            to = next.name(),
            index = ?next.index().or(self.phase.index()),
            "phase change"
        );
        self.phase = next;
    }
}
