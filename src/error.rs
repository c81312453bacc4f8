//! Errors for state-machine violations
//!
//! Bounds violations, missing delegate capabilities and pool exhaustion are
//! not errors: they degrade to no-ops. Only operations that would corrupt
//! the window if accepted are rejected here.

use thiserror::Error;

use crate::model::deletion::AnimationToken;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("deletion of row {index} is still in flight")]
    DeletionInFlight { index: usize },
    #[error("scroll offset received while windowing is disabled")]
    ScrollWhileDisabled,
    #[error("no deletion is awaiting confirmation for row {index}")]
    NoPendingDeletion { index: usize },
    #[error("confirmation for row {got} but row {expected} is awaiting confirmation")]
    DeletionIndexMismatch { expected: usize, got: usize },
    #[error("animation {token} is not playing")]
    UnknownAnimation { token: AnimationToken },
}

pub type Result<T> = std::result::Result<T, TableError>;
