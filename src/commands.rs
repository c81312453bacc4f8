//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.
//! The table never draws or animates anything itself.

use std::time::Duration;

use crate::model::deletion::AnimationToken;
use crate::model::row::RowId;

/// One row sliding into the gap left by a deleted row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlide {
    pub row: RowId,
    /// Index after renumbering
    pub index: usize,
    pub from_top: f32,
    pub to_top: f32,
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Materialized rows or their geometry changed
    Redraw,
    /// Play the delete animation for `row`, then send
    /// `DeleteMsg::AnimationFinished(token)`
    PlayDeleteAnimation {
        token: AnimationToken,
        index: usize,
        row: RowId,
    },
    /// Tween rows to their new positions (geometry is already updated)
    SlideRows {
        slides: Vec<RowSlide>,
        duration: Duration,
    },
}

impl Cmd {
    /// Number of rows this command asks the host to move
    pub fn slid_rows(&self) -> usize {
        match self {
            Cmd::SlideRows { slides, .. } => slides.len(),
            _ => 0,
        }
    }

    /// Token of the animation this command asks the host to play, if any
    pub fn animation_token(&self) -> Option<AnimationToken> {
        match self {
            Cmd::PlayDeleteAnimation { token, .. } => Some(*token),
            _ => None,
        }
    }
}
