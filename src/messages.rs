//! Message types for the Elm-style architecture
//!
//! Every external notification the table reacts to is one of these.

use crate::model::deletion::AnimationToken;

/// Windowing messages (scroll samples, reloads, interaction)
#[derive(Debug, Clone, PartialEq)]
pub enum TableMsg {
    /// Per-frame scroll offset sample (content y at the top clip line)
    ScrollOffsetChanged(f32),
    /// Viewport size changed; rebuilds the window
    Resize { width: f32, height: f32 },
    /// Rebuild the window from the current first visible row
    Reload,
    /// Rebuild the window from a given row
    ReloadFrom(usize),
    /// Switch every row between selectable and deletable
    SetEditingMode(bool),
    /// A row was touched
    RowTouched(usize),
}

/// Deletion messages
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteMsg {
    /// The delete affordance of a row was pressed
    Request(usize),
    /// Delegate confirmed; the host will play `token`
    Confirm { index: usize, token: AnimationToken },
    /// Delegate declined before confirming
    Cancel,
    /// Host finished playing the delete animation
    AnimationFinished(AnimationToken),
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Table(TableMsg),
    Delete(DeleteMsg),
}
