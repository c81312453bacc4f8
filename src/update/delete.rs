//! Row deletion with a host-played animation
//!
//! `request_delete` asks the edit delegate, `confirm_delete` fills the gap
//! below the doomed row and hands the animation to the host, and
//! `finish_delete_animation` removes the row and slides the rest up.
//! Scrolling and reloads are rejected from request until finish.

use crate::commands::{Cmd, RowSlide};
use crate::error::{Result, TableError};
use crate::messages::DeleteMsg;
use crate::model::{AnimationToken, DeletionPhase, Row, RowMode, TableView};
use crate::source::RowSource;

/// Handle deletion messages
pub fn update_delete<S: RowSource>(
    table: &mut TableView<S>,
    msg: DeleteMsg,
) -> Result<Option<Cmd>> {
    match msg {
        DeleteMsg::Request(index) => {
            table.request_delete(index)?;
            Ok(None)
        }
        DeleteMsg::Confirm { index, token } => table.confirm_delete(index, token).map(Some),
        DeleteMsg::Cancel => Ok(table.cancel_delete()?.then_some(Cmd::Redraw)),
        DeleteMsg::AnimationFinished(token) => table.finish_delete_animation(token).map(Some),
    }
}

impl<S: RowSource> TableView<S> {
    /// The delete affordance of row `index` was pressed
    ///
    /// Returns whether a deletion started. Without an edit delegate, or if
    /// the row is not materialized in deletable mode, nothing happens.
    pub fn request_delete(&mut self, index: usize) -> Result<bool> {
        self.ensure_idle()?;
        let Some(editor) = self.editor.as_mut() else {
            return Ok(false);
        };
        let Some(row) = self.slots.get(index) else {
            tracing::debug!(target: "deletion", index, "delete requested for unmaterialized row");
            return Ok(false);
        };
        if row.mode() != RowMode::Deletable || !row.is_deletable() || !row.callbacks().delete {
            return Ok(false);
        }

        self.deletion.advance(DeletionPhase::AwaitingConfirmation {
            index,
            height: row.height(),
            row: row.id(),
        });
        editor.on_will_delete_row(index, row);
        Ok(true)
    }

    /// Abandon a deletion that has not been confirmed yet
    ///
    /// Returns false when there was nothing to cancel.
    pub fn cancel_delete(&mut self) -> Result<bool> {
        match self.deletion.phase() {
            DeletionPhase::Idle => Ok(false),
            DeletionPhase::AwaitingConfirmation { .. } => {
                self.deletion.advance(DeletionPhase::Idle);
                Ok(true)
            }
            phase => Err(TableError::DeletionInFlight {
                index: phase.index().unwrap_or_default(),
            }),
        }
    }

    /// The delegate confirmed deleting row `index`
    ///
    /// Loads rows below the cache band until their combined height covers
    /// the deleted row, disables every delete affordance and asks the host to
    /// play the animation identified by `token`.
    pub fn confirm_delete(&mut self, index: usize, token: AnimationToken) -> Result<Cmd> {
        let (height, row) = match self.deletion.phase() {
            DeletionPhase::AwaitingConfirmation {
                index: pending,
                height,
                row,
            } if pending == index => (height, row),
            DeletionPhase::AwaitingConfirmation { index: pending, .. } => {
                return Err(TableError::DeletionIndexMismatch {
                    expected: pending,
                    got: index,
                });
            }
            DeletionPhase::Idle => return Err(TableError::NoPendingDeletion { index }),
            phase => {
                return Err(TableError::DeletionInFlight {
                    index: phase.index().unwrap_or(index),
                });
            }
        };

        self.deletion
            .advance(DeletionPhase::ShiftingRows { index, height, row });
        let mut filled = 0.0;
        while filled < height {
            let Some(loaded) = self.grow_below() else {
                break;
            };
            self.window.visible_last += 1;
            filled += loaded;
        }

        self.deletion.advance(DeletionPhase::PlayingAnimation {
            index,
            height,
            row,
            token,
        });
        for row in self.slots.rows_mut() {
            row.deletable = false;
        }

        tracing::debug!(target: "deletion", index, %token, window = ?self.window, "animation requested");
        Ok(Cmd::PlayDeleteAnimation { token, index, row })
    }

    /// The host finished the animation for `token`
    ///
    /// Removes the deleted row, renumbers and slides up every row below it,
    /// tells the delegate to drop the row from its data and re-enables
    /// windowing.
    pub fn finish_delete_animation(&mut self, token: AnimationToken) -> Result<Cmd> {
        let (index, height) = match self.deletion.phase() {
            DeletionPhase::PlayingAnimation {
                index,
                height,
                token: playing,
                ..
            } if playing == token => (index, height),
            _ => return Err(TableError::UnknownAnimation { token }),
        };

        let deleted_top = self.slots.get(index).map(Row::top).unwrap_or_default();
        let band_emptied =
            self.window.cache_start == index && self.window.cache_last == index;
        self.release_row(index);

        let mut slides = Vec::new();
        for slot in index + 1..=self.window.cache_last {
            let Some(row) = self.slots.get_mut(slot) else {
                continue;
            };
            let from_top = row.top();
            row.rect = row.rect.shifted(-height);
            row.set_index(slot - 1);
            slides.push(RowSlide {
                row: row.id(),
                index: slot - 1,
                from_top,
                to_top: row.top(),
            });
        }

        self.deletion
            .advance(DeletionPhase::Finalizing { index, height });
        self.slots.remove_slot(index);
        // Rows below slid up into the renumbered slots, so visible_start
        // already names the row at the clip line
        let window = &mut self.window;
        window.cache_last = window.cache_last.saturating_sub(1);
        if window.visible_last >= index {
            window.visible_last = window.visible_last.saturating_sub(1);
        }
        window.normalize(self.slots.len());
        self.content_height = (self.content_height - height).max(0.0);

        if let Some(editor) = self.editor.as_mut() {
            editor.on_did_delete_row(index);
        }
        self.deletion.advance(DeletionPhase::Idle);
        for row in self.slots.rows_mut() {
            row.deletable = row.callbacks.delete;
        }

        if band_emptied && !self.slots.is_empty() {
            // Nothing below was loaded, so re-anchor on the neighbor
            let start = index.min(self.slots.len() - 1);
            let top = if start == index {
                deleted_top
            } else {
                deleted_top - self.source.height_for_row(start)
            };
            self.build_window(start, top);
        } else if !self.slots.is_empty() {
            // Gap rows loaded below may not all be on screen
            self.settle();
        }

        tracing::debug!(
            target: "deletion",
            index,
            slid = slides.len(),
            window = ?self.window,
            "row deleted"
        );
        if slides.is_empty() {
            return Ok(Cmd::Redraw);
        }
        Ok(Cmd::SlideRows {
            slides,
            duration: self.config.slide_duration(),
        })
    }
}
