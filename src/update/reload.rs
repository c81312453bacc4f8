//! Full window rebuilds: reload, reload from a row, viewport resize

use crate::error::{Result, TableError};
use crate::model::{RowSlots, TableView, WindowState};
use crate::source::RowSource;

use super::rows::Anchor;

impl<S: RowSource> TableView<S> {
    /// Rebuild the window from the current first visible row
    pub fn reload(&mut self) -> Result<()> {
        self.reload_from(self.window.visible_start)
    }

    /// Release every row, re-read the row count and rebuild the window with
    /// `from_index` as the first visible row
    ///
    /// The old first visible row's distance above the viewport top is kept so
    /// a reload does not jump. An out-of-range `from_index` rebuilds from row
    /// zero with no offset.
    pub fn reload_from(&mut self, from_index: usize) -> Result<()> {
        self.ensure_idle()?;

        let old_start = self.window.visible_start;
        let preserved = self
            .slots
            .get(old_start)
            .map(|row| (self.viewport.top() - row.top()).max(0.0))
            .unwrap_or(0.0);

        self.release_all();

        let row_count = self.source.row_count();
        self.slots = RowSlots::new(row_count);
        self.window = WindowState::default();
        self.last_offset = self.viewport.offset;
        self.content_height = (0..row_count)
            .map(|index| self.source.height_for_row(index))
            .sum();

        if row_count == 0 {
            tracing::debug!(target: "window", "reloaded empty table");
            return Ok(());
        }

        let preserved = if old_start < row_count { preserved } else { 0.0 };
        let (start, preserved) = if from_index < row_count {
            (from_index, preserved)
        } else {
            (0, 0.0)
        };

        self.build_window(start, self.viewport.top() - preserved);
        tracing::debug!(
            target: "window",
            row_count,
            start,
            window = ?self.window,
            "reloaded"
        );
        Ok(())
    }

    /// Update the viewport size and rebuild
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        self.ensure_idle()?;
        self.viewport.width = width;
        self.viewport.height = height;
        self.reload()
    }

    /// Lay rows out downward from `start` until the viewport bottom is
    /// covered, then pad the cache band on both sides
    ///
    /// Expects an empty slot array of the right length.
    pub(crate) fn build_window(&mut self, start: usize, first_top: f32) {
        self.window = WindowState::at(start);

        let mut top = first_top;
        for index in start..self.slots.len() {
            let Some(height) = self.materialize_at(index, Anchor::Top(top)) else {
                break;
            };
            top += height;
            self.window.visible_last = index;
            self.window.cache_last = index;
            if top >= self.viewport.bottom() {
                break;
            }
        }

        let half = self.config.half_budget();
        for _ in 0..half {
            if self.grow_above().is_none() {
                break;
            }
        }
        for _ in 0..half {
            if self.grow_below().is_none() {
                break;
            }
        }
    }

    pub(crate) fn ensure_idle(&self) -> Result<()> {
        match self.deletion.phase().index() {
            None => Ok(()),
            Some(index) => Err(TableError::DeletionInFlight { index }),
        }
    }
}
