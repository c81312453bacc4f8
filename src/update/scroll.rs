//! Scroll-driven windowing
//!
//! Each pass runs four edge checks against the first and last visible rows.
//! A boundary moves one row per check; rows cross between the visible band
//! and the cache band, and the cache band grows or sheds one row at a time
//! so each side keeps at most `half_budget` offscreen rows.

use crate::config::ScrollPolicy;
use crate::error::{Result, TableError};
use crate::model::{Row, RowRect, TableView};
use crate::source::RowSource;

impl<S: RowSource> TableView<S> {
    /// Apply a new scroll offset
    ///
    /// Returns whether the window moved. An offset equal to the last accepted
    /// one does nothing.
    pub fn on_scroll_offset_changed(&mut self, offset: f32) -> Result<bool> {
        if !self.deletion.is_idle() {
            return Err(TableError::ScrollWhileDisabled);
        }
        if !offset.is_finite() {
            tracing::warn!(target: "window", offset, "ignoring non-finite scroll offset");
            return Ok(false);
        }
        if offset == self.last_offset {
            return Ok(false);
        }
        self.viewport.offset = offset;
        self.last_offset = offset;
        if self.slots.is_empty() {
            return Ok(false);
        }

        let before = self.window;
        match self.config.scroll_policy {
            ScrollPolicy::PerFrame => {
                self.edge_pass();
            }
            ScrollPolicy::Settle => self.settle(),
        }

        let moved = self.window != before;
        if moved {
            tracing::trace!(target: "window", offset, window = ?self.window, "scrolled");
        }
        Ok(moved)
    }

    /// Repeat edge passes until the window matches the viewport
    pub(crate) fn settle(&mut self) {
        let limit = 2 * self.slots.len() + 4;
        let mut passes = 0;
        while passes < limit && self.edge_pass() {
            passes += 1;
        }
        if passes == limit {
            tracing::warn!(
                target: "window",
                offset = self.viewport.offset,
                window = ?self.window,
                "window did not settle"
            );
        }
    }

    /// One round of the four edge checks; true if anything changed
    fn edge_pass(&mut self) -> bool {
        let mut moved = self.advance_top();
        moved |= self.retreat_top();
        moved |= self.retreat_bottom();
        moved |= self.advance_bottom();
        moved
    }

    fn first_visible(&self) -> Option<RowRect> {
        self.slots.get(self.window.visible_start).map(Row::rect)
    }

    fn last_visible(&self) -> Option<RowRect> {
        self.slots.get(self.window.visible_last).map(Row::rect)
    }

    /// First visible row scrolled fully above the viewport
    fn advance_top(&mut self) -> bool {
        let Some(first) = self.first_visible() else {
            return false;
        };
        if self.viewport.top() < first.bottom()
            || self.window.visible_start >= self.window.visible_last
        {
            return false;
        }
        self.window.visible_start += 1;
        if self.window.cached_above() > self.config.half_budget() {
            self.shrink_top();
        }
        true
    }

    /// Gap opened above the first visible row
    fn retreat_top(&mut self) -> bool {
        let Some(first) = self.first_visible() else {
            return false;
        };
        if self.viewport.top() >= first.top {
            return false;
        }
        let mut moved = false;
        if self.window.cached_above() <= self.config.half_budget() {
            moved = self.grow_above().is_some();
        }
        if self.window.visible_start > self.window.cache_start {
            self.window.visible_start -= 1;
            moved = true;
        }
        moved
    }

    /// Last visible row scrolled fully below the viewport
    fn retreat_bottom(&mut self) -> bool {
        let Some(last) = self.last_visible() else {
            return false;
        };
        if self.viewport.bottom() > last.top
            || self.window.visible_last <= self.window.visible_start
        {
            return false;
        }
        self.window.visible_last -= 1;
        if self.window.cached_below() > self.config.half_budget() {
            self.shrink_bottom();
        }
        true
    }

    /// Gap opened below the last visible row
    fn advance_bottom(&mut self) -> bool {
        let Some(last) = self.last_visible() else {
            return false;
        };
        if self.viewport.bottom() <= last.bottom() {
            return false;
        }
        let mut moved = false;
        if self.window.cached_below() <= self.config.half_budget() {
            moved = self.grow_below().is_some();
        }
        if self.window.visible_last < self.window.cache_last {
            self.window.visible_last += 1;
            moved = true;
        }
        moved
    }
}
