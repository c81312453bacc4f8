//! Row lifecycle: materializing a row into its slot and releasing it back
//! to the pool

use crate::model::{Row, RowCallbacks, RowRect, TableView};
use crate::source::{RowFactory, RowSource};

/// Which edge of a newly materialized row is pinned to a known y
#[derive(Debug, Clone, Copy)]
pub(crate) enum Anchor {
    Top(f32),
    Bottom(f32),
}

impl<S: RowSource> TableView<S> {
    /// Fetch row `index` from the source, place it and store it in its slot
    ///
    /// Returns the row height, or `None` if `index` has no slot.
    pub(crate) fn materialize_at(&mut self, index: usize, anchor: Anchor) -> Option<f32> {
        if index >= self.slots.len() {
            return None;
        }
        debug_assert!(
            !self.slots.is_materialized(index),
            "row {} is already materialized",
            index
        );
        if let Some(existing) = self.slots.get(index) {
            return Some(existing.height());
        }

        let height = self.source.height_for_row(index);
        let top = match anchor {
            Anchor::Top(top) => top,
            Anchor::Bottom(bottom) => bottom - height,
        };

        let mut factory = RowFactory::new(&mut self.pool, &mut self.ids);
        let mut row = self.source.row_for_index(&mut factory, index);
        row.set_index(index);
        row.rect = RowRect::new(self.viewport.left, top, self.viewport.width, height);
        self.wire(&mut row);

        tracing::trace!(target: "rows", index, row = %row.id(), top, height, "materialized");
        if let Err(row) = self.slots.insert(index, row) {
            self.source.destroy_row(row);
            return None;
        }
        Some(height)
    }

    /// Assign callbacks and the current interaction mode
    fn wire(&self, row: &mut Row<S::Content>) {
        row.callbacks = RowCallbacks {
            touch: self.selection.is_some(),
            delete: self.editor.is_some(),
        };
        row.apply_mode(self.mode);
        row.deletable = row.callbacks.delete && self.deletion.is_idle();
    }

    /// Release the row in slot `index`: notify the source, strip the
    /// engine-assigned state, then pool it or hand it back for destruction
    pub(crate) fn release_row(&mut self, index: usize) -> bool {
        let Some(mut row) = self.slots.take(index) else {
            return false;
        };
        self.source.on_row_about_to_release(index);
        row.reset();
        let id = row.id();
        match self.pool.put(row) {
            None => tracing::trace!(target: "rows", index, row = %id, "pooled"),
            Some(row) => {
                tracing::trace!(target: "rows", index, row = %id, "destroyed");
                self.source.destroy_row(row);
            }
        }
        true
    }

    pub(crate) fn release_all(&mut self) {
        for index in self.slots.materialized_indices() {
            self.release_row(index);
        }
    }

    /// Materialize the row just above the cache band
    pub(crate) fn grow_above(&mut self) -> Option<f32> {
        let start = self.window.cache_start;
        if start == 0 {
            return None;
        }
        let top = self.slots.get(start)?.top();
        let height = self.materialize_at(start - 1, Anchor::Bottom(top))?;
        self.window.cache_start = start - 1;
        Some(height)
    }

    /// Materialize the row just below the cache band
    pub(crate) fn grow_below(&mut self) -> Option<f32> {
        let last = self.window.cache_last;
        if last + 1 >= self.slots.len() {
            return None;
        }
        let bottom = self.slots.get(last)?.bottom();
        let height = self.materialize_at(last + 1, Anchor::Top(bottom))?;
        self.window.cache_last = last + 1;
        Some(height)
    }

    /// Release the topmost cached row, never touching the visible band
    pub(crate) fn shrink_top(&mut self) -> bool {
        let start = self.window.cache_start;
        if start >= self.window.visible_start {
            return false;
        }
        self.release_row(start);
        self.window.cache_start = start + 1;
        true
    }

    /// Release the bottommost cached row, never touching the visible band
    pub(crate) fn shrink_bottom(&mut self) -> bool {
        let last = self.window.cache_last;
        if last <= self.window.visible_last {
            return false;
        }
        self.release_row(last);
        self.window.cache_last = last - 1;
        true
    }
}
