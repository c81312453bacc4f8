//! Editing mode and row touches

use crate::model::{RowMode, TableView};
use crate::source::RowSource;

impl<S: RowSource> TableView<S> {
    /// Switch every row between selectable and deletable
    ///
    /// Returns false if the table was already in the requested mode.
    pub fn set_editing_mode(&mut self, editing: bool) -> bool {
        let mode = if editing {
            RowMode::Deletable
        } else {
            RowMode::Selectable
        };
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        for row in self.slots.rows_mut() {
            row.apply_mode(mode);
        }
        tracing::debug!(target: "rows", editing, "editing mode changed");
        true
    }

    /// Forward a touch on row `index` to the selection delegate
    ///
    /// Ignored unless the row is visible, on screen, touchable and no
    /// deletion is in flight. Returns whether the delegate was called.
    pub fn touch_row(&mut self, index: usize) -> bool {
        if !self.deletion.is_idle() || !self.window.is_visible(index) {
            return false;
        }
        let Some(handler) = self.selection.as_mut() else {
            return false;
        };
        let viewport = self.viewport;
        let touchable = self.slots.get(index).is_some_and(|row| {
            row.is_touchable()
                && row.callbacks().touch
                && viewport.intersects(row.top(), row.bottom())
        });
        if !touchable {
            return false;
        }
        handler.on_row_selected(index);
        true
    }
}
