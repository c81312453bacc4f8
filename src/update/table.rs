//! Windowing message handler

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::TableMsg;
use crate::model::TableView;
use crate::source::RowSource;

/// Handle scroll, resize, reload and interaction messages
pub fn update_table<S: RowSource>(table: &mut TableView<S>, msg: TableMsg) -> Result<Option<Cmd>> {
    match msg {
        TableMsg::ScrollOffsetChanged(offset) => {
            Ok(table.on_scroll_offset_changed(offset)?.then_some(Cmd::Redraw))
        }
        TableMsg::Resize { width, height } => {
            table.resize(width, height)?;
            Ok(Some(Cmd::Redraw))
        }
        TableMsg::Reload => {
            table.reload()?;
            Ok(Some(Cmd::Redraw))
        }
        TableMsg::ReloadFrom(index) => {
            table.reload_from(index)?;
            Ok(Some(Cmd::Redraw))
        }
        TableMsg::SetEditingMode(editing) => {
            Ok(table.set_editing_mode(editing).then_some(Cmd::Redraw))
        }
        TableMsg::RowTouched(index) => {
            table.touch_row(index);
            Ok(None)
        }
    }
}
