//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod delete;
mod edit;
mod reload;
mod rows;
mod scroll;
mod table;

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::Msg;
use crate::model::TableView;
use crate::source::RowSource;

#[cfg(debug_assertions)]
use crate::tracing::WindowSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use delete::update_delete;
pub use table::update_table;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<S: RowSource>(table: &mut TableView<S>, msg: Msg) -> Result<Option<Cmd>> {
    #[cfg(debug_assertions)]
    {
        update_traced(table, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(table, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<S: RowSource>(table: &mut TableView<S>, msg: Msg) -> Result<Option<Cmd>> {
    match msg {
        Msg::Table(m) => table::update_table(table, m),
        Msg::Delete(m) => delete::update_delete(table, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after window state, logs diffs and rejections, and checks
/// table invariants after every message. Scroll samples arrive every frame
/// and are not logged.
#[cfg(debug_assertions)]
fn update_traced<S: RowSource>(table: &mut TableView<S>, msg: Msg) -> Result<Option<Cmd>> {
    use crate::messages::TableMsg;

    let is_noisy = matches!(&msg, Msg::Table(TableMsg::ScrollOffsetChanged(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = WindowSnapshot::from_table(table);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(table, msg);

    let after = WindowSnapshot::from_table(table);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "window", %diff, "state changed");
    }

    if let Err(e) = &result {
        tracing::warn!(target: "message", msg = %msg_name, error = %e, "rejected");
    }

    table.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Table::ScrollOffsetChanged(120.0)`
/// - `Delete::Request(4)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Table(m) => format!("Table::{:?}", m),
        Msg::Delete(m) => format!("Delete::{:?}", m),
    }
}
