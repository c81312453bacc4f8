//! Shared helpers for benchmarks

use std::cell::Cell;
use std::rc::Rc;

use reel::config::{ScrollPolicy, TableConfig};
use reel::messages::{Msg, TableMsg};
use reel::model::{Row, TableView, Viewport};
use reel::source::{EditHandler, RowFactory, RowSource};
use reel::update::update;

const REUSE_KEY: &str = "bench";

/// Label payload, cloned from a prototype on fresh rows
#[derive(Debug, Clone, Default)]
pub struct BenchCell {
    pub label: String,
}

/// Rows with cycling heights so the window edges land off-grid
pub struct BenchSource {
    rows: Rc<Cell<usize>>,
    prototype: BenchCell,
}

impl RowSource for BenchSource {
    type Content = BenchCell;

    fn row_count(&self) -> usize {
        self.rows.get()
    }

    fn height_for_row(&self, index: usize) -> f32 {
        32.0 + (index % 7) as f32 * 6.0
    }

    fn row_for_index(&mut self, rows: &mut RowFactory<'_, BenchCell>, index: usize) -> Row<BenchCell> {
        let mut row = rows
            .dequeue_reusable(REUSE_KEY)
            .unwrap_or_else(|| rows.attach_with_reuse_key(&self.prototype, Some(REUSE_KEY)));
        row.content.label.clear();
        row.content.label.push_str("row ");
        row.content.label.push_str(&index.to_string());
        row
    }

    fn on_row_about_to_release(&mut self, _index: usize) {}
}

/// Drops the deleted row from the shared count
struct BenchEditor {
    rows: Rc<Cell<usize>>,
}

impl EditHandler<BenchCell> for BenchEditor {
    fn on_will_delete_row(&mut self, _index: usize, _row: &Row<BenchCell>) {}

    fn on_did_delete_row(&mut self, _index: usize) {
        self.rows.set(self.rows.get().saturating_sub(1));
    }
}

/// Reloaded table over `rows` rows in a 1080px viewport
#[allow(dead_code)]
pub fn make_table(rows: usize, budget: usize, policy: ScrollPolicy) -> TableView<BenchSource> {
    let config = TableConfig {
        invisible_cell_budget: budget,
        scroll_policy: policy,
        ..TableConfig::default()
    };
    let rows = Rc::new(Cell::new(rows));
    let editor = BenchEditor {
        rows: Rc::clone(&rows),
    };
    let source = BenchSource {
        rows,
        prototype: BenchCell::default(),
    };
    let mut table = TableView::new(source, Viewport::new(1920.0, 1080.0), config)
        .with_edit_handler(Box::new(editor));
    let _ = update(&mut table, Msg::Table(TableMsg::Reload));
    table
}

/// Upper bound for scroll offsets in `table`
#[allow(dead_code)]
pub fn max_offset(table: &TableView<BenchSource>) -> f32 {
    (table.content_height() - table.viewport().height).max(0.0)
}
