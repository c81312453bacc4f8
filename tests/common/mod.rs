//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use reel::commands::Cmd;
use reel::config::{ScrollPolicy, TableConfig};
use reel::messages::{DeleteMsg, Msg, TableMsg};
use reel::model::{AnimationToken, Row, RowId, TableView, Viewport};
use reel::source::{EditHandler, RowFactory, RowSource, SelectionHandler};
use reel::update::update;

pub const REUSE_KEY: &str = "cell";

/// Everything the collaborators observed, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Built {
        index: usize,
        row: RowId,
        reused: bool,
    },
    Released(usize),
    Destroyed(RowId),
    Selected(usize),
    WillDelete(usize),
    DidDelete(usize),
}

pub type Log = Rc<RefCell<Vec<Event>>>;
pub type Heights = Rc<RefCell<Vec<f32>>>;

/// Host payload: which data row the source last bound this row to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCell {
    pub bound_to: Option<usize>,
}

/// Row source over a shared height list that records every callback
pub struct TestSource {
    pub heights: Heights,
    pub log: Log,
    pub reuse_key: Option<&'static str>,
}

impl TestSource {
    pub fn uniform(row_count: usize, row_height: f32) -> Self {
        Self::with_heights(vec![row_height; row_count])
    }

    pub fn with_heights(heights: Vec<f32>) -> Self {
        Self {
            heights: Rc::new(RefCell::new(heights)),
            log: Rc::new(RefCell::new(Vec::new())),
            reuse_key: Some(REUSE_KEY),
        }
    }

    /// Rows built without a reuse key are never pooled
    pub fn keyless(mut self) -> Self {
        self.reuse_key = None;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.log.borrow_mut().clear();
    }

    /// Indices built since the last clear
    pub fn built(&self) -> Vec<usize> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Built { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Indices released since the last clear
    pub fn released(&self) -> Vec<usize> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Released(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn destroyed(&self) -> Vec<RowId> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Destroyed(row) => Some(*row),
                _ => None,
            })
            .collect()
    }

    pub fn reused_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Built { reused: true, .. }))
            .count()
    }
}

impl RowSource for TestSource {
    type Content = TestCell;

    fn row_count(&self) -> usize {
        self.heights.borrow().len()
    }

    fn height_for_row(&self, index: usize) -> f32 {
        self.heights.borrow().get(index).copied().unwrap_or(0.0)
    }

    fn row_for_index(&mut self, rows: &mut RowFactory<'_, TestCell>, index: usize) -> Row<TestCell> {
        let pooled = self.reuse_key.and_then(|key| rows.dequeue_reusable(key));
        let reused = pooled.is_some();
        let mut row =
            pooled.unwrap_or_else(|| rows.attach_with_reuse_key(&TestCell::default(), self.reuse_key));
        row.content.bound_to = Some(index);
        self.log.borrow_mut().push(Event::Built {
            index,
            row: row.id(),
            reused,
        });
        row
    }

    fn on_row_about_to_release(&mut self, index: usize) {
        self.log.borrow_mut().push(Event::Released(index));
    }

    fn destroy_row(&mut self, row: Row<TestCell>) {
        self.log.borrow_mut().push(Event::Destroyed(row.id()));
    }
}

pub struct RecordingSelection {
    pub log: Log,
}

impl SelectionHandler for RecordingSelection {
    fn on_row_selected(&mut self, index: usize) {
        self.log.borrow_mut().push(Event::Selected(index));
    }
}

/// Edit delegate that drops the row from the shared data on completion
pub struct RecordingEditor {
    pub log: Log,
    pub heights: Heights,
}

impl EditHandler<TestCell> for RecordingEditor {
    fn on_will_delete_row(&mut self, index: usize, row: &Row<TestCell>) {
        assert_eq!(row.index(), Some(index));
        self.log.borrow_mut().push(Event::WillDelete(index));
    }

    fn on_did_delete_row(&mut self, index: usize) {
        self.heights.borrow_mut().remove(index);
        self.log.borrow_mut().push(Event::DidDelete(index));
    }
}

pub fn config(budget: usize) -> TableConfig {
    TableConfig {
        invisible_cell_budget: budget,
        ..TableConfig::default()
    }
}

pub fn per_frame(budget: usize) -> TableConfig {
    TableConfig {
        scroll_policy: ScrollPolicy::PerFrame,
        ..config(budget)
    }
}

/// Reloaded table over `row_count` rows of equal height, no delegates
pub fn table(
    row_count: usize,
    row_height: f32,
    viewport_height: f32,
    budget: usize,
) -> TableView<TestSource> {
    table_with(
        TestSource::uniform(row_count, row_height),
        viewport_height,
        config(budget),
    )
}

pub fn table_with(
    source: TestSource,
    viewport_height: f32,
    config: TableConfig,
) -> TableView<TestSource> {
    let mut table = TableView::new(source, Viewport::new(320.0, viewport_height), config);
    update(&mut table, Msg::Table(TableMsg::Reload)).unwrap();
    table
}

/// Reloaded table with selection and edit delegates sharing the source log
pub fn interactive_table(
    row_count: usize,
    row_height: f32,
    viewport_height: f32,
    budget: usize,
) -> TableView<TestSource> {
    interactive_table_with(
        TestSource::uniform(row_count, row_height),
        viewport_height,
        config(budget),
    )
}

pub fn interactive_table_with(
    source: TestSource,
    viewport_height: f32,
    config: TableConfig,
) -> TableView<TestSource> {
    let selection = RecordingSelection {
        log: Rc::clone(&source.log),
    };
    let editor = RecordingEditor {
        log: Rc::clone(&source.log),
        heights: Rc::clone(&source.heights),
    };
    let mut table = TableView::new(source, Viewport::new(320.0, viewport_height), config)
        .with_selection_handler(Box::new(selection))
        .with_edit_handler(Box::new(editor));
    update(&mut table, Msg::Table(TableMsg::Reload)).unwrap();
    table
}

pub fn scroll_to(table: &mut TableView<TestSource>, offset: f32) -> Option<Cmd> {
    update(table, Msg::Table(TableMsg::ScrollOffsetChanged(offset))).unwrap()
}

/// `(visible_start, visible_last, cache_start, cache_last)`
pub fn bounds(table: &TableView<TestSource>) -> (usize, usize, usize, usize) {
    let w = table.window();
    (w.visible_start, w.visible_last, w.cache_start, w.cache_last)
}

/// Run one deletion through request, confirm and finish
///
/// Returns the confirm command and the finish command.
pub fn delete_row(table: &mut TableView<TestSource>, index: usize) -> (Cmd, Cmd) {
    update(table, Msg::Table(TableMsg::SetEditingMode(true))).unwrap();
    update(table, Msg::Delete(DeleteMsg::Request(index))).unwrap();
    let token = AnimationToken(index as u64 + 100);
    let played = update(table, Msg::Delete(DeleteMsg::Confirm { index, token }))
        .unwrap()
        .unwrap();
    let finished = update(table, Msg::Delete(DeleteMsg::AnimationFinished(token)))
        .unwrap()
        .unwrap();
    (played, finished)
}

/// Every materialized row's index matches its position and rows tile
/// without gaps
pub fn assert_contiguous(table: &TableView<TestSource>) {
    let rows: Vec<_> = table.rows().collect();
    for pair in rows.windows(2) {
        assert_eq!(
            pair[0].index().map(|i| i + 1),
            pair[1].index(),
            "rows out of sequence"
        );
        assert!(
            (pair[0].bottom() - pair[1].top()).abs() < 0.05,
            "gap between row {:?} and {:?}",
            pair[0].index(),
            pair[1].index()
        );
    }
}
