//! Table simulator
//!
//! Builds a table over synthetic rows, optionally deletes one row through the
//! full confirm/animate/finish cycle, sweeps the scroll offset from top to
//! bottom one frame at a time and reports what the window and pool did.
//!
//! Usage:
//!   reel --rows 5000 --row-height 44 --viewport 800
//!   RUST_LOG=window=debug reel --rows 20 --delete 10 --json

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use reel::cli::{CliArgs, SimConfig};
use reel::messages::{DeleteMsg, Msg, TableMsg};
use reel::model::{AnimationToken, Row, TableView, Viewport};
use reel::source::{EditHandler, RowFactory, RowSource};
use reel::update::update;
use reel::Cmd;

const REUSE_KEY: &str = "cell";

/// Content carried by every simulated row
#[derive(Debug, Clone, Default)]
struct Cell {
    label: String,
}

/// Backing data shared between the source and the edit delegate
type Items = Rc<RefCell<Vec<String>>>;

struct SyntheticSource {
    items: Items,
    row_height: f32,
    prototype: Cell,
    created: usize,
    reused: usize,
    destroyed: usize,
}

impl RowSource for SyntheticSource {
    type Content = Cell;

    fn row_count(&self) -> usize {
        self.items.borrow().len()
    }

    fn height_for_row(&self, _index: usize) -> f32 {
        self.row_height
    }

    fn row_for_index(&mut self, rows: &mut RowFactory<'_, Cell>, index: usize) -> Row<Cell> {
        let mut row = match rows.dequeue_reusable(REUSE_KEY) {
            Some(row) => {
                self.reused += 1;
                row
            }
            None => {
                self.created += 1;
                rows.attach_with_reuse_key(&self.prototype, Some(REUSE_KEY))
            }
        };
        row.content.label = self
            .items
            .borrow()
            .get(index)
            .cloned()
            .unwrap_or_default();
        row
    }

    fn on_row_about_to_release(&mut self, _index: usize) {}

    fn destroy_row(&mut self, row: Row<Cell>) {
        self.destroyed += 1;
        drop(row);
    }
}

/// Confirms every deletion request on the next tick
struct AutoConfirm {
    items: Items,
    pending: Rc<RefCell<Option<usize>>>,
}

impl EditHandler<Cell> for AutoConfirm {
    fn on_will_delete_row(&mut self, index: usize, row: &Row<Cell>) {
        tracing::info!(index, label = %row.content.label, "deleting row");
        *self.pending.borrow_mut() = Some(index);
    }

    fn on_did_delete_row(&mut self, index: usize) {
        let mut items = self.items.borrow_mut();
        if index < items.len() {
            items.remove(index);
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct DeletionReport {
    index: usize,
    rows_slid: usize,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    rows: usize,
    frames: usize,
    window_moves: usize,
    peak_materialized: usize,
    peak_pooled: usize,
    rows_created: usize,
    rows_reused: usize,
    rows_destroyed: usize,
    content_height: f32,
    final_visible: (usize, usize),
    final_cache: (usize, usize),
    deletion: Option<DeletionReport>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    reel::tracing::init();

    let config = args.into_config().map_err(anyhow::Error::msg)?;
    let summary = simulate(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn simulate(config: &SimConfig) -> Result<Summary> {
    let items: Items = Rc::new(RefCell::new(
        (0..config.rows).map(|i| format!("Row {}", i)).collect(),
    ));
    let pending = Rc::new(RefCell::new(None));

    let source = SyntheticSource {
        items: Rc::clone(&items),
        row_height: config.row_height,
        prototype: Cell::default(),
        created: 0,
        reused: 0,
        destroyed: 0,
    };
    let editor = AutoConfirm {
        items: Rc::clone(&items),
        pending: Rc::clone(&pending),
    };
    let viewport = Viewport::new(320.0, config.viewport_height);
    let mut table = TableView::new(source, viewport, config.table.clone())
        .with_edit_handler(Box::new(editor));

    let mut summary = Summary::default();
    update(&mut table, Msg::Table(TableMsg::Reload)).context("initial reload")?;
    observe(&table, &mut summary);

    if let Some(index) = config.delete {
        summary.deletion = Some(delete_row(&mut table, &pending, index, config.row_height)?);
        observe(&table, &mut summary);
    }

    let max_offset = (table.content_height() - config.viewport_height).max(0.0);
    let mut offset = table.viewport().offset;
    while offset < max_offset {
        offset = (offset + config.step).min(max_offset);
        let cmd = update(&mut table, Msg::Table(TableMsg::ScrollOffsetChanged(offset)))
            .context("scroll")?;
        summary.frames += 1;
        if cmd.is_some() {
            summary.window_moves += 1;
        }
        observe(&table, &mut summary);
    }

    let window = table.window();
    summary.rows = table.row_count();
    summary.content_height = table.content_height();
    summary.final_visible = (window.visible_start, window.visible_last);
    summary.final_cache = (window.cache_start, window.cache_last);
    summary.rows_created = table.source().created;
    summary.rows_reused = table.source().reused;
    summary.rows_destroyed = table.source().destroyed;
    Ok(summary)
}

/// Scroll `index` into view and run one deletion to completion
fn delete_row(
    table: &mut TableView<SyntheticSource>,
    pending: &Rc<RefCell<Option<usize>>>,
    index: usize,
    row_height: f32,
) -> Result<DeletionReport> {
    let max_offset = (table.content_height() - table.viewport().height).max(0.0);
    let target = (index as f32 * row_height).min(max_offset);
    if target > table.viewport().offset {
        update(table, Msg::Table(TableMsg::ScrollOffsetChanged(target)))?;
    }
    update(table, Msg::Table(TableMsg::SetEditingMode(true)))?;
    update(table, Msg::Delete(DeleteMsg::Request(index)))?;

    let Some(confirmed) = pending.borrow_mut().take() else {
        anyhow::bail!("row {} could not be deleted", index);
    };
    let token = AnimationToken(1);
    let cmd = update(
        table,
        Msg::Delete(DeleteMsg::Confirm {
            index: confirmed,
            token,
        }),
    )?;
    let token = cmd
        .and_then(|cmd| cmd.animation_token())
        .context("confirmation did not request an animation")?;

    let cmd = update(table, Msg::Delete(DeleteMsg::AnimationFinished(token)))?;
    let rows_slid = cmd.as_ref().map_or(0, Cmd::slid_rows);
    update(table, Msg::Table(TableMsg::SetEditingMode(false)))?;

    Ok(DeletionReport { index, rows_slid })
}

fn observe(table: &TableView<SyntheticSource>, summary: &mut Summary) {
    summary.peak_materialized = summary.peak_materialized.max(table.materialized_count());
    summary.peak_pooled = summary.peak_pooled.max(table.pool().len());
}

fn print_summary(summary: &Summary) {
    println!("reel simulation");
    println!("===============");
    println!("Rows:              {}", summary.rows);
    println!("Frames:            {}", summary.frames);
    println!("Window moves:      {}", summary.window_moves);
    println!("Peak materialized: {}", summary.peak_materialized);
    println!("Peak pooled:       {}", summary.peak_pooled);
    println!(
        "Rows created/reused/destroyed: {}/{}/{}",
        summary.rows_created, summary.rows_reused, summary.rows_destroyed
    );
    println!("Content height:    {:.1}", summary.content_height);
    println!(
        "Final window:      visible {}..={}, cache {}..={}",
        summary.final_visible.0, summary.final_visible.1, summary.final_cache.0, summary.final_cache.1
    );
    if let Some(deletion) = &summary.deletion {
        println!(
            "Deleted row {} ({} rows slid up)",
            deletion.index, deletion.rows_slid
        );
    }
}
