//! Recycle pool tests - identity, capacity, keyless rows

mod common;

use common::{interactive_table, scroll_to, table, table_with, TestCell, TestSource, REUSE_KEY};
use reel::config::TableConfig;
use reel::model::{ReuseKey, RowCallbacks};

fn with_pool(capacity: usize) -> TableConfig {
    TableConfig {
        max_reusable_count: capacity,
        ..common::config(6)
    }
}

/// Release every row by reloading over an empty data set
fn empty_out(table: &mut reel::TableView<TestSource>) {
    table.source().heights.borrow_mut().clear();
    table.reload().unwrap();
}

// ========================================================================
// Identity
// ========================================================================

#[test]
fn test_released_row_comes_back_as_same_object() {
    let mut table = interactive_table(100, 50.0, 300.0, 6);
    let first = table.row_at(0).unwrap().id();
    empty_out(&mut table);

    let row = table.dequeue_reusable(REUSE_KEY).unwrap();

    assert_eq!(row.id(), first);
    assert_eq!(row.index(), None);
    assert!(row.callbacks() == RowCallbacks::default());
    assert!(!row.is_deletable());
    // Content survives recycling untouched
    assert_eq!(row.content.bound_to, Some(0));
}

#[test]
fn test_scrolling_reuses_row_released_at_top() {
    let mut table = table(100, 50.0, 300.0, 6);
    let first = table.row_at(0).unwrap().id();

    scroll_to(&mut table, 200.0);

    let reused = table.row_at(12).unwrap();
    assert_eq!(reused.id(), first);
    assert_eq!(reused.index(), Some(12));
    assert_eq!(reused.content.bound_to, Some(12));
    assert_eq!(reused.top(), 600.0);
    assert!(table.row_at(0).is_none());
}

#[test]
fn test_pool_is_fifo() {
    let mut table = table(100, 50.0, 300.0, 6);
    let ids: Vec<_> = table.rows().map(|row| row.id()).collect();
    empty_out(&mut table);

    let a = table.dequeue_reusable(REUSE_KEY).unwrap();
    let b = table.dequeue_reusable(REUSE_KEY).unwrap();

    assert_eq!(a.id(), ids[0]);
    assert_eq!(b.id(), ids[1]);
}

#[test]
fn test_unknown_key_dequeues_nothing() {
    let mut table = table(100, 50.0, 300.0, 6);
    empty_out(&mut table);

    assert!(table.dequeue_reusable("header").is_none());
    assert_eq!(table.pool().len(), 8);
}

// ========================================================================
// Capacity
// ========================================================================

#[test]
fn test_pool_capacity_caps_released_rows() {
    let mut table = table(100, 50.0, 300.0, 6);
    table.source().clear_events();

    empty_out(&mut table);

    assert_eq!(table.pool().len(), 8);
    assert_eq!(table.source().released().len(), 9);
    assert_eq!(table.source().destroyed().len(), 1);
}

#[test]
fn test_pool_never_exceeds_capacity_while_scrolling() {
    let mut table = table_with(TestSource::uniform(200, 50.0), 300.0, with_pool(2));

    let mut offset = 0.0;
    while offset < 9000.0 {
        offset += 130.0;
        scroll_to(&mut table, offset);
        assert!(table.pool().len() <= 2);
    }
    while offset > 0.0 {
        offset -= 410.0;
        scroll_to(&mut table, offset.max(0.0));
        assert!(table.pool().len() <= 2);
    }
}

#[test]
fn test_zero_capacity_destroys_every_release() {
    let mut table = table_with(TestSource::uniform(100, 50.0), 300.0, with_pool(0));
    table.source().clear_events();

    scroll_to(&mut table, 2000.0);

    assert!(table.pool().is_empty());
    assert_eq!(table.source().reused_count(), 0);
    assert_eq!(table.source().destroyed().len(), 37);
}

#[test]
fn test_keyless_rows_are_never_pooled() {
    let mut table = table_with(
        TestSource::uniform(100, 50.0).keyless(),
        300.0,
        common::config(6),
    );
    table.source().clear_events();

    scroll_to(&mut table, 2000.0);

    assert!(table.pool().is_empty());
    assert_eq!(
        table.source().destroyed().len(),
        table.source().released().len()
    );
}

#[test]
fn test_shrinking_capacity_evicts_to_source() {
    let mut table = table(100, 50.0, 300.0, 6);
    empty_out(&mut table);
    table.source().clear_events();

    table.set_max_reusable_count(3);

    assert_eq!(table.pool().len(), 3);
    assert_eq!(table.pool().capacity(), 3);
    assert_eq!(table.config().max_reusable_count, 3);
    assert_eq!(table.source().destroyed().len(), 5);
}

// ========================================================================
// Registration
// ========================================================================

#[test]
fn test_attach_registers_reuse_key() {
    let mut table = table(10, 50.0, 300.0, 6);
    let existing: Vec<_> = table.rows().map(|row| row.id()).collect();

    let row = table.attach_with_reuse_key(&TestCell::default(), Some("header"));

    assert!(table.pool().is_registered(&ReuseKey::new("header")));
    assert!(!existing.contains(&row.id()));
    assert_eq!(row.index(), None);
    assert!(table.dequeue_reusable("header").is_none());
}

#[test]
fn test_keyless_attach_registers_nothing() {
    let mut table = table(10, 50.0, 300.0, 6);

    let row = table.attach_with_reuse_key(&TestCell::default(), None);

    assert!(row.reuse_key().is_none());
    assert!(table.pool().is_registered(&ReuseKey::new(REUSE_KEY)));
    assert!(!table.pool().is_registered(&ReuseKey::new("")));
}
