//! Collaborator interfaces - the row source and the optional delegates
//!
//! The row source is required; selection and editing are optional
//! capabilities held as `Option<Box<dyn ...>>` by the table. A missing
//! capability means "not supported", never a failure.

use crate::model::pool::RecyclePool;
use crate::model::row::{ReuseKey, Row, RowIdGen};

/// Supplies row count, heights and row objects
///
/// Typical `row_for_index`:
///
/// ```ignore
/// fn row_for_index(&mut self, rows: &mut RowFactory<'_, Cell>, index: usize) -> Row<Cell> {
///     let mut row = rows
///         .dequeue_reusable("cell")
///         .unwrap_or_else(|| rows.attach_with_reuse_key(&self.prototype, Some("cell")));
///     row.content.title = self.items[index].clone();
///     row
/// }
/// ```
pub trait RowSource {
    /// Host payload carried by every row object
    type Content;

    fn row_count(&self) -> usize;

    fn height_for_row(&self, index: usize) -> f32;

    /// Produce the row object for `index`, pool-first through `rows`
    ///
    /// Only content is the source's business; index, geometry and callbacks
    /// are assigned by the table afterward.
    fn row_for_index(
        &mut self,
        rows: &mut RowFactory<'_, Self::Content>,
        index: usize,
    ) -> Row<Self::Content>;

    /// The row at `index` is about to leave the window; release its resources
    fn on_row_about_to_release(&mut self, index: usize);

    /// Final destination of a row the pool would not take
    fn destroy_row(&mut self, row: Row<Self::Content>) {
        drop(row);
    }
}

/// Selection capability
pub trait SelectionHandler {
    /// A row inside the visible window was touched
    fn on_row_selected(&mut self, index: usize);
}

/// Edit capability
pub trait EditHandler<C> {
    /// The delete affordance of `row` was pressed
    ///
    /// Must eventually lead to `TableView::confirm_delete` (or
    /// `cancel_delete`).
    fn on_will_delete_row(&mut self, index: usize, row: &Row<C>);

    /// The row is gone from the window; drop it from the backing data now
    fn on_did_delete_row(&mut self, index: usize);
}

/// Pool-first row construction handed to the row source
pub struct RowFactory<'a, C> {
    pool: &'a mut RecyclePool<C>,
    ids: &'a mut RowIdGen,
}

impl<'a, C> RowFactory<'a, C> {
    pub(crate) fn new(pool: &'a mut RecyclePool<C>, ids: &'a mut RowIdGen) -> Self {
        Self { pool, ids }
    }

    /// Oldest pooled row for `key`, if any
    pub fn dequeue_reusable(&mut self, key: &str) -> Option<Row<C>> {
        let row = self.pool.take(&ReuseKey::new(key))?;
        tracing::trace!(target: "pool", row = %row.id(), key, "reused");
        Some(row)
    }

    /// Build a fresh row owning `content`
    ///
    /// With `key == None` the row is never pooled and is destroyed on release.
    pub fn attach(&mut self, content: C, key: Option<&str>) -> Row<C> {
        let reuse_key = key.map(ReuseKey::new);
        if let Some(key) = &reuse_key {
            self.pool.register(key);
        }
        let row = Row::new(self.ids.next_id(), reuse_key, content);
        tracing::trace!(target: "pool", row = %row.id(), ?key, "attached");
        row
    }

    /// Build a fresh row from a prototype's content
    pub fn attach_with_reuse_key(&mut self, prototype: &C, key: Option<&str>) -> Row<C>
    where
        C: Clone,
    {
        self.attach(prototype.clone(), key)
    }
}
