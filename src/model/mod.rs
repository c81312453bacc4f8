//! Table model - the complete state of one windowed list
//!
//! `TableView` owns the row source, the optional delegates, the slot array,
//! the window bounds, the recycle pool and the deletion phase. All state
//! transformations live in `crate::update`.

pub mod deletion;
pub mod pool;
pub mod row;
pub mod viewport;
pub mod window;

pub use deletion::{AnimationToken, DeletionCoordinator, DeletionPhase};
pub use pool::RecyclePool;
pub use row::{ReuseKey, Row, RowCallbacks, RowId, RowIdGen, RowMode, RowRect};
pub use viewport::Viewport;
pub use window::{RowSlots, WindowState};

use crate::config::TableConfig;
use crate::source::{EditHandler, RowFactory, RowSource, SelectionHandler};

/// A virtualized list driven by scroll offset samples
pub struct TableView<S: RowSource> {
    pub(crate) source: S,
    pub(crate) selection: Option<Box<dyn SelectionHandler>>,
    pub(crate) editor: Option<Box<dyn EditHandler<S::Content>>>,
    pub(crate) config: TableConfig,
    pub(crate) viewport: Viewport,
    pub(crate) slots: RowSlots<S::Content>,
    pub(crate) window: WindowState,
    pub(crate) pool: RecyclePool<S::Content>,
    pub(crate) ids: RowIdGen,
    pub(crate) deletion: DeletionCoordinator,
    /// Mode applied to every row, current and future
    pub(crate) mode: RowMode,
    /// Offset seen by the last accepted scroll notification
    pub(crate) last_offset: f32,
    /// Sum of row heights as of the last reload, minus deletions since
    pub(crate) content_height: f32,
}

impl<S: RowSource> TableView<S> {
    /// Create an empty table; nothing is materialized until `reload`
    pub fn new(source: S, viewport: Viewport, config: TableConfig) -> Self {
        Self {
            source,
            selection: None,
            editor: None,
            pool: RecyclePool::new(config.max_reusable_count),
            config,
            last_offset: viewport.offset,
            viewport,
            slots: RowSlots::default(),
            window: WindowState::default(),
            ids: RowIdGen::default(),
            deletion: DeletionCoordinator::default(),
            mode: RowMode::default(),
            content_height: 0.0,
        }
    }

    pub fn with_selection_handler(mut self, handler: Box<dyn SelectionHandler>) -> Self {
        self.selection = Some(handler);
        self
    }

    pub fn with_edit_handler(mut self, handler: Box<dyn EditHandler<S::Content>>) -> Self {
        self.editor = Some(handler);
        self
    }

    /// Replace the selection delegate
    ///
    /// Rows pick up the touch callback when next materialized, so set this
    /// before `reload`.
    pub fn set_selection_handler(&mut self, handler: Option<Box<dyn SelectionHandler>>) {
        self.selection = handler;
    }

    /// Replace the edit delegate; takes effect on the next `reload`
    pub fn set_edit_handler(&mut self, handler: Option<Box<dyn EditHandler<S::Content>>>) {
        self.editor = handler;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    pub fn pool(&self) -> &RecyclePool<S::Content> {
        &self.pool
    }

    /// Number of logical rows as of the last reload
    pub fn row_count(&self) -> usize {
        self.slots.len()
    }

    pub fn materialized_count(&self) -> usize {
        self.slots.materialized_count()
    }

    /// Materialized rows in index order
    pub fn rows(&self) -> impl Iterator<Item = &Row<S::Content>> {
        self.slots.rows()
    }

    /// The materialized row currently assigned `index`, if any
    pub fn row_at(&self, index: usize) -> Option<&Row<S::Content>> {
        self.slots.rows().find(|row| row.index() == Some(index))
    }

    pub fn editing(&self) -> bool {
        self.mode == RowMode::Deletable
    }

    pub fn deletion_phase(&self) -> DeletionPhase {
        self.deletion.phase()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Scroll position as a fraction of the scrollable range, in `[0, 1]`
    pub fn scroll_fraction(&self) -> f32 {
        let range = self.content_height - self.viewport.height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.viewport.offset / range).clamp(0.0, 1.0)
    }

    /// Oldest pooled row registered under `key`
    pub fn dequeue_reusable(&mut self, key: &str) -> Option<Row<S::Content>> {
        RowFactory::new(&mut self.pool, &mut self.ids).dequeue_reusable(key)
    }

    /// Fresh row built from `prototype`, registering `key` with the pool
    pub fn attach_with_reuse_key(
        &mut self,
        prototype: &S::Content,
        key: Option<&str>,
    ) -> Row<S::Content>
    where
        S::Content: Clone,
    {
        RowFactory::new(&mut self.pool, &mut self.ids).attach_with_reuse_key(prototype, key)
    }

    /// Change the pool cap; evicted rows are handed to the source to destroy
    pub fn set_max_reusable_count(&mut self, capacity: usize) {
        self.config.max_reusable_count = capacity;
        for row in self.pool.set_capacity(capacity) {
            tracing::trace!(target: "pool", row = %row.id(), "evicted");
            self.source.destroy_row(row);
        }
    }

    /// Check window, slot and pool consistency (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let row_count = self.slots.len();
        self.window
            .assert_invariants_with_context(row_count, context);
        assert!(
            self.pool.len() <= self.pool.capacity(),
            "[{}] pool holds {} rows over capacity {}",
            context,
            self.pool.len(),
            self.pool.capacity()
        );
        if row_count == 0 {
            assert_eq!(
                self.slots.materialized_count(),
                0,
                "[{}] empty table has materialized rows",
                context
            );
            return;
        }
        let expected: Vec<usize> = (self.window.cache_start..=self.window.cache_last).collect();
        assert_eq!(
            self.slots.materialized_indices(),
            expected,
            "[{}] materialized slots do not match cache band {:?}",
            context,
            self.window
        );
        for index in expected {
            let assigned = self.slots.get(index).and_then(Row::index);
            assert_eq!(
                assigned,
                Some(index),
                "[{}] slot {} holds a row assigned {:?}",
                context,
                index,
                assigned
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}

impl<S: RowSource + std::fmt::Debug> std::fmt::Debug for TableView<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("source", &self.source)
            .field("viewport", &self.viewport)
            .field("window", &self.window)
            .field("row_count", &self.slots.len())
            .field("pooled", &self.pool.len())
            .field("mode", &self.mode)
            .field("deletion", &self.deletion.phase())
            .finish()
    }
}
