//! Window bookkeeping - visible and cache bands over the row slots

use super::row::Row;

/// Visible and cache window bounds over the row slots
///
/// Invariant once a reload has completed:
/// `cache_start <= visible_start <= visible_last <= cache_last`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowState {
    /// First row intersecting the viewport
    pub visible_start: usize,
    /// Last row intersecting the viewport
    pub visible_last: usize,
    /// First materialized row
    pub cache_start: usize,
    /// Last materialized row
    pub cache_last: usize,
}

impl WindowState {
    /// Window anchored on a single row
    pub const fn at(index: usize) -> Self {
        Self {
            visible_start: index,
            visible_last: index,
            cache_start: index,
            cache_last: index,
        }
    }

    /// Number of rows in the cache band (materialized rows)
    pub fn cache_len(&self) -> usize {
        self.cache_last - self.cache_start + 1
    }

    /// Number of rows in the visible band
    pub fn visible_len(&self) -> usize {
        self.visible_last - self.visible_start + 1
    }

    pub fn is_visible(&self, index: usize) -> bool {
        (self.visible_start..=self.visible_last).contains(&index)
    }

    pub fn is_cached(&self, index: usize) -> bool {
        (self.cache_start..=self.cache_last).contains(&index)
    }

    /// Rows materialized above the visible band
    pub fn cached_above(&self) -> usize {
        self.visible_start - self.cache_start
    }

    /// Rows materialized below the visible band
    pub fn cached_below(&self) -> usize {
        self.cache_last - self.visible_last
    }

    /// Check band ordering
    pub fn is_ordered(&self) -> bool {
        self.cache_start <= self.visible_start
            && self.visible_start <= self.visible_last
            && self.visible_last <= self.cache_last
    }

    /// Clamp every bound into `[0, row_count)` and restore ordering
    ///
    /// An empty table collapses the window to all zeros.
    pub fn normalize(&mut self, row_count: usize) {
        if row_count == 0 {
            *self = Self::default();
            return;
        }
        let max = row_count - 1;
        self.cache_last = self.cache_last.min(max);
        self.cache_start = self.cache_start.min(self.cache_last);
        self.visible_last = self.visible_last.clamp(self.cache_start, self.cache_last);
        self.visible_start = self.visible_start.clamp(self.cache_start, self.visible_last);
    }

    /// Panic with context if the window is out of order or out of bounds
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, row_count: usize, context: &str) {
        if row_count == 0 {
            assert_eq!(
                *self,
                Self::default(),
                "[{}] empty table must have a zeroed window, got {:?}",
                context,
                self
            );
            return;
        }
        assert!(
            self.is_ordered(),
            "[{}] window out of order: {:?}",
            context,
            self
        );
        assert!(
            self.cache_last < row_count,
            "[{}] cache_last {} beyond row count {}",
            context,
            self.cache_last,
            row_count
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _row_count: usize, _context: &str) {}
}

/// One slot per logical row; a slot holds the row object while materialized
#[derive(Debug)]
pub struct RowSlots<C> {
    slots: Vec<Option<Row<C>>>,
}

impl<C> RowSlots<C> {
    pub fn new(row_count: usize) -> Self {
        let mut slots = Vec::with_capacity(row_count);
        slots.resize_with(row_count, || None);
        Self { slots }
    }

    /// Logical row count this slot array was built for
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row<C>> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row<C>> {
        self.slots.get_mut(index)?.as_mut()
    }

    pub fn is_materialized(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Store a row; out-of-range indices hand the row back
    pub fn insert(&mut self, index: usize, row: Row<C>) -> Result<(), Row<C>> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(row);
                Ok(())
            }
            None => Err(row),
        }
    }

    pub fn take(&mut self, index: usize) -> Option<Row<C>> {
        self.slots.get_mut(index)?.take()
    }

    /// Remove the slot entirely, shifting every later slot down by one
    pub fn remove_slot(&mut self, index: usize) -> Option<Row<C>> {
        if index < self.slots.len() {
            self.slots.remove(index)
        } else {
            None
        }
    }

    /// Materialized rows in slot order
    pub fn rows(&self) -> impl Iterator<Item = &Row<C>> {
        self.slots.iter().flatten()
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row<C>> {
        self.slots.iter_mut().flatten()
    }

    /// Indices of every occupied slot
    pub fn materialized_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
            .collect()
    }

    pub fn materialized_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<C> Default for RowSlots<C> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}
