//! Row objects - the recyclable unit materialized for one logical index

use std::fmt;
use std::sync::Arc;

/// Stable identity of a row object for its whole lifetime (across pooling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// Hands out monotonically increasing row ids
#[derive(Debug, Default)]
pub struct RowIdGen {
    next: u64,
}

impl RowIdGen {
    pub fn next_id(&mut self) -> RowId {
        let id = RowId(self.next);
        self.next += 1;
        id
    }
}

/// Identity tag grouping structurally interchangeable rows in the pool
///
/// Cheap to clone: every row carrying the same key shares one allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReuseKey(Arc<str>);

impl ReuseKey {
    pub fn new(key: &str) -> Self {
        Self(Arc::from(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReuseKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for ReuseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placement of a row in content coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RowRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bottom edge (top + height)
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Move the rect vertically by `dy`
    pub fn shifted(self, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            ..self
        }
    }
}

/// Interaction mode of a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    /// Touch selects the row, delete affordance hidden
    #[default]
    Selectable,
    /// Touch disabled, delete affordance shown
    Deletable,
}

/// Which engine callbacks are wired to a row
///
/// A flag is only set when the corresponding delegate capability exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCallbacks {
    pub touch: bool,
    pub delete: bool,
}

/// A materialized row object
///
/// Geometry, index and callbacks are engine-assigned; `content` belongs to the
/// host and survives recycling untouched, so the source can reuse whatever it
/// stored there.
#[derive(Debug)]
pub struct Row<C> {
    id: RowId,
    index: Option<usize>,
    reuse_key: Option<ReuseKey>,
    pub(crate) rect: RowRect,
    pub(crate) mode: RowMode,
    pub(crate) touchable: bool,
    pub(crate) deletable: bool,
    pub(crate) callbacks: RowCallbacks,
    pub content: C,
}

impl<C> Row<C> {
    pub(crate) fn new(id: RowId, reuse_key: Option<ReuseKey>, content: C) -> Self {
        Self {
            id,
            index: None,
            reuse_key,
            rect: RowRect::default(),
            mode: RowMode::default(),
            touchable: true,
            deletable: false,
            callbacks: RowCallbacks::default(),
            content,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// Logical index, `None` while the row sits in the pool
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn reuse_key(&self) -> Option<&ReuseKey> {
        self.reuse_key.as_ref()
    }

    pub fn rect(&self) -> RowRect {
        self.rect
    }

    pub fn top(&self) -> f32 {
        self.rect.top
    }

    pub fn bottom(&self) -> f32 {
        self.rect.bottom()
    }

    pub fn left(&self) -> f32 {
        self.rect.left
    }

    pub fn height(&self) -> f32 {
        self.rect.height
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_touchable(&self) -> bool {
        self.touchable
    }

    /// Whether the delete affordance is currently enabled
    pub fn is_deletable(&self) -> bool {
        self.deletable
    }

    pub fn callbacks(&self) -> RowCallbacks {
        self.callbacks
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Switch between selectable and deletable interaction
    pub(crate) fn apply_mode(&mut self, mode: RowMode) {
        self.mode = mode;
        self.touchable = mode == RowMode::Selectable;
    }

    /// Detach from the window: no index, no callbacks, delete affordance off
    pub(crate) fn reset(&mut self) {
        self.index = None;
        self.callbacks = RowCallbacks::default();
        self.deletable = false;
    }
}
