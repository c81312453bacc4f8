//! Viewport - the clip region rows are windowed against

/// Clip region in content coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset: content y at the top clip line
    pub offset: f32,
    /// Left edge assigned to every row
    pub left: f32,
    /// Width assigned to every row
    pub width: f32,
    /// Height of the clip region
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            offset: 0.0,
            left: 0.0,
            width,
            height,
        }
    }

    /// Top clip line
    pub fn top(&self) -> f32 {
        self.offset
    }

    /// Bottom clip line
    pub fn bottom(&self) -> f32 {
        self.offset + self.height
    }

    /// Whether a vertical span `[top, bottom)` intersects the clip region
    pub fn intersects(&self, top: f32, bottom: f32) -> bool {
        bottom > self.top() && top < self.bottom()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
