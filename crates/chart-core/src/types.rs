// File: crates/chart-core/src/types.rs
// Summary: Shared sizes and paddings for the price chart surface.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 700;
/// Points per line above which series are downsampled before drawing.
pub const MAX_POINTS: usize = 2000;

/// Screen margins around the plot rectangle, in pixels.
/// Top leaves room for the title, bottom for date ticks and the x label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(84, 32, 64, 72)
    }
}
