//! Segmented volume bar model.
//!
//! The bar is `bar_count` equal slots laid out horizontally. Each slot is
//! `width / bar_count` wide and holds one segment of half that width, centered
//! in the slot:
//!
//! ```text
//! |  ██  |  ██  |  ██  |  ░░  |  ░░  |
//!  ^ slot = 2 * segment width
//! ```
//!
//! A segment is active when its index is `<= round(bar_count * volume)`. The
//! comparison is inclusive, so the boundary segment lights up as well (a bar
//! at zero volume still shows its first segment).

use libm::roundf;

/// Default number of segments.
pub const DEFAULT_BAR_COUNT: usize = 20;

/// Corner radius of each segment, in pixels.
pub const SEGMENT_CORNER_RADIUS: f32 = 2.0;

/// One segment of the bar, positioned along the bar's width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Zero-based segment index, left to right.
    pub index: usize,
    /// Left edge relative to the bar's left edge.
    pub left: f32,
    /// Segment width.
    pub width: f32,
    /// Whether the segment is drawn in the active color.
    pub active: bool,
}

/// Rendering model for a bar with a fixed segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarModel {
    bar_count: usize,
}

impl Default for BarModel {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_COUNT)
    }
}

impl BarModel {
    /// Create a model with `bar_count` segments (must be at least one).
    pub fn new(bar_count: usize) -> Self {
        debug_assert!(bar_count > 0, "bar count must be at least 1");
        Self { bar_count }
    }

    /// Number of segments.
    #[inline]
    pub fn bar_count(&self) -> usize {
        self.bar_count
    }

    /// `round(bar_count * volume)`, floored at zero.
    ///
    /// Non-finite volumes count as zero.
    pub fn active_bars(&self, volume: f32) -> usize {
        if !volume.is_finite() {
            return 0;
        }
        let scaled = roundf(self.bar_count as f32 * volume);
        if scaled <= 0.0 { 0 } else { scaled as usize }
    }

    /// Whether segment `index` is active for the given active-bar count.
    #[inline]
    pub fn is_active(index: usize, active_bars: usize) -> bool {
        index <= active_bars
    }

    /// Number of segments drawn active at `volume`.
    pub fn lit_count(&self, volume: f32) -> usize {
        (self.active_bars(volume) + 1).min(self.bar_count)
    }

    /// Width of one segment for a bar `total_width` wide.
    #[inline]
    pub fn segment_width(&self, total_width: f32) -> f32 {
        total_width / (2.0 * self.bar_count as f32)
    }

    /// Lay out every segment for a bar `total_width` wide at `volume`.
    pub fn segments(&self, total_width: f32, volume: f32) -> impl Iterator<Item = Segment> {
        let width = self.segment_width(total_width);
        let active_bars = self.active_bars(volume);
        (0..self.bar_count).map(move |index| Segment {
            index,
            left: index as f32 * width * 2.0 + width / 2.0,
            width,
            active: Self::is_active(index, active_bars),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_volume_twenty_bars() {
        let bar = BarModel::new(20);
        assert_eq!(bar.active_bars(0.5), 10);
        assert_eq!(bar.lit_count(0.5), 11);
        let lit = bar.segments(400.0, 0.5).filter(|s| s.active).count();
        assert_eq!(lit, 11);
    }

    #[test]
    fn test_zero_volume_lights_first_segment() {
        let bar = BarModel::default();
        assert_eq!(bar.active_bars(0.0), 0);
        let segments: Vec<_> = bar.segments(200.0, 0.0).collect();
        assert!(segments[0].active);
        assert!(segments[1..].iter().all(|s| !s.active));
    }

    #[test]
    fn test_full_volume_lights_everything() {
        let bar = BarModel::new(20);
        assert_eq!(bar.active_bars(1.0), 20);
        assert_eq!(bar.lit_count(1.0), 20);
        assert!(bar.segments(200.0, 1.0).all(|s| s.active));
    }

    #[test]
    fn test_rounding_half_up() {
        let bar = BarModel::new(10);
        assert_eq!(bar.active_bars(0.25), 3);
        assert_eq!(bar.active_bars(0.24), 2);
    }

    #[test]
    fn test_negative_and_nan_volume() {
        let bar = BarModel::new(10);
        assert_eq!(bar.active_bars(-0.5), 0);
        assert_eq!(bar.active_bars(f32::NAN), 0);
    }

    #[test]
    fn test_segment_geometry() {
        let bar = BarModel::new(20);
        let segments: Vec<_> = bar.segments(400.0, 0.0).collect();
        assert_eq!(segments.len(), 20);
        assert_eq!(segments[0].width, 10.0);
        assert_eq!(segments[0].left, 5.0);
        assert_eq!(segments[1].left, 25.0);
        let last = segments[19];
        assert_eq!(last.left + last.width, 400.0 - 5.0);
    }

    #[test]
    fn test_inclusive_boundary() {
        assert!(BarModel::is_active(3, 3));
        assert!(!BarModel::is_active(4, 3));
    }
}
