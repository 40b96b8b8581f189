//! Minimal 2D point type shared by the mapper and the pointer tracker.
//!
//! Coordinates follow screen conventions: `x` grows to the right, `y` grows
//! downward. Hosts convert their own position types at the boundary.

/// A position in a widget's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, increasing to the right.
    pub x: f32,
    /// Vertical coordinate, increasing downward.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        assert_eq!(Point::from((3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
        assert!(Point::ZERO.is_finite());
    }
}
