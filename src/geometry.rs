//! Integer pixel-grid geometry.
//!
//! Everything the rasterizer needs to know about a segment before it starts
//! stepping: per-axis distance, per-axis step direction and the driving axis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel-grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Mutable coordinate along `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Copy with the coordinate along `axis` replaced.
    #[must_use]
    pub fn with(mut self, axis: Axis, value: i32) -> Self {
        *self.get_mut(axis) = value;
        self
    }
}

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Absolute per-axis distance between two points.
///
/// Unsigned so that the full `i32` range fits: `i32::MIN` to `i32::MAX` is `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distance {
    /// Horizontal distance.
    pub x: u32,
    /// Vertical distance.
    pub y: u32,
}

impl Distance {
    /// Create a new distance.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Distance along `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// The larger of the two distances.
    #[must_use]
    pub fn longest(self) -> u32 {
        self.x.max(self.y)
    }
}

/// A directed segment, walked from `end` back to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Where the walk stops.
    pub start: Point,
    /// Where the walk begins.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Absolute per-axis distance between the endpoints.
    #[must_use]
    pub const fn dist(&self) -> Distance {
        Distance::new(
            self.end.x.abs_diff(self.start.x),
            self.end.y.abs_diff(self.start.y),
        )
    }

    /// Per-axis unit step pointing from `end` toward `start`.
    ///
    /// Equal coordinates yield `-1`; that tie-break decides which pixels a
    /// horizontal or vertical line touches and must not be "fixed".
    #[must_use]
    pub fn step(&self) -> Point {
        let toward = |end: i32, start: i32| if end >= start { -1 } else { 1 };
        Point::new(toward(self.end.x, self.start.x), toward(self.end.y, self.start.y))
    }

    /// The axis with the larger distance; ties go to `X`.
    #[must_use]
    pub fn driving_axis(&self) -> Axis {
        let dist = self.dist();
        if dist.x >= dist.y {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Number of main pixels a walk over this segment emits.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.dist().longest() as usize + 1
    }
}
