//! Planar coordinate type and segment utilities.
//!
//! The road map lives in a flat 2-D plane measured in abstract distance
//! units (the demo map uses pixels).  Speeds in [`SimConfig`](crate::SimConfig)
//! are expressed in the same unit per simulated minute.

/// A point in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }

    /// Fractional position in `[0, 1]` of the point on segment `a → b`
    /// closest to `self`.
    ///
    /// Points beyond either end clamp to that end.  A zero-length segment
    /// returns `0.0`.
    pub fn project_onto_segment(self, a: Point, b: Point) -> f64 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return 0.0;
        }
        (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    }

    /// Shortest distance from `self` to segment `a → b`.
    pub fn distance_to_segment(self, a: Point, b: Point) -> f64 {
        let t = self.project_onto_segment(a, b);
        self.distance(a.lerp(b, t))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, `min` inclusive and `max` exclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `true` when the rectangle has no finite interior to sample from.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}
