//! Lattice geometry.
//!
//! Street endpoints live on an integer lattice (`GridPoint`), so equality of
//! endpoints is exact and adjacency tests never suffer float rounding.  Only
//! derived geometry (segment midpoints, connector lines) uses `Point2`.

use std::fmt;

/// A lattice point of the city grid.  `x` grows eastward, `y` northward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector pointing from `self` to `other`.
    #[inline]
    pub fn vector_to(self, other: GridPoint) -> GridVector {
        GridVector { dx: other.x - self.x, dy: other.y - self.y }
    }

    /// `true` if the point lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn within(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }

    /// Midpoint of the segment `self → other`.
    #[inline]
    pub fn midpoint(self, other: GridPoint) -> Point2 {
        Point2 {
            x: (self.x as f64 + other.x as f64) * 0.5,
            y: (self.y as f64 + other.y as f64) * 0.5,
        }
    }
}

impl From<GridPoint> for Point2 {
    #[inline]
    fn from(p: GridPoint) -> Point2 {
        Point2 { x: p.x as f64, y: p.y as f64 }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction vector between two lattice points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridVector {
    pub dx: i32,
    pub dy: i32,
}

impl GridVector {
    #[inline]
    pub fn dot(self, other: GridVector) -> i64 {
        self.dx as i64 * other.dx as i64 + self.dy as i64 * other.dy as i64
    }

    /// Determinant of the 2×2 matrix with rows `self`, `other`: the signed
    /// area spanned by the two vectors.
    #[inline]
    pub fn determinant(self, other: GridVector) -> i64 {
        self.dx as i64 * other.dy as i64 - self.dy as i64 * other.dx as i64
    }

    #[inline]
    pub fn norm(self) -> f64 {
        ((self.dx as f64).powi(2) + (self.dy as f64).powi(2)).sqrt()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// A planar point in city units, used for midpoints and connector geometry.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in city units.
    pub fn distance(self, other: Point2) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
