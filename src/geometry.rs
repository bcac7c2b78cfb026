use serde::{Deserialize, Serialize};

/// A point in the 2-D plane.
///
/// Points are plain values: copied freely, compared by exact coordinate
/// equality. On the wire they are represented as a `[x, y]` pair, which is
/// the format interactive front-ends typically submit manual centroids in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// Pure and symmetric; zero exactly when both points are equal.
    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<[f64; 2]> for Point {
    fn from(c: [f64; 2]) -> Self {
        Self { x: c[0], y: c[1] }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}
