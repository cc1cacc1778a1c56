//! Points and closed polygons.
//!
//! A [`Polygon`] is an ordered vertex loop that is implicitly closed: the last
//! vertex connects back to the first and no closing duplicate is stored.
//! Collinear and coincident vertices are allowed and kept exactly as given.

use serde::{Deserialize, Serialize};

/// A 2D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    /// The same point reflected about the vertical axis `x = 0`
    pub fn mirrored(self) -> Self {
        Point2D::new(-self.x, self.y)
    }

    /// z-component of `self × other` (twice the signed area of the triangle
    /// formed with the origin)
    #[inline]
    pub fn cross(self, other: Point2D) -> f64 {
        self.x * other.y - other.x * self.y
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// Vertex winding direction of a closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// An implicitly closed polygon.
///
/// ## JSON Example
///
/// ```json
/// [{ "x": 0.0, "y": 0.0 }, { "x": 200.0, "y": 0.0 }, { "x": 200.0, "y": 500.0 }]
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list.
    ///
    /// The list is taken verbatim: nothing is reordered, deduplicated or closed.
    ///
    /// ```rust
    /// use girder_core::geometry::{Point2D, Polygon};
    ///
    /// let square = Polygon::new(vec![
    ///     Point2D::new(0.0, 0.0),
    ///     Point2D::new(1.0, 0.0),
    ///     Point2D::new(1.0, 1.0),
    ///     Point2D::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(square.len(), 4);
    /// assert_eq!(square.edges().count(), 4);
    /// ```
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Polygon { vertices }
    }

    /// Create a polygon from `(x, y)` tuples
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Polygon::new(coords.iter().copied().map(Point2D::from).collect())
    }

    /// Vertices in loop order
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Directed edges `(p0, p1)` in loop order, including the closing edge
    /// from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The same loop traversed in the opposite direction
    pub fn reversed(&self) -> Polygon {
        Polygon::new(self.vertices.iter().rev().copied().collect())
    }

    /// Largest |x| over all vertices (half the overall width for a section
    /// symmetric about x = 0)
    pub fn max_abs_x(&self) -> f64 {
        self.vertices.iter().fold(0.0, |acc, p| acc.max(p.x.abs()))
    }

    /// Smallest and largest y over all vertices, `None` when empty
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let first = self.vertices.first()?;
        Some(self.vertices.iter().fold((first.y, first.y), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        }))
    }
}

impl From<Vec<Point2D>> for Polygon {
    fn from(vertices: Vec<Point2D>) -> Self {
        Polygon::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_wrap_around() {
        let tri = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        let edges: Vec<_> = tri.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point2D::new(0.0, 3.0), Point2D::new(0.0, 0.0)));
    }

    #[test]
    fn test_empty_polygon_has_no_edges() {
        let empty = Polygon::default();
        assert!(empty.is_empty());
        assert_eq!(empty.edges().count(), 0);
        assert!(empty.y_range().is_none());
    }

    #[test]
    fn test_reversed_keeps_vertices() {
        let tri = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        let rev = tri.reversed();
        assert_eq!(rev.vertices()[0], Point2D::new(0.0, 3.0));
        assert_eq!(rev.reversed(), tri);
    }

    #[test]
    fn test_extents() {
        let poly = Polygon::from_coords(&[(-330.0, 0.0), (330.0, 0.0), (254.0, 1372.0)]);
        assert_eq!(poly.max_abs_x(), 330.0);
        assert_eq!(poly.y_range(), Some((0.0, 1372.0)));
    }

    #[test]
    fn test_serializes_as_point_list() {
        let poly = Polygon::from_coords(&[(1.0, 2.0)]);
        let json = serde_json::to_string(&poly).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0}]"#);
    }
}
