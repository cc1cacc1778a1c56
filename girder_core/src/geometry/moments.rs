//! # Polygon Area Moments
//!
//! Area, centroid and second moment of area for any simple closed polygon,
//! from the discrete form of Green's theorem. For each directed edge
//! `(p0, p1)`:
//!
//! ```text
//! c      = x0·y1 − x1·y0
//! 2A     = Σ c
//! Cx     = Σ (x0 + x1)·c / (3 · 2A)
//! Cy     = Σ (y0 + y1)·c / (3 · 2A)
//! Ix0    = Σ (y0² + y0·y1 + y1²)·c / 12
//! ```
//!
//! `Ix0` is taken about the x-axis through the polygon's own origin, not the
//! centroid. The raw sums carry the sign of the vertex winding; every reported
//! quantity is normalized by that sign, so listing the same loop in the
//! opposite direction gives the same `A`, `Cx`, `Cy` and `Ix0`.
//!
//! Collinear or repeated vertices contribute `c = 0` and need no special case.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::polygon::{Polygon, Winding};
use crate::errors::{SectionError, SectionResult};

/// Area moments of a polygon about the origin of its coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMoments {
    /// Signed area (positive for counter-clockwise loops), mm²
    pub signed_area: f64,
    /// Enclosed area |signed_area|, mm²
    pub area: f64,
    /// Centroid x, mm
    pub cx: f64,
    /// Centroid y, mm
    pub cy: f64,
    /// Second moment of area about the x-axis through the origin, mm⁴
    pub ix0: f64,
}

impl RawMoments {
    /// Winding direction of the loop these moments were computed from
    pub fn winding(&self) -> Winding {
        if self.signed_area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// Compute area, centroid and second moment about the x-axis for a simple
/// closed polygon.
///
/// # Errors
///
/// Returns [`SectionError::DegenerateGeometry`] when the loop encloses no
/// area (empty, fewer than three vertices, all vertices collinear) or when the
/// sums are not finite. Division by a zero area is never attempted.
///
/// # Example
///
/// ```rust
/// use girder_core::geometry::{compute_raw_moments, Polygon};
///
/// // 200 x 500 rectangle standing on the x-axis
/// let rect = Polygon::from_coords(&[(0.0, 0.0), (200.0, 0.0), (200.0, 500.0), (0.0, 500.0)]);
/// let m = compute_raw_moments(&rect).unwrap();
///
/// assert!((m.area - 100_000.0).abs() < 1e-6);
/// assert!((m.cx - 100.0).abs() < 1e-9);
/// assert!((m.cy - 250.0).abs() < 1e-9);
/// // b·h³/3 about the base
/// assert!((m.ix0 - 200.0 * 500.0_f64.powi(3) / 3.0).abs() < 1e-3);
/// ```
pub fn compute_raw_moments(polygon: &Polygon) -> SectionResult<RawMoments> {
    let mut twice_area = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_ixx = 0.0;

    for (p0, p1) in polygon.edges() {
        let cross = p0.cross(p1);
        twice_area += cross;
        sum_x += (p0.x + p1.x) * cross;
        sum_y += (p0.y + p1.y) * cross;
        sum_ixx += (p0.y * p0.y + p0.y * p1.y + p1.y * p1.y) * cross;
    }

    if !twice_area.is_finite() || !sum_x.is_finite() || !sum_y.is_finite() || !sum_ixx.is_finite() {
        return Err(SectionError::degenerate(format!(
            "polygon moment sums are not finite ({} vertices)",
            polygon.len()
        )));
    }
    if twice_area == 0.0 {
        return Err(SectionError::degenerate(format!(
            "polygon with {} vertices encloses zero area",
            polygon.len()
        )));
    }

    let sign = if twice_area < 0.0 { -1.0 } else { 1.0 };
    let abs_twice_area = twice_area.abs();

    let moments = RawMoments {
        signed_area: twice_area / 2.0,
        area: abs_twice_area / 2.0,
        cx: sign * sum_x / (3.0 * abs_twice_area),
        cy: sign * sum_y / (3.0 * abs_twice_area),
        ix0: sign * sum_ixx / 12.0,
    };

    debug!(
        vertices = polygon.len(),
        area = moments.area,
        cx = moments.cx,
        cy = moments.cy,
        ix0 = moments.ix0,
        "polygon moments"
    );

    Ok(moments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2D;
    use approx::assert_relative_eq;

    fn rectangle(b: f64, h: f64) -> Polygon {
        Polygon::from_coords(&[(-b / 2.0, 0.0), (b / 2.0, 0.0), (b / 2.0, h), (-b / 2.0, h)])
    }

    #[test]
    fn test_rectangle_about_base() {
        let m = compute_raw_moments(&rectangle(200.0, 500.0)).unwrap();
        assert_relative_eq!(m.area, 100_000.0, max_relative = 1e-12);
        assert_relative_eq!(m.cy, 250.0, max_relative = 1e-12);
        assert!(m.cx.abs() < 1e-9, "Cx = {}", m.cx);
        // I about base = b·h³/3
        assert_relative_eq!(m.ix0, 200.0 * 500.0_f64.powi(3) / 3.0, max_relative = 1e-12);
        assert_eq!(m.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_right_triangle() {
        // Legs b = 6 along x, h = 9 along y
        let tri = Polygon::from_coords(&[(0.0, 0.0), (6.0, 0.0), (0.0, 9.0)]);
        let m = compute_raw_moments(&tri).unwrap();
        assert_relative_eq!(m.area, 27.0, max_relative = 1e-12);
        assert_relative_eq!(m.cx, 2.0, max_relative = 1e-12);
        assert_relative_eq!(m.cy, 3.0, max_relative = 1e-12);
        // I about base = b·h³/12
        assert_relative_eq!(m.ix0, 6.0 * 9.0_f64.powi(3) / 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_winding_invariance() {
        let poly = Polygon::from_coords(&[
            (0.0, 0.0),
            (7.0, 1.0),
            (9.0, 6.0),
            (4.0, 10.0),
            (-2.0, 5.0),
        ]);
        let ccw = compute_raw_moments(&poly).unwrap();
        let cw = compute_raw_moments(&poly.reversed()).unwrap();

        assert_eq!(cw.winding(), Winding::Clockwise);
        assert_relative_eq!(ccw.signed_area, -cw.signed_area, max_relative = 1e-12);
        assert_relative_eq!(ccw.area, cw.area, max_relative = 1e-9);
        assert_relative_eq!(ccw.cx, cw.cx, max_relative = 1e-9);
        assert_relative_eq!(ccw.cy, cw.cy, max_relative = 1e-9);
        assert_relative_eq!(ccw.ix0, cw.ix0, max_relative = 1e-9);
    }

    #[test]
    fn test_clockwise_centroid_is_not_mirrored() {
        // Clockwise square offset from the origin: centroid must stay at (15, 25)
        let cw = Polygon::from_coords(&[(10.0, 20.0), (10.0, 30.0), (20.0, 30.0), (20.0, 20.0)]);
        let m = compute_raw_moments(&cw).unwrap();
        assert!(m.signed_area < 0.0);
        assert_relative_eq!(m.cx, 15.0, max_relative = 1e-12);
        assert_relative_eq!(m.cy, 25.0, max_relative = 1e-12);
        assert!(m.ix0 > 0.0);
    }

    #[test]
    fn test_repeated_and_collinear_vertices_are_inert() {
        let plain = rectangle(100.0, 40.0);
        let padded = Polygon::new(vec![
            Point2D::new(-50.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 0.0),
            Point2D::new(50.0, 0.0),
            Point2D::new(50.0, 40.0),
            Point2D::new(-50.0, 40.0),
            Point2D::new(-50.0, 40.0),
        ]);
        let a = compute_raw_moments(&plain).unwrap();
        let b = compute_raw_moments(&padded).unwrap();
        assert_relative_eq!(a.area, b.area, max_relative = 1e-12);
        assert_relative_eq!(a.cy, b.cy, max_relative = 1e-12);
        assert_relative_eq!(a.ix0, b.ix0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_area_is_degenerate() {
        let line = Polygon::from_coords(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
        let err = compute_raw_moments(&line).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");

        assert!(compute_raw_moments(&Polygon::default()).is_err());
        assert!(compute_raw_moments(&Polygon::from_coords(&[(1.0, 1.0), (2.0, 3.0)])).is_err());
    }

    #[test]
    fn test_non_finite_vertex_is_degenerate() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (f64::INFINITY, 0.0), (0.0, 1.0)]);
        assert!(matches!(
            compute_raw_moments(&poly),
            Err(SectionError::DegenerateGeometry { .. })
        ));
    }
}
