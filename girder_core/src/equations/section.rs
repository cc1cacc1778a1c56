//! # Cross-Section Property Formulas
//!
//! Closed-form formulas for the layers a tapered girder is made of
//! (rectangles and symmetric trapezoids), plus the transforms applied to the
//! polygon-integral results: parallel-axis shift, section modulus, volume and
//! self-weight per unit length.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `Z` = Section modulus (I/c, where c = distance to extreme fiber)
//! - `b` = Width of section
//! - `h` = Height of a layer
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Any structural mechanics textbook (parallel-axis theorem)

use crate::units::{KnPerM, KnPerM3, M3PerM, SqMm};

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate moment of inertia for rectangular section about its centroidal axis
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use girder_core::equations::section::rectangular_moment_of_inertia;
///
/// // 200 x 500 mm rectangle
/// let i = rectangular_moment_of_inertia(200.0, 500.0);
/// assert!((i - 2.0833e9).abs() / 2.0833e9 < 1e-4);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Calculate section modulus for rectangular section
///
/// # Formula
/// Z = I/c = bh³/12 ÷ h/2 = bh²/6
///
/// For rectangular sections, Z_top = Z_bottom.
#[inline]
pub fn rectangular_section_modulus(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 6.0
}

// =============================================================================
// SYMMETRIC TRAPEZOID (TAPER LAYERS)
// =============================================================================

/// Area of a symmetric trapezoid with parallel sides `b1` (at its base) and
/// `b2` (at its top), height `h`.
///
/// ```text
///        ┌───b2───┐
///       /          \   h
///      └─────b1─────┘
/// ```
///
/// # Formula
/// A = (b1 + b2)·h / 2
#[inline]
pub fn trapezoid_area(b1: f64, b2: f64, h: f64) -> f64 {
    (b1 + b2) * h / 2.0
}

/// Height of a trapezoid's centroid above its `b1` side
///
/// # Formula
/// ȳ = h·(b1 + 2·b2) / (3·(b1 + b2))
#[inline]
pub fn trapezoid_centroid_height(b1: f64, b2: f64, h: f64) -> f64 {
    h * (b1 + 2.0 * b2) / (3.0 * (b1 + b2))
}

/// Moment of inertia of a trapezoid about its own horizontal centroidal axis
///
/// # Formula
/// I = h³·(b1² + 4·b1·b2 + b2²) / (36·(b1 + b2))
///
/// Reduces to bh³/12 when b1 = b2 = b.
#[inline]
pub fn trapezoid_moment_of_inertia(b1: f64, b2: f64, h: f64) -> f64 {
    h.powi(3) * (b1 * b1 + 4.0 * b1 * b2 + b2 * b2) / (36.0 * (b1 + b2))
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Shift a second moment from a reference axis to the parallel centroidal axis
///
/// # Formula
/// I_c = I_ref − A·d²
///
/// # Arguments
/// * `i_ref` - Second moment about the reference axis
/// * `area` - Area of the shape
/// * `d` - Distance from the reference axis to the centroid
#[inline]
pub fn parallel_axis_to_centroid(i_ref: f64, area: f64, d: f64) -> f64 {
    i_ref - area * d * d
}

/// Transfer a centroidal second moment to a parallel axis at distance `d`
///
/// # Formula
/// I = I_c + A·d²
#[inline]
pub fn parallel_axis_from_centroid(i_c: f64, area: f64, d: f64) -> f64 {
    i_c + area * d * d
}

/// Section modulus to an extreme fiber at distance `c` from the neutral axis
///
/// # Formula
/// Z = I / c
///
/// A zero fiber distance yields an infinite modulus rather than an error;
/// callers format non-finite values for display.
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}

/// Volume of material per meter of member length
///
/// # Formula
/// V = A / 10⁶ (mm² → m², i.e. m³ per m)
#[inline]
pub fn volume_per_length(area_mm2: f64) -> f64 {
    M3PerM::from(SqMm(area_mm2)).0
}

/// Self-weight per meter of member length
///
/// # Formula
/// w = γ · V
#[inline]
pub fn self_weight_per_length(gamma_kn_m3: f64, volume_m3_per_m: f64) -> f64 {
    let w: KnPerM = M3PerM(volume_m3_per_m) * KnPerM3(gamma_kn_m3);
    w.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_rectangular_section_modulus() {
        let z = rectangular_section_modulus(200.0, 500.0);
        let z_from_i = rectangular_moment_of_inertia(200.0, 500.0) / 250.0;
        assert!(approx_eq(z, z_from_i), "Z = {}, I/(h/2) = {}", z, z_from_i);
    }

    #[test]
    fn test_trapezoid_reduces_to_rectangle() {
        let (b, h) = (203.0, 402.0);
        assert!(approx_eq(trapezoid_area(b, b, h), rectangular_area(b, h)));
        assert!(approx_eq(trapezoid_centroid_height(b, b, h), h / 2.0));
        assert!(approx_eq(
            trapezoid_moment_of_inertia(b, b, h),
            rectangular_moment_of_inertia(b, h)
        ));
    }

    #[test]
    fn test_trapezoid_reduces_to_triangle() {
        // b2 = 0: triangle with centroid at h/3 and I = bh³/36
        let (b, h) = (6.0, 9.0);
        assert!(approx_eq(trapezoid_centroid_height(b, 0.0, h), 3.0));
        assert!(approx_eq(trapezoid_moment_of_inertia(b, 0.0, h), b * h.powi(3) / 36.0));
    }

    #[test]
    fn test_bottom_taper_layer() {
        // Default girder bottom taper: 660 → 203 over 300 mm
        let a = trapezoid_area(660.0, 203.0, 300.0);
        assert!(approx_eq(a, 129_450.0), "A = {}", a);
        // Wider side at the bottom pulls the centroid below mid-height
        assert!(trapezoid_centroid_height(660.0, 203.0, 300.0) < 150.0);
    }

    #[test]
    fn test_parallel_axis_round_trip() {
        let (i_c, area, d) = (2.0833e9, 100_000.0, 250.0);
        let i_base = parallel_axis_from_centroid(i_c, area, d);
        assert!(approx_eq(parallel_axis_to_centroid(i_base, area, d), i_c));
    }

    #[test]
    fn test_section_modulus_zero_distance_is_infinite() {
        let z = section_modulus(1.0e9, 0.0);
        assert!(z.is_infinite() && z > 0.0);
    }

    #[test]
    fn test_volume_and_weight() {
        let v = volume_per_length(546_731.0);
        assert!((v - 0.546731).abs() < 1e-12);
        let w = self_weight_per_length(25.0, v);
        assert!((w - 13.668275).abs() < 1e-9);
    }
}
