//! # Section Properties
//!
//! Turns raw polygon moments into the quantities a designer reads off a
//! girder: centroid height, centroidal second moment, section moduli to the
//! extreme fibers, and volume and self-weight per meter of length.
//!
//! [`compute`] runs the whole pipeline:
//!
//! ```text
//! CrossSectionParams ─validate─▶ build_polygon ─▶ compute_raw_moments ─▶ derive
//! ```
//!
//! Every call recomputes from scratch. Nothing is cached, so two calls with
//! equal parameters produce bit-identical results.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::girder::{build_polygon, CrossSectionParams};
use crate::equations::section::{
    parallel_axis_to_centroid, section_modulus, self_weight_per_length, volume_per_length,
};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::{compute_raw_moments, Polygon, RawMoments};

/// Properties of a section about its horizontal centroidal axis.
///
/// `ztop_mm3` and `zbot_mm3` may be non-finite when a fiber distance is
/// exactly zero. That is a valid result; presentation layers show it as "—".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area A (mm²)
    pub area_mm2: f64,
    /// Centroid height above the bottom fiber ȳ (mm)
    pub ybar_mm: f64,
    /// Second moment about the horizontal centroidal axis Ixx (mm⁴)
    pub ixx_mm4: f64,
    /// Section modulus to the top fiber, Ixx / (D − ȳ) (mm³)
    pub ztop_mm3: f64,
    /// Section modulus to the bottom fiber, Ixx / ȳ (mm³)
    pub zbot_mm3: f64,
    /// Volume per meter of length (m³/m)
    pub volume_m3_per_m: f64,
    /// Self-weight per meter of length (kN/m)
    pub weight_kn_per_m: f64,
}

impl SectionProperties {
    /// Distance from the centroid to the top fiber (mm)
    pub fn y_top_mm(&self, depth_mm: f64) -> f64 {
        depth_mm - self.ybar_mm
    }

    /// True when both section moduli are finite numbers
    pub fn has_finite_moduli(&self) -> bool {
        self.ztop_mm3.is_finite() && self.zbot_mm3.is_finite()
    }
}

/// Everything produced for one set of parameters.
///
/// Renderers take the polygon and ȳ from here, the PDF report takes the
/// parameters and the scalar properties, the DXF exporter takes the polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub params: CrossSectionParams,
    pub polygon: Polygon,
    pub raw: RawMoments,
    pub properties: SectionProperties,
}

/// Derive centroidal properties from raw moments.
///
/// ```text
/// ȳ    = Cy
/// Ixx  = Ix0 − A·ȳ²
/// Ztop = Ixx / (D − ȳ)
/// Zbot = Ixx / ȳ
/// V    = A / 10⁶
/// w    = γ · V
/// ```
///
/// Never fails. A zero fiber distance gives an infinite modulus, which is
/// logged at `warn` and returned as is.
pub fn derive(raw: &RawMoments, params: &CrossSectionParams) -> SectionProperties {
    let area = raw.area;
    let ybar = raw.cy;
    let ixx = parallel_axis_to_centroid(raw.ix0, area, ybar);
    let ztop = section_modulus(ixx, params.depth_mm - ybar);
    let zbot = section_modulus(ixx, ybar);
    let volume = volume_per_length(area);
    let weight = self_weight_per_length(params.unit_weight_kn_m3, volume);

    let props = SectionProperties {
        area_mm2: area,
        ybar_mm: ybar,
        ixx_mm4: ixx,
        ztop_mm3: ztop,
        zbot_mm3: zbot,
        volume_m3_per_m: volume,
        weight_kn_per_m: weight,
    };

    if !props.has_finite_moduli() {
        warn!(ztop = ztop, zbot = zbot, ybar = ybar, "section modulus is not finite");
    }

    props
}

/// Validate, build, integrate and derive in one call.
///
/// # Errors
///
/// - [`SectionError::Validation`] listing every broken rule; no geometry is
///   built in that case.
/// - [`SectionError::DegenerateGeometry`] if the outline encloses no area.
///
/// # Example
///
/// ```rust
/// use girder_core::calculations::{compute, CrossSectionParams};
///
/// let analysis = compute(&CrossSectionParams::default()).unwrap();
/// let p = &analysis.properties;
///
/// assert!((p.area_mm2 - 546_731.0).abs() < 1.0);
/// assert!((p.ybar_mm - 627.65).abs() < 0.01);
/// assert!(p.ztop_mm3 > 0.0 && p.zbot_mm3 > 0.0);
/// ```
pub fn compute(params: &CrossSectionParams) -> SectionResult<SectionAnalysis> {
    let violations = params.validate();
    if !violations.is_empty() {
        warn!(count = violations.len(), "section parameters rejected");
        return Err(SectionError::validation(violations));
    }

    let polygon = build_polygon(params);
    debug!(vertices = polygon.len(), "girder outline built");

    let raw = compute_raw_moments(&polygon)?;
    let properties = derive(&raw, params);

    debug!(
        area_mm2 = properties.area_mm2,
        ybar_mm = properties.ybar_mm,
        ixx_mm4 = properties.ixx_mm4,
        "section properties computed"
    );

    Ok(SectionAnalysis {
        params: *params,
        polygon,
        raw,
        properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::girder::GIRDER_VERTEX_COUNT;
    use crate::equations::section::{
        parallel_axis_from_centroid, rectangular_area, rectangular_moment_of_inertia,
        trapezoid_area, trapezoid_centroid_height, trapezoid_moment_of_inertia,
    };
    use approx::assert_relative_eq;

    /// 200 x 500 rectangle expressed through the girder parameters
    fn rectangle_params() -> CrossSectionParams {
        CrossSectionParams::new(500.0, 200.0, 200.0, 0.0, 200.0, 0.0, 0.0, 0.0, 25.0)
    }

    /// Area, centroid and Ixx from stacking the five layers independently
    fn layer_decomposition(params: &CrossSectionParams) -> (f64, f64, f64) {
        let layers = params.layers();
        let parts: Vec<(f64, f64, f64)> = layers
            .iter()
            .map(|l| {
                let (b1, b2, h) = (l.width_bottom_mm, l.width_top_mm, l.height_mm);
                if b1 == b2 {
                    (rectangular_area(b1, h), l.base_mm + h / 2.0, rectangular_moment_of_inertia(b1, h))
                } else {
                    (
                        trapezoid_area(b1, b2, h),
                        l.base_mm + trapezoid_centroid_height(b1, b2, h),
                        trapezoid_moment_of_inertia(b1, b2, h),
                    )
                }
            })
            .collect();

        let area: f64 = parts.iter().map(|p| p.0).sum();
        let ybar = parts.iter().map(|p| p.0 * p.1).sum::<f64>() / area;
        let ixx = parts
            .iter()
            .map(|&(a, y, i)| parallel_axis_from_centroid(i, a, y - ybar))
            .sum();
        (area, ybar, ixx)
    }

    #[test]
    fn test_rectangle_ground_truth() {
        let params = rectangle_params();
        let polygon = build_polygon(&params);
        assert_eq!(polygon.len(), GIRDER_VERTEX_COUNT);

        let raw = compute_raw_moments(&polygon).unwrap();
        let props = derive(&raw, &params);

        assert_relative_eq!(props.area_mm2, 100_000.0, max_relative = 1e-6);
        assert_relative_eq!(props.ybar_mm, 250.0, max_relative = 1e-6);
        assert_relative_eq!(props.ixx_mm4, 200.0 * 500.0_f64.powi(3) / 12.0, max_relative = 1e-6);
        assert_relative_eq!(props.ztop_mm3, props.zbot_mm3, max_relative = 1e-9);
    }

    #[test]
    fn test_rectangle_rejected_by_pipeline() {
        // Zero flange thicknesses break the "main dimensions > 0" rule
        let err = compute(&rectangle_params()).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_default_matches_layer_decomposition() {
        let params = CrossSectionParams::default();
        let analysis = compute(&params).unwrap();
        let p = analysis.properties;

        let (area, ybar, ixx) = layer_decomposition(&params);
        assert_relative_eq!(area, 546_731.0, max_relative = 1e-12);

        assert_relative_eq!(p.area_mm2, area, max_relative = 1e-9);
        assert_relative_eq!(p.ybar_mm, ybar, max_relative = 1e-9);
        assert_relative_eq!(p.ixx_mm4, ixx, max_relative = 1e-9);
        assert!((p.ybar_mm - 627.648).abs() < 1e-3, "ybar = {}", p.ybar_mm);
        assert_relative_eq!(p.ixx_mm4, 1.125_801_07e11, max_relative = 1e-6);
    }

    #[test]
    fn test_default_derived_values() {
        let params = CrossSectionParams::default();
        let p = compute(&params).unwrap().properties;

        assert_relative_eq!(p.ztop_mm3, p.ixx_mm4 / (1372.0 - p.ybar_mm), max_relative = 1e-12);
        assert_relative_eq!(p.zbot_mm3, p.ixx_mm4 / p.ybar_mm, max_relative = 1e-12);
        assert_relative_eq!(p.volume_m3_per_m, 0.546731, max_relative = 1e-9);
        assert_relative_eq!(p.weight_kn_per_m, 13.668275, max_relative = 1e-9);
    }

    #[test]
    fn test_centroid_on_axis_of_symmetry() {
        let cases = [
            CrossSectionParams::default(),
            CrossSectionParams::new(900.0, 150.0, 1200.0, 120.0, 400.0, 150.0, 80.0, 100.0, 24.0),
            CrossSectionParams::new(1800.0, 180.0, 180.0, 50.0, 700.0, 250.0, 0.0, 200.0, 25.0),
        ];
        for params in cases {
            let analysis = compute(&params).unwrap();
            assert!(analysis.raw.cx.abs() < 1e-9, "Cx = {}", analysis.raw.cx);
        }
    }

    #[test]
    fn test_zero_tapers_compute() {
        let mut params = CrossSectionParams::default();
        params.top_taper_height_mm = 0.0;
        params.bottom_taper_height_mm = 0.0;

        let analysis = compute(&params).unwrap();
        assert_eq!(analysis.polygon.len(), GIRDER_VERTEX_COUNT);

        let (area, ybar, ixx) = layer_decomposition(&params);
        assert_relative_eq!(analysis.properties.area_mm2, area, max_relative = 1e-9);
        assert_relative_eq!(analysis.properties.ybar_mm, ybar, max_relative = 1e-9);
        assert_relative_eq!(analysis.properties.ixx_mm4, ixx, max_relative = 1e-9);
    }

    #[test]
    fn test_validation_completeness() {
        let mut params = CrossSectionParams::default();
        params.depth_mm = 100.0;
        params.top_flange_thickness_mm = 200.0;
        params.bottom_flange_thickness_mm = 50.0;
        params.top_taper_height_mm = 0.0;
        params.bottom_taper_height_mm = 0.0;

        let err = compute(&params).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("D must be >"));
    }

    #[test]
    fn test_zero_centroid_height_gives_infinite_modulus() {
        let raw = RawMoments {
            signed_area: 1000.0,
            area: 1000.0,
            cx: 0.0,
            cy: 0.0,
            ix0: 5.0e6,
        };
        let params = CrossSectionParams::default();
        let props = derive(&raw, &params);

        assert!(props.zbot_mm3.is_infinite() && props.zbot_mm3 > 0.0);
        assert!(props.ztop_mm3.is_finite());
        assert!(!props.has_finite_moduli());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let params = CrossSectionParams::default();
        let first = compute(&params).unwrap();
        let second = compute(&params).unwrap();
        assert_eq!(first.properties.ixx_mm4.to_bits(), second.properties.ixx_mm4.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = compute(&CrossSectionParams::default()).unwrap();
        let json = serde_json::to_string(&analysis).unwrap();
        let back: SectionAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back.polygon, analysis.polygon);
        assert_relative_eq!(back.properties.area_mm2, analysis.properties.area_mm2);
    }
}
