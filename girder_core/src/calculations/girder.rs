//! # Tapered Girder Cross-Section
//!
//! Parameters, validation rules and outline construction for a vertically
//! symmetric I/T-shaped girder with tapered flange-to-web transitions.
//!
//! ```text
//!          ┌────────── bt ──────────┐
//!          │                        │ tt
//!          └──┐                  ┌──┘
//!              \                /       ht
//!               │      tw      │
//!               │              │        web
//!              /                \       hb
//!        ┌────┘                  └────┐
//!        │                            │ tb
//!        └──────────── bb ────────────┘
//!                     (0,0)
//! ```
//!
//! The origin is the bottom fiber on the vertical centreline, so every
//! y-coordinate lies in `[0, D]`.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::calculations::girder::{build_polygon, CrossSectionParams};
//!
//! let params = CrossSectionParams::default();
//! assert!(params.validate().is_empty());
//!
//! let outline = build_polygon(&params);
//! assert_eq!(outline.len(), 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Violation;
use crate::geometry::{Point2D, Polygon};

/// Number of vertices [`build_polygon`] always emits
pub const GIRDER_VERTEX_COUNT: usize = 12;

/// Default unit weight of reinforced concrete (kN/m³)
pub const DEFAULT_CONCRETE_UNIT_WEIGHT: f64 = 25.0;

/// Input dimensions of a tapered girder section.
///
/// Lengths in millimeters, unit weight in kN/m³. The short engineering
/// symbols (`D`, `tw`, `bt`, ...) are accepted as JSON aliases.
///
/// ## JSON Example
///
/// ```json
/// {
///   "depth_mm": 1372.0,
///   "web_thickness_mm": 203.0,
///   "top_flange_width_mm": 508.0,
///   "top_flange_thickness_mm": 200.0,
///   "bottom_flange_width_mm": 660.0,
///   "bottom_flange_thickness_mm": 220.0,
///   "top_taper_height_mm": 250.0,
///   "bottom_taper_height_mm": 300.0,
///   "unit_weight_kn_m3": 25.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionParams {
    /// Overall depth D
    #[serde(alias = "D")]
    pub depth_mm: f64,

    /// Web thickness tw
    #[serde(alias = "tw")]
    pub web_thickness_mm: f64,

    /// Top flange width bt
    #[serde(alias = "bt")]
    pub top_flange_width_mm: f64,

    /// Top flange thickness tt
    #[serde(alias = "tt")]
    pub top_flange_thickness_mm: f64,

    /// Bottom flange width bb
    #[serde(alias = "bb")]
    pub bottom_flange_width_mm: f64,

    /// Bottom flange thickness tb
    #[serde(alias = "tb")]
    pub bottom_flange_thickness_mm: f64,

    /// Height of the taper from web to top flange, ht (0 = no taper)
    #[serde(alias = "ht")]
    pub top_taper_height_mm: f64,

    /// Height of the taper from bottom flange to web, hb (0 = no taper)
    #[serde(alias = "hb")]
    pub bottom_taper_height_mm: f64,

    /// Unit weight of the material, γ (kN/m³)
    #[serde(alias = "gamma")]
    pub unit_weight_kn_m3: f64,
}

impl Default for CrossSectionParams {
    /// Reference girder: D = 1372, tw = 203, bt = 508, tt = 200, bb = 660,
    /// tb = 220, ht = 250, hb = 300 (mm), γ = 25 kN/m³
    fn default() -> Self {
        CrossSectionParams {
            depth_mm: 1372.0,
            web_thickness_mm: 203.0,
            top_flange_width_mm: 508.0,
            top_flange_thickness_mm: 200.0,
            bottom_flange_width_mm: 660.0,
            bottom_flange_thickness_mm: 220.0,
            top_taper_height_mm: 250.0,
            bottom_taper_height_mm: 300.0,
            unit_weight_kn_m3: DEFAULT_CONCRETE_UNIT_WEIGHT,
        }
    }
}

/// Breakpoint heights of the outline, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GirderLevels {
    /// Bottom fiber (always 0)
    pub bottom: f64,
    /// Top of the bottom flange
    pub bottom_flange_top: f64,
    /// Top of the bottom taper, start of the web
    pub web_bottom: f64,
    /// End of the web, start of the top taper
    pub web_top: f64,
    /// Top of the top taper, underside of the top flange
    pub top_flange_bottom: f64,
    /// Top fiber (D)
    pub top: f64,
}

/// Kind of horizontal layer in the girder stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    BottomFlange,
    BottomTaper,
    Web,
    TopTaper,
    TopFlange,
}

/// One horizontal slice of the section with straight sides: a rectangle when
/// both widths agree, otherwise a symmetric trapezoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    /// Height of the layer's underside above the bottom fiber
    pub base_mm: f64,
    pub height_mm: f64,
    /// Width at the underside
    pub width_bottom_mm: f64,
    /// Width at the top
    pub width_top_mm: f64,
}

impl CrossSectionParams {
    /// Create parameters from the nine engineering symbols, in the order
    /// `D, tw, bt, tt, bb, tb, ht, hb, gamma`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(d: f64, tw: f64, bt: f64, tt: f64, bb: f64, tb: f64, ht: f64, hb: f64, gamma: f64) -> Self {
        CrossSectionParams {
            depth_mm: d,
            web_thickness_mm: tw,
            top_flange_width_mm: bt,
            top_flange_thickness_mm: tt,
            bottom_flange_width_mm: bb,
            bottom_flange_thickness_mm: tb,
            top_taper_height_mm: ht,
            bottom_taper_height_mm: hb,
            unit_weight_kn_m3: gamma,
        }
    }

    /// Check every input rule and return one violation per broken rule.
    ///
    /// All rules are evaluated, so a user sees every problem at once. An
    /// empty list means the parameters are accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use girder_core::calculations::girder::CrossSectionParams;
    ///
    /// let mut params = CrossSectionParams::default();
    /// params.top_flange_width_mm = 100.0; // narrower than the web
    /// params.unit_weight_kn_m3 = 0.0;
    ///
    /// let violations = params.validate();
    /// assert_eq!(violations.len(), 2);
    /// ```
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        let all = [
            self.depth_mm,
            self.web_thickness_mm,
            self.top_flange_width_mm,
            self.top_flange_thickness_mm,
            self.bottom_flange_width_mm,
            self.bottom_flange_thickness_mm,
            self.top_taper_height_mm,
            self.bottom_taper_height_mm,
            self.unit_weight_kn_m3,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            violations.push(Violation::new("all", "All dimensions must be finite numbers."));
        }

        let main = [
            self.depth_mm,
            self.web_thickness_mm,
            self.top_flange_width_mm,
            self.top_flange_thickness_mm,
            self.bottom_flange_width_mm,
            self.bottom_flange_thickness_mm,
        ];
        if main.iter().any(|&v| v <= 0.0) {
            violations.push(Violation::new(
                "D, tw, bt, tt, bb, tb",
                "All main dimensions must be > 0.",
            ));
        }

        if self.top_flange_width_mm < self.web_thickness_mm {
            violations.push(Violation::new(
                "bt",
                "Top flange width bt must be ≥ web thickness tw.",
            ));
        }

        if self.bottom_flange_width_mm < self.web_thickness_mm {
            violations.push(Violation::new(
                "bb",
                "Bottom flange width bb must be ≥ web thickness tw.",
            ));
        }

        if self.top_taper_height_mm < 0.0 || self.bottom_taper_height_mm < 0.0 {
            violations.push(Violation::new("ht, hb", "Taper heights must be ≥ 0."));
        }

        if self.depth_mm <= self.stacked_height_mm() {
            violations.push(Violation::new(
                "D",
                "D must be > (tt + tb + ht + hb). Reduce taper heights or flange thickness.",
            ));
        }

        if self.unit_weight_kn_m3 <= 0.0 {
            violations.push(Violation::new("gamma", "Concrete density must be > 0."));
        }

        violations
    }

    /// Combined height of flanges and tapers, tt + tb + ht + hb
    pub fn stacked_height_mm(&self) -> f64 {
        self.top_flange_thickness_mm
            + self.bottom_flange_thickness_mm
            + self.top_taper_height_mm
            + self.bottom_taper_height_mm
    }

    /// Height of the constant-width web segment, D − tt − tb − ht − hb
    pub fn web_height_mm(&self) -> f64 {
        self.depth_mm - self.stacked_height_mm()
    }

    /// Breakpoint heights of the outline
    pub fn levels(&self) -> GirderLevels {
        let bottom_flange_top = self.bottom_flange_thickness_mm;
        GirderLevels {
            bottom: 0.0,
            bottom_flange_top,
            web_bottom: bottom_flange_top + self.bottom_taper_height_mm,
            web_top: self.depth_mm - self.top_flange_thickness_mm - self.top_taper_height_mm,
            top_flange_bottom: self.depth_mm - self.top_flange_thickness_mm,
            top: self.depth_mm,
        }
    }

    /// The five horizontal layers, bottom to top. Zero-height layers are
    /// included.
    pub fn layers(&self) -> [Layer; 5] {
        let lv = self.levels();
        let (bb, tw, bt) = (
            self.bottom_flange_width_mm,
            self.web_thickness_mm,
            self.top_flange_width_mm,
        );
        let layer = |kind, base: f64, top: f64, width_bottom, width_top| Layer {
            kind,
            base_mm: base,
            height_mm: top - base,
            width_bottom_mm: width_bottom,
            width_top_mm: width_top,
        };
        [
            layer(LayerKind::BottomFlange, lv.bottom, lv.bottom_flange_top, bb, bb),
            layer(LayerKind::BottomTaper, lv.bottom_flange_top, lv.web_bottom, bb, tw),
            layer(LayerKind::Web, lv.web_bottom, lv.web_top, tw, tw),
            layer(LayerKind::TopTaper, lv.web_top, lv.top_flange_bottom, tw, bt),
            layer(LayerKind::TopFlange, lv.top_flange_bottom, lv.top, bt, bt),
        ]
    }
}

/// Free-function form of [`CrossSectionParams::validate`]
pub fn validate(params: &CrossSectionParams) -> Vec<Violation> {
    params.validate()
}

/// Build the closed outline of the girder.
///
/// The right-hand profile is emitted bottom to top, then the left-hand
/// profile top to bottom with mirrored x, giving a counter-clockwise simple
/// loop of exactly [`GIRDER_VERTEX_COUNT`] vertices. A zero taper height
/// leaves two coincident-height vertices in place; they enclose no area and
/// are kept so the vertex order stays stable for exporters.
///
/// The builder does not validate; run [`CrossSectionParams::validate`] first.
pub fn build_polygon(params: &CrossSectionParams) -> Polygon {
    let lv = params.levels();
    let half_bottom = params.bottom_flange_width_mm / 2.0;
    let half_web = params.web_thickness_mm / 2.0;
    let half_top = params.top_flange_width_mm / 2.0;

    let right = [
        Point2D::new(half_bottom, lv.bottom),
        Point2D::new(half_bottom, lv.bottom_flange_top),
        Point2D::new(half_web, lv.web_bottom),
        Point2D::new(half_web, lv.web_top),
        Point2D::new(half_top, lv.top_flange_bottom),
        Point2D::new(half_top, lv.top),
    ];

    let mut vertices = Vec::with_capacity(GIRDER_VERTEX_COUNT);
    vertices.extend_from_slice(&right);
    vertices.extend(right.iter().rev().map(|p| p.mirrored()));

    Polygon::new(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(params: &CrossSectionParams) -> Vec<String> {
        params.validate().into_iter().map(|v| v.message).collect()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(CrossSectionParams::default().validate().is_empty());
    }

    #[test]
    fn test_depth_rule() {
        let mut params = CrossSectionParams::default();
        params.depth_mm = 100.0;
        params.top_flange_thickness_mm = 200.0;
        params.bottom_flange_thickness_mm = 50.0;
        params.top_taper_height_mm = 0.0;
        params.bottom_taper_height_mm = 0.0;

        let msgs = messages(&params);
        assert_eq!(msgs.len(), 1, "{:?}", msgs);
        assert!(msgs[0].starts_with("D must be > (tt + tb + ht + hb)"));
    }

    #[test]
    fn test_depth_equal_to_stack_is_rejected() {
        let mut params = CrossSectionParams::default();
        params.depth_mm = params.stacked_height_mm();
        assert_eq!(params.validate().len(), 1);
    }

    #[test]
    fn test_reports_every_violation() {
        let params = CrossSectionParams::new(-1.0, 300.0, 200.0, 50.0, 250.0, 50.0, -5.0, 0.0, -25.0);
        let msgs = messages(&params);
        assert_eq!(
            msgs,
            vec![
                "All main dimensions must be > 0.",
                "Top flange width bt must be ≥ web thickness tw.",
                "Bottom flange width bb must be ≥ web thickness tw.",
                "Taper heights must be ≥ 0.",
                "D must be > (tt + tb + ht + hb). Reduce taper heights or flange thickness.",
                "Concrete density must be > 0.",
            ]
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut params = CrossSectionParams::default();
        params.top_taper_height_mm = f64::NAN;
        let msgs = messages(&params);
        assert_eq!(msgs, vec!["All dimensions must be finite numbers."]);
    }

    #[test]
    fn test_polygon_vertex_order() {
        let poly = build_polygon(&CrossSectionParams::default());
        let v = poly.vertices();
        assert_eq!(v.len(), GIRDER_VERTEX_COUNT);
        assert_eq!(v[0], Point2D::new(330.0, 0.0));
        assert_eq!(v[2], Point2D::new(101.5, 520.0));
        assert_eq!(v[3], Point2D::new(101.5, 922.0));
        assert_eq!(v[5], Point2D::new(254.0, 1372.0));
        assert_eq!(v[6], Point2D::new(-254.0, 1372.0));
        assert_eq!(v[11], Point2D::new(-330.0, 0.0));
    }

    #[test]
    fn test_polygon_is_mirror_symmetric() {
        let poly = build_polygon(&CrossSectionParams::default());
        let v = poly.vertices();
        for i in 0..6 {
            assert_eq!(v[i].mirrored(), v[11 - i]);
        }
    }

    #[test]
    fn test_zero_tapers_keep_vertex_count() {
        let mut params = CrossSectionParams::default();
        params.top_taper_height_mm = 0.0;
        params.bottom_taper_height_mm = 0.0;
        let poly = build_polygon(&params);
        let v = poly.vertices();
        assert_eq!(v.len(), GIRDER_VERTEX_COUNT);
        // Flange corner and web corner share a height
        assert_eq!(v[1].y, v[2].y);
        assert_eq!(v[3].y, v[4].y);
    }

    #[test]
    fn test_all_y_within_depth() {
        let params = CrossSectionParams::default();
        let (lo, hi) = build_polygon(&params).y_range().unwrap();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, params.depth_mm);
    }

    #[test]
    fn test_layers_stack_to_depth() {
        let params = CrossSectionParams::default();
        let layers = params.layers();
        let total: f64 = layers.iter().map(|l| l.height_mm).sum();
        assert!((total - params.depth_mm).abs() < 1e-9);
        assert_eq!(layers[2].kind, LayerKind::Web);
        assert_eq!(layers[2].height_mm, params.web_height_mm());
        assert_eq!(params.web_height_mm(), 402.0);
    }

    #[test]
    fn test_short_symbol_aliases() {
        let json = r#"{"D":1372,"tw":203,"bt":508,"tt":200,"bb":660,"tb":220,"ht":250,"hb":300,"gamma":25}"#;
        let params: CrossSectionParams = serde_json::from_str(json).unwrap();
        assert_eq!(params, CrossSectionParams::default());
    }
}
