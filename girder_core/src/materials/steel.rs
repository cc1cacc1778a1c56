//! Rolled Steel Shapes Reference Table
//!
//! A small built-in table of common rolled sections from three catalogues,
//! kept alongside the girder calculator for quick comparison of section
//! properties.
//!
//! ## Data Source
//!
//! Values are the published catalogue figures:
//!
//! - **AISC** (US customary: in, in², in³, in⁴, lb/ft)
//! - **IS 808** (mm for plate dimensions, cm², cm³, cm⁴, kg/m)
//! - **Eurocode / Euronorm** (same units as IS)
//!
//! Every shape is converted to SI on load (mm, mm², mm³, mm⁴, kN/m) so all
//! entries compare directly with girder results.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::materials::steel::STEEL_SHAPES;
//!
//! let shape = STEEL_SHAPES.lookup("ismb 300").unwrap();
//! assert_eq!(shape.designation, "ISMB 300");
//! assert!((shape.area_mm2 - 5626.0).abs() < 1e-6);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};
use crate::units::{
    Cm3, Cm4, In3, In4, Inches, KgPerM, KnPerM, LbPerFt, Millimeters, Mm3, Mm4, SqCm, SqIn, SqMm,
};

/// Catalogue a shape comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelStandard {
    Aisc,
    Is,
    Eurocode,
}

impl SteelStandard {
    pub const ALL: [SteelStandard; 3] = [SteelStandard::Aisc, SteelStandard::Is, SteelStandard::Eurocode];

    pub fn display_name(&self) -> &'static str {
        match self {
            SteelStandard::Aisc => "AISC",
            SteelStandard::Is => "IS",
            SteelStandard::Eurocode => "Eurocode",
        }
    }

    /// Parse a standard name, ignoring case
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AISC" => Some(SteelStandard::Aisc),
            "IS" => Some(SteelStandard::Is),
            "EUROCODE" | "EC" | "EN" => Some(SteelStandard::Eurocode),
            _ => None,
        }
    }
}

impl std::fmt::Display for SteelStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shape family within a catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeFamily {
    /// AISC wide flange
    WShape,
    /// AISC American Standard channel
    CShape,
    /// IS medium-weight I-beam (ISMB)
    IBeam,
    /// IS medium-weight channel (ISMC)
    Channel,
    /// Euronorm I-section
    Ipe,
    /// Euronorm wide flange H-section
    Heb,
}

impl ShapeFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeFamily::WShape => "W-Shape",
            ShapeFamily::CShape => "C-Shape",
            ShapeFamily::IBeam => "I-Beam",
            ShapeFamily::Channel => "Channel",
            ShapeFamily::Ipe => "IPE",
            ShapeFamily::Heb => "HEB",
        }
    }

    /// Match a display name, ignoring case and surrounding whitespace
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim();
        [
            ShapeFamily::WShape,
            ShapeFamily::CShape,
            ShapeFamily::IBeam,
            ShapeFamily::Channel,
            ShapeFamily::Ipe,
            ShapeFamily::Heb,
        ]
        .into_iter()
        .find(|f| f.display_name().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A rolled steel section with properties in SI units.
///
/// `zx_mm3` and `zy_mm3` are the catalogue's tabulated moduli: plastic for
/// AISC, elastic for IS and Euronorm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelShape {
    /// Catalogue designation (e.g. "W14X90", "IPE 300")
    pub designation: String,
    pub standard: SteelStandard,
    pub family: ShapeFamily,

    /// Cross-sectional area (mm²)
    pub area_mm2: f64,
    /// Overall depth (mm)
    pub depth_mm: f64,
    /// Web thickness (mm)
    pub web_thickness_mm: f64,
    /// Flange width (mm)
    pub flange_width_mm: f64,
    /// Flange thickness (mm)
    pub flange_thickness_mm: f64,

    /// Second moment about the strong axis (mm⁴)
    pub ix_mm4: f64,
    /// Section modulus about the strong axis (mm³)
    pub zx_mm3: f64,
    /// Second moment about the weak axis (mm⁴)
    pub iy_mm4: f64,
    /// Section modulus about the weak axis (mm³)
    pub zy_mm3: f64,

    /// Self-weight (kN/m)
    pub weight_kn_per_m: f64,
}

impl SteelShape {
    /// Build from AISC tabulated values (in, in², in³, in⁴, lb/ft)
    #[allow(clippy::too_many_arguments)]
    fn from_us_customary(
        designation: &str,
        family: ShapeFamily,
        area_in2: f64,
        depth_in: f64,
        tw_in: f64,
        bf_in: f64,
        tf_in: f64,
        ix_in4: f64,
        zx_in3: f64,
        iy_in4: f64,
        zy_in3: f64,
        weight_plf: f64,
    ) -> Self {
        let mm = |v: f64| Millimeters::from(Inches(v)).0;
        SteelShape {
            designation: designation.to_string(),
            standard: SteelStandard::Aisc,
            family,
            area_mm2: SqMm::from(SqIn(area_in2)).0,
            depth_mm: mm(depth_in),
            web_thickness_mm: mm(tw_in),
            flange_width_mm: mm(bf_in),
            flange_thickness_mm: mm(tf_in),
            ix_mm4: Mm4::from(In4(ix_in4)).0,
            zx_mm3: Mm3::from(In3(zx_in3)).0,
            iy_mm4: Mm4::from(In4(iy_in4)).0,
            zy_mm3: Mm3::from(In3(zy_in3)).0,
            weight_kn_per_m: KnPerM::from(LbPerFt(weight_plf)).0,
        }
    }

    /// Build from IS / Euronorm tabulated values (mm, cm², cm³, cm⁴, kg/m)
    #[allow(clippy::too_many_arguments)]
    fn from_metric_catalogue(
        designation: &str,
        standard: SteelStandard,
        family: ShapeFamily,
        area_cm2: f64,
        depth_mm: f64,
        tw_mm: f64,
        bf_mm: f64,
        tf_mm: f64,
        ix_cm4: f64,
        zx_cm3: f64,
        iy_cm4: f64,
        zy_cm3: f64,
        mass_kg_m: f64,
    ) -> Self {
        SteelShape {
            designation: designation.to_string(),
            standard,
            family,
            area_mm2: SqMm::from(SqCm(area_cm2)).0,
            depth_mm,
            web_thickness_mm: tw_mm,
            flange_width_mm: bf_mm,
            flange_thickness_mm: tf_mm,
            ix_mm4: Mm4::from(Cm4(ix_cm4)).0,
            zx_mm3: Mm3::from(Cm3(zx_cm3)).0,
            iy_mm4: Mm4::from(Cm4(iy_cm4)).0,
            zy_mm3: Mm3::from(Cm3(zy_cm3)).0,
            weight_kn_per_m: KnPerM::from(KgPerM(mass_kg_m)).0,
        }
    }
}

impl std::fmt::Display for SteelShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.designation, self.standard, self.family)
    }
}

/// Lookup key: uppercase with all whitespace removed, so "ismb300",
/// "ISMB 300" and " Ismb  300 " all match.
fn normalize_designation(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// In-memory shape table, kept in catalogue order.
#[derive(Debug, Clone, Default)]
pub struct SteelShapeDb {
    shapes: Vec<SteelShape>,
    /// Normalized designation -> index into `shapes`
    index: HashMap<String, usize>,
}

impl SteelShapeDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape; a shape with the same normalized designation is replaced.
    pub fn insert(&mut self, shape: SteelShape) {
        let key = normalize_designation(&shape.designation);
        match self.index.get(&key) {
            Some(&i) => self.shapes[i] = shape,
            None => {
                self.index.insert(key, self.shapes.len());
                self.shapes.push(shape);
            }
        }
    }

    /// Standards present in the table, in catalogue order
    pub fn standards(&self) -> Vec<SteelStandard> {
        let mut out = Vec::new();
        for s in &self.shapes {
            if !out.contains(&s.standard) {
                out.push(s.standard);
            }
        }
        out
    }

    /// Shape families available for a standard
    pub fn families(&self, standard: SteelStandard) -> Vec<ShapeFamily> {
        let mut out = Vec::new();
        for s in self.shapes.iter().filter(|s| s.standard == standard) {
            if !out.contains(&s.family) {
                out.push(s.family);
            }
        }
        out
    }

    /// Designations of one family within a standard
    pub fn designations(&self, standard: SteelStandard, family: ShapeFamily) -> Vec<&str> {
        self.shapes
            .iter()
            .filter(|s| s.standard == standard && s.family == family)
            .map(|s| s.designation.as_str())
            .collect()
    }

    /// Look up a shape by designation, ignoring case and whitespace.
    ///
    /// # Errors
    ///
    /// [`SectionError::ShapeNotFound`] when no shape matches.
    pub fn lookup(&self, designation: &str) -> SectionResult<&SteelShape> {
        self.index
            .get(&normalize_designation(designation))
            .map(|&i| &self.shapes[i])
            .ok_or_else(|| SectionError::shape_not_found(designation))
    }

    /// Shapes whose designation starts with `prefix` (normalized the same way
    /// as [`SteelShapeDb::lookup`])
    pub fn search(&self, prefix: &str) -> Vec<&SteelShape> {
        let prefix = normalize_designation(prefix);
        self.shapes
            .iter()
            .filter(|s| normalize_designation(&s.designation).starts_with(&prefix))
            .collect()
    }

    pub fn all(&self) -> &[SteelShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// The built-in shape table
pub fn builtin_shapes() -> SteelShapeDb {
    use ShapeFamily::*;
    use SteelStandard::*;

    let mut db = SteelShapeDb::new();

    // AISC: A, d, tw, bf, tf, Ix, Zx, Iy, Zy, W
    db.insert(SteelShape::from_us_customary("W14X90", WShape, 26.5, 14.0, 0.440, 14.5, 0.710, 999.0, 157.0, 362.0, 75.6, 90.0));
    db.insert(SteelShape::from_us_customary("W12X26", WShape, 7.65, 12.2, 0.230, 6.49, 0.380, 204.0, 37.2, 17.3, 8.35, 26.0));
    db.insert(SteelShape::from_us_customary("W8X10", WShape, 2.96, 7.89, 0.170, 3.94, 0.205, 30.8, 8.87, 2.09, 1.35, 10.0));
    db.insert(SteelShape::from_us_customary("C10X30", CShape, 8.81, 10.0, 0.673, 3.03, 0.436, 103.0, 24.0, 3.94, 2.66, 30.0));

    // IS 808
    db.insert(SteelShape::from_metric_catalogue("ISMB 300", Is, IBeam, 56.26, 300.0, 7.5, 140.0, 12.4, 8603.6, 573.6, 453.9, 64.8, 44.2));
    db.insert(SteelShape::from_metric_catalogue("ISMB 400", Is, IBeam, 78.46, 400.0, 8.9, 140.0, 16.0, 20458.4, 1022.9, 622.1, 88.9, 61.6));
    db.insert(SteelShape::from_metric_catalogue("ISMC 200", Is, Channel, 28.21, 200.0, 6.1, 75.0, 11.4, 1819.3, 181.9, 140.4, 26.3, 22.1));

    // Euronorm
    db.insert(SteelShape::from_metric_catalogue("IPE 300", Eurocode, Ipe, 53.80, 300.0, 7.1, 150.0, 10.7, 8356.0, 628.0, 604.0, 125.0, 42.2));
    db.insert(SteelShape::from_metric_catalogue("HEB 200", Eurocode, Heb, 78.10, 200.0, 9.0, 200.0, 15.0, 5696.0, 643.0, 2003.0, 306.0, 61.3));

    db
}

/// Shared instance of [`builtin_shapes`], built on first use
pub static STEEL_SHAPES: Lazy<SteelShapeDb> = Lazy::new(builtin_shapes);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_shapes() {
        let db = builtin_shapes();
        assert_eq!(db.len(), 9);
        assert!(!db.is_empty());
        assert_eq!(db.standards(), SteelStandard::ALL.to_vec());
    }

    #[test]
    fn test_families_and_designations() {
        let db = &*STEEL_SHAPES;
        assert_eq!(db.families(SteelStandard::Aisc), vec![ShapeFamily::WShape, ShapeFamily::CShape]);
        assert_eq!(db.families(SteelStandard::Is), vec![ShapeFamily::IBeam, ShapeFamily::Channel]);
        assert_eq!(
            db.designations(SteelStandard::Aisc, ShapeFamily::WShape),
            vec!["W14X90", "W12X26", "W8X10"]
        );
        assert!(db.designations(SteelStandard::Is, ShapeFamily::Ipe).is_empty());
    }

    #[test]
    fn test_lookup_normalizes() {
        let db = &*STEEL_SHAPES;
        assert_eq!(db.lookup("w14x90").unwrap().designation, "W14X90");
        assert_eq!(db.lookup("IPE300").unwrap().designation, "IPE 300");
        assert_eq!(db.lookup("  heb 200 ").unwrap().family, ShapeFamily::Heb);
    }

    #[test]
    fn test_shape_not_found() {
        let err = STEEL_SHAPES.lookup("W99X999").unwrap_err();
        assert_eq!(err, SectionError::shape_not_found("W99X999"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_us_customary_conversion() {
        let w = STEEL_SHAPES.lookup("W14X90").unwrap();
        assert_relative_eq!(w.area_mm2, 26.5 * 645.16, max_relative = 1e-9);
        assert_relative_eq!(w.depth_mm, 355.6, max_relative = 1e-9);
        assert_relative_eq!(w.ix_mm4, 999.0 * 25.4_f64.powi(4), max_relative = 1e-9);
        // 90 lb/ft ≈ 1.313 kN/m
        assert_relative_eq!(w.weight_kn_per_m, 1.3134, max_relative = 1e-3);
    }

    #[test]
    fn test_metric_catalogue_conversion() {
        let ipe = STEEL_SHAPES.lookup("IPE 300").unwrap();
        assert_relative_eq!(ipe.area_mm2, 5380.0, max_relative = 1e-9);
        assert_relative_eq!(ipe.ix_mm4, 8.356e7, max_relative = 1e-9);
        assert_relative_eq!(ipe.zx_mm3, 6.28e5, max_relative = 1e-9);
        assert_relative_eq!(ipe.weight_kn_per_m, 42.2 * 9.80665 / 1000.0, max_relative = 1e-9);
        assert_eq!(ipe.depth_mm, 300.0);
    }

    #[test]
    fn test_search_prefix() {
        let hits = STEEL_SHAPES.search("ismb");
        assert_eq!(hits.len(), 2);
        assert!(STEEL_SHAPES.search("X").is_empty());
    }

    #[test]
    fn test_insert_replaces_same_designation() {
        let mut db = builtin_shapes();
        let mut shape = db.lookup("W8X10").unwrap().clone();
        shape.designation = "w8x10".to_string();
        shape.area_mm2 = 1.0;
        db.insert(shape);
        assert_eq!(db.len(), 9);
        assert_eq!(db.lookup("W8X10").unwrap().area_mm2, 1.0);
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!(SteelStandard::from_name("aisc"), Some(SteelStandard::Aisc));
        assert_eq!(SteelStandard::from_name("Eurocode"), Some(SteelStandard::Eurocode));
        assert_eq!(SteelStandard::from_name("BS"), None);
        assert_eq!(ShapeFamily::from_name("w-shape"), Some(ShapeFamily::WShape));
        assert_eq!(ShapeFamily::from_name("HEB"), Some(ShapeFamily::Heb));
    }
}
