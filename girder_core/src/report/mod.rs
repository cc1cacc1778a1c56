//! # Report Content
//!
//! Text content shared by the PDF report and the CLI: report settings, the
//! input summary lines and the formatted result lines.
//!
//! - [`format`] - number formatting with a placeholder for non-finite values

pub mod format;

use serde::{Deserialize, Serialize};

use crate::calculations::{CrossSectionParams, SectionProperties};
use format::{fmt_dimension, fmt_exp, fmt_fixed};

/// Title used when none is configured
pub const DEFAULT_REPORT_TITLE: &str = "PSC Girder Section Property Report";

/// Per-report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Report heading
    pub title: String,
    /// Name of the responsible engineer (empty to omit)
    #[serde(default)]
    pub engineer: String,
    /// Job/project number (empty to omit)
    #[serde(default)]
    pub job_id: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            title: DEFAULT_REPORT_TITLE.to_string(),
            engineer: String::new(),
            job_id: String::new(),
        }
    }
}

impl ReportSettings {
    pub fn with_title(title: impl Into<String>) -> Self {
        ReportSettings {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// One labelled row of a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
    pub unit: String,
}

impl ReportRow {
    fn new(label: &str, value: String, unit: &str) -> Self {
        ReportRow {
            label: label.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

/// Input dimensions as table rows (lengths in mm, unit weight in kN/m³)
pub fn input_rows(params: &CrossSectionParams) -> Vec<ReportRow> {
    vec![
        ReportRow::new("D", fmt_dimension(params.depth_mm), "mm"),
        ReportRow::new("tw", fmt_dimension(params.web_thickness_mm), "mm"),
        ReportRow::new("bt", fmt_dimension(params.top_flange_width_mm), "mm"),
        ReportRow::new("tt", fmt_dimension(params.top_flange_thickness_mm), "mm"),
        ReportRow::new("bb", fmt_dimension(params.bottom_flange_width_mm), "mm"),
        ReportRow::new("tb", fmt_dimension(params.bottom_flange_thickness_mm), "mm"),
        ReportRow::new("ht", fmt_dimension(params.top_taper_height_mm), "mm"),
        ReportRow::new("hb", fmt_dimension(params.bottom_taper_height_mm), "mm"),
        ReportRow::new("γ", fmt_dimension(params.unit_weight_kn_m3), "kN/m³"),
    ]
}

/// Results as table rows with report precision: A to the nearest mm², ȳ to
/// 0.1 mm, Ixx and moduli in 3-digit exponential, volume to 6 places and
/// weight to 3 places.
pub fn result_rows(props: &SectionProperties) -> Vec<ReportRow> {
    vec![
        ReportRow::new("Area A", fmt_fixed(props.area_mm2.round(), 0), "mm²"),
        ReportRow::new("Centroid ȳ (from bottom)", fmt_fixed(props.ybar_mm, 1), "mm"),
        ReportRow::new("Ixx (about centroid)", fmt_exp(props.ixx_mm4, 3), "mm⁴"),
        ReportRow::new("Ztop", fmt_exp(props.ztop_mm3, 3), "mm³"),
        ReportRow::new("Zbot", fmt_exp(props.zbot_mm3, 3), "mm³"),
        ReportRow::new("Volume per meter", fmt_fixed(props.volume_m3_per_m, 6), "m³/m"),
        ReportRow::new("Self weight per meter", fmt_fixed(props.weight_kn_per_m, 3), "kN/m"),
    ]
}

/// Compact input summary, one line per pair of related dimensions
pub fn input_lines(params: &CrossSectionParams) -> Vec<String> {
    vec![
        format!(
            "D={}, tw={}",
            fmt_dimension(params.depth_mm),
            fmt_dimension(params.web_thickness_mm)
        ),
        format!(
            "bt={}, tt={}",
            fmt_dimension(params.top_flange_width_mm),
            fmt_dimension(params.top_flange_thickness_mm)
        ),
        format!(
            "bb={}, tb={}",
            fmt_dimension(params.bottom_flange_width_mm),
            fmt_dimension(params.bottom_flange_thickness_mm)
        ),
        format!(
            "Top taper ht={}, Bottom taper hb={}",
            fmt_dimension(params.top_taper_height_mm),
            fmt_dimension(params.bottom_taper_height_mm)
        ),
        format!("Concrete density = {} kN/m³", fmt_dimension(params.unit_weight_kn_m3)),
    ]
}

/// Result rows rendered as `label = value unit` lines
pub fn result_lines(props: &SectionProperties) -> Vec<String> {
    result_rows(props)
        .into_iter()
        .map(|row| format!("{} = {} {}", row.label, row.value, row.unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute;

    #[test]
    fn test_default_settings() {
        let settings = ReportSettings::default();
        assert_eq!(settings.title, "PSC Girder Section Property Report");
        assert!(settings.engineer.is_empty());
    }

    #[test]
    fn test_settings_missing_optional_fields() {
        let settings: ReportSettings = serde_json::from_str(r#"{"title":"G1"}"#).unwrap();
        assert_eq!(settings, ReportSettings::with_title("G1"));
    }

    #[test]
    fn test_default_result_lines() {
        let analysis = compute(&CrossSectionParams::default()).unwrap();
        let lines = result_lines(&analysis.properties);
        assert_eq!(lines[0], "Area A = 546731 mm²");
        assert_eq!(lines[1], "Centroid ȳ (from bottom) = 627.6 mm");
        assert_eq!(lines[2], "Ixx (about centroid) = 1.126e+11 mm⁴");
        assert_eq!(lines[5], "Volume per meter = 0.546731 m³/m");
        assert_eq!(lines[6], "Self weight per meter = 13.668 kN/m");
    }

    #[test]
    fn test_non_finite_modulus_row() {
        let mut props = compute(&CrossSectionParams::default()).unwrap().properties;
        props.zbot_mm3 = f64::INFINITY;
        let rows = result_rows(&props);
        assert_eq!(rows[4].value, format::PLACEHOLDER);
    }

    #[test]
    fn test_input_lines() {
        let lines = input_lines(&CrossSectionParams::default());
        assert_eq!(lines[0], "D=1372, tw=203");
        assert_eq!(lines[3], "Top taper ht=250, Bottom taper hb=300");
        assert_eq!(lines[4], "Concrete density = 25 kN/m³");
        assert_eq!(input_rows(&CrossSectionParams::default()).len(), 9);
    }
}
