//! # Section Calculations
//!
//! Girder-specific calculations built on the shape-independent
//! [`crate::geometry`] engine. The pattern follows the rest of the crate:
//!
//! - `CrossSectionParams` - input parameters (JSON-serializable)
//! - `SectionAnalysis` - everything computed for one set of parameters
//! - `compute(&params) -> SectionResult<SectionAnalysis>` - pure pipeline
//!
//! ## Modules
//!
//! - [`girder`] - parameters, validation rules, outline builder
//! - [`section_properties`] - centroidal properties and the full pipeline

pub mod girder;
pub mod section_properties;

use serde::{Deserialize, Serialize};

pub use girder::{build_polygon, validate, CrossSectionParams, GirderLevels, Layer, LayerKind};
pub use section_properties::{compute, derive, SectionAnalysis, SectionProperties};

use crate::errors::SectionResult;

/// A labelled girder section stored in a project.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "G1 - end span",
///   "params": { "D": 1372, "tw": 203, "bt": 508, "tt": 200,
///               "bb": 660, "tb": 220, "ht": 250, "hb": 300, "gamma": 25 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionItem {
    /// User-provided label (e.g. "G1", "Edge girder")
    pub label: String,
    pub params: CrossSectionParams,
}

impl SectionItem {
    pub fn new(label: impl Into<String>, params: CrossSectionParams) -> Self {
        SectionItem {
            label: label.into(),
            params,
        }
    }

    /// Run the section pipeline on this item's parameters
    pub fn compute(&self) -> SectionResult<SectionAnalysis> {
        compute(&self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_item_json() {
        let item = SectionItem::new("G1", CrossSectionParams::default());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"label\":\"G1\""));
        assert!(json.contains("\"depth_mm\":1372.0"));

        let back: SectionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_section_item_compute() {
        let item = SectionItem::new("G1", CrossSectionParams::default());
        let analysis = item.compute().unwrap();
        assert_eq!(analysis.params, item.params);
    }
}
