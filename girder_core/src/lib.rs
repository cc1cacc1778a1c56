//! # girder_core - Girder Section Property Engine
//!
//! `girder_core` computes exact geometric properties of symmetric, tapered
//! I/T-shaped girder cross-sections (precast/prestressed concrete girders).
//! Nine dimensions become a closed outline, the outline is integrated with
//! Green's theorem, and the results are turned into the values a designer
//! needs: area, centroid height, centroidal second moment, section moduli,
//! volume and self-weight per meter.
//!
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from parameters to results, nothing cached
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Every violated input rule is reported, not just the first
//! - **Separated concerns**: The moment engine knows nothing about girders;
//!   drawing, DXF and PDF output only consume results
//!
//! ## Quick Start
//!
//! ```rust
//! use girder_core::calculations::{compute, CrossSectionParams};
//!
//! let analysis = compute(&CrossSectionParams::default()).unwrap();
//! println!("A = {:.0} mm²", analysis.properties.area_mm2);
//! println!("ȳ = {:.1} mm", analysis.properties.ybar_mm);
//!
//! let json = serde_json::to_string_pretty(&analysis.properties).unwrap();
//! assert!(json.contains("ixx_mm4"));
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Points, polygons and the polygon moment engine
//! - [`calculations`] - Girder parameters, validation, outline builder, section properties
//! - [`equations`] - Closed-form formulas and the equation registry
//! - [`report`] - Report settings, table rows and number formatting
//! - [`drawing`] - Dimensioned SVG drawing
//! - [`export`] - DXF export
//! - [`pdf`] - Typst-rendered PDF reports
//! - [`materials`] - Rolled steel shape reference table
//! - [`project`] - Project container for multiple sections
//! - [`file_io`] - Atomic file writes, project save/load
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod drawing;
pub mod equations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod geometry;
pub mod materials;
pub mod pdf;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, CrossSectionParams, SectionAnalysis, SectionItem, SectionProperties};
pub use errors::{SectionError, SectionResult, Violation};
pub use file_io::{load_project, save_project};
pub use geometry::{Point2D, Polygon, RawMoments};
pub use project::{Project, ProjectMetadata};
pub use report::ReportSettings;
