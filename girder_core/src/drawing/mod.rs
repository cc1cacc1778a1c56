//! # Section Drawings
//!
//! - [`svg`] - dimensioned SVG drawing, used standalone and embedded in the PDF report

pub mod svg;

pub use svg::{render_section_svg, write_svg};
