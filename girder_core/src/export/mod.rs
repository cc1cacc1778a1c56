//! # CAD Export
//!
//! - [`dxf`] - DXF R12 polyline of the section outline

pub mod dxf;

pub use dxf::{to_dxf_string, write_dxf};
