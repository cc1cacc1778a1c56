//! # Materials Database
//!
//! Reference data for materials and rolled sections.
//!
//! - [`steel`] - rolled steel shapes (AISC, IS, Euronorm) converted to SI
//!
//! Concrete is described by its unit weight alone, carried on
//! [`crate::calculations::CrossSectionParams`].

pub mod steel;

pub use steel::{builtin_shapes, ShapeFamily, SteelShape, SteelShapeDb, SteelStandard, STEEL_SHAPES};
