//! # Planar Geometry
//!
//! Shape-independent building blocks: points, closed polygons and the
//! polygon-integral moment engine. Nothing in this module knows about
//! girders; the section builder in [`crate::calculations::girder`] produces a
//! [`Polygon`] and hands it to [`compute_raw_moments`].
//!
//! - [`polygon`] - `Point2D`, `Polygon`, winding direction
//! - [`moments`] - area, centroid and second moment via Green's theorem

pub mod moments;
pub mod polygon;

pub use moments::{compute_raw_moments, RawMoments};
pub use polygon::{Point2D, Polygon, Winding};
