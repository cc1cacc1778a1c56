//! # Section Property Equations
//!
//! All closed-form formulas used by the section pipeline live here, so they
//! can be checked against references in one place and listed in the report
//! appendix.
//!
//! ## Modules
//!
//! - [`section`] - Layer formulas, parallel-axis shift, section modulus, self-weight
//! - [`registry`] - Equation metadata and tracking for PDF appendix generation
//!
//! ## Conventions
//!
//! - **Origin**: bottom fiber on the vertical centreline
//! - **y**: positive upward, so ȳ is the centroid height above the bottom fiber
//! - **Units**: mm, mm², mm³, mm⁴; kN/m³ and kN/m for weights
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Hibbeler, Engineering Mechanics: Statics, 14th Edition (Ch. 9-10)

pub mod registry;
pub mod section;

pub use section::{
    parallel_axis_from_centroid,
    parallel_axis_to_centroid,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
    section_modulus,
    self_weight_per_length,
    trapezoid_area,
    trapezoid_centroid_height,
    trapezoid_moment_of_inertia,
    volume_per_length,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
    section_calculation_equations,
};
