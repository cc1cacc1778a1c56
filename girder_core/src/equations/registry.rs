//! # Equation Registry
//!
//! Central registry of the section-property equations used by the engine.
//! Each equation has metadata including references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for the PDF appendix and `EQUATIONS.md`
//! - Per-section usage tracking through [`EquationTracker`]
//!
//! ## Usage
//!
//! ```rust
//! use girder_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record_for_section(Equation::PolygonArea, "Gross area", "G-1");
//!
//! let meta = Equation::PolygonArea.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Engineering Mechanics: Statics by R.C. Hibbeler
    Hibbeler {
        edition: u8,
        chapter: u8,
    },
    /// Fundamental mechanics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in PDF reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Hibbeler { edition, chapter } => {
                format!("Hibbeler Statics {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Hibbeler { .. } => "Hibbeler",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Green's-theorem integrals over the outline polygon
    PolygonIntegrals,
    /// Centroidal inertia and section moduli
    SectionProperties,
    /// Volume and self-weight per unit length
    SelfWeight,
    /// Closed-form layer formulas (rectangle, trapezoid) for hand checks
    LayerFormulas,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::PolygonIntegrals => "Polygon Integrals",
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::SelfWeight => "Self-Weight",
            EquationCategory::LayerFormulas => "Layer Formulas",
        }
    }

    /// Sort order for the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::PolygonIntegrals => 1,
            EquationCategory::SectionProperties => 2,
            EquationCategory::SelfWeight => 3,
            EquationCategory::LayerFormulas => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "A", "y_bar")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "mm^4")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in Typst math notation for PDF rendering
    pub formula_typst: &'static str,
    /// The formula in plain text for markdown
    pub formula_plain: &'static str,
    /// Reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used for girder section properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Polygon integrals
    // -------------------------------------------------------------------------
    /// 2A = Σ (x_i·y_{i+1} − x_{i+1}·y_i)
    PolygonArea,
    /// Cx, Cy from first-moment edge sums
    PolygonCentroid,
    /// Ix0 from second-moment edge sums
    PolygonSecondMoment,

    // -------------------------------------------------------------------------
    // Derived section properties
    // -------------------------------------------------------------------------
    /// Ixx = Ix0 − A·ȳ²
    ParallelAxis,
    /// Ztop = Ixx / (D − ȳ)
    SectionModulusTop,
    /// Zbot = Ixx / ȳ
    SectionModulusBottom,

    // -------------------------------------------------------------------------
    // Self-weight
    // -------------------------------------------------------------------------
    /// V = A / 10⁶
    VolumePerLength,
    /// w = γ·V
    SelfWeightPerLength,

    // -------------------------------------------------------------------------
    // Layer formulas
    // -------------------------------------------------------------------------
    /// A = b·h
    RectangularArea,
    /// I = b·h³/12
    RectangularMomentOfInertia,
    /// A = (b1 + b2)·h/2
    TrapezoidArea,
    /// ȳ = h·(b1 + 2·b2)/(3·(b1 + b2))
    TrapezoidCentroid,
    /// I = h³·(b1² + 4·b1·b2 + b2²)/(36·(b1 + b2))
    TrapezoidMomentOfInertia,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::PolygonArea => EquationMetadata {
                name: "Polygon Area (Shoelace)",
                description: "Signed area of a closed outline from its vertex coordinates; the sign follows the winding direction",
                formula_typst: r#"$2 A = sum_(i) (x_i y_(i+1) - x_(i+1) y_i)$"#,
                formula_plain: "2A = Σ (x_i·y_(i+1) − x_(i+1)·y_i)",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 9 },
                variables: vec![
                    Variable::new("A", "Enclosed area", "mm^2"),
                    Variable::new("x_i, y_i", "Vertex coordinates (origin at bottom centre)", "mm"),
                ],
                assumptions: vec![
                    "Outline is a simple (non-self-intersecting) closed loop",
                    "Reported area is |A|; the same loop in reverse order gives the same value",
                ],
                category: EquationCategory::PolygonIntegrals,
                source_module: "geometry/moments.rs",
                source_function: "compute_raw_moments",
            },
            Equation::PolygonCentroid => EquationMetadata {
                name: "Polygon Centroid",
                description: "Centroid coordinates from the first moments of the edge cross products",
                formula_typst: r#"$C_x = (sum (x_i + x_(i+1)) c_i) / (6 A)$, $C_y = (sum (y_i + y_(i+1)) c_i) / (6 A)$"#,
                formula_plain: "Cx = Σ(x_i + x_(i+1))·c_i / (6A), Cy = Σ(y_i + y_(i+1))·c_i / (6A)",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 9 },
                variables: vec![
                    Variable::new("c_i", "Edge cross product x_i y_(i+1) - x_(i+1) y_i", "mm^2"),
                    Variable::new("C_x", "Centroid offset from the centreline", "mm"),
                    Variable::new("C_y", "Centroid height above the bottom fiber", "mm"),
                ],
                assumptions: vec!["Non-zero enclosed area"],
                category: EquationCategory::PolygonIntegrals,
                source_module: "geometry/moments.rs",
                source_function: "compute_raw_moments",
            },
            Equation::PolygonSecondMoment => EquationMetadata {
                name: "Polygon Second Moment of Area",
                description: "Second moment of area about the x-axis through the bottom fiber",
                formula_typst: r#"$I_(x 0) = 1/12 sum (y_i^2 + y_i y_(i+1) + y_(i+1)^2) c_i$"#,
                formula_plain: "Ix0 = Σ (y_i² + y_i·y_(i+1) + y_(i+1)²)·c_i / 12",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 10 },
                variables: vec![
                    Variable::new("I_(x 0)", "Second moment about the bottom fiber", "mm^4"),
                    Variable::new("c_i", "Edge cross product", "mm^2"),
                ],
                assumptions: vec!["Sign normalized by the winding direction"],
                category: EquationCategory::PolygonIntegrals,
                source_module: "geometry/moments.rs",
                source_function: "compute_raw_moments",
            },
            Equation::ParallelAxis => EquationMetadata {
                name: "Parallel-Axis Theorem",
                description: "Moves the second moment from the bottom fiber to the horizontal centroidal axis",
                formula_typst: r#"$I_(x x) = I_(x 0) - A macron(y)^2$"#,
                formula_plain: "Ixx = Ix0 − A·ȳ²",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 10 },
                variables: vec![
                    Variable::new("I_(x x)", "Centroidal second moment of area", "mm^4"),
                    Variable::new("macron(y)", "Centroid height above the bottom fiber", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "parallel_axis_to_centroid",
            },
            Equation::SectionModulusTop => EquationMetadata {
                name: "Section Modulus (Top Fiber)",
                description: "Elastic section modulus to the extreme top fiber",
                formula_typst: r#"$Z_"top" = I_(x x) / (D - macron(y))$"#,
                formula_plain: "Ztop = Ixx / (D − ȳ)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("D", "Overall depth", "mm"),
                    Variable::new("Z_\"top\"", "Top section modulus", "mm^3"),
                ],
                assumptions: vec!["Reported as non-finite when the centroid lies on the top fiber"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "section_modulus",
            },
            Equation::SectionModulusBottom => EquationMetadata {
                name: "Section Modulus (Bottom Fiber)",
                description: "Elastic section modulus to the extreme bottom fiber",
                formula_typst: r#"$Z_"bot" = I_(x x) / macron(y)$"#,
                formula_plain: "Zbot = Ixx / ȳ",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("Z_\"bot\"", "Bottom section modulus", "mm^3")],
                assumptions: vec!["Reported as non-finite when the centroid lies on the bottom fiber"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "section_modulus",
            },
            Equation::VolumePerLength => EquationMetadata {
                name: "Volume per Unit Length",
                description: "Material volume per meter of girder",
                formula_typst: r#"$V = A / 10^6$"#,
                formula_plain: "V = A / 10^6",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("V", "Volume per meter", "m^3/m")],
                assumptions: vec!["Prismatic member (constant section along its length)"],
                category: EquationCategory::SelfWeight,
                source_module: "equations/section.rs",
                source_function: "volume_per_length",
            },
            Equation::SelfWeightPerLength => EquationMetadata {
                name: "Self-Weight per Unit Length",
                description: "Dead load of the girder per meter",
                formula_typst: r#"$w = gamma V$"#,
                formula_plain: "w = γ·V",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("gamma", "Unit weight of concrete", "kN/m^3"),
                    Variable::new("w", "Self-weight per meter", "kN/m"),
                ],
                assumptions: vec![],
                category: EquationCategory::SelfWeight,
                source_module: "equations/section.rs",
                source_function: "self_weight_per_length",
            },
            Equation::RectangularArea => EquationMetadata {
                name: "Rectangular Area",
                description: "Area of a flange or web layer",
                formula_typst: r#"$A = b h$"#,
                formula_plain: "A = b * h",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "1" },
                variables: vec![
                    Variable::new("b", "Layer width", "mm"),
                    Variable::new("h", "Layer height", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::LayerFormulas,
                source_module: "equations/section.rs",
                source_function: "rectangular_area",
            },
            Equation::RectangularMomentOfInertia => EquationMetadata {
                name: "Rectangular Moment of Inertia",
                description: "Centroidal second moment of a rectangular layer",
                formula_typst: r#"$I = (b h^3) / 12$"#,
                formula_plain: "I = b * h^3 / 12",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "1" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::LayerFormulas,
                source_module: "equations/section.rs",
                source_function: "rectangular_moment_of_inertia",
            },
            Equation::TrapezoidArea => EquationMetadata {
                name: "Trapezoid Area",
                description: "Area of a taper layer between two widths",
                formula_typst: r#"$A = ((b_1 + b_2) h) / 2$"#,
                formula_plain: "A = (b1 + b2) * h / 2",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "4" },
                variables: vec![
                    Variable::new("b_1", "Width at the layer's base", "mm"),
                    Variable::new("b_2", "Width at the layer's top", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::LayerFormulas,
                source_module: "equations/section.rs",
                source_function: "trapezoid_area",
            },
            Equation::TrapezoidCentroid => EquationMetadata {
                name: "Trapezoid Centroid",
                description: "Height of a taper layer's centroid above its base",
                formula_typst: r#"$macron(y) = (h (b_1 + 2 b_2)) / (3 (b_1 + b_2))$"#,
                formula_plain: "ȳ = h * (b1 + 2*b2) / (3 * (b1 + b2))",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "4" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::LayerFormulas,
                source_module: "equations/section.rs",
                source_function: "trapezoid_centroid_height",
            },
            Equation::TrapezoidMomentOfInertia => EquationMetadata {
                name: "Trapezoid Moment of Inertia",
                description: "Centroidal second moment of a taper layer",
                formula_typst: r#"$I = (h^3 (b_1^2 + 4 b_1 b_2 + b_2^2)) / (36 (b_1 + b_2))$"#,
                formula_plain: "I = h^3 * (b1^2 + 4*b1*b2 + b2^2) / (36 * (b1 + b2))",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "4" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::LayerFormulas,
                source_module: "equations/section.rs",
                source_function: "trapezoid_moment_of_inertia",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![PolygonIntegrals, SectionProperties, SelfWeight, LayerFormulas];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::PolygonArea,
    Equation::PolygonCentroid,
    Equation::PolygonSecondMoment,
    Equation::ParallelAxis,
    Equation::SectionModulusTop,
    Equation::SectionModulusBottom,
    Equation::VolumePerLength,
    Equation::SelfWeightPerLength,
    Equation::RectangularArea,
    Equation::RectangularMomentOfInertia,
    Equation::TrapezoidArea,
    Equation::TrapezoidCentroid,
    Equation::TrapezoidMomentOfInertia,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being applied to a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// What it was used for (e.g., "Centroidal inertia")
    pub context: String,
    /// Label of the section it was applied to
    pub section_label: Option<String>,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            section_label: None,
        }
    }

    pub fn for_section(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            section_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage across the sections of a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific section
    pub fn record_for_section(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_section(equation, context, label));
    }

    /// Record every equation the section pipeline applies
    pub fn record_section_pipeline(&mut self, label: &str) {
        for (equation, context) in section_calculation_equations() {
            self.record_for_section(equation, context, label);
        }
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = std::collections::HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> std::collections::HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: std::collections::HashMap<Equation, Vec<&EquationUsage>> = std::collections::HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category, categories in appendix order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: std::collections::HashMap<EquationCategory, Vec<Equation>> = std::collections::HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }
}

// ============================================================================
// Typst Appendix Generation
// ============================================================================

impl EquationTracker {
    /// Generate Typst markup for the "List of Equations" appendix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use girder_core::equations::registry::EquationTracker;
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record_section_pipeline("G-1");
    ///
    /// let typst = tracker.generate_appendix_typst();
    /// assert!(typst.contains("Parallel-Axis Theorem"));
    /// ```
    pub fn generate_appendix_typst(&self) -> String {
        let mut output = String::new();

        output.push_str(r##"
#pagebreak()

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Appendix: List of Equations]
  ]
]

#v(12pt)

#text(size: 10pt)[
  This appendix lists the equations used to compute the section properties in this report.
  Each equation includes its formula, reference, and the sections to which it was applied.
]

#v(16pt)
"##);

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("#text(style: \"italic\")[No equations recorded for this report.]\n");
            return output;
        }

        let usage_by_eq = self.by_equation();

        for (category, equations) in by_category {
            output.push_str(&format!("\n== {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();

                output.push_str(&format!("=== {}\n\n", meta.name));
                output.push_str(&format!("#text(size: 10pt)[{}]\n\n", meta.description));
                output.push_str(&format!("*Formula:* {}\n\n", meta.formula_typst));
                output.push_str(&format!("*Reference:* {}\n\n", meta.reference.citation()));

                if !meta.variables.is_empty() {
                    output.push_str("*Variables:*\n");
                    output.push_str("#table(\n");
                    output.push_str("  columns: (auto, 1fr, auto),\n");
                    output.push_str("  inset: 6pt,\n");
                    output.push_str("  stroke: 0.5pt,\n");
                    output.push_str("  align: (left, left, left),\n");
                    output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");
                    for var in &meta.variables {
                        output.push_str(&format!(
                            "  [${}$], [{}], [{}],\n",
                            escape_typst_math(var.symbol),
                            var.description,
                            var.units
                        ));
                    }
                    output.push_str(")\n\n");
                }

                if let Some(usages) = usage_by_eq.get(&equation) {
                    let mut labels: Vec<&str> = usages
                        .iter()
                        .filter_map(|u| u.section_label.as_deref())
                        .collect();
                    if !labels.is_empty() {
                        labels.sort();
                        labels.dedup();
                        output.push_str(&format!("*Applied to:* {}\n\n", labels.join(", ")));
                    }
                }

                if !meta.assumptions.is_empty() {
                    output.push_str("*Assumptions:*\n");
                    for assumption in &meta.assumptions {
                        output.push_str(&format!("- {}\n", assumption));
                    }
                    output.push('\n');
                }

                output.push_str("#v(8pt)\n");
                output.push_str("#line(length: 100%, stroke: 0.25pt + gray)\n");
                output.push_str("#v(8pt)\n\n");
            }
        }

        output
    }
}

/// The equations applied by the section pipeline, in evaluation order, with
/// the context each is used in.
pub fn section_calculation_equations() -> Vec<(Equation, &'static str)> {
    vec![
        (Equation::PolygonArea, "Gross area"),
        (Equation::PolygonCentroid, "Centroid height"),
        (Equation::PolygonSecondMoment, "Second moment about bottom fiber"),
        (Equation::ParallelAxis, "Centroidal second moment"),
        (Equation::SectionModulusTop, "Top fiber modulus"),
        (Equation::SectionModulusBottom, "Bottom fiber modulus"),
        (Equation::VolumePerLength, "Concrete volume"),
        (Equation::SelfWeightPerLength, "Self-weight"),
    ]
}

/// Escape special characters for Typst math mode
fn escape_typst_math(s: &str) -> String {
    // Underscores are wanted as subscripts; only backslashes need escaping
    s.replace('\\', "\\\\")
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the EQUATIONS.md reference from the registry.
///
/// # Example
///
/// ```rust
/// use girder_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Girder Section Equations Reference"));
/// assert!(markdown.contains("Polygon Integrals"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Girder Section Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used to compute girder section properties.

## Conventions

| Quantity | Convention |
|----------|------------|
| Origin | Bottom fiber, on the vertical centreline |
| y | Positive upward |
| Winding | Either direction; results are sign-normalized |
| Lengths | mm |
| Unit weight | kN/m³ |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
