//! SVG drawing of a girder section with dimensions.
//!
//! The section is scaled uniformly to fit a fixed 900 × 520 canvas with a
//! 70 px margin and centred. Drawing y grows downward, so section
//! coordinates are flipped: `X(x) = x0 + (x + max|x|)·s`,
//! `Y(y) = y0 + (D − y)·s`.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::calculations::SectionAnalysis;
use crate::errors::SectionResult;
use crate::file_io::write_atomic;
use crate::report::format::fmt_dimension;

pub const CANVAS_WIDTH: f64 = 900.0;
pub const CANVAS_HEIGHT: f64 = 520.0;
pub const CANVAS_PADDING: f64 = 70.0;

const SHAPE_FILL: &str = "#dbe4ee";
const SHAPE_STROKE: &str = "#1f3b5c";
const AXIS_COLOR: &str = "#d9480f";
const DIM_COLOR: &str = "#444444";
const FONT_FAMILY: &str = "Libertinus Serif, Arial, sans-serif";

/// Tick half-length of dimension terminators
const TICK: f64 = 8.0;
/// Extension-line length of dimension lines
const EXT: f64 = 18.0;

/// Maps section millimetres to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub max_abs_x: f64,
    pub depth: f64,
}

impl Viewport {
    /// Fit a section of half-width `max_abs_x` and depth `depth` into the
    /// padded canvas.
    pub fn fit(max_abs_x: f64, depth: f64) -> Self {
        let sx = (CANVAS_WIDTH - 2.0 * CANVAS_PADDING) / (2.0 * max_abs_x);
        let sy = (CANVAS_HEIGHT - 2.0 * CANVAS_PADDING) / depth;
        let scale = sx.min(sy);

        let section_w = 2.0 * max_abs_x * scale;
        let section_h = depth * scale;
        Viewport {
            scale,
            origin_x: (CANVAS_WIDTH - section_w) / 2.0,
            origin_y: (CANVAS_HEIGHT - section_h) / 2.0,
            max_abs_x,
            depth,
        }
    }

    pub fn x(&self, x: f64) -> f64 {
        self.origin_x + (x + self.max_abs_x) * self.scale
    }

    pub fn y(&self, y: f64) -> f64 {
        self.origin_y + (self.depth - y) * self.scale
    }
}

struct SvgBuilder {
    out: String,
}

impl SvgBuilder {
    fn new() -> Self {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        );
        out.push('\n');
        SvgBuilder { out }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64, dash: Option<&str>) {
        let _ = write!(
            self.out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}""#,
            x1, y1, x2, y2, stroke, width
        );
        if let Some(dash) = dash {
            let _ = write!(self.out, r#" stroke-dasharray="{}""#, dash);
        }
        self.out.push_str("/>\n");
    }

    fn dim_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.line(x1, y1, x2, y2, DIM_COLOR, 1.5, None);
    }

    fn text(&mut self, x: f64, y: f64, label: &str, anchor: &str, size: u32) {
        let _ = writeln!(
            self.out,
            r#"  <text x="{:.2}" y="{:.2}" fill="{}" font-size="{}" text-anchor="{}" font-family="{}">{}</text>"#,
            x,
            y,
            DIM_COLOR,
            size,
            anchor,
            FONT_FAMILY,
            escape_xml(label)
        );
    }

    /// Horizontal dimension between `x1` and `x2`, extension lines rising
    /// from `y`, label centred above.
    fn dim_h(&mut self, x1: f64, x2: f64, y: f64, label: &str) {
        let yd = y - EXT;
        self.dim_line(x1, y, x1, yd);
        self.dim_line(x2, y, x2, yd);
        self.dim_line(x1 - TICK, yd + TICK, x1 + TICK, yd - TICK);
        self.dim_line(x2 - TICK, yd + TICK, x2 + TICK, yd - TICK);
        self.dim_line(x1, yd, x2, yd);
        self.text((x1 + x2) / 2.0, yd - 6.0, label, "middle", 14);
    }

    /// Vertical dimension between `y1` and `y2`, extension lines running
    /// `ext` from `x` (negative to the left), label beside the line.
    fn dim_v(&mut self, x: f64, y1: f64, y2: f64, ext: f64, label: &str) {
        let xd = x + ext;
        self.dim_line(x, y1, xd, y1);
        self.dim_line(x, y2, xd, y2);
        self.dim_line(xd - TICK, y1 - TICK, xd + TICK, y1 + TICK);
        self.dim_line(xd - TICK, y2 - TICK, xd + TICK, y2 + TICK);
        self.dim_line(xd, y1, xd, y2);
        self.text(xd + 6.0, (y1 + y2) / 2.0 + 5.0, label, "start", 14);
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Render the section outline, centroidal axis and dimensions as an SVG
/// document.
///
/// Horizontal dimensions give `bt`, `tw` and `bb`; `D` is dimensioned on the
/// left, `tb`, `hb`, `ht` and `tt` on the right. The dashed line and dot mark
/// the centroid at ȳ.
pub fn render_section_svg(analysis: &SectionAnalysis) -> String {
    let params = &analysis.params;
    let ybar = analysis.properties.ybar_mm;
    let vp = Viewport::fit(analysis.polygon.max_abs_x(), params.depth_mm);
    let lv = params.levels();

    let mut svg = SvgBuilder::new();
    let _ = writeln!(
        svg.out,
        r##"  <rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
        CANVAS_WIDTH, CANVAS_HEIGHT
    );

    // Outline
    let points: Vec<String> = analysis
        .polygon
        .vertices()
        .iter()
        .map(|p| format!("{:.2},{:.2}", vp.x(p.x), vp.y(p.y)))
        .collect();
    let _ = writeln!(
        svg.out,
        r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        points.join(" "),
        SHAPE_FILL,
        SHAPE_STROKE
    );

    // Centroidal axis
    if ybar.is_finite() {
        svg.line(vp.x(-vp.max_abs_x), vp.y(ybar), vp.x(vp.max_abs_x), vp.y(ybar), AXIS_COLOR, 3.0, Some("10,8"));
        let _ = writeln!(
            svg.out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="5" fill="{}"/>"#,
            vp.x(0.0),
            vp.y(ybar),
            AXIS_COLOR
        );
    }

    let half_bottom = params.bottom_flange_width_mm / 2.0;
    let half_web = params.web_thickness_mm / 2.0;
    let half_top = params.top_flange_width_mm / 2.0;
    let dim = fmt_dimension;

    svg.dim_h(
        vp.x(-half_top),
        vp.x(half_top),
        vp.y(lv.top) + 40.0,
        &format!("bt = {} mm", dim(params.top_flange_width_mm)),
    );
    svg.dim_h(
        vp.x(-half_web),
        vp.x(half_web),
        vp.y((lv.web_bottom + lv.web_top) / 2.0) + 40.0,
        &format!("tw = {} mm", dim(params.web_thickness_mm)),
    );
    svg.dim_h(
        vp.x(-half_bottom),
        vp.x(half_bottom),
        vp.y(lv.bottom) + 40.0,
        &format!("bb = {} mm", dim(params.bottom_flange_width_mm)),
    );

    svg.dim_v(
        vp.x(-half_bottom) - 60.0,
        vp.y(lv.bottom),
        vp.y(lv.top),
        -EXT,
        &format!("D = {} mm", dim(params.depth_mm)),
    );

    let right = vp.x(half_bottom) + 30.0;
    svg.dim_v(right, vp.y(lv.bottom), vp.y(lv.bottom_flange_top), EXT, &format!("tb = {}", dim(params.bottom_flange_thickness_mm)));
    svg.dim_v(right, vp.y(lv.bottom_flange_top), vp.y(lv.web_bottom), EXT, &format!("hb = {}", dim(params.bottom_taper_height_mm)));
    svg.dim_v(right, vp.y(lv.web_top), vp.y(lv.top_flange_bottom), EXT, &format!("ht = {}", dim(params.top_taper_height_mm)));
    svg.dim_v(right, vp.y(lv.top_flange_bottom), vp.y(lv.top), EXT, &format!("tt = {}", dim(params.top_flange_thickness_mm)));

    // Caption
    svg.text(18.0, 30.0, &format!("D={} mm", dim(params.depth_mm)), "start", 14);
    svg.text(
        18.0,
        52.0,
        &format!(
            "bt={}, tt={}, tw={}, bb={}, tb={}, ht={}, hb={} (mm)",
            dim(params.top_flange_width_mm),
            dim(params.top_flange_thickness_mm),
            dim(params.web_thickness_mm),
            dim(params.bottom_flange_width_mm),
            dim(params.bottom_flange_thickness_mm),
            dim(params.top_taper_height_mm),
            dim(params.bottom_taper_height_mm)
        ),
        "start",
        13,
    );

    svg.finish()
}

/// Write the section drawing to `path`, replacing it atomically.
pub fn write_svg(analysis: &SectionAnalysis, path: &Path) -> SectionResult<()> {
    let svg = render_section_svg(analysis);
    write_atomic(path, svg.as_bytes())?;
    info!(path = %path.display(), "SVG written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{compute, CrossSectionParams};

    #[test]
    fn test_viewport_fits_default_section() {
        // Depth governs: (520 - 140) / 1372
        let vp = Viewport::fit(330.0, 1372.0);
        assert!((vp.scale - 380.0 / 1372.0).abs() < 1e-12);
        assert!((vp.y(0.0) - (CANVAS_HEIGHT - CANVAS_PADDING)).abs() < 1e-9);
        assert!((vp.y(1372.0) - CANVAS_PADDING).abs() < 1e-9);
        // Centred horizontally
        assert!((vp.x(0.0) - CANVAS_WIDTH / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_wide_section() {
        let vp = Viewport::fit(2000.0, 500.0);
        assert!((vp.x(-2000.0) - CANVAS_PADDING).abs() < 1e-9);
        assert!((vp.x(2000.0) - (CANVAS_WIDTH - CANVAS_PADDING)).abs() < 1e-9);
    }

    #[test]
    fn test_svg_contents() {
        let analysis = compute(&CrossSectionParams::default()).unwrap();
        let svg = render_section_svg(&analysis);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains("stroke-dasharray=\"10,8\""));
        assert!(svg.contains("<circle"));
        for label in ["bt = 508 mm", "tw = 203 mm", "bb = 660 mm", "D = 1372 mm", "tb = 220", "hb = 300", "ht = 250", "tt = 200"] {
            assert!(svg.contains(label), "missing {}", label);
        }
        assert!(svg.contains("bt=508, tt=200, tw=203, bb=660, tb=220, ht=250, hb=300 (mm)"));
    }

    #[test]
    fn test_polygon_points_count() {
        let analysis = compute(&CrossSectionParams::default()).unwrap();
        let svg = render_section_svg(&analysis);
        let start = svg.find("points=\"").unwrap() + "points=\"".len();
        let end = start + svg[start..].find('"').unwrap();
        assert_eq!(svg[start..end].split(' ').count(), 12);
    }
}
