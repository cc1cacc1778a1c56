//! DXF R12 export of a section outline.
//!
//! The outline is written as a single closed `POLYLINE` on layer `0`, one
//! `VERTEX` per polygon vertex in the polygon's own order. Coordinates are
//! millimetres (`$INSUNITS` = 4) with three decimals. Lines end in CRLF.
//!
//! ```text
//!   0 SECTION  2 HEADER    $INSUNITS 70 4            ENDSEC
//!   0 SECTION  2 TABLES    LAYER "0" (colour 7)      ENDSEC
//!   0 SECTION  2 ENTITIES  POLYLINE, VERTEX…, SEQEND ENDSEC
//!   0 EOF
//! ```

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::errors::SectionResult;
use crate::file_io::write_atomic;
use crate::geometry::Polygon;

/// Line terminator used by the writer
pub const DXF_NEWLINE: &str = "\r\n";

/// `$INSUNITS` code for millimetres
pub const INSUNITS_MILLIMETERS: u8 = 4;

/// Accumulates DXF group-code/value pairs.
struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn new() -> Self {
        DxfWriter { out: String::new() }
    }

    fn pair(&mut self, code: u16, value: impl std::fmt::Display) {
        let _ = write!(self.out, "{}{}{}{}", code, DXF_NEWLINE, value, DXF_NEWLINE);
    }

    fn begin_section(&mut self, name: &str) {
        self.pair(0, "SECTION");
        self.pair(2, name);
    }

    fn end_section(&mut self) {
        self.pair(0, "ENDSEC");
    }

    fn finish(mut self) -> String {
        self.pair(0, "EOF");
        self.out
    }
}

/// Render the polygon as a DXF R12 document.
///
/// Vertices are emitted verbatim: no closing duplicate, no reordering, no
/// deduplication. The polyline's closed flag (`70` = 1) joins the last vertex
/// back to the first.
///
/// ```rust
/// use girder_core::export::dxf::to_dxf_string;
/// use girder_core::geometry::Polygon;
///
/// let square = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let dxf = to_dxf_string(&square);
///
/// assert_eq!(dxf.matches("VERTEX").count(), 4);
/// assert!(dxf.ends_with("0\r\nEOF\r\n"));
/// ```
pub fn to_dxf_string(polygon: &Polygon) -> String {
    let mut w = DxfWriter::new();

    w.begin_section("HEADER");
    w.pair(9, "$INSUNITS");
    w.pair(70, INSUNITS_MILLIMETERS);
    w.end_section();

    w.begin_section("TABLES");
    w.pair(0, "TABLE");
    w.pair(2, "LAYER");
    w.pair(70, 1);
    w.pair(0, "LAYER");
    w.pair(2, "0");
    w.pair(70, 0);
    w.pair(62, 7);
    w.pair(6, "CONTINUOUS");
    w.pair(0, "ENDTAB");
    w.end_section();

    w.begin_section("ENTITIES");
    w.pair(0, "POLYLINE");
    w.pair(8, "0");
    w.pair(66, 1);
    w.pair(70, 1);
    for p in polygon.vertices() {
        w.pair(0, "VERTEX");
        w.pair(8, "0");
        w.pair(10, format!("{:.3}", p.x));
        w.pair(20, format!("{:.3}", p.y));
        w.pair(30, 0);
    }
    w.pair(0, "SEQEND");
    w.end_section();

    w.finish()
}

/// Write the polygon as a DXF file, replacing `path` atomically.
pub fn write_dxf(polygon: &Polygon, path: &Path) -> SectionResult<()> {
    let dxf = to_dxf_string(polygon);
    write_atomic(path, dxf.as_bytes())?;
    info!(path = %path.display(), vertices = polygon.len(), "DXF written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{build_polygon, CrossSectionParams};

    fn lines(dxf: &str) -> Vec<&str> {
        dxf.split(DXF_NEWLINE).collect()
    }

    #[test]
    fn test_header_and_tables() {
        let dxf = to_dxf_string(&Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
        let l = lines(&dxf);
        assert_eq!(&l[..8], &["0", "SECTION", "2", "HEADER", "9", "$INSUNITS", "70", "4"]);
        assert!(dxf.contains("62\r\n7\r\n6\r\nCONTINUOUS\r\n"));
    }

    #[test]
    fn test_crlf_only() {
        let dxf = to_dxf_string(&build_polygon(&CrossSectionParams::default()));
        assert_eq!(dxf.matches('\n').count(), dxf.matches("\r\n").count());
    }

    #[test]
    fn test_vertices_in_builder_order() {
        let polygon = build_polygon(&CrossSectionParams::default());
        let dxf = to_dxf_string(&polygon);
        let l = lines(&dxf);

        let xs: Vec<&str> = l
            .windows(2)
            .filter(|w| w[0] == "10")
            .map(|w| w[1])
            .collect();
        let ys: Vec<&str> = l
            .windows(2)
            .filter(|w| w[0] == "20")
            .map(|w| w[1])
            .collect();

        assert_eq!(xs.len(), 12);
        assert_eq!(xs[0], "330.000");
        assert_eq!(ys[0], "0.000");
        assert_eq!(xs[2], "101.500");
        assert_eq!(ys[2], "520.000");
        assert_eq!(xs[11], "-330.000");
        assert_eq!(ys[11], "0.000");
    }

    #[test]
    fn test_zero_tapers_keep_all_vertices() {
        let mut params = CrossSectionParams::default();
        params.top_taper_height_mm = 0.0;
        params.bottom_taper_height_mm = 0.0;
        let dxf = to_dxf_string(&build_polygon(&params));
        assert_eq!(dxf.matches("\r\nVERTEX\r\n").count(), 12);
    }

    #[test]
    fn test_polyline_flags_and_trailer() {
        let dxf = to_dxf_string(&Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
        assert!(dxf.contains("POLYLINE\r\n8\r\n0\r\n66\r\n1\r\n70\r\n1\r\n"));
        assert!(dxf.ends_with("0\r\nSEQEND\r\n0\r\nENDSEC\r\n0\r\nEOF\r\n"));
    }
}
