//! End-to-end checks across the engine and its consumers.

use approx::assert_relative_eq;

use girder_core::calculations::{build_polygon, compute, derive, CrossSectionParams};
use girder_core::drawing::render_section_svg;
use girder_core::export::to_dxf_string;
use girder_core::file_io::{load_project, save_project};
use girder_core::geometry::{compute_raw_moments, Point2D, Polygon};
use girder_core::project::Project;
use girder_core::report::result_lines;
use girder_core::{SectionError, SectionItem};

#[test]
fn reversed_outline_gives_same_properties() {
    let params = CrossSectionParams::default();
    let polygon = build_polygon(&params);

    let forward = derive(&compute_raw_moments(&polygon).unwrap(), &params);
    let backward = derive(&compute_raw_moments(&polygon.reversed()).unwrap(), &params);

    assert_relative_eq!(forward.area_mm2, backward.area_mm2, max_relative = 1e-9);
    assert_relative_eq!(forward.ybar_mm, backward.ybar_mm, max_relative = 1e-9);
    assert_relative_eq!(forward.ixx_mm4, backward.ixx_mm4, max_relative = 1e-9);
    assert_relative_eq!(forward.ztop_mm3, backward.ztop_mm3, max_relative = 1e-9);
    assert_relative_eq!(forward.zbot_mm3, backward.zbot_mm3, max_relative = 1e-9);
}

#[test]
fn translated_polygon_keeps_centroidal_inertia() {
    let polygon = build_polygon(&CrossSectionParams::default());
    let base = compute_raw_moments(&polygon).unwrap();

    let shifted = Polygon::new(
        polygon
            .vertices()
            .iter()
            .map(|p| Point2D::new(p.x + 1000.0, p.y + 250.0))
            .collect(),
    );
    let moved = compute_raw_moments(&shifted).unwrap();

    assert_relative_eq!(moved.area, base.area, max_relative = 1e-9);
    assert_relative_eq!(moved.cx, base.cx + 1000.0, epsilon = 1e-6);
    assert_relative_eq!(moved.cy, base.cy + 250.0, epsilon = 1e-6);

    let ixx_base = base.ix0 - base.area * base.cy * base.cy;
    let ixx_moved = moved.ix0 - moved.area * moved.cy * moved.cy;
    assert_relative_eq!(ixx_moved, ixx_base, max_relative = 1e-6);
}

#[test]
fn invalid_input_stops_before_geometry() {
    let params = CrossSectionParams::new(-1.0, 300.0, 200.0, 50.0, 250.0, 50.0, -5.0, 0.0, -25.0);
    match compute(&params) {
        Err(SectionError::Validation { violations }) => assert_eq!(violations.len(), 6),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn consumers_agree_on_vertex_order() {
    let analysis = compute(&CrossSectionParams::default()).unwrap();

    let dxf = to_dxf_string(&analysis.polygon);
    let first_vertex = dxf.find("VERTEX").unwrap();
    assert!(dxf[first_vertex..].starts_with("VERTEX\r\n8\r\n0\r\n10\r\n330.000\r\n20\r\n0.000\r\n"));

    let svg = render_section_svg(&analysis);
    assert!(svg.contains("<polygon points=\""));

    let lines = result_lines(&analysis.properties);
    assert_eq!(lines.len(), 7);
}

#[test]
fn project_file_roundtrip_recomputes_identically() {
    let path = std::env::temp_dir().join(format!("girder_it_{}.gsp", std::process::id()));

    let mut project = Project::new("Integration", "IT-01", "Test");
    let mut wide = CrossSectionParams::default();
    wide.top_flange_width_mm = 1200.0;
    project.add_item(SectionItem::new("Reference", CrossSectionParams::default()));
    project.add_item(SectionItem::new("Wide top", wide));
    save_project(&project, &path).unwrap();

    let loaded = load_project(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    for (item, result) in loaded.compute_all() {
        let expected = compute(&item.params).unwrap();
        assert_eq!(result.unwrap(), expected, "section {}", item.label);
    }

    let results = loaded.compute_all();
    assert!(results[1].1.as_ref().unwrap().properties.ybar_mm > results[0].1.as_ref().unwrap().properties.ybar_mm);
}
