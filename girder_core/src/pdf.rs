//! # PDF Generation Module
//!
//! Generates section property reports using Typst.
//!
//! ## Architecture
//!
//! - Typst templates are embedded as string constants
//! - Data is injected via string replacement before compilation
//! - Section drawings are rendered to SVG and served to Typst as in-memory
//!   files, so nothing touches the disk
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use girder_core::calculations::{compute, CrossSectionParams};
//! use girder_core::pdf::render_section_pdf;
//! use girder_core::report::ReportSettings;
//!
//! let analysis = compute(&CrossSectionParams::default()).unwrap();
//! let pdf_bytes = render_section_pdf(&analysis, &ReportSettings::default()).unwrap();
//! std::fs::write("girder_report.pdf", pdf_bytes).unwrap();
//! ```

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::{SectionAnalysis, SectionItem};
use crate::drawing::render_section_svg;
use crate::equations::registry::EquationTracker;
use crate::errors::{SectionError, SectionResult};
use crate::project::Project;
use crate::report::format::{fmt_exp, fmt_fixed};
use crate::report::{input_rows, result_rows, ReportRow, ReportSettings};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world: one main source plus in-memory files addressed by
/// their root-relative path.
struct PdfWorld {
    main: Source,
    /// Extra files (section drawings), keyed by rootless path
    files: HashMap<String, Bytes>,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String, files: HashMap<String, Bytes>) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            files,
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    /// Fonts bundled with typst-assets
    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }
        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        let path = id.vpath().as_rootless_path();
        path.to_str()
            .and_then(|key| self.files.get(key))
            .cloned()
            .ok_or_else(|| FileError::NotFound(path.into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Templates
// ============================================================================

const PAGE_SETUP: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 20mm, bottom: 20mm, left: 15mm, right: 15mm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[{{TITLE}}]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Job: {{JOB_ID}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)
"##;

/// Typst template for one section; also used for each page of a project report
const SECTION_TEMPLATE: &str = r##"
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[{{HEADING}}]
    #v(4pt)
    #text(size: 12pt)[{{SUBHEADING}}]
  ]
]

#v(8pt)

#table(
  columns: (auto, 1fr),
  stroke: none,
  row-gutter: 4pt,
  [Engineer:], [{{ENGINEER}}],
  [Job ID:], [{{JOB_ID}}],
  [Generated:], [{{GENERATED}}],
)

#v(8pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 16pt,
  [
    == Inputs

    #table(
      columns: (1fr, auto, auto),
      inset: 6pt,
      stroke: 0.5pt,
      align: (left, right, left),
      table.header([*Parameter*], [*Value*], [*Unit*]),
{{INPUT_ROWS}}
    )
  ],
  [
    == Results

    #table(
      columns: (1fr, auto, auto),
      inset: 6pt,
      stroke: 0.5pt,
      align: (left, right, left),
      table.header([*Property*], [*Value*], [*Unit*]),
{{RESULT_ROWS}}
    )
  ],
)

#v(12pt)

== Section

#align(center)[
  #image("{{DRAWING}}", width: 100%)
]

#text(size: 9pt, fill: gray)[
  Properties about the horizontal centroidal axis. ȳ is measured from the bottom fiber.
  Self-weight uses the unit weight given in the inputs.
]
"##;

// ============================================================================
// PDF Rendering Functions
// ============================================================================

/// Render one analysed section to PDF.
///
/// The report contains the title block, input and result tables, the
/// dimensioned drawing and the equations appendix.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(SectionError::ReportFailed)` - If Typst compilation or PDF export fails
pub fn render_section_pdf(analysis: &SectionAnalysis, settings: &ReportSettings) -> SectionResult<Vec<u8>> {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let drawing = drawing_path(1);

    let mut source = page_setup(settings, &date);
    source.push_str(&section_page(
        analysis,
        settings,
        &escape_typst(&settings.title),
        "Tapered girder cross-section",
        &drawing,
    ));

    let mut tracker = EquationTracker::new();
    tracker.record_section_pipeline("Section");
    source.push_str(&tracker.generate_appendix_typst());

    let mut files = HashMap::new();
    files.insert(drawing, Bytes::new(render_section_svg(analysis).into_bytes()));

    let pdf = compile(source, files)?;
    info!(bytes = pdf.len(), "section report rendered");
    Ok(pdf)
}

/// Render every section of a project to a single PDF.
///
/// A cover page summarises all sections; each section then gets its own
/// page. Sections are ordered by label.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(SectionError::ReportFailed)` - Empty project, a section failed to
///   compute, or rendering failed
pub fn render_project_pdf(project: &Project) -> SectionResult<Vec<u8>> {
    let mut sections: Vec<(&SectionItem, SectionAnalysis)> = Vec::new();
    for (item, result) in project.compute_all() {
        match result {
            Ok(analysis) => sections.push((item, analysis)),
            Err(e) => {
                return Err(SectionError::report_failed(format!(
                    "Failed to compute section '{}': {}",
                    item.label, e
                )));
            }
        }
    }

    if sections.is_empty() {
        return Err(SectionError::report_failed("Project has no sections to export"));
    }

    let settings = &project.settings;
    let date = Utc::now().format("%Y-%m-%d").to_string();

    let mut source = page_setup(settings, &date);
    source.push_str(&format!(
        r##"
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 20pt, radius: 4pt)[
    #text(size: 22pt, weight: "bold")[{title}]
    #v(8pt)
    #text(size: 14pt)[{client}]
  ]
]

#v(16pt)

#table(
  columns: (auto, 1fr),
  stroke: none,
  row-gutter: 4pt,
  [Engineer:], [{engineer}],
  [Job ID:], [{job_id}],
  [Client:], [{client}],
  [Date:], [{date}],
)

#v(16pt)

== Section Summary

#table(
  columns: (auto, 1fr, auto, auto, auto, auto),
  inset: 6pt,
  stroke: 0.5pt,
  align: (left, left, right, right, right, right),
  table.header([*No.*], [*Section*], [*A (mm²)*], [*ȳ (mm)*], [*Ixx (mm⁴)*], [*w (kN/m)*]),
{summary_rows}
)
"##,
        title = escape_typst(&settings.title),
        client = escape_typst(&project.meta.client),
        engineer = escape_typst(&settings.engineer),
        job_id = escape_typst(&settings.job_id),
        date = date,
        summary_rows = build_summary_rows(&sections),
    ));

    let mut files = HashMap::new();
    let mut tracker = EquationTracker::new();
    for (i, (item, analysis)) in sections.iter().enumerate() {
        let drawing = drawing_path(i + 1);
        source.push_str("\n#pagebreak()\n");
        source.push_str(&section_page(
            analysis,
            settings,
            &escape_typst(&item.label),
            &format!("Section {} of {}", i + 1, sections.len()),
            &drawing,
        ));
        files.insert(drawing, Bytes::new(render_section_svg(analysis).into_bytes()));
        tracker.record_section_pipeline(&item.label);
    }

    source.push_str(&tracker.generate_appendix_typst());

    let pdf = compile(source, files)?;
    info!(sections = sections.len(), bytes = pdf.len(), "project report rendered");
    Ok(pdf)
}

fn drawing_path(index: usize) -> String {
    format!("section-{}.svg", index)
}

fn page_setup(settings: &ReportSettings, date: &str) -> String {
    PAGE_SETUP
        .replace("{{TITLE}}", &escape_typst(&settings.title))
        .replace("{{JOB_ID}}", &escape_typst(&settings.job_id))
        .replace("{{DATE}}", date)
}

fn section_page(
    analysis: &SectionAnalysis,
    settings: &ReportSettings,
    heading: &str,
    subheading: &str,
    drawing: &str,
) -> String {
    SECTION_TEMPLATE
        .replace("{{HEADING}}", heading)
        .replace("{{SUBHEADING}}", subheading)
        .replace("{{ENGINEER}}", &escape_typst(&settings.engineer))
        .replace("{{JOB_ID}}", &escape_typst(&settings.job_id))
        .replace("{{GENERATED}}", &Utc::now().format("%Y-%m-%d %H:%M UTC").to_string())
        .replace("{{INPUT_ROWS}}", &table_rows(&input_rows(&analysis.params)))
        .replace("{{RESULT_ROWS}}", &table_rows(&result_rows(&analysis.properties)))
        .replace("{{DRAWING}}", drawing)
}

fn table_rows(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "      [{}], [{}], [{}],",
                escape_typst(&row.label),
                escape_typst(&row.value),
                escape_typst(&row.unit)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build summary table rows for the cover page
fn build_summary_rows(sections: &[(&SectionItem, SectionAnalysis)]) -> String {
    sections
        .iter()
        .enumerate()
        .map(|(i, (item, analysis))| {
            let p = &analysis.properties;
            format!(
                "  [{}], [{}], [{}], [{}], [{}], [{}],",
                i + 1,
                escape_typst(&item.label),
                fmt_fixed(p.area_mm2.round(), 0),
                fmt_fixed(p.ybar_mm, 1),
                escape_typst(&fmt_exp(p.ixx_mm4, 3)),
                fmt_fixed(p.weight_kn_per_m, 3),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn compile(source: String, files: HashMap<String, Bytes>) -> SectionResult<Vec<u8>> {
    debug!(source_len = source.len(), files = files.len(), "compiling Typst report");
    let world = PdfWorld::new(source, files);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        SectionError::report_failed(format!("Typst compilation failed: {}", error_msgs.join("; ")))
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        SectionError::report_failed(format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
