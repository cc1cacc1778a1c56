//! # Girder CLI
//!
//! Command-line front end for girder section properties: compute a section,
//! write its drawing, DXF outline or PDF report, manage project files and
//! browse the steel shape table.
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`, `-v` for
//! `debug`), so `--json` output on stdout stays machine-readable.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use girder_core::calculations::{compute, CrossSectionParams, SectionAnalysis, SectionItem};
use girder_core::drawing::write_svg;
use girder_core::export::write_dxf;
use girder_core::file_io::{load_project, save_project, write_atomic};
use girder_core::materials::steel::{ShapeFamily, SteelShape, SteelStandard, STEEL_SHAPES};
use girder_core::pdf::{render_project_pdf, render_section_pdf};
use girder_core::project::Project;
use girder_core::report::format::{fmt_exp, fmt_fixed, fmt_grouped};
use girder_core::report::{input_lines, result_lines, ReportSettings};
use girder_core::SectionError;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "girder")]
#[command(author, version, about = "Tapered girder cross-section properties", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute section properties
    Compute {
        #[command(flatten)]
        section: SectionArgs,
        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a dimensioned SVG drawing
    Svg {
        #[command(flatten)]
        section: SectionArgs,
        /// Output file
        #[arg(short, long, default_value = "psc_section.svg")]
        output: PathBuf,
    },
    /// Write the outline as a DXF polyline
    Dxf {
        #[command(flatten)]
        section: SectionArgs,
        /// Output file
        #[arg(short, long, default_value = "psc_section.dxf")]
        output: PathBuf,
    },
    /// Write a PDF report
    Pdf {
        #[command(flatten)]
        section: SectionArgs,
        #[command(flatten)]
        report: ReportArgs,
        /// Output file
        #[arg(short, long, default_value = "psc_section_report.pdf")]
        output: PathBuf,
    },
    /// Project file operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Steel shape reference table
    Steel {
        #[command(subcommand)]
        action: SteelCommands,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Create an empty project file
    Init {
        /// Project file (.gsp)
        file: PathBuf,
        #[arg(long, default_value = "")]
        engineer: String,
        #[arg(long, default_value = "")]
        job_id: String,
        #[arg(long, default_value = "")]
        client: String,
    },
    /// Add a section to a project
    Add {
        /// Project file (.gsp)
        file: PathBuf,
        /// Section label
        #[arg(short, long)]
        label: String,
        #[command(flatten)]
        section: SectionArgs,
    },
    /// Compute and list every section in a project
    Show {
        /// Project file (.gsp)
        file: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render all sections of a project to one PDF
    Pdf {
        /// Project file (.gsp)
        file: PathBuf,
        /// Output file
        #[arg(short, long, default_value = "girder_project_report.pdf")]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum SteelCommands {
    /// List shapes, optionally filtered by standard and family
    List {
        /// AISC, IS or Eurocode
        #[arg(short, long)]
        standard: Option<String>,
        /// Shape family, e.g. W-Shape, IPE
        #[arg(short, long)]
        family: Option<String>,
    },
    /// Show the properties of one shape
    Show {
        /// Designation, e.g. W14X90 or "IPE 300"
        designation: String,
        #[arg(long)]
        json: bool,
    },
}

/// Section dimensions. Unset values come from `--params` or the reference girder.
#[derive(Args, Debug, Clone, Default)]
struct SectionArgs {
    /// JSON file with section parameters
    #[arg(long)]
    params: Option<PathBuf>,
    /// Overall depth D (mm)
    #[arg(long = "depth", short = 'D')]
    depth: Option<f64>,
    /// Web thickness tw (mm)
    #[arg(long)]
    tw: Option<f64>,
    /// Top flange width bt (mm)
    #[arg(long)]
    bt: Option<f64>,
    /// Top flange thickness tt (mm)
    #[arg(long)]
    tt: Option<f64>,
    /// Bottom flange width bb (mm)
    #[arg(long)]
    bb: Option<f64>,
    /// Bottom flange thickness tb (mm)
    #[arg(long)]
    tb: Option<f64>,
    /// Top taper height ht (mm)
    #[arg(long)]
    ht: Option<f64>,
    /// Bottom taper height hb (mm)
    #[arg(long)]
    hb: Option<f64>,
    /// Unit weight γ (kN/m³)
    #[arg(long)]
    gamma: Option<f64>,
}

impl SectionArgs {
    fn to_params(&self) -> Result<CrossSectionParams> {
        let mut params = match &self.params {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid section parameters in {}", path.display()))?
            }
            None => CrossSectionParams::default(),
        };

        let overrides = [
            (self.depth, &mut params.depth_mm),
            (self.tw, &mut params.web_thickness_mm),
            (self.bt, &mut params.top_flange_width_mm),
            (self.tt, &mut params.top_flange_thickness_mm),
            (self.bb, &mut params.bottom_flange_width_mm),
            (self.tb, &mut params.bottom_flange_thickness_mm),
            (self.ht, &mut params.top_taper_height_mm),
            (self.hb, &mut params.bottom_taper_height_mm),
            (self.gamma, &mut params.unit_weight_kn_m3),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }

        Ok(params)
    }
}

#[derive(Args, Debug, Clone)]
struct ReportArgs {
    /// Report title
    #[arg(long, default_value = girder_core::report::DEFAULT_REPORT_TITLE)]
    title: String,
    #[arg(long, default_value = "")]
    engineer: String,
    #[arg(long, default_value = "")]
    job_id: String,
}

impl From<ReportArgs> for ReportSettings {
    fn from(args: ReportArgs) -> Self {
        ReportSettings {
            title: args.title,
            engineer: args.engineer,
            job_id: args.job_id,
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn analyse(section: &SectionArgs) -> Result<SectionAnalysis> {
    let params = section.to_params()?;
    Ok(compute(&params)?)
}

fn print_analysis(analysis: &SectionAnalysis) {
    println!("Inputs (mm)");
    for line in input_lines(&analysis.params) {
        println!("  {}", line);
    }
    println!();
    println!("Results");
    for line in result_lines(&analysis.properties) {
        println!("  {}", line);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_shape(shape: &SteelShape) {
    println!("{}", shape);
    println!("  Area             {:>14} mm²", fmt_grouped(shape.area_mm2, 1));
    println!("  Depth            {:>14} mm", fmt_grouped(shape.depth_mm, 1));
    println!("  Web thickness    {:>14} mm", fmt_grouped(shape.web_thickness_mm, 2));
    println!("  Flange width     {:>14} mm", fmt_grouped(shape.flange_width_mm, 1));
    println!("  Flange thickness {:>14} mm", fmt_grouped(shape.flange_thickness_mm, 2));
    println!("  Ix               {:>14} mm⁴", fmt_exp(shape.ix_mm4, 3));
    println!("  Zx               {:>14} mm³", fmt_exp(shape.zx_mm3, 3));
    println!("  Iy               {:>14} mm⁴", fmt_exp(shape.iy_mm4, 3));
    println!("  Zy               {:>14} mm³", fmt_exp(shape.zy_mm3, 3));
    println!("  Weight           {:>14} kN/m", fmt_fixed(shape.weight_kn_per_m, 3));
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    write_atomic(path, bytes)?;
    Ok(())
}

// ─── Commands ───────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compute { section, json } => {
            let analysis = analyse(&section)?;
            if json {
                print_json(&analysis)?;
            } else {
                print_analysis(&analysis);
            }
        }

        Commands::Svg { section, output } => {
            let analysis = analyse(&section)?;
            write_svg(&analysis, &output)?;
            println!("Wrote {}", output.display());
        }

        Commands::Dxf { section, output } => {
            let analysis = analyse(&section)?;
            write_dxf(&analysis.polygon, &output)?;
            println!("Wrote {}", output.display());
        }

        Commands::Pdf { section, report, output } => {
            let analysis = analyse(&section)?;
            let pdf = render_section_pdf(&analysis, &report.into())?;
            write_bytes(&output, &pdf)?;
            println!("Wrote {}", output.display());
        }

        Commands::Project { action } => run_project(action)?,

        Commands::Steel { action } => run_steel(action)?,
    }
    Ok(())
}

fn run_project(action: ProjectCommands) -> Result<()> {
    match action {
        ProjectCommands::Init { file, engineer, job_id, client } => {
            let project = Project::new(engineer, job_id, client);
            save_project(&project, &file)?;
            println!("Created {}", file.display());
        }

        ProjectCommands::Add { file, label, section } => {
            let mut project = load_project(&file)?;
            let params = section.to_params()?;
            // Reject invalid sections before they reach the file
            compute(&params)?;
            let id = project.add_item(SectionItem::new(label.clone(), params));
            save_project(&project, &file)?;
            info!(%id, label = %label, "section added");
            println!("Added '{}' to {} ({} sections)", label, file.display(), project.item_count());
        }

        ProjectCommands::Show { file, json } => {
            let project = load_project(&file)?;
            let results = project.compute_all();

            if json {
                let rows: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(item, result)| match result {
                        Ok(analysis) => serde_json::json!({
                            "label": item.label,
                            "params": item.params,
                            "properties": analysis.properties,
                        }),
                        Err(e) => serde_json::json!({
                            "label": item.label,
                            "params": item.params,
                            "error": e,
                        }),
                    })
                    .collect();
                return print_json(&rows);
            }

            println!(
                "{} - {} ({} sections)",
                project.meta.job_id,
                project.meta.client,
                project.item_count()
            );
            for (item, result) in results {
                println!();
                println!("[{}]", item.label);
                match result {
                    Ok(analysis) => {
                        for line in result_lines(&analysis.properties) {
                            println!("  {}", line);
                        }
                    }
                    Err(e) => println!("  error: {}", e),
                }
            }
        }

        ProjectCommands::Pdf { file, output } => {
            let project = load_project(&file)?;
            let pdf = render_project_pdf(&project)?;
            write_bytes(&output, &pdf)?;
            println!("Wrote {}", output.display());
        }
    }
    Ok(())
}

fn run_steel(action: SteelCommands) -> Result<()> {
    let db = &*STEEL_SHAPES;
    match action {
        SteelCommands::List { standard, family } => {
            let standard = match standard {
                Some(s) => Some(
                    SteelStandard::from_name(&s).with_context(|| format!("Unknown standard '{}'", s))?,
                ),
                None => None,
            };
            let family = match family {
                Some(f) => Some(
                    ShapeFamily::from_name(&f).with_context(|| format!("Unknown shape family '{}'", f))?,
                ),
                None => None,
            };

            for catalogue in db.standards() {
                if standard.is_some_and(|s| s != catalogue) {
                    continue;
                }
                for fam in db.families(catalogue) {
                    if family.is_some_and(|f| f != fam) {
                        continue;
                    }
                    println!("{} {}: {}", catalogue, fam, db.designations(catalogue, fam).join(", "));
                }
            }
        }

        SteelCommands::Show { designation, json } => {
            let shape = db.lookup(&designation)?;
            if json {
                print_json(shape)?;
            } else {
                print_shape(shape);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<SectionError>() {
                Some(SectionError::Validation { violations }) => {
                    eprintln!("Invalid section:");
                    for v in violations {
                        eprintln!("  - {}", v.message);
                    }
                }
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::from(2)
        }
    }
}
