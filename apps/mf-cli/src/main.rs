use clap::{Parser, Subcommand, ValueEnum};
use mf_app::{
    AppError, AppResult, ReportRow, ReportUnits, check_case, input_table, list_samples, load_case,
    render_csv, render_json, render_text, run_case, run_sample, save_case,
};
use mf_channel::{
    MANNING_N_TABLE, RoughnessEntry, ShapeKind, build_section, check_depth, compute_geometry,
    find_material,
};
use mf_project::{CaseDef, ShapeDef};
use mf_solver::FlowResult;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "ManningFlow CLI - uniform open-channel flow by Manning's equation", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a case file (.yaml, .yml or .json)
    Solve {
        /// Path to the case file
        case_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check that a case file is complete without solving it
    Validate {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// List the bundled sample cases
    Samples,
    /// Solve a bundled sample case
    Sample {
        /// Sample ID (see `samples`)
        id: String,
        /// Also write the sample out as a case file
        #[arg(long)]
        save: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print Manning's n reference values
    Materials {
        /// Only show materials whose name contains this text
        filter: Option<String>,
        /// Only show materials whose n range covers this value
        #[arg(long)]
        n: Option<f64>,
    },
    /// Print section geometry at a depth
    Geometry {
        /// rectangle, trapezoid, triangle or circle
        shape: String,
        /// Flow depth (ft)
        #[arg(long)]
        y: f64,
        /// Bottom width (ft), rectangle and trapezoid
        #[arg(long)]
        b: Option<f64>,
        /// Side slope (H:V), trapezoid and triangle
        #[arg(long)]
        z: Option<f64>,
        /// Diameter (ft), circle
        #[arg(long)]
        d: Option<f64>,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Report lengths, areas and flows in SI units
    #[arg(long)]
    si: bool,
    /// Also print the input parameters (text format only)
    #[arg(long)]
    inputs: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Logs go to stderr so csv/json output stays clean
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve { case_path, output } => cmd_solve(&case_path, &output),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Samples => cmd_samples(),
        Commands::Sample { id, save, output } => cmd_sample(&id, save.as_deref(), &output),
        Commands::Materials { filter, n } => cmd_materials(filter.as_deref(), n),
        Commands::Geometry { shape, y, b, z, d } => cmd_geometry(&shape, y, b, z, d),
    }
}

fn cmd_solve(case_path: &Path, output: &OutputArgs) -> AppResult<()> {
    tracing::debug!(path = %case_path.display(), "solving case file");
    let case = load_case(case_path)?;
    let response = run_case(&case)?;
    print_result(&case, &response.result, output)
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = load_case(case_path)?;
    let input = check_case(&case)?;
    println!(
        "✓ Case is complete: {} section, solving for {}",
        input.shape.name(),
        input.solve_for
    );
    Ok(())
}

fn cmd_samples() -> AppResult<()> {
    println!("Sample cases:");
    for sample in list_samples() {
        println!(
            "  {:<18} {} ({}, solve for {})",
            sample.id,
            sample.name,
            sample.shape.as_str(),
            sample.solve_for.tag()
        );
        if let Some(description) = &sample.description {
            println!("  {:<18} {}", "", description);
        }
    }
    Ok(())
}

fn cmd_sample(id: &str, save: Option<&Path>, output: &OutputArgs) -> AppResult<()> {
    let (case, response) = run_sample(id)?;
    if let Some(path) = save {
        save_case(path, &case)?;
        eprintln!("✓ Saved sample to {}", path.display());
    }
    print_result(&case, &response.result, output)
}

fn cmd_materials(filter: Option<&str>, n: Option<f64>) -> AppResult<()> {
    let query = filter.unwrap_or("");
    let rows: Vec<&RoughnessEntry> = match find_material(query) {
        Some(exact) => vec![exact],
        None => MANNING_N_TABLE
            .iter()
            .filter(|e| e.matches_query(query))
            .collect(),
    };
    let rows: Vec<_> = rows
        .into_iter()
        .filter(|e| n.is_none_or(|n| e.contains(n)))
        .collect();

    if rows.is_empty() {
        println!("No materials match");
        return Ok(());
    }

    println!("{:<24} {:>8} {:>8} {:>8}", "Material", "n (min)", "n (typ)", "n (max)");
    for e in rows {
        println!(
            "{:<24} {:>8.3} {:>8.3} {:>8.3}",
            e.material, e.n_min, e.n_typical, e.n_max
        );
    }
    Ok(())
}

fn cmd_geometry(
    shape: &str,
    y: f64,
    b: Option<f64>,
    z: Option<f64>,
    d: Option<f64>,
) -> AppResult<()> {
    let need = |value: Option<f64>, what: &str| {
        value.ok_or_else(|| AppError::InvalidInput(format!("--{what} is required for this shape")))
    };

    let shape = ShapeDef::parse(shape)
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown shape '{shape}'")))?;

    let kind = match shape {
        ShapeDef::Rectangle => ShapeKind::Rectangle {
            bottom_width: need(b, "b")?,
        },
        ShapeDef::Trapezoid => ShapeKind::Trapezoid {
            bottom_width: need(b, "b")?,
            side_slope: need(z, "z")?,
        },
        ShapeDef::Triangle => ShapeKind::Triangle {
            side_slope: need(z, "z")?,
        },
        ShapeDef::Circle => ShapeKind::Circle {
            diameter: need(d, "d")?,
        },
    };

    kind.check_dimensions()?;
    check_depth(y)?;

    let geo = compute_geometry(&build_section(&kind, y, None));
    println!("{} section at y = {} ft", kind.name(), y);
    println!("  Flow Area (A)         {:>12.4} ft²", geo.area);
    println!("  Wetted Perimeter (P)  {:>12.4} ft", geo.wetted_perimeter);
    println!("  Top Width (T)         {:>12.4} ft", geo.top_width);
    println!("  Hydraulic Radius (R)  {:>12.4} ft", geo.hydraulic_radius);
    println!("  Hydraulic Depth (D)   {:>12.4} ft", geo.hydraulic_depth);
    Ok(())
}

fn print_result(case: &CaseDef, result: &FlowResult, output: &OutputArgs) -> AppResult<()> {
    let units = if output.si {
        ReportUnits::Si
    } else {
        ReportUnits::Customary
    };

    match output.format {
        Format::Text => {
            if !case.name.is_empty() {
                println!("{}", case.name);
            }
            if output.inputs {
                println!("Inputs:");
                print_rows(&input_table(case));
            }
            print!("{}", render_text(result, units));
        }
        Format::Csv => print!("{}", render_csv(result, units)),
        Format::Json => println!("{}", render_json(case, result)?),
    }
    Ok(())
}

fn print_rows(rows: &[ReportRow]) {
    for r in rows {
        println!("  {:<20} {} {}", r.label, r.value, r.unit);
    }
}
