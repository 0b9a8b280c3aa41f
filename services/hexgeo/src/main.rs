//! hexgeo: geographic hex grid command-line tool.
//!
//! Projects points, locates cells, lists neighbors and covers polygons
//! with cells of a hex grid laid over a map projection.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geo_common::{GeoPoint, PlanarPoint};
use hexgrid_geo::{Grid, HexGrid, Orientation, Projection};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hexgeo::commands;
use hexgeo::output::{self, Format};
use hexgeo::settings::{self, GridOverrides};

#[derive(Parser, Debug)]
#[command(name = "hexgeo")]
#[command(about = "Hexagonal grids over geographic projections")]
struct Args {
    /// Grid config file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "HEXGEO_CONFIG")]
    config: Option<PathBuf>,

    /// Hexagon orientation (flat or pointy)
    #[arg(long, global = true)]
    orientation: Option<Orientation>,

    /// Cell size along x, in projected units
    #[arg(long, global = true)]
    size_x: Option<f64>,

    /// Cell size along y, in projected units
    #[arg(long, global = true)]
    size_y: Option<f64>,

    /// Projection name (identity, sinusoidal, polar-azimuthal, spherical-mercator)
    #[arg(long, global = true)]
    projection: Option<Projection>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level
    #[arg(long, global = true, env = "HEXGEO_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forward-project a lon,lat point
    Project {
        #[arg(allow_hyphen_values = true)]
        point: GeoPoint,
    },
    /// Inverse-project an x,y point
    Unproject {
        #[arg(allow_hyphen_values = true)]
        point: PlanarPoint,
    },
    /// Describe the cell containing a lon,lat point
    Cell {
        #[arg(allow_hyphen_values = true)]
        point: GeoPoint,
    },
    /// Describe the cell with the given code
    Describe { code: u64 },
    /// List the codes of the cells around a cell
    Neighbors {
        code: u64,
        /// Number of rings
        #[arg(long, default_value = "1")]
        rings: u32,
    },
    /// List the codes of the cells covered by a polygon of lon,lat vertices
    Region {
        #[arg(required = true, num_args = 3.., allow_hyphen_values = true)]
        vertices: Vec<GeoPoint>,
    },
    /// Locate every lon,lat line of a file ("-" for stdin)
    Batch { input: PathBuf },
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr);

    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn build_grid(args: &Args) -> Result<Grid<HexGrid>> {
    let overrides = GridOverrides {
        orientation: args.orientation,
        size_x: args.size_x,
        size_y: args.size_y,
        projection: args.projection,
    };
    let config = settings::resolve(args.config.as_deref(), &overrides)?;
    config.build().context("Invalid grid configuration")
}

fn run(args: &Args) -> Result<String> {
    let grid = build_grid(args)?;
    let format = args.format;

    match &args.command {
        Command::Project { point } => {
            output::render(format, &commands::project(grid.projection(), *point)?)
        }
        Command::Unproject { point } => {
            output::render(format, &commands::unproject(grid.projection(), *point)?)
        }
        Command::Cell { point } => output::render(format, &commands::cell(&grid, *point)?),
        Command::Describe { code } => {
            output::render(format, &commands::describe_cell(&grid, *code)?)
        }
        Command::Neighbors { code, rings } => {
            output::render_list(format, &commands::neighbors(&grid, *code, *rings)?)
        }
        Command::Region { vertices } => {
            output::render_list(format, &commands::region(&grid, vertices)?)
        }
        Command::Batch { input } => {
            let points = if input.as_os_str() == "-" {
                commands::read_batch(io::stdin().lock())?
            } else {
                let file = File::open(input)
                    .with_context(|| format!("Failed to open {}", input.display()))?;
                commands::read_batch(BufReader::new(file))?
            };
            info!(count = points.len(), "Locating batch");
            output::render_list(format, &commands::locate_batch(&grid, &points)?)
        }
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    let rendered = run(&args)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}
