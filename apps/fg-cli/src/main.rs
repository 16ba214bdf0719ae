use clap::{Parser, Subcommand};
use fg_app::{AppResult, gas_from_config};
use fg_chem::{GasState, IdealGasBackend};
use fg_flame::{FlameFrame, estimate_1d_grid, flame_speed};
use fg_results::{DEFAULT_DIM, DirStatus, Frame, check_make_dir, df_paraview_to_fg};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fg-cli")]
#[command(about = "flamegen CLI - 1D flame pre- and postprocessing helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Laminar flame speed from velocities and densities across the front
    FlameSpeed {
        /// Unburnt gas velocity [m/s]
        #[arg(long, allow_hyphen_values = true)]
        v_u: f64,
        /// Burnt gas velocity [m/s]
        #[arg(long, allow_hyphen_values = true)]
        v_b: f64,
        /// Unburnt gas density [kg/m³]
        #[arg(long)]
        rho_u: f64,
        /// Burnt gas density [kg/m³]
        #[arg(long)]
        rho_b: f64,
        /// The flame front does not move
        #[arg(long)]
        stationary: bool,
    },
    /// Estimate the number of points of a uniform 1D grid
    Grid {
        /// Left grid bound [m]
        #[arg(long, allow_hyphen_values = true)]
        left: f64,
        /// Right grid bound [m]
        #[arg(long, allow_hyphen_values = true)]
        right: f64,
        /// Flame thickness [m]
        #[arg(long)]
        thickness: f64,
        /// Points across the flame thickness
        #[arg(long)]
        flame_points: f64,
    },
    /// Rename ParaView columns of a JSON frame to FG names
    RenameColumns {
        /// Input frame (JSON list of columns)
        input: PathBuf,
        /// Output frame path
        output: PathBuf,
        /// Value used in the density label
        #[arg(long, default_value_t = DEFAULT_DIM)]
        dim: u32,
    },
    /// Build the fresh gas described by a flame configuration
    Gas {
        /// Path to the flame configuration JSON file
        config_path: PathBuf,
    },
    /// Create a folder (and parents) if it does not exist
    Mkdir {
        /// Folder to create
        path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::FlameSpeed {
            v_u,
            v_b,
            rho_u,
            rho_b,
            stationary,
        } => cmd_flame_speed(v_u, v_b, rho_u, rho_b, stationary),
        Commands::Grid {
            left,
            right,
            thickness,
            flame_points,
        } => cmd_grid(left, right, thickness, flame_points),
        Commands::RenameColumns { input, output, dim } => {
            cmd_rename_columns(&input, &output, dim)
        }
        Commands::Gas { config_path } => cmd_gas(&config_path),
        Commands::Mkdir { path } => cmd_mkdir(&path),
    }
}

fn cmd_flame_speed(v_u: f64, v_b: f64, rho_u: f64, rho_b: f64, stationary: bool) -> AppResult<()> {
    let frame = FlameFrame::from_stationary(stationary);
    let s_l = flame_speed(v_u, v_b, rho_u, rho_b, frame)?;
    println!("Laminar flame speed ({:?} frame): {} m/s", frame, s_l);
    Ok(())
}

fn cmd_grid(left: f64, right: f64, thickness: f64, flame_points: f64) -> AppResult<()> {
    let grid = estimate_1d_grid(left, right, thickness, flame_points)?;
    println!("  delta_x = {:e} m", grid.delta_x);
    println!("  n_points = {}", grid.n_points);
    println!("  grid points (rounded up) = {}", grid.grid_points());
    Ok(())
}

fn cmd_rename_columns(input: &Path, output: &Path, dim: u32) -> AppResult<()> {
    let frame = Frame::load_json(input)?;
    let renamed = df_paraview_to_fg(frame, dim);
    renamed.save_json(output)?;
    println!("✓ Wrote {} columns to {}", renamed.n_cols(), output.display());
    println!("  {}", renamed.column_names().join(", "));
    Ok(())
}

fn cmd_gas(config_path: &Path) -> AppResult<()> {
    let config = fg_project::load_flame_config(config_path)?;
    let backend = IdealGasBackend::new();
    let gas = gas_from_config(&backend, &config)?;

    println!("Mechanism: {}", gas.mechanism());
    println!("  T = {:.2} K", gas.temperature().value);
    println!("  P = {:.1} Pa", gas.pressure().value);
    if let Some(x) = gas.mole_fractions() {
        println!("  X = {}", x);
    }
    println!("  phi = {:.4}", gas.equivalence_ratio()?);
    println!("  rho = {:.4} kg/m³", gas.density()?.value);
    Ok(())
}

fn cmd_mkdir(path: &Path) -> AppResult<()> {
    match check_make_dir(path)? {
        DirStatus::Created => println!("created folder : {}", path.display()),
        DirStatus::AlreadyExists => println!("{} folder already exists.", path.display()),
    }
    Ok(())
}
