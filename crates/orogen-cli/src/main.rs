//! Orogen CLI — procedural mesh generation and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "orogen")]
#[command(version, about = "Orogen — procedural terrain and sphere mesh generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fault-displacement terrain mesh.
    Terrain {
        /// Vertices per grid edge.
        #[arg(long)]
        dim: Option<u32>,

        /// Grid spacing in world units.
        #[arg(long)]
        cell_size: Option<f32>,

        /// Number of fault displacement passes.
        #[arg(long)]
        iterations: Option<u32>,

        /// Seed for the displacement random stream.
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a JSON parameter file; flags override its fields.
        #[arg(short, long)]
        config: Option<String>,

        /// Output JSON file path (stdout stats only when omitted).
        #[arg(short, long)]
        output: Option<String>,

        /// Write the interleaved GPU upload form instead of the SoA mesh.
        #[arg(long)]
        interleaved: bool,
    },

    /// Generate a subdivided unit sphere mesh.
    Sphere {
        /// Subdivision depth (4 * 4^depth triangles).
        #[arg(short, long, default_value_t = 4)]
        depth: u32,

        /// Output JSON file path.
        #[arg(short, long)]
        output: Option<String>,

        /// Write the interleaved GPU upload form instead of the SoA mesh.
        #[arg(long)]
        interleaved: bool,
    },

    /// Validate a mesh (.json) or model (.obj) file.
    Validate {
        /// Path to the file to validate.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Terrain {
            dim,
            cell_size,
            iterations,
            seed,
            config,
            output,
            interleaved,
        } => commands::terrain(
            commands::TerrainArgs {
                dim,
                cell_size,
                iterations,
                seed,
                config,
            },
            output.as_deref(),
            interleaved,
        ),
        Commands::Sphere {
            depth,
            output,
            interleaved,
        } => commands::sphere(depth, output.as_deref(), interleaved),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
