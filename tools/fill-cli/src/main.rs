// Command-line front end for poly-fill.
//
// Usage:
//   fill-cli fill --points '<json>' --algorithm <fast|rourke|flood> [--seed R,C] [--preview R,C]
//   fill-cli compare --points '<json>' <algo-a> <algo-b> [--seed R,C]
//   fill-cli list

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use fill_cli::{ascii_preview, parse_points, parse_seed, parse_window, FillSummary};
use log::info;
use poly_fill::{Algorithm, FillConfig, FillService, Seed};

#[derive(Parser)]
#[command(name = "fill-cli", about = "Rasterize a polygon onto a binary grid")]
struct Cli {
    /// JSON config file (grid shape, worker count, timeout)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill one polygon and print a JSON summary
    Fill {
        /// Polygon as a JSON list of [row, col] pairs
        #[arg(short, long)]
        points: String,

        /// Fill algorithm: fast, rourke or flood
        #[arg(short, long, default_value = "fast")]
        algorithm: String,

        /// Flood seed as ROW,COL
        #[arg(short, long, value_parser = parse_seed, allow_hyphen_values = true)]
        seed: Option<Seed>,

        /// Print the top-left ROWS,COLS window of the grid
        #[arg(long, value_parser = parse_window)]
        preview: Option<(usize, usize)>,
    },

    /// Fill one polygon with two algorithms and compare the grids
    Compare {
        #[arg(short, long)]
        points: String,

        algorithm_a: String,

        algorithm_b: String,

        /// Flood seed as ROW,COL
        #[arg(short, long, value_parser = parse_seed, allow_hyphen_values = true)]
        seed: Option<Seed>,
    },

    /// List available algorithms
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => FillConfig::load(path)?,
        None => FillConfig::default(),
    };

    match cli.command {
        Command::Fill {
            points,
            algorithm,
            seed,
            preview,
        } => {
            let service = FillService::new(&config)?;
            let vertices = parse_points(&points)?;
            let result = service.fill_named(&vertices, &algorithm, seed)?;

            println!("{}", serde_json::to_string_pretty(&FillSummary::from_result(&result))?);
            if let Some((rows, cols)) = preview {
                print!("{}", ascii_preview(&result.grid, rows, cols));
            }
        }
        Command::Compare {
            points,
            algorithm_a,
            algorithm_b,
            seed,
        } => {
            let a: Algorithm = algorithm_a.parse()?;
            let b: Algorithm = algorithm_b.parse()?;
            let service = FillService::new(&config)?;
            let vertices = parse_points(&points)?;

            let cmp = service.compare(&vertices, a, b, seed)?;
            info!(
                "{}: {:.6}s, {}: {:.6}s",
                a,
                cmp.elapsed[0].as_secs_f64(),
                b,
                cmp.elapsed[1].as_secs_f64()
            );

            let diff = cmp.diff;
            println!("{}", diff);
            if !diff.identical {
                process::exit(1);
            }
        }
        Command::List => {
            println!("Available algorithms:");
            for algorithm in Algorithm::ALL {
                println!("  {}", algorithm);
            }
        }
    }
    Ok(())
}
