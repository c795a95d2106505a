//! `conway`: generate polyhedra from Conway notation.
//!
//! Prints one summary line per recipe, or the full polyhedron as JSON.
//! Logging goes to stderr and defaults to warnings; set `RUST_LOG=debug` to
//! trace every operator.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::CONVERGENCE_TOLERANCE;
use conway_mesh::ops::Operator;
use conway_mesh::seeds::SeedKind;
use conway_mesh::triangulate::triangulate;
use conway_mesh::{generate_with, EngineConfig, Polyhedron};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

/// Generate polyhedra from Conway notation
#[derive(Debug, Parser)]
#[command(name = "conway", version)]
#[command(about = "Generate polyhedra from Conway notation recipes such as dakD or n(0,0.3)P5")]
struct Cli {
    /// Recipes to generate
    #[arg(required_unless_present = "list")]
    recipes: Vec<String>,

    /// Print each polyhedron as a JSON line instead of a summary
    #[arg(long)]
    json: bool,

    /// Split every face into triangles before output
    #[arg(long)]
    triangulate: bool,

    /// Print the seed and operator tables and exit
    #[arg(long)]
    list: bool,

    /// Cap on the number of vertices collected per face
    #[arg(long)]
    face_walk_limit: Option<usize>,

    /// Vertex displacement at which relaxation stops early
    #[arg(long, default_value_t = CONVERGENCE_TOLERANCE)]
    tolerance: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if cli.list {
        print!("{}", tables());
        return Ok(());
    }

    let config = EngineConfig::new(cli.tolerance, cli.face_walk_limit).context("Invalid engine settings")?;
    let results: Vec<Result<Polyhedron>> = cli
        .recipes
        .par_iter()
        .map(|recipe| {
            let poly = generate_with(recipe, &config).with_context(|| format!("Recipe {recipe:?}"))?;
            Ok(if cli.triangulate { triangulate(&poly) } else { poly })
        })
        .collect();

    let mut failures = 0;
    for result in results {
        match result {
            Ok(poly) => println!("{}", render(&poly, cli.json)?),
            Err(e) => {
                failures += 1;
                eprintln!("error: {e:#}");
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} recipes failed", cli.recipes.len());
    }
    Ok(())
}

/// One output record for a generated polyhedron.
fn render(poly: &Polyhedron, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(poly).context("Failed to serialize polyhedron")
    } else {
        Ok(poly.to_string())
    }
}

/// Seed and operator tables for `--list`.
fn tables() -> String {
    let mut out = String::from("Seeds:\n");
    for seed in SeedKind::ALL {
        let usage = format!("{}{}", seed.code(), if seed.is_parametrized() { " <sides>" } else { "" });
        let _ = writeln!(out, "  {usage:<10} {}", seed.name());
    }
    out.push_str("Operators:\n");
    for op in Operator::ALL {
        let _ = writeln!(out, "  {:<10} {}", op.code(), op.name());
    }
    out
}
