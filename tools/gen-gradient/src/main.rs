//! gen-gradient - render the reference gradient to `out.ppm`
//!
//! Generates a 512x512 gradient framebuffer and writes it as a binary PPM in
//! the current directory. Image settings are fixed; the only flag controls
//! log verbosity.

use anyhow::{Context, Result};
use clap::Parser;
use pixmap::{Rgba, bits_string, generate, hex_string};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;
const OUTPUT: &str = "out.ppm";

#[derive(Parser)]
#[command(name = "gen-gradient")]
#[command(about = "Render the reference gradient to out.ppm")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Generating {}x{} gradient", WIDTH, HEIGHT);
    let fb = generate(WIDTH, HEIGHT);

    for (name, pixel) in [("first", fb.pixels().first()), ("last", fb.pixels().last())] {
        if let Some(&word) = pixel {
            tracing::debug!(
                "{} pixel {} = {} = {}",
                name,
                Rgba::from_packed(word),
                hex_string(word),
                bits_string(word)
            );
        }
    }

    let output = Path::new(OUTPUT);
    fb.write_ppm(output)
        .with_context(|| format!("Failed to write gradient to {}", output.display()))?;

    tracing::info!("Wrote {:?}", output);
    Ok(())
}
