//! Demonstration driver for the `convolution` engine.
//!
//! Builds a sample signal and matrix, convolves them with constant (or seeded
//! random) kernels and prints inputs, kernels and outputs to stdout. Logs go to
//! stderr and are filtered with `RUST_LOG`.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use convolution::ConvMethod;
use tracing_subscriber::EnvFilter;

use crate::{config::DemoConfig, render::report, traits::ConfigFS};

mod config;
mod render;
mod samples;
mod traits;

/// Command-line arguments. Every value overrides the config file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write the effective config to this JSON file before running
    #[arg(long)]
    pub save_config: Option<PathBuf>,
    /// Length of the input signal and side of the input matrix (default: 8)
    #[arg(long)]
    pub input_size: Option<usize>,
    /// Length of the 1-D kernel and side of the 2-D kernel (default: 5)
    #[arg(long)]
    pub kernel_size: Option<usize>,
    /// Step between output positions (default: 2)
    #[arg(long, allow_hyphen_values = true)]
    pub stride: Option<i64>,
    /// Implicit zeros on each side of every axis (default: 2)
    #[arg(long, allow_hyphen_values = true)]
    pub padding: Option<i64>,
    /// Fill value of the input (default: 1)
    #[arg(long, allow_hyphen_values = true)]
    pub input_value: Option<f64>,
    /// Fill value of the kernel (default: 2)
    #[arg(long, allow_hyphen_values = true)]
    pub kernel_value: Option<f64>,
    /// "sequential" or "parallel" (default: sequential)
    #[arg(long)]
    pub method: Option<ConvMethod>,
    /// Seed for random integer samples in [0, 10) instead of constant fills
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    fn apply(&self, config: &mut DemoConfig) {
        if let Some(w) = self.input_size { config.input_size = w; }
        if let Some(w) = self.kernel_size { config.kernel_size = w; }
        if let Some(w) = self.stride { config.stride = w; }
        if let Some(w) = self.padding { config.padding = w; }
        if let Some(w) = self.input_value { config.input_value = w; }
        if let Some(w) = self.kernel_value { config.kernel_value = w; }
        if let Some(w) = self.method { config.method = w; }
        if self.seed.is_some() { config.seed = self.seed; }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DemoConfig::read(path)
            .await?
            .ok_or_else(|| anyhow!("config {} must be a .json file", path.display()))?,
        None => DemoConfig::default(),
    };
    args.apply(&mut config);
    tracing::debug!(?config, "effective config");

    if let Some(path) = &args.save_config {
        config.save(path).await?;
        tracing::info!(path = %path.display(), "config saved");
    }

    let out = report(&config)?;
    print!("{out}");
    Ok(())
}
