pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bls12_g2::{G2Config, G2};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over the `-v` count when set.
pub fn setup_logger(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when commands are chained in tests
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Builds the group context from an optional TOML configuration file
pub fn load_g2(config: Option<&PathBuf>) -> Result<G2> {
    let config = match config {
        Some(path) => G2Config::from_file(path)
            .with_context(|| format!("Error loading configuration from {}", path.display()))?,
        None => G2Config::default(),
    };
    Ok(G2::with_config(config)?)
}
