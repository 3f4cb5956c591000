use anyhow::{Context, Result};
use bls12_g2::PointG2;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use super::{Format, COMPRESSED_VECTORS_FILE, UNCOMPRESSED_VECTORS_FILE};
use crate::{load_g2, setup_logger};

/// Writes the compressed and uncompressed vector files, record i holding i·G
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct G2GenerateVectors {
    /// Number of records per file
    #[clap(short = 'n', long, default_value_t = 1000)]
    pub count: usize,

    /// Output directory
    #[clap(short = 'o', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// TOML file with the G2 configuration
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

impl G2GenerateVectors {
    pub fn run(&self) -> Result<()> {
        setup_logger(self.verbose);

        tracing::info!(
            "{}",
            format!("{} G2GenerateVectors", format!("{: >12}", "Command").bright_green().bold())
        );

        let g = load_g2(self.config.as_ref())?;

        let mut compressed = Vec::with_capacity(self.count * Format::Compressed.record_size());
        let mut uncompressed = Vec::with_capacity(self.count * Format::Uncompressed.record_size());
        let mut p = PointG2::zero();
        for _ in 0..self.count {
            compressed.extend_from_slice(&Format::Compressed.encode(&g, &p));
            uncompressed.extend_from_slice(&Format::Uncompressed.encode(&g, &p));
            p = p + g.one();
        }

        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("Error creating {}", self.out_dir.display()))?;
        for (name, data) in
            [(COMPRESSED_VECTORS_FILE, &compressed), (UNCOMPRESSED_VECTORS_FILE, &uncompressed)]
        {
            let path = self.out_dir.join(name);
            std::fs::write(&path, data)
                .with_context(|| format!("Error writing {}", path.display()))?;
            tracing::info!("Wrote {} records to {}", self.count, path.display());
        }

        Ok(())
    }
}
