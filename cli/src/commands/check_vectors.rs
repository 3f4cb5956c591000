use anyhow::{bail, Context, Result};
use bls12_g2::PointG2;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use super::Format;
use crate::{load_g2, setup_logger};

/// Checks that record i of a vector file decodes to i·G and re-encodes to itself
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct G2CheckVectors {
    /// Vector file to check
    #[clap(short = 'f', long)]
    pub file: PathBuf,

    /// Encoding of the records
    #[clap(long, value_enum, default_value_t = Format::Compressed)]
    pub format: Format,

    /// Only check the first records
    #[clap(short = 'n', long)]
    pub count: Option<usize>,

    /// TOML file with the G2 configuration
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

impl G2CheckVectors {
    pub fn run(&self) -> Result<()> {
        setup_logger(self.verbose);

        tracing::info!(
            "{}",
            format!("{} G2CheckVectors", format!("{: >12}", "Command").bright_green().bold())
        );

        let g = load_g2(self.config.as_ref())?;
        let data = std::fs::read(&self.file)
            .with_context(|| format!("Error reading {}", self.file.display()))?;

        let record_size = self.format.record_size();
        if data.len() % record_size != 0 {
            bail!(
                "{} holds {} bytes, not a multiple of the {} byte record size",
                self.file.display(),
                data.len(),
                record_size
            );
        }

        let start = std::time::Instant::now();
        let mut expected = PointG2::zero();
        let mut checked = 0usize;
        let records = data.chunks_exact(record_size).take(self.count.unwrap_or(usize::MAX));
        for (i, record) in records.enumerate() {
            let p = self
                .format
                .decode(&g, record)
                .with_context(|| format!("Error decoding record {i}"))?;
            if p != expected {
                tracing::info!(
                    "{}",
                    format!("\u{2717} Record {i} is not {i}·G").bright_red().bold()
                );
                bail!("record {i} does not decode to {i}·G");
            }
            if self.format.encode(&g, &p) != record {
                tracing::info!(
                    "{}",
                    format!("\u{2717} Record {i} is not canonical").bright_red().bold()
                );
                bail!("record {i} does not re-encode to itself");
            }
            tracing::debug!("Record {} ok", i);
            expected = expected + g.one();
            checked += 1;
        }

        tracing::info!("{}", format!("\u{2713} {checked} records verified").bright_green().bold());
        tracing::info!("      time: {} milliseconds", start.elapsed().as_millis());
        Ok(())
    }
}
