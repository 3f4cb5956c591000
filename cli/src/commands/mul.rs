use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use num_bigint::BigUint;
use std::path::PathBuf;

use super::Format;
use crate::{load_g2, setup_logger};

/// Multiplies an encoded point by a decimal scalar and prints the encoded result
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct G2Mul {
    /// Hex encoded point, the generator when omitted
    #[clap(short = 'p', long)]
    pub point: Option<String>,

    /// Decimal scalar
    #[clap(short = 's', long)]
    pub scalar: String,

    /// Encoding of the input and output points
    #[clap(long, value_enum, default_value_t = Format::Compressed)]
    pub format: Format,

    /// TOML file with the G2 configuration
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

impl G2Mul {
    pub fn run(&self) -> Result<()> {
        setup_logger(self.verbose);

        tracing::info!(
            "{}",
            format!("{} G2Mul", format!("{: >12}", "Command").bright_green().bold())
        );

        let g = load_g2(self.config.as_ref())?;

        let p = match &self.point {
            Some(point) => {
                let bytes = hex::decode(point.trim_start_matches("0x"))
                    .context("Error parsing the point as hex")?;
                self.format.decode(&g, &bytes).context("Error decoding the point")?
            }
            None => g.one(),
        };
        let scalar = BigUint::parse_bytes(self.scalar.as_bytes(), 10)
            .ok_or_else(|| anyhow!("Invalid decimal scalar: {}", self.scalar))?;

        // GLV needs a subgroup point, which the decoder only guarantees with the check on
        let r = if g.config().subgroup_check || !g.config().use_glv {
            g.wnaf_mul(&p, &scalar)
        } else {
            g.mul_scalar(&p, &scalar)
        };

        println!("{}", hex::encode(self.format.encode(&g, &r)));
        Ok(())
    }
}
