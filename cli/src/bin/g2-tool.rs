use anyhow::{Context, Result};
use bls12_g2_cli::commands::{G2CheckVectors, G2GenerateVectors, G2Mul};
use clap::Parser;

// Main enum defining the subcommands.
#[derive(Parser)]
#[command(
    name = "g2-tool",
    bin_name = "g2-tool",
    version,
    about = "BLS12-381 G2 tool",
    long_about = "Generates and checks G2 encoding test vectors and runs scalar multiplications."
)]
pub enum G2Tool {
    GenerateVectors(G2GenerateVectors),
    CheckVectors(G2CheckVectors),
    Mul(G2Mul),
}

fn main() -> Result<()> {
    // Parse command-line arguments and handle errors if they occur.
    let args = G2Tool::parse();

    match args {
        G2Tool::GenerateVectors(cmd) => {
            cmd.run().context("Error executing GenerateVectors command")?;
        }
        G2Tool::CheckVectors(cmd) => {
            cmd.run().context("Error executing CheckVectors command")?;
        }
        G2Tool::Mul(cmd) => {
            cmd.run().context("Error executing Mul command")?;
        }
    }

    Ok(())
}
