mod check_vectors;
mod generate_vectors;
mod mul;

pub use check_vectors::*;
pub use generate_vectors::*;
pub use mul::*;

use bls12_g2::{PointG2, G2};
use clap::ValueEnum;

pub const COMPRESSED_VECTORS_FILE: &str = "g2_compressed_valid_test_vectors.dat";
pub const UNCOMPRESSED_VECTORS_FILE: &str = "g2_uncompressed_valid_test_vectors.dat";

/// Point encoding selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Compressed,
    Uncompressed,
}

impl Format {
    pub fn record_size(&self) -> usize {
        match self {
            Format::Compressed => bls12_g2::G2_COMPRESSED_SIZE,
            Format::Uncompressed => bls12_g2::G2_UNCOMPRESSED_SIZE,
        }
    }

    pub fn encode(&self, g: &G2, p: &PointG2) -> Vec<u8> {
        match self {
            Format::Compressed => g.to_compressed(p).to_vec(),
            Format::Uncompressed => g.to_uncompressed(p).to_vec(),
        }
    }

    pub fn decode(&self, g: &G2, bytes: &[u8]) -> bls12_g2::Result<PointG2> {
        match self {
            Format::Compressed => g.from_compressed(bytes),
            Format::Uncompressed => g.from_uncompressed(bytes),
        }
    }
}
