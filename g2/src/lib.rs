//! Arithmetic on the G2 group of BLS12-381: Jacobian group law, naive, wNAF and
//! GLV scalar multiplication, Pippenger MultiExp, cofactor clearing, subgroup
//! checks and the compressed, uncompressed and raw point encodings.

mod cofactor;
mod config;
pub mod constants;
mod encoding;
mod errors;
mod g2;
mod glv;
mod multiexp;
mod point;
mod scalar;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::G2Config;
pub use encoding::{G2_COMPRESSED_SIZE, G2_UNCOMPRESSED_SIZE};
pub use errors::{G2Error, Result};
pub use g2::G2;
pub use glv::{GlvVector, GlvVectorBig, GlvVectorFr};
pub use point::PointG2;
pub use scalar::{Scalar, ToWnaf, Wnaf};
