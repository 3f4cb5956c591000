mod fr;
mod wnaf;

pub use fr::Scalar;
pub(crate) use fr::WideScalar;
pub use wnaf::{ToWnaf, Wnaf};
