/// Errors reported by the G2 decoders, MultiExp and configuration loading
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum G2Error {
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(&'static str),

    #[error("Point is not on curve")]
    PointNotOnCurve,

    #[error("Point is not in the prime-order subgroup")]
    PointNotInSubgroup,

    #[error("Length mismatch: {points} points and {scalars} scalars")]
    LengthMismatch { points: usize, scalars: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, G2Error>;
