use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuadratureError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("sample count must be a positive integer, got {0}")]
    InvalidSampleCount(usize),

    #[error("batch integrand returned {actual} values for {expected} sample points")]
    BatchLengthMismatch { expected: usize, actual: usize },

    #[error("invalid integration domain: {reason}")]
    InvalidDomain { reason: String },
}
