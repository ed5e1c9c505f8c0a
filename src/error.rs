use thiserror::Error;

/// Contract violations raised by point construction, conversion and
/// comparison. None of these is a recoverable runtime condition; a
/// silently wrong point is a cryptographic hazard, so every invalid
/// state surfaces immediately instead of defaulting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    #[error("invalid point state: {0}")]
    InvalidState(&'static str),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("attempted to divide by a zero z coordinate")]
    DivisionByZero,
}
