//! Error types of the convolution engine.

use thiserror::Error;

/// Errors produced while validating a convolution call.
///
/// Every check runs before the output buffer is allocated, so an error
/// always means no work was done.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConvError {
    /// Stride, padding or kernel shape cannot produce a valid output.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The data being convolved is empty or not rectangular.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, ConvError>;
