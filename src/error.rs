//! Error types for generation and the random source.

use thiserror::Error;

/// Why a password could not be generated.
///
/// `NoCharsets` and `NotEnoughUniqueChars` are configuration errors: the same
/// config fails the same way every time, so callers should surface them
/// instead of retrying.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("no character sets selected")]
    NoCharsets,
    #[error("not enough unique characters for the requested length")]
    NotEnoughUniqueChars,
    #[error(transparent)]
    Random(#[from] RandomError),
}

#[derive(Error, Debug)]
pub enum RandomError {
    #[error("random source failed: {0}")]
    Source(#[from] rand::Error),
    #[error("cannot draw from an empty range")]
    EmptyRange,
}

pub type Result<T> = std::result::Result<T, GenerateError>;
