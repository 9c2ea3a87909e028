//! Secure random source used for character selection and shuffling.
//!
//! Any `rand` generator that is marked [`CryptoRng`] can drive generation.
//! Draws go through [`RandomSource::below`], which rejects biased samples
//! instead of reducing with a bare modulo.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::RandomError;

/// Uniform bounded integers from a cryptographically secure source.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> Result<usize, RandomError>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn below(&mut self, bound: usize) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::EmptyRange);
        }

        let bound = bound as u64;
        // Largest multiple of `bound` that fits in u64; anything at or above it is biased.
        let zone = u64::MAX - (u64::MAX % bound);

        loop {
            let mut buf = [0u8; 8];
            self.try_fill_bytes(&mut buf)?;
            let value = u64::from_le_bytes(buf);
            if value < zone {
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// The operating system CSPRNG.
pub fn system() -> OsRng {
    OsRng
}

/// Uniform Fisher–Yates shuffle in place.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R) -> Result<(), RandomError>
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
