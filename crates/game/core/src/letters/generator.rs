//! Round letter generation.

use rand::Rng;
use thiserror::Error;

use super::frequency::{FrequencyTable, sample};

/// Largest rack a single round may ask for.
pub const MAX_LETTERS: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("letter count must be between 1 and {max}, got {0}", max = MAX_LETTERS)]
    InvalidCount(usize),
}

/// Checks that `count` is a rack size [`generate`] accepts.
pub fn check_count(count: usize) -> Result<(), GenerateError> {
    if count == 0 || count > MAX_LETTERS {
        return Err(GenerateError::InvalidCount(count));
    }
    Ok(())
}

/// Draws `count` letters from `table`, with replacement.
///
/// Every letter gets its own uniform draw in `[0, 1)`, so repeats are
/// expected. Returns [`GenerateError::InvalidCount`] when `count` is zero or
/// above [`MAX_LETTERS`]; nothing is allocated or drawn in that case.
pub fn generate<R: Rng>(
    table: &FrequencyTable,
    count: usize,
    rng: &mut R,
) -> Result<Vec<char>, GenerateError> {
    check_count(count)?;

    Ok((0..count).map(|_| sample(table, rng.r#gen::<f64>())).collect())
}
