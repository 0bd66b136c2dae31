//! Letter frequency tables and cumulative-sum sampling.

use thiserror::Error;

/// Letter returned when a draw lands past the table's total weight.
pub const FALLBACK_LETTER: char = 'Z';

/// Relative frequency of each letter in English text, A through Z.
const ENGLISH: [(char, f64); 26] = [
    ('A', 0.08167),
    ('B', 0.01492),
    ('C', 0.02782),
    ('D', 0.04253),
    ('E', 0.12702),
    ('F', 0.02228),
    ('G', 0.02015),
    ('H', 0.06094),
    ('I', 0.06966),
    ('J', 0.00153),
    ('K', 0.00772),
    ('L', 0.04025),
    ('M', 0.02406),
    ('N', 0.06749),
    ('O', 0.07507),
    ('P', 0.01929),
    ('Q', 0.00095),
    ('R', 0.05987),
    ('S', 0.06327),
    ('T', 0.09056),
    ('U', 0.02758),
    ('V', 0.00978),
    ('W', 0.02360),
    ('X', 0.00150),
    ('Y', 0.01974),
    ('Z', 0.00074),
];

/// Errors raised while building a custom [`FrequencyTable`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TableError {
    #[error("frequency table must contain at least one letter")]
    Empty,

    #[error("letter {0:?} is not an uppercase ASCII letter")]
    InvalidLetter(char),

    #[error("letter {0:?} appears more than once")]
    DuplicateLetter(char),

    #[error("weight {weight} for letter {letter:?} must be positive and finite")]
    InvalidWeight { letter: char, weight: f64 },
}

/// Ordered mapping from letter to sampling weight.
///
/// Enumeration order is fixed at construction and never changes, so the
/// cumulative sum walked by [`sample`] is reproducible across calls. Weights
/// are not normalised; they are expected to sum to roughly one.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(char, f64)>,
}

impl FrequencyTable {
    /// Builds a table from `(letter, weight)` pairs, preserving their order.
    pub fn new(entries: impl IntoIterator<Item = (char, f64)>) -> Result<Self, TableError> {
        let mut table = Vec::new();

        for (letter, weight) in entries {
            if !letter.is_ascii_uppercase() {
                return Err(TableError::InvalidLetter(letter));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(TableError::InvalidWeight { letter, weight });
            }
            if table.iter().any(|(existing, _)| *existing == letter) {
                return Err(TableError::DuplicateLetter(letter));
            }
            table.push((letter, weight));
        }

        if table.is_empty() {
            return Err(TableError::Empty);
        }

        Ok(Self { entries: table })
    }

    /// The 26-letter English frequency table.
    pub fn english() -> Self {
        Self {
            entries: ENGLISH.to_vec(),
        }
    }

    /// Letters in enumeration order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(letter, _)| *letter)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters().any(|candidate| candidate == letter)
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first letter whose cumulative weight exceeds `draw`.
    ///
    /// `None` means the draw landed past the total weight of the table.
    pub fn try_sample(&self, draw: f64) -> Option<char> {
        let mut cumulative = 0.0;
        for (letter, weight) in &self.entries {
            cumulative += weight;
            if cumulative > draw {
                return Some(*letter);
            }
        }
        None
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}

/// Draws one letter from `table` for a uniform `draw` in `[0, 1)`.
///
/// Falls back to [`FALLBACK_LETTER`] when the weights do not cover the draw.
pub fn sample(table: &FrequencyTable, draw: f64) -> char {
    table.try_sample(draw).unwrap_or(FALLBACK_LETTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20 letters at 1/32 and 6 at 1/16: sums to exactly 1.0 in binary.
    fn dyadic_table() -> FrequencyTable {
        let entries = ('A'..='Z')
            .enumerate()
            .map(|(i, letter)| (letter, if i < 20 { 1.0 / 32.0 } else { 1.0 / 16.0 }));
        FrequencyTable::new(entries).unwrap()
    }

    #[test]
    fn test_english_table_covers_alphabet_in_order() {
        let table = FrequencyTable::english();
        let letters: String = table.letters().collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!((table.total_weight() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_walks_cumulative_sum() {
        let table = FrequencyTable::new([('A', 0.5), ('B', 0.25), ('C', 0.25)]).unwrap();
        assert_eq!(sample(&table, 0.0), 'A');
        assert_eq!(sample(&table, 0.49), 'A');
        // Cumulative sum must strictly exceed the draw.
        assert_eq!(sample(&table, 0.5), 'B');
        assert_eq!(sample(&table, 0.74), 'B');
        assert_eq!(sample(&table, 0.99), 'C');
    }

    #[test]
    fn test_sample_never_falls_back_inside_unit_interval() {
        let table = dyadic_table();
        for step in 0..10_000 {
            let draw = step as f64 / 10_000.0;
            assert!(table.try_sample(draw).is_some(), "draw {draw} fell through");
        }
        assert!(table.try_sample(1.0 - f64::EPSILON).is_some());
    }

    #[test]
    fn test_sample_falls_back_at_upper_boundary() {
        let table = dyadic_table();
        assert_eq!(table.try_sample(1.0), None);
        assert_eq!(sample(&table, 1.0), FALLBACK_LETTER);
    }

    #[test]
    fn test_sample_falls_back_when_weights_are_short() {
        let table = FrequencyTable::new([('A', 0.25), ('B', 0.25)]).unwrap();
        assert_eq!(sample(&table, 0.75), FALLBACK_LETTER);
    }

    #[test]
    fn test_new_rejects_bad_entries() {
        assert_eq!(
            FrequencyTable::new([('a', 0.5)]),
            Err(TableError::InvalidLetter('a'))
        );
        assert_eq!(
            FrequencyTable::new([('A', 0.5), ('A', 0.5)]),
            Err(TableError::DuplicateLetter('A'))
        );
        assert!(matches!(
            FrequencyTable::new([('A', 0.0)]),
            Err(TableError::InvalidWeight { letter: 'A', .. })
        ));
        assert!(matches!(
            FrequencyTable::new([('A', f64::NAN)]),
            Err(TableError::InvalidWeight { .. })
        ));
        assert_eq!(
            FrequencyTable::new(Vec::<(char, f64)>::new()),
            Err(TableError::Empty)
        );
    }
}
