//! Hex string loading.

use thiserror::Error;
use wordaes_core::{Key, KeyError, State};

const DIGITS_PER_WORD: usize = 8;

/// Failure to turn a hex string into words.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A character that is neither a hex digit nor whitespace.
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Byte offset in the input.
        index: usize,
    },
    /// Digits do not fill a whole number of 8-digit words.
    #[error("{digits} hex digits do not form whole 32-bit words")]
    IncompleteWord {
        /// Hex digits found.
        digits: usize,
    },
    /// Wrong number of words for a block.
    #[error("expected {expected} words, found {found}")]
    WordCount {
        /// Words required.
        expected: usize,
        /// Words supplied.
        found: usize,
    },
    /// Digits rejected by the hex decoder.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
    /// Word count is not a valid key length.
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Parses hex digits into little-endian words.
///
/// Case-insensitive; whitespace anywhere is ignored.
pub fn load_words(input: &str) -> Result<Vec<u32>, LoadError> {
    if let Some((index, character)) = input
        .char_indices()
        .find(|(_, c)| !c.is_whitespace() && !c.is_ascii_hexdigit())
    {
        return Err(LoadError::InvalidCharacter { character, index });
    }

    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % DIGITS_PER_WORD != 0 {
        return Err(LoadError::IncompleteWord {
            digits: digits.len(),
        });
    }

    let bytes = hex::decode(&digits)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Loads a 128/192/256-bit key.
pub fn load_key(input: &str) -> Result<Key, LoadError> {
    let words = load_words(input)?;
    Ok(Key::try_from(words.as_slice())?)
}

/// Loads a 128-bit block as a cipher state.
pub fn load_block(input: &str) -> Result<State, LoadError> {
    let words = load_words(input)?;
    let found = words.len();
    let words: [u32; 4] = words
        .try_into()
        .map_err(|_| LoadError::WordCount { expected: 4, found })?;
    Ok(State::from_words(words))
}
