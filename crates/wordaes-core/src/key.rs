//! Key types for AES-128, AES-192 and AES-256.

use crate::block::Block;
use crate::error::KeyError;

/// Largest round count (AES-256).
pub const MAX_ROUNDS: usize = 14;

/// Supported key lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All key sizes, shortest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Number of 32-bit words in the key (`Nk`).
    #[inline]
    pub fn nk(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    #[inline]
    pub fn rounds(self) -> usize {
        self.nk() + 6
    }

    /// Length of the expanded schedule in words, `4 * (Nr + 1)`.
    #[inline]
    pub fn schedule_words(self) -> usize {
        4 * (self.rounds() + 1)
    }

    /// Key length in bits.
    pub fn bits(self) -> usize {
        self.nk() * 32
    }

    /// Looks up the key size for a word count.
    pub fn from_nk(nk: usize) -> Result<Self, KeyError> {
        match nk {
            4 => Ok(KeySize::Aes128),
            6 => Ok(KeySize::Aes192),
            8 => Ok(KeySize::Aes256),
            other => Err(KeyError::InvalidWordCount(other)),
        }
    }

    /// Looks up the key size for a byte length.
    pub fn from_byte_len(len: usize) -> Result<Self, KeyError> {
        if len % 4 != 0 {
            return Err(KeyError::InvalidByteLength(len));
        }
        Self::from_nk(len / 4).map_err(|_| KeyError::InvalidByteLength(len))
    }
}

/// Cipher key of 4, 6 or 8 little-endian words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key {
    words: [u32; 8],
    size: KeySize,
}

impl Key {
    /// Loads a 16/24/32-byte key, four bytes per word.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let size = KeySize::from_byte_len(bytes.len())?;
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Self { words, size })
    }

    /// Key size implied by the word count.
    #[inline]
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// The `Nk` key words.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.size.nk()]
    }
}

impl TryFrom<&[u32]> for Key {
    type Error = KeyError;

    fn try_from(value: &[u32]) -> Result<Self, Self::Error> {
        let size = KeySize::from_nk(value.len())?;
        let mut words = [0u32; 8];
        words[..value.len()].copy_from_slice(value);
        Ok(Self { words, size })
    }
}

macro_rules! key_from_array {
    ($($n:literal => $size:expr),*) => {
        $(
            impl From<[u32; $n]> for Key {
                fn from(value: [u32; $n]) -> Self {
                    let mut words = [0u32; 8];
                    words[..$n].copy_from_slice(&value);
                    Self { words, size: $size }
                }
            }
        )*
    };
}

key_from_array!(4 => KeySize::Aes128, 6 => KeySize::Aes192, 8 => KeySize::Aes256);

/// Expanded round keys, one 4-word slice per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    keys: [[u32; 4]; MAX_ROUNDS + 1],
    size: KeySize,
}

impl RoundKeys {
    /// Packs a flat `4 * (Nr + 1)` word schedule into round slices.
    pub(crate) fn from_words(words: &[u32], size: KeySize) -> Self {
        debug_assert_eq!(words.len(), size.schedule_words());
        let mut keys = [[0u32; 4]; MAX_ROUNDS + 1];
        for (key, chunk) in keys.iter_mut().zip(words.chunks_exact(4)) {
            key.copy_from_slice(chunk);
        }
        Self { keys, size }
    }

    /// Key size the schedule was derived from.
    #[inline]
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of schedule words, `4 * (Nr + 1)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.size.schedule_words()
    }

    /// Always false; a schedule holds at least 44 words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the round key at the requested index (0..=Nr).
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u32; 4] {
        &self.keys[..=self.rounds()][round]
    }

    /// Round key `round` in block byte order.
    pub fn round_key_bytes(&self, round: usize) -> Block {
        let mut block = [0u8; 16];
        for (chunk, word) in block.chunks_exact_mut(4).zip(self.round_key(round)) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        block
    }

    /// The schedule as a flat word sequence.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.keys[..=self.rounds()].iter().flatten().copied()
    }
}
