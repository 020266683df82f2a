//! Block and state representation helpers.

use crate::field::byte;

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Cipher state: four column words, byte `j` of word `i` is row `j` of column `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [u32; 4]);

impl State {
    /// Builds a state from column words.
    pub fn from_words(words: [u32; 4]) -> Self {
        Self(words)
    }

    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    /// Serializes the state back into block byte order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, word) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        block
    }

    /// Column words.
    #[inline]
    pub fn words(&self) -> &[u32; 4] {
        &self.0
    }

    /// Byte at (`row`, `col`) of the 4x4 state matrix.
    #[inline]
    pub fn byte(&self, row: usize, col: usize) -> u8 {
        byte(self.0[col], row)
    }
}

impl From<Block> for State {
    fn from(value: Block) -> Self {
        Self::from_block(&value)
    }
}

impl From<State> for Block {
    fn from(value: State) -> Self {
        value.to_block()
    }
}

/// XORs four words, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut [u32; 4], rhs: &[u32; 4]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
