//! AES round transformations.
//!
//! Each transform serves both directions; the caller picks the table, shift
//! amount or polynomial.

use crate::block::{xor_in_place, State};
use crate::field::mix_word;
use crate::sbox::Table;

/// Substitutes every byte of `word` through `table`.
#[inline]
pub fn sub_word(word: u32, table: &Table) -> u32 {
    let bytes = word.to_le_bytes();
    u32::from_le_bytes([
        table[bytes[0] as usize],
        table[bytes[1] as usize],
        table[bytes[2] as usize],
        table[bytes[3] as usize],
    ])
}

/// Applies SubBytes (or InvSubBytes) to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State, table: &Table) {
    for word in state.0.iter_mut() {
        *word = sub_word(*word, table);
    }
}

/// Rotates row `r` left by `shift * r` columns.
///
/// `shift = 1` is ShiftRows, `shift = 3` is its inverse.
pub fn shift_rows(state: &mut State, shift: usize) {
    let mut columns = [0u32; 4];
    for (col, column) in columns.iter_mut().enumerate() {
        for row in 0..4 {
            let mask = 0xffu32 << (row << 3);
            *column |= state.0[(col + shift * row) & 3] & mask;
        }
    }
    state.0 = columns;
}

/// MixColumns over all four columns with the given polynomial.
#[inline]
pub fn mix_columns(state: &mut State, polynomial: u32) {
    for word in state.0.iter_mut() {
        *word = mix_word(polynomial, *word);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[u32; 4]) {
    xor_in_place(&mut state.0, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::field::{DIFFUSION, DIFFUSION_INV};
    use crate::sbox::{INV_SBOX, SBOX};

    fn state_from_hex(hex: &str) -> State {
        let mut block: Block = [0u8; 16];
        for (i, out) in block.iter_mut().enumerate() {
            *out = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).unwrap();
        }
        State::from_block(&block)
    }

    #[test]
    fn shift_rows_rotates_each_row() {
        let mut state = state_from_hex("000102030405060708090a0b0c0d0e0f");
        shift_rows(&mut state, 1);
        assert_eq!(state, state_from_hex("00050a0f04090e03080d02070c01060b"));
    }

    #[test]
    fn shift_by_three_inverts_shift_by_one() {
        let original = state_from_hex("d42711aee0bf98f1b8b45de51e415230");
        let mut state = original;
        shift_rows(&mut state, 1);
        shift_rows(&mut state, 3);
        assert_eq!(state, original);
    }

    #[test]
    fn first_round_matches_fips_appendix_b() {
        // Round 1 of the Appendix B trace: start -> after MixColumns.
        let mut state = state_from_hex("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut state, &SBOX);
        assert_eq!(state, state_from_hex("d42711aee0bf98f1b8b45de51e415230"));
        shift_rows(&mut state, 1);
        assert_eq!(state, state_from_hex("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut state, DIFFUSION);
        assert_eq!(state, state_from_hex("046681e5e0cb199a48f8d37a2806264c"));
    }

    #[test]
    fn inverse_transforms_undo_forward() {
        let original = state_from_hex("00112233445566778899aabbccddeeff");
        let mut state = original;
        sub_bytes(&mut state, &SBOX);
        mix_columns(&mut state, DIFFUSION);
        mix_columns(&mut state, DIFFUSION_INV);
        sub_bytes(&mut state, &INV_SBOX);
        assert_eq!(state, original);
    }

    #[test]
    fn add_round_key_xors_columns() {
        let mut state = State::from_words([0x0f0f_0f0f, 0, 0xffff_ffff, 0x1234_5678]);
        add_round_key(&mut state, &[0x0f0f_0f0f, 1, 0xffff_ffff, 0]);
        assert_eq!(state, State::from_words([0, 1, 0, 0x1234_5678]));
    }
}
