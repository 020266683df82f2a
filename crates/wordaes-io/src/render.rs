//! Console rendering of words, states and round keys.

use std::fmt::Write;

use wordaes_core::{RoundKeys, State};

/// Hex of each word's bytes in row order, no separators.
pub fn format_words(words: &[u32]) -> String {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    hex::encode(bytes)
}

fn format_grid(columns: &[u32; 4]) -> String {
    let state = State::from_words(*columns);
    let mut out = String::with_capacity(48);
    for row in 0..4 {
        let line: Vec<String> = (0..4)
            .map(|col| format!("{:02x}", state.byte(row, col)))
            .collect();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// State as a 4x4 grid, one row per line.
pub fn format_state(state: &State) -> String {
    format_grid(state.words())
}

/// Round key `round` as a 4x4 grid.
pub fn format_round_key(keys: &RoundKeys, round: usize) -> String {
    format_grid(keys.round_key(round))
}

/// Every round key, one `round NN: <hex>` line each.
pub fn format_schedule(keys: &RoundKeys) -> String {
    let mut out = String::new();
    for round in 0..=keys.rounds() {
        let _ = writeln!(
            out,
            "round {:>2}: {}",
            round,
            format_words(keys.round_key(round))
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{load_block, load_key, load_words};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use wordaes_core::expand_key;

    #[test]
    fn words_render_back_to_input_hex() {
        let hex = "000102030405060708090a0b0c0d0e0f1011121314151617";
        assert_eq!(format_words(&load_words(hex).unwrap()), hex);
    }

    #[test]
    fn random_words_survive_load_and_render() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..16 {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let hex = hex::encode(bytes);
            assert_eq!(format_words(&load_words(&hex).unwrap()), hex);
        }
    }

    #[test]
    fn state_grid_lists_rows() {
        let state = load_block("00112233445566778899aabbccddeeff").unwrap();
        assert_eq!(
            format_state(&state),
            "00 44 88 cc\n11 55 99 dd\n22 66 aa ee\n33 77 bb ff\n"
        );
    }

    #[test]
    fn schedule_lists_every_round() {
        let key = load_key("000102030405060708090a0b0c0d0e0f").unwrap();
        let schedule = expand_key(&key);
        let text = format_schedule(schedule.round_keys());
        assert_eq!(text.lines().count(), 11);
        assert!(text.starts_with("round  0: 000102030405060708090a0b0c0d0e0f\n"));
        assert_eq!(
            format_round_key(schedule.round_keys(), 0),
            "00 04 08 0c\n01 05 09 0d\n02 06 0a 0e\n03 07 0b 0f\n"
        );
    }
}
