//! Key expansion and the derived decryption schedule.

use log::debug;

use crate::field::{mix_word, DIFFUSION_INV};
use crate::key::{Key, RoundKeys, MAX_ROUNDS};
use crate::round::sub_word;
use crate::sbox::{RCON, SBOX};

/// Forward round keys produced by [`expand_key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncryptionSchedule(RoundKeys);

/// Round keys for the equivalent inverse cipher, derived from an
/// [`EncryptionSchedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecryptionSchedule(RoundKeys);

impl EncryptionSchedule {
    /// Underlying round keys.
    #[inline]
    pub fn round_keys(&self) -> &RoundKeys {
        &self.0
    }

    /// Derives the decryption schedule.
    ///
    /// The first and last round keys swap places unchanged; every middle
    /// round key `i` becomes InvMixColumns of forward round key `Nr - i`.
    pub fn inverse(&self) -> DecryptionSchedule {
        let forward = &self.0;
        let rounds = forward.rounds();
        let mut words = [0u32; 4 * (MAX_ROUNDS + 1)];
        for (round, slot) in words[..forward.len()].chunks_exact_mut(4).enumerate() {
            let source = forward.round_key(rounds - round);
            for (out, word) in slot.iter_mut().zip(source) {
                *out = if round == 0 || round == rounds {
                    *word
                } else {
                    mix_word(DIFFUSION_INV, *word)
                };
            }
        }
        debug!("derived {}-round decryption schedule", rounds);
        DecryptionSchedule(RoundKeys::from_words(&words[..forward.len()], forward.size()))
    }
}

impl DecryptionSchedule {
    /// Underlying round keys.
    #[inline]
    pub fn round_keys(&self) -> &RoundKeys {
        &self.0
    }
}

impl From<&EncryptionSchedule> for DecryptionSchedule {
    fn from(value: &EncryptionSchedule) -> Self {
        value.inverse()
    }
}

/// Expands a 128/192/256-bit key into `Nr + 1` round keys.
///
/// Words are little-endian, so RotWord is a right rotation and the round
/// constant sits in the low byte.
pub fn expand_key(key: &Key) -> EncryptionSchedule {
    let size = key.size();
    let nk = size.nk();
    let total = size.schedule_words();
    let mut w = [0u32; 4 * (MAX_ROUNDS + 1)];
    w[..nk].copy_from_slice(key.words());

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_right(8), &SBOX) ^ RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp, &SBOX);
        }
        w[i] = w[i - nk] ^ temp;
    }

    debug!("expanded {}-bit key into {} words", size.bits(), total);
    EncryptionSchedule(RoundKeys::from_words(&w[..total], size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeySize;

    fn fips_key(size: KeySize) -> Key {
        let bytes: Vec<u8> = (0u8..).take(size.nk() * 4).collect();
        Key::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn schedule_has_nr_plus_one_round_keys() {
        for size in KeySize::ALL {
            let schedule = expand_key(&fips_key(size));
            assert_eq!(schedule.round_keys().len(), size.schedule_words());
            assert_eq!(schedule.round_keys().words().count(), size.schedule_words());
            assert_eq!(schedule.round_keys().rounds(), size.rounds());
        }
    }

    #[test]
    fn schedule_starts_with_key_words() {
        for size in KeySize::ALL {
            let key = fips_key(size);
            let schedule = expand_key(&key);
            let prefix: Vec<u32> = schedule.round_keys().words().take(size.nk()).collect();
            assert_eq!(prefix, key.words());
        }
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = fips_key(KeySize::Aes256);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn first_derived_word_matches_fips_appendix_a() {
        let key = Key::from_bytes(&[
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ])
        .unwrap();
        let schedule = expand_key(&key);
        assert_eq!(
            schedule.round_keys().round_key(1)[0].to_le_bytes(),
            [0xa0, 0xfa, 0xfe, 0x17]
        );
    }

    #[test]
    fn inverse_swaps_outer_round_keys() {
        for size in KeySize::ALL {
            let forward = expand_key(&fips_key(size));
            let inverse = forward.inverse();
            let nr = size.rounds();
            let (f, d) = (forward.round_keys(), inverse.round_keys());
            assert_eq!(d.round_key(0), f.round_key(nr));
            assert_eq!(d.round_key(nr), f.round_key(0));
            for round in 1..nr {
                let expected: Vec<u32> = f
                    .round_key(nr - round)
                    .iter()
                    .map(|w| mix_word(DIFFUSION_INV, *w))
                    .collect();
                assert_eq!(&d.round_key(round)[..], &expected[..]);
            }
            assert_eq!(DecryptionSchedule::from(&forward), inverse);
        }
    }
}
