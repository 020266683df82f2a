//! Round driver shared by encryption and decryption.

use log::trace;

use crate::block::{Block, State};
use crate::field::{DIFFUSION, DIFFUSION_INV};
use crate::key::{Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::{Table, INV_SBOX, SBOX};
use crate::schedule::{expand_key, DecryptionSchedule, EncryptionSchedule};

/// Cipher direction, selecting the matched table, row shift and polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Forward cipher: S-box, shift 1, diffusion polynomial.
    Forward,
    /// Equivalent inverse cipher: inverse S-box, shift 3, inverse polynomial.
    Inverse,
}

impl Direction {
    /// Substitution table for this direction.
    #[inline]
    pub fn table(self) -> &'static Table {
        match self {
            Direction::Forward => &SBOX,
            Direction::Inverse => &INV_SBOX,
        }
    }

    /// Row rotation amount for this direction.
    #[inline]
    pub fn shift(self) -> usize {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => 3,
        }
    }

    /// Column mixing polynomial for this direction.
    #[inline]
    pub fn polynomial(self) -> u32 {
        match self {
            Direction::Forward => DIFFUSION,
            Direction::Inverse => DIFFUSION_INV,
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for crate::schedule::EncryptionSchedule {}
    impl Sealed for crate::schedule::DecryptionSchedule {}
}

/// A schedule bound to the direction it was derived for.
pub trait Schedule: sealed::Sealed {
    /// Direction the round keys belong to.
    const DIRECTION: Direction;

    /// Round keys consumed by the driver.
    fn round_keys(&self) -> &RoundKeys;
}

impl Schedule for EncryptionSchedule {
    const DIRECTION: Direction = Direction::Forward;

    fn round_keys(&self) -> &RoundKeys {
        EncryptionSchedule::round_keys(self)
    }
}

impl Schedule for DecryptionSchedule {
    const DIRECTION: Direction = Direction::Inverse;

    fn round_keys(&self) -> &RoundKeys {
        DecryptionSchedule::round_keys(self)
    }
}

/// Runs all `Nr` rounds over `state` in place.
///
/// Round key 0 is added up front, rounds `1..Nr` apply all four transforms,
/// and the final round skips MixColumns.
pub fn apply<S: Schedule>(state: &mut State, schedule: &S) {
    let direction = S::DIRECTION;
    let keys = schedule.round_keys();
    let rounds = keys.rounds();

    add_round_key(state, keys.round_key(0));
    trace!("{:?} round 0: {:08x?}", direction, state.words());

    for round in 1..rounds {
        sub_bytes(state, direction.table());
        shift_rows(state, direction.shift());
        mix_columns(state, direction.polynomial());
        add_round_key(state, keys.round_key(round));
        trace!("{:?} round {}: {:08x?}", direction, round, state.words());
    }

    sub_bytes(state, direction.table());
    shift_rows(state, direction.shift());
    add_round_key(state, keys.round_key(rounds));
    trace!("{:?} round {}: {:08x?}", direction, rounds, state.words());
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, schedule: &EncryptionSchedule) -> Block {
    let mut state = State::from_block(block);
    apply(&mut state, schedule);
    state.to_block()
}

/// Decrypts a single 16-byte block with a derived decryption schedule.
pub fn decrypt_block(block: &Block, schedule: &DecryptionSchedule) -> Block {
    let mut state = State::from_block(block);
    apply(&mut state, schedule);
    state.to_block()
}

/// Both schedules for one key.
#[derive(Clone, Debug)]
pub struct Cipher {
    encryption: EncryptionSchedule,
    decryption: DecryptionSchedule,
}

impl Cipher {
    /// Expands `key` and derives its decryption schedule.
    pub fn new(key: &Key) -> Self {
        let encryption = expand_key(key);
        let decryption = encryption.inverse();
        Self {
            encryption,
            decryption,
        }
    }

    /// Forward schedule.
    pub fn encryption_schedule(&self) -> &EncryptionSchedule {
        &self.encryption
    }

    /// Derived decryption schedule.
    pub fn decryption_schedule(&self) -> &DecryptionSchedule {
        &self.decryption
    }

    /// Encrypts `block` in place.
    pub fn encrypt_in_place(&self, block: &mut Block) {
        *block = encrypt_block(block, &self.encryption);
    }

    /// Decrypts `block` in place.
    pub fn decrypt_in_place(&self, block: &mut Block) {
        *block = decrypt_block(block, &self.decryption);
    }
}
