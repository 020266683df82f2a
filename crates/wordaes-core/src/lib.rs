//! Word-oriented AES implementation for 128, 192 and 256-bit keys.
//!
//! The state is held as four little-endian column words and every round
//! transform is written once, parameterized by direction:
//! - GF(2^8) byte arithmetic and the column polynomial product.
//! - Key expansion and the equivalent-inverse decryption schedule.
//! - A single round driver for encryption and decryption.
//!
//! Forward and decryption schedules are distinct types, so a schedule can
//! only ever be run in the direction it was derived for.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod field;
mod key;
pub mod round;
pub mod sbox;
mod schedule;

pub use crate::block::{Block, State};
pub use crate::cipher::{apply, decrypt_block, encrypt_block, Cipher, Direction, Schedule};
pub use crate::error::KeyError;
pub use crate::key::{Key, KeySize, RoundKeys, MAX_ROUNDS};
pub use crate::schedule::{expand_key, DecryptionSchedule, EncryptionSchedule};
