//! Text-facing glue for `wordaes-core`.
//!
//! Loads keys and blocks from hex strings into little-endian words and
//! renders states and round keys as the 4x4 byte grids used by FIPS-197.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod load;
mod render;

pub use crate::load::{load_block, load_key, load_words, LoadError};
pub use crate::render::{format_round_key, format_schedule, format_state, format_words};
