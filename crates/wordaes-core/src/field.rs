//! GF(2^8) arithmetic and the word-level polynomial product used by MixColumns.

/// Diffusion polynomial `{03}x^3 + {01}x^2 + {01}x + {02}`, coefficient `i` in byte `i`.
pub const DIFFUSION: u32 = 0x0301_0102;

/// Multiplicative inverse of [`DIFFUSION`] modulo `x^4 + 1`.
pub const DIFFUSION_INV: u32 = 0x0b0d_090e;

const REDUCTION: u8 = 0x1b;

/// Returns byte `n` (0 = least significant) of `word`.
#[inline]
pub fn byte(word: u32, n: usize) -> u8 {
    (word >> (n << 3)) as u8
}

/// Multiplies `a` by `x` in GF(2^8).
#[inline]
pub fn double(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Full GF(2^8) product by shift-and-add over the bits of `b`.
pub fn multiply(a: u8, b: u8) -> u8 {
    let mut running = a;
    let mut bits = b;
    let mut product = 0u8;
    while bits != 0 {
        if bits & 1 != 0 {
            product ^= running;
        }
        running = double(running);
        bits >>= 1;
    }
    product
}

/// Product of two degree-3 polynomials over GF(2^8) modulo `x^4 + 1`.
///
/// Output bytes are produced from the top down; rotating `a` one byte per
/// step walks the circulant matrix row by row.
pub fn mix_word(a: u32, b: u32) -> u32 {
    let mut rotated = a;
    let mut product = 0u32;
    for _ in 0..4 {
        let coefficient = multiply(byte(rotated, 3), byte(b, 0))
            ^ multiply(byte(rotated, 2), byte(b, 1))
            ^ multiply(byte(rotated, 1), byte(b, 2))
            ^ multiply(byte(rotated, 0), byte(b, 3));
        product = (product << 8) | u32::from(coefficient);
        rotated = rotated.rotate_left(8);
    }
    product
}
