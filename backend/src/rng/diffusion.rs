//! Variable-shift xorshift-multiply diffusion
//!
//! `diffuse` multiplies by an odd constant, xors the value with its own top
//! half shifted right by its own top nibble, and multiplies again. Both
//! multiplications and the self-referential xorshift are invertible on
//! 64-bit words, so the whole transform is a bijection.
//!
//! # Inverse
//!
//! The xorshift always moves bits down by at least 32 positions, so the top
//! 32 bits (and with them the shift amounts) pass through unchanged. The
//! same xorshift therefore undoes itself, and `undiffuse` only has to swap
//! the multiplier for its modular inverse.

/// Odd multiplier applied before and after the xorshift
pub const DIFFUSE_MULTIPLIER: u64 = 0x6eed_0e9d_a4d9_4a4f;

/// Modular multiplicative inverse of [`DIFFUSE_MULTIPLIER`] modulo 2^64
pub const UNDIFFUSE_MULTIPLIER: u64 = 0x2f72_b421_5a3d_8caf;

/// Diffuse a 64-bit word
///
/// Pure, total and bijective. `diffuse(0) == 0`.
///
/// # Example
/// ```
/// use weylmix_core_rs::rng::diffuse;
///
/// assert_eq!(diffuse(0), 0);
/// assert_eq!(diffuse(1), 0xd2e7_2422_4c47_581b);
/// ```
#[must_use]
#[inline]
pub const fn diffuse(x: u64) -> u64 {
    let x = x.wrapping_mul(DIFFUSE_MULTIPLIER);
    let x = xorshift_self(x);
    x.wrapping_mul(DIFFUSE_MULTIPLIER)
}

/// Invert [`diffuse`]
///
/// # Example
/// ```
/// use weylmix_core_rs::rng::{diffuse, undiffuse};
///
/// let x = 0x0123_4567_89ab_cdef;
/// assert_eq!(undiffuse(diffuse(x)), x);
/// ```
#[must_use]
#[inline]
pub const fn undiffuse(x: u64) -> u64 {
    let x = x.wrapping_mul(UNDIFFUSE_MULTIPLIER);
    let x = xorshift_self(x);
    x.wrapping_mul(UNDIFFUSE_MULTIPLIER)
}

/// Xor with the top half shifted right by the top nibble (0..16)
#[inline]
const fn xorshift_self(x: u64) -> u64 {
    let a = x >> 32;
    let b = x >> 60;
    x ^ (a >> b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_are_inverse() {
        assert_eq!(DIFFUSE_MULTIPLIER.wrapping_mul(UNDIFFUSE_MULTIPLIER), 1);
    }

    #[test]
    fn test_multiplier_is_odd() {
        assert_eq!(DIFFUSE_MULTIPLIER & 1, 1);
    }

    #[test]
    fn test_diffuse_known_values() {
        assert_eq!(diffuse(0), 0);
        assert_eq!(diffuse(1), 0xd2e7_2422_4c47_581b);
        assert_eq!(diffuse(2), 0x15d0_86c5_8e2a_4a12);
        assert_eq!(diffuse(u64::MAX), 0x9b94_506f_5ef7_dc07);
    }

    #[test]
    fn test_xorshift_is_involution() {
        for x in [0, 1, u64::MAX, 0xdead_beef_0000_0000, 0x0000_0000_dead_beef] {
            assert_eq!(xorshift_self(xorshift_self(x)), x);
        }
    }

    #[test]
    fn test_undiffuse_edges() {
        for x in [0, 1, u64::MAX, 1 << 63] {
            assert_eq!(undiffuse(diffuse(x)), x);
            assert_eq!(diffuse(undiffuse(x)), x);
        }
    }
}
