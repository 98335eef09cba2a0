//! Compact ("bits") encoding of proof-of-work targets.
//!
//! A compact value packs a 256-bit target as `(exponent << 24) | mantissa`,
//! where the exponent is the target's length in bytes and the mantissa its
//! three most significant bytes. Bit 23 is a sign bit; targets are never
//! negative, so a set sign bit decodes to zero here.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;
const MAX_EXPONENT: u32 = 0xff;

/// Bytes in the widest target a 256-bit hash can meet.
pub const MAX_TARGET_BYTES: usize = 32;

/// Decode a compact value into a full target.
pub fn compact_to_big(compact: u32) -> BigUint {
    if compact & SIGN_BIT != 0 {
        return BigUint::zero();
    }

    let mantissa = compact & MANTISSA_MASK;
    let exponent = compact >> 24;

    if exponent <= 3 {
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent - 3)) as usize
    }
}

/// Encode a target into its compact form.
///
/// Only the three most significant bytes survive, so the result decodes to
/// a value less than or equal to `n`. Targets too wide for the one-byte
/// exponent saturate to the largest compact value.
pub fn big_to_compact(n: &BigUint) -> u32 {
    if n.is_zero() {
        return 0;
    }

    let len = n.to_bytes_be().len();
    if len > MAX_EXPONENT as usize {
        return (MAX_EXPONENT << 24) | MANTISSA_MASK;
    }

    let mut exponent = len as u32;
    let mut mantissa = if exponent <= 3 {
        n.to_u32().unwrap_or(0) << (8 * (3 - exponent))
    } else {
        (n >> (8 * (exponent - 3)) as usize).to_u32().unwrap_or(0)
    };

    // Keep the sign bit clear by moving one byte into the exponent.
    if mantissa & SIGN_BIT != 0 {
        if exponent == MAX_EXPONENT {
            return (MAX_EXPONENT << 24) | MANTISSA_MASK;
        }
        mantissa >>= 8;
        exponent += 1;
    }

    (exponent << 24) | mantissa
}

/// `2^bits - 1`, the shape of most test-network limits.
pub fn max_target_with_bits(bits: usize) -> BigUint {
    (BigUint::one() << bits) - BigUint::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_limits() {
        let main = compact_to_big(0x1e0f_ffff);
        let expected = BigUint::parse_bytes(
            b"0fffff000000000000000000000000000000000000000000000000000000",
            16,
        )
        .unwrap();
        assert_eq!(main, expected);

        let regtest = compact_to_big(0x207f_ffff);
        assert_eq!(regtest, BigUint::from(0x7f_ffffu32) << 232usize);
    }

    #[test]
    fn test_encode_truncates_to_three_bytes() {
        assert_eq!(big_to_compact(&max_target_with_bits(255)), 0x207f_ffff);
        assert_eq!(big_to_compact(&max_target_with_bits(224)), 0x1d00_ffff);
        assert!(compact_to_big(0x207f_ffff) <= max_target_with_bits(255));
    }

    #[test]
    fn test_small_values() {
        assert_eq!(big_to_compact(&BigUint::zero()), 0);
        assert_eq!(big_to_compact(&BigUint::from(0x12u32)), 0x0112_0000);
        assert_eq!(compact_to_big(0x0112_0000), BigUint::from(0x12u32));
        // 0x80 would set the sign bit, so it moves up a byte.
        assert_eq!(big_to_compact(&BigUint::from(0x80u32)), 0x0200_8000);
    }

    #[test]
    fn test_oversized_target_saturates() {
        let huge = BigUint::one() << 4000usize;
        assert_eq!(big_to_compact(&huge), 0xff7f_ffff);

        // 255 bytes whose top byte would set the sign bit
        let edge = BigUint::from(0x80u32) << (8 * 254) as usize;
        assert_eq!(big_to_compact(&edge), 0xff7f_ffff);
    }

    #[test]
    fn test_sign_bit_decodes_to_zero() {
        assert!(compact_to_big(0x0480_0001).is_zero());
    }
}
