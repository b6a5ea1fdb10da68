//! Shared helpers for the `U512` test suite.

use num_bigint::BigUint;
use ui512::U512;

/// Convert a [`U512`] into the reference representation.
pub fn to_biguint(uint: &U512) -> BigUint {
    BigUint::from_bytes_le(&uint.to_le_bytes())
}

/// Convert the reference representation back into a [`U512`], truncating to
/// 512 bits.
pub fn to_uint(big_uint: &BigUint) -> U512 {
    let mut input = [0u8; U512::BYTES];
    let encoded = big_uint.to_bytes_le();
    let l = encoded.len().min(U512::BYTES);
    input[..l].copy_from_slice(&encoded[..l]);

    U512::from_le_slice(&input)
}
