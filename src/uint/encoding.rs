//! Const-friendly decoding/encoding operations for [`U512`].

use super::{LIMBS, U512};
use crate::{Limb, Word};

#[cfg(feature = "serde")]
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl U512 {
    /// Create a new [`U512`] from the provided big endian bytes.
    ///
    /// The first eight bytes become the most significant limb, so the slice
    /// reads as one 64-digit big-endian number.
    ///
    /// # Panics
    /// - if the slice is not 64 bytes long.
    #[must_use]
    pub const fn from_be_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() == Self::BYTES, "bytes are not the expected size");

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[LIMBS - 1 - i] = Limb(word_from_be_bytes(bytes, i * Limb::BYTES));
            i += 1;
        }

        Self { limbs }
    }

    /// Create a new [`U512`] from the provided big endian hex string.
    ///
    /// Each run of 16 hex characters decodes into one limb, most significant
    /// limb first.
    ///
    /// # Panics
    /// - if the hex is malformed or not zero-padded accordingly for the size.
    #[must_use]
    pub const fn from_be_hex(hex: &str) -> Self {
        const LIMB_HEX: usize = Limb::BYTES * 2;

        let hex = hex.as_bytes();
        assert!(
            hex.len() == Self::BYTES * 2,
            "hex string is not the expected size"
        );

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut err = 0;
        let mut i = 0;

        while i < LIMBS {
            let mut word: Word = 0;
            let mut k = 0;
            while k < LIMB_HEX {
                let (nibble, bad) = decode_nibble(hex[i * LIMB_HEX + k]);
                word = (word << 4) | nibble as Word;
                err |= bad;
                k += 1;
            }
            limbs[LIMBS - 1 - i] = Limb(word);
            i += 1;
        }

        assert!(err == 0, "invalid hex byte");

        Self { limbs }
    }

    /// Create a new [`U512`] from the provided little endian bytes.
    ///
    /// # Panics
    /// - if the slice is not 64 bytes long.
    #[must_use]
    pub const fn from_le_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() == Self::BYTES, "bytes are not the expected size");

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(word_from_le_bytes(bytes, i * Limb::BYTES));
            i += 1;
        }

        Self { limbs }
    }

    /// Serialize this [`U512`] as big-endian bytes.
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        let mut i = 0;

        while i < LIMBS {
            let buf = self.limbs[LIMBS - i - 1].0.to_be_bytes();
            let mut j = 0;
            while j < Limb::BYTES {
                out[i * Limb::BYTES + j] = buf[j];
                j += 1;
            }
            i += 1;
        }

        out
    }

    /// Serialize this [`U512`] as little-endian bytes.
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        let mut i = 0;

        while i < LIMBS {
            let buf = self.limbs[i].0.to_le_bytes();
            let mut j = 0;
            while j < Limb::BYTES {
                out[i * Limb::BYTES + j] = buf[j];
                j += 1;
            }
            i += 1;
        }

        out
    }
}

/// Assemble one big-endian [`Word`] from `bytes` starting at `offset`.
const fn word_from_be_bytes(bytes: &[u8], offset: usize) -> Word {
    let mut word: Word = 0;
    let mut k = 0;

    while k < Limb::BYTES {
        word = (word << 8) | bytes[offset + k] as Word;
        k += 1;
    }

    word
}

/// Assemble one little-endian [`Word`] from `bytes` starting at `offset`.
const fn word_from_le_bytes(bytes: &[u8], offset: usize) -> Word {
    let mut word: Word = 0;
    let mut k = Limb::BYTES;

    while k > 0 {
        k -= 1;
        word = (word << 8) | bytes[offset + k] as Word;
    }

    word
}

/// Decode a single hexadecimal character. The second element of the tuple is
/// non-zero if the character is not in the valid range (0-9, a-f, A-F).
const fn decode_nibble(c: u8) -> (u8, u8) {
    match c {
        b'0'..=b'9' => (c - b'0', 0),
        b'a'..=b'f' => (c - b'a' + 10, 0),
        b'A'..=b'F' => (c - b'A' + 10, 0),
        _ => (0, 1),
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for U512 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_le_bytes())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for U512 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LeBytesVisitor;

        impl<'de> de::Visitor<'de> for LeBytesVisitor {
            type Value = U512;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{} little-endian bytes", U512::BYTES)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<U512, E> {
                if v.len() == U512::BYTES {
                    Ok(U512::from_le_slice(v))
                } else {
                    Err(E::invalid_length(v.len(), &self))
                }
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<U512, A::Error> {
                let mut bytes = [0u8; U512::BYTES];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(U512::from_le_slice(&bytes))
            }
        }

        deserializer.deserialize_bytes(LeBytesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::U512;
    use hex_literal::hex;

    const EXAMPLE_BE: [u8; 64] = hex!(
        "fedcba98765432100123456789abcdef"
        "00112233445566778899aabbccddeeff"
        "0f1e2d3c4b5a69788796a5b4c3d2e1f0"
        "deadbeefcafebabe0000000000000001"
    );

    #[test]
    fn be_slice_roundtrip() {
        let n = U512::from_be_slice(&EXAMPLE_BE);
        assert_eq!(n.to_be_bytes(), EXAMPLE_BE);
        assert_eq!(n.as_limbs()[0].0, 0x0000_0000_0000_0001);
        assert_eq!(n.as_limbs()[7].0, 0xfedc_ba98_7654_3210);
    }

    #[test]
    fn le_slice_is_be_reversed() {
        let mut le = EXAMPLE_BE;
        le.reverse();
        assert_eq!(U512::from_le_slice(&le), U512::from_be_slice(&EXAMPLE_BE));
        assert_eq!(U512::from_be_slice(&EXAMPLE_BE).to_le_bytes(), le);
    }

    #[test]
    fn from_be_hex_matches_slice() {
        let n = U512::from_be_hex(
            "fedcba98765432100123456789abcdef\
             00112233445566778899aabbccddeeff\
             0f1e2d3c4b5a69788796a5b4c3d2e1f0\
             deadbeefcafebabe0000000000000001",
        );
        assert_eq!(n, U512::from_be_slice(&EXAMPLE_BE));
    }

    #[test]
    #[should_panic]
    fn from_be_hex_rejects_invalid() {
        let _ = U512::from_be_hex(
            "000000000000000000000000000000g0\
             00000000000000000000000000000000\
             00000000000000000000000000000000\
             00000000000000000000000000000000",
        );
    }
}
