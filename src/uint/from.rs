//! `From`-like conversions for [`U512`].

use super::{LIMBS, U512};
use crate::{Limb, Word};

impl U512 {
    /// Create a [`U512`] from a `u8` (const-friendly)
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`U512`] from a `u16` (const-friendly)
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`U512`] from a `u32` (const-friendly)
    #[must_use]
    pub const fn from_u32(n: u32) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`U512`] from a `u64` (const-friendly)
    #[must_use]
    pub const fn from_u64(n: u64) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n;
        Self { limbs }
    }

    /// Create a [`U512`] from a `u128` (const-friendly)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u128(n: u128) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        limbs[1].0 = (n >> Word::BITS) as Word;
        Self { limbs }
    }

    /// Create a [`U512`] from a [`Word`] (const-friendly)
    #[must_use]
    pub const fn from_word(n: Word) -> Self {
        Self::from_u64(n)
    }

    /// Create a [`U512`] from a [`Limb`] (const-friendly)
    #[must_use]
    pub const fn from_limb(n: Limb) -> Self {
        Self::from_u64(n.0)
    }
}

impl From<u8> for U512 {
    #[inline]
    fn from(n: u8) -> Self {
        Self::from_u8(n)
    }
}

impl From<u16> for U512 {
    #[inline]
    fn from(n: u16) -> Self {
        Self::from_u16(n)
    }
}

impl From<u32> for U512 {
    #[inline]
    fn from(n: u32) -> Self {
        Self::from_u32(n)
    }
}

impl From<u64> for U512 {
    #[inline]
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<u128> for U512 {
    #[inline]
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<Limb> for U512 {
    #[inline]
    fn from(n: Limb) -> Self {
        Self::from_limb(n)
    }
}
