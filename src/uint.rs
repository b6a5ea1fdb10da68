//! Big unsigned 512-bit integer.

mod add;
mod bit_and;
mod bit_not;
mod bit_or;
mod bit_xor;
mod bits;
mod cmp;
mod div;
mod encoding;
mod from;
mod mul;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{Limb, Word};
use core::fmt;

/// Number of limbs in a [`U512`].
pub(crate) const LIMBS: usize = 8;

/// Big unsigned 512-bit integer.
///
/// Represented as eight 64-bit [`Limb`]s, stored least significant first.
/// Values are plain `Copy` data: every operation reads its inputs and
/// returns fresh outputs, with no interior mutability and no allocation.
///
/// # Encoding support
/// Decoding and encoding is available for big and little endian byte slices
/// and hex strings via `const fn` constructors such as
/// [`U512::from_be_hex`], making it possible to define constants at
/// compile time.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub struct U512 {
    /// Inner limb array. Stored from least significant to most significant.
    limbs: [Limb; LIMBS],
}

impl U512 {
    /// The value `0`.
    pub const ZERO: Self = Self::from_u8(0);

    /// The value `1`.
    pub const ONE: Self = Self::from_u8(1);

    /// Maximum value this [`U512`] can express.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = (LIMBS as u32) * Limb::BITS;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = LIMBS * Limb::BYTES;

    /// The number of limbs used to represent the integer.
    pub const LIMBS: usize = LIMBS;

    /// Const-friendly [`U512`] constructor from limbs in least significant
    /// first order.
    #[must_use]
    pub const fn new(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create a [`U512`] from an array of [`Word`]s, least significant first.
    #[inline]
    #[must_use]
    pub const fn from_words(arr: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(arr[i]);
            i += 1;
        }

        Self { limbs }
    }

    /// Create an array of [`Word`]s, least significant first, from a
    /// [`U512`].
    #[inline]
    #[must_use]
    pub const fn to_words(self) -> [Word; LIMBS] {
        let mut arr = [0; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            arr[i] = self.limbs[i].0;
            i += 1;
        }

        arr
    }

    /// Borrow the limbs of this [`U512`].
    #[must_use]
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Borrow the limbs of this [`U512`] mutably.
    pub fn as_limbs_mut(&mut self) -> &mut [Limb; LIMBS] {
        &mut self.limbs
    }

    /// Convert this [`U512`] into its inner limbs.
    #[must_use]
    pub const fn to_limbs(self) -> [Limb; LIMBS] {
        self.limbs
    }
}

impl Default for U512 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl num_traits::Zero for U512 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        U512::is_zero(self)
    }
}

impl num_traits::One for U512 {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Bounded for U512 {
    #[inline]
    fn min_value() -> Self {
        Self::ZERO
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl fmt::Debug for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U512(0x{self:X})")
    }
}

impl fmt::Display for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::Binary for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0b")?;
        }

        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:b}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:X}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl zeroize::DefaultIsZeroes for U512 {}

#[cfg(test)]
mod tests {
    use crate::{Limb, U512};

    #[test]
    fn words_roundtrip() {
        let words = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(U512::from_words(words).to_words(), words);
    }

    #[test]
    fn max_is_all_ones() {
        assert_eq!(U512::MAX.as_limbs(), &[Limb::MAX; 8]);
    }
}
