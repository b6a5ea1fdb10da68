//! [`U512`] bitwise xor operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{BitXor, BitXorAssign};

impl U512 {
    /// Computes bitwise `self ^ rhs`.
    #[inline]
    #[must_use]
    pub const fn bitxor(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 ^ rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl BitXor for U512 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::bitxor(&self, &rhs)
    }
}

impl BitXor for &U512 {
    type Output = U512;

    fn bitxor(self, rhs: Self) -> U512 {
        U512::bitxor(self, rhs)
    }
}

impl BitXorAssign for U512 {
    fn bitxor_assign(&mut self, other: Self) {
        *self = Self::bitxor(self, &other);
    }
}

impl BitXorAssign<&U512> for U512 {
    fn bitxor_assign(&mut self, other: &Self) {
        *self = Self::bitxor(self, other);
    }
}

#[cfg(test)]
mod tests {
    use crate::U512;

    #[test]
    fn bitxor_ok() {
        assert_eq!(U512::ZERO ^ U512::ONE, U512::ONE);
        assert_eq!(U512::ONE ^ U512::ONE, U512::ZERO);
        assert_eq!(U512::MAX ^ U512::MAX, U512::ZERO);
    }
}
