//! [`U512`] bitwise or operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{BitOr, BitOrAssign};

impl U512 {
    /// Computes bitwise `self | rhs`.
    #[inline]
    #[must_use]
    pub const fn bitor(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 | rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl BitOr for U512 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::bitor(&self, &rhs)
    }
}

impl BitOr for &U512 {
    type Output = U512;

    fn bitor(self, rhs: Self) -> U512 {
        U512::bitor(self, rhs)
    }
}

impl BitOrAssign for U512 {
    fn bitor_assign(&mut self, other: Self) {
        *self = Self::bitor(self, &other);
    }
}

impl BitOrAssign<&U512> for U512 {
    fn bitor_assign(&mut self, other: &Self) {
        *self = Self::bitor(self, other);
    }
}

#[cfg(test)]
mod tests {
    use crate::U512;

    #[test]
    fn bitor_ok() {
        assert_eq!(U512::ZERO | U512::ONE, U512::ONE);
        assert_eq!(U512::ONE | U512::ONE, U512::ONE);
        assert_eq!(U512::ZERO | U512::MAX, U512::MAX);
    }
}
