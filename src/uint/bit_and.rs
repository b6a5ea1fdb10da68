//! [`U512`] bitwise and operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{BitAnd, BitAndAssign};

impl U512 {
    /// Computes bitwise `self & rhs`.
    #[inline]
    #[must_use]
    pub const fn bitand(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 & rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl BitAnd for U512 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::bitand(&self, &rhs)
    }
}

impl BitAnd for &U512 {
    type Output = U512;

    fn bitand(self, rhs: Self) -> U512 {
        U512::bitand(self, rhs)
    }
}

impl BitAndAssign for U512 {
    fn bitand_assign(&mut self, other: Self) {
        *self = Self::bitand(self, &other);
    }
}

impl BitAndAssign<&U512> for U512 {
    fn bitand_assign(&mut self, other: &Self) {
        *self = Self::bitand(self, other);
    }
}
