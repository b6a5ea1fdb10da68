//! [`U512`] bitwise negation operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::Not;

impl U512 {
    /// Computes bitwise `!self`.
    #[inline]
    #[must_use]
    pub const fn not(&self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(!self.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl Not for U512 {
    type Output = Self;

    fn not(self) -> Self {
        Self::not(&self)
    }
}

impl Not for &U512 {
    type Output = U512;

    fn not(self) -> U512 {
        U512::not(self)
    }
}
