//! [`U512`] addition operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{Add, AddAssign};

impl U512 {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(&self, rhs: &Self, mut carry: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let (w, c) = self.limbs[i].carrying_add(rhs.limbs[i], carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }

        (Self { limbs }, carry)
    }

    /// Computes `self + rhs`, returning `None` on overflow.
    pub const fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let (res, carry) = self.carrying_add(rhs, Limb::ZERO);
        if carry.is_zero() { Some(res) } else { None }
    }

    /// Perform saturating addition, returning `MAX` on overflow.
    #[must_use]
    pub const fn saturating_add(&self, rhs: &Self) -> Self {
        let (res, overflow) = self.carrying_add(rhs, Limb::ZERO);
        if overflow.is_zero() { res } else { Self::MAX }
    }

    /// Perform wrapping addition, discarding overflow.
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.carrying_add(rhs, Limb::ZERO).0
    }
}

impl Add for U512 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl Add<&U512> for U512 {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        self.checked_add(rhs)
            .expect("attempted to add with overflow")
    }
}

impl AddAssign for U512 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<&U512> for U512 {
    fn add_assign(&mut self, other: &Self) {
        *self = *self + other;
    }
}

impl num_traits::CheckedAdd for U512 {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        U512::checked_add(self, rhs)
    }
}

impl num_traits::WrappingAdd for U512 {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        U512::wrapping_add(self, v)
    }
}
