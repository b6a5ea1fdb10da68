//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::{Mul, MulAssign};

impl Limb {
    /// Computes `self * rhs + addend + carry`, returning the result along with
    /// the new carry. The whole expression fits in a double word, so no
    /// information is lost.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Compute "wide" multiplication as a `(lo, hi)` pair, with a product twice
    /// the size of the input.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(self, rhs: Limb) -> (Limb, Limb) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Computes `self * rhs`, returning `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, rhs: Limb) -> Option<Limb> {
        match self.0.checked_mul(rhs.0) {
            Some(n) => Some(Limb(n)),
            None => None,
        }
    }

    /// Perform saturating multiplication.
    #[inline(always)]
    #[must_use]
    pub const fn saturating_mul(&self, rhs: Self) -> Self {
        Limb(self.0.saturating_mul(rhs.0))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }
}

impl Mul for Limb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl Mul<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &Self) -> Self {
        self * *rhs
    }
}

impl MulAssign for Limb {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<&Limb> for Limb {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        *self = *self * *other;
    }
}

impl num_traits::CheckedMul for Limb {
    #[inline]
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Limb::checked_mul(*self, *rhs)
    }
}

impl num_traits::WrappingMul for Limb {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        Limb::wrapping_mul(self, *v)
    }
}
