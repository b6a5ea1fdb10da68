//! [`U512`] subtraction operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{Sub, SubAssign};

impl U512 {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// The borrow is a whole-limb mask ([`Limb::MAX`] when set).
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(&self, rhs: &Self, mut borrow: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let (w, b) = self.limbs[i].borrowing_sub(rhs.limbs[i], borrow);
            limbs[i] = w;
            borrow = b;
            i += 1;
        }

        (Self { limbs }, borrow)
    }

    /// Computes `self - rhs`, returning `None` on underflow.
    pub const fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let (res, borrow) = self.borrowing_sub(rhs, Limb::ZERO);
        if borrow.is_zero() { Some(res) } else { None }
    }

    /// Perform saturating subtraction, returning `ZERO` on underflow.
    #[must_use]
    pub const fn saturating_sub(&self, rhs: &Self) -> Self {
        let (res, underflow) = self.borrowing_sub(rhs, Limb::ZERO);
        if underflow.is_zero() { res } else { Self::ZERO }
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs, Limb::ZERO).0
    }
}

impl Sub for U512 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl Sub<&U512> for U512 {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl SubAssign for U512 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<&U512> for U512 {
    fn sub_assign(&mut self, other: &Self) {
        *self = *self - other;
    }
}

impl num_traits::CheckedSub for U512 {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        U512::checked_sub(self, rhs)
    }
}

impl num_traits::WrappingSub for U512 {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        U512::wrapping_sub(self, v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, U512};

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = U512::ONE.borrowing_sub(&U512::ONE, Limb::ZERO);
        assert_eq!(res, U512::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = U512::ZERO.borrowing_sub(&U512::ONE, Limb::ZERO);
        assert_eq!(res, U512::MAX);
        assert_eq!(borrow, Limb::MAX);
    }

    #[test]
    fn borrow_propagates_through_every_limb() {
        let top = U512::from_words([0, 0, 0, 0, 1, 0, 0, 0]);
        let (res, borrow) = top.borrowing_sub(&U512::ONE, Limb::ZERO);
        assert_eq!(
            res,
            U512::from_words([u64::MAX, u64::MAX, u64::MAX, u64::MAX, 0, 0, 0, 0])
        );
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn checked_sub_ok() {
        assert_eq!(U512::ONE.checked_sub(&U512::ONE), Some(U512::ZERO));
    }

    #[test]
    fn checked_sub_underflow() {
        assert_eq!(U512::ZERO.checked_sub(&U512::ONE), None);
    }

    #[test]
    fn saturating_sub_underflow() {
        assert_eq!(U512::ZERO.saturating_sub(&U512::ONE), U512::ZERO);
    }

    #[test]
    fn wrapping_sub_underflow() {
        assert_eq!(U512::ZERO.wrapping_sub(&U512::ONE), U512::MAX);
    }
}
