//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};
use core::ops::{Sub, SubAssign};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// The borrow is a whole-limb mask ([`Limb::MAX`] when set) so it can chain
    /// directly into the next call.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Computes `self - rhs`, returning `None` on underflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Limb) -> Option<Limb> {
        match self.0.checked_sub(rhs.0) {
            Some(n) => Some(Limb(n)),
            None => None,
        }
    }

    /// Perform saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(&self, rhs: Self) -> Self {
        Limb(self.0.saturating_sub(rhs.0))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<&Limb> for Limb {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        *self = *self - *other;
    }
}

impl num_traits::CheckedSub for Limb {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Limb::checked_sub(*self, *rhs)
    }
}

impl num_traits::WrappingSub for Limb {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        Limb::wrapping_sub(self, *v)
    }
}
