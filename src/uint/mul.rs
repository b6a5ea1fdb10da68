//! [`U512`] multiplication operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{Mul, MulAssign};

impl U512 {
    /// Multiply `self` by a single limb, returning the low 512 bits of the
    /// product along with the overflow limb.
    ///
    /// The result is exact: the full 576-bit product is `(overflow : lo)`,
    /// and the overflow is zero whenever the product fits in 512 bits.
    #[must_use]
    pub const fn widening_mul_limb(&self, rhs: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut carry = Limb::ZERO;
        let mut i = 0;

        while i < LIMBS {
            (limbs[i], carry) = self.limbs[i].carrying_mul_add(rhs, Limb::ZERO, carry);
            i += 1;
        }

        (Self { limbs }, carry)
    }

    /// Compute "wide" schoolbook multiplication as a 2-tuple containing the
    /// `(lo, hi)` halves of the exact 1024-bit product.
    ///
    /// Zero and one operands return without touching the multiplication grid,
    /// and other operands only pay for their significant limbs.
    #[must_use]
    pub const fn widening_mul(&self, rhs: &Self) -> (Self, Self) {
        if self.is_zero() || rhs.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }
        if self.eq_vartime(&Self::ONE) {
            return (*rhs, Self::ZERO);
        }
        if rhs.eq_vartime(&Self::ONE) {
            return (*self, Self::ZERO);
        }

        let lhs_limbs = self.significant_limbs();
        let rhs_limbs = rhs.significant_limbs();

        let mut lo = Self::ZERO;
        let mut hi = Self::ZERO;

        let mut i = 0;
        while i < lhs_limbs {
            let mut carry = Limb::ZERO;
            let xi = self.limbs[i];
            let mut j = 0;

            while j < rhs_limbs {
                let k = i + j;

                if k >= LIMBS {
                    (hi.limbs[k - LIMBS], carry) =
                        xi.carrying_mul_add(rhs.limbs[j], hi.limbs[k - LIMBS], carry);
                } else {
                    (lo.limbs[k], carry) = xi.carrying_mul_add(rhs.limbs[j], lo.limbs[k], carry);
                }

                j += 1;
            }

            // the carry out of each row lands one position past it, which no
            // earlier row has written
            if i + j >= LIMBS {
                hi.limbs[i + j - LIMBS] = carry;
            } else {
                lo.limbs[i + j] = carry;
            }
            i += 1;
        }

        (lo, hi)
    }

    /// Computes `self * rhs`, returning `None` if the product overflows the
    /// 512-bit width.
    pub const fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let (lo, hi) = self.widening_mul(rhs);
        if hi.is_zero() { Some(lo) } else { None }
    }

    /// Perform saturating multiplication, returning `MAX` on overflow.
    #[must_use]
    pub const fn saturating_mul(&self, rhs: &Self) -> Self {
        let (lo, hi) = self.widening_mul(rhs);
        if hi.is_zero() { lo } else { Self::MAX }
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.widening_mul(rhs).0
    }
}

impl Mul for U512 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<&U512> for U512 {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl MulAssign for U512 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<&U512> for U512 {
    fn mul_assign(&mut self, other: &Self) {
        *self = *self * other;
    }
}

impl num_traits::CheckedMul for U512 {
    #[inline]
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        U512::checked_mul(self, rhs)
    }
}

impl num_traits::WrappingMul for U512 {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        U512::wrapping_mul(self, v)
    }
}
