//! [`U512`] division operations.
//!
//! Long division is Knuth's Algorithm D (TAOCP Vol. 2, 4.3.1) over base-2^64
//! digits. Single-limb divisors take a schoolbook walk instead, one 2-by-1
//! divide per limb.

use super::{LIMBS, U512};
use crate::{
    Limb, NonZero, Word,
    primitives::{div2by1, widening_mul},
};
use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl U512 {
    /// Computes `self / rhs`, returning the quotient and the limb-sized
    /// remainder.
    pub fn div_rem_limb(&self, rhs: NonZero<Limb>) -> (Self, Limb) {
        self.div_rem_limb_raw(rhs.0)
    }

    /// Computes `self / rhs` and `self % rhs`, returning `None` if `rhs` is
    /// zero.
    pub fn checked_div_rem_limb(&self, rhs: Limb) -> Option<(Self, Limb)> {
        NonZero::new(rhs).map(|rhs| self.div_rem_limb(rhs))
    }

    /// Computes `self / rhs`, returning the quotient and remainder.
    pub fn div_rem(&self, rhs: &NonZero<Self>) -> (Self, Self) {
        self.div_rem_raw(rhs.as_ref())
    }

    /// Computes `self / rhs` and `self % rhs`, returning `None` if `rhs` is
    /// zero.
    pub fn checked_div_rem(&self, rhs: &Self) -> Option<(Self, Self)> {
        NonZero::new(*rhs).map(|rhs| self.div_rem(&rhs))
    }

    /// Computes `self / rhs`, discarding the remainder.
    ///
    /// # Panics
    /// - if `rhs == 0`.
    #[must_use]
    #[track_caller]
    pub fn wrapping_div(&self, rhs: &Self) -> Self {
        self.checked_div_rem(rhs).expect("divide by zero").0
    }

    /// Computes `self % rhs`, discarding the quotient.
    ///
    /// # Panics
    /// - if `rhs == 0`.
    #[must_use]
    #[track_caller]
    pub fn wrapping_rem(&self, rhs: &Self) -> Self {
        self.checked_div_rem(rhs).expect("modulo by zero").1
    }

    /// Schoolbook long division by a single limb: walk the dividend from the
    /// most significant limb down, dividing a two-limb window by the divisor
    /// at each step and carrying the remainder into the next.
    ///
    /// Each partial remainder is smaller than the divisor, so every 2-by-1
    /// divide has an in-range quotient.
    pub(crate) const fn div_rem_limb_raw(&self, rhs: Limb) -> (Self, Limb) {
        debug_assert!(rhs.is_nonzero());

        let mut quotient = Self::ZERO;
        let mut rem: Word = 0;
        let mut i = LIMBS;

        while i > 0 {
            i -= 1;
            let (q, r) = div2by1(rem, self.limbs[i].0, rhs.0);
            quotient.limbs[i] = Limb(q);
            rem = r;
        }

        (quotient, Limb(rem))
    }

    /// Knuth Algorithm D: normalize, estimate each quotient digit from the
    /// top limbs, multiply-subtract, correct the rare overestimate, then
    /// de-normalize the remainder.
    const fn div_rem_raw(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(rhs.is_nonzero());

        let divisor_bits = rhs.bits();

        // One-limb divisors take the schoolbook path. This also covers a
        // divisor of one, where the per-limb divides degenerate to copies.
        if divisor_bits <= Limb::BITS {
            let (quotient, rem) = self.div_rem_limb_raw(rhs.limbs[0]);
            return (quotient, Self::from_limb(rem));
        }

        // A dividend smaller than the divisor divides to zero outright.
        if matches!(self.cmp_vartime(rhs), Ordering::Less) {
            return (Self::ZERO, *self);
        }

        let n = rhs.significant_limbs();
        let m = self.significant_limbs() - n;

        // D1: shift both operands left until the divisor's top limb has its
        // high bit set. The dividend needs one extra limb for the bits pushed
        // out of its top.
        let shift = rhs.limbs[n - 1].leading_zeros();
        let divisor = rhs.shl_limb(shift).0;
        let (dividend, dividend_hi) = self.shl_limb(shift);

        let mut u = [Limb::ZERO; LIMBS + 1];
        let mut i = 0;
        while i < LIMBS {
            u[i] = dividend.limbs[i];
            i += 1;
        }
        u[LIMBS] = dividend_hi;

        let v1 = divisor.limbs[n - 1].0;
        let v2 = divisor.limbs[n - 2].0;

        let mut quotient = Self::ZERO;
        let mut j = m + 1;

        while j > 0 {
            j -= 1;

            // D3: trial digit from the top two limbs of the current window
            // over v1, refined against v2 until it can no longer be a
            // two-or-more overestimate. When the leading limb equals v1 the
            // digit saturates at b - 1; the refinement does not apply there,
            // and the borrow from D4 corrects the remaining off-by-one.
            let u_hi = u[j + n].0;
            let mut qhat = if u_hi < v1 {
                let (mut qhat, mut rhat) = div2by1(u_hi, u[j + n - 1].0, v1);

                loop {
                    let (p_lo, p_hi) = widening_mul(qhat, v2);
                    if p_hi < rhat || (p_hi == rhat && p_lo <= u[j + n - 2].0) {
                        break;
                    }

                    qhat -= 1;
                    let (r, overflow) = rhat.overflowing_add(v1);
                    if overflow {
                        break;
                    }
                    rhat = r;
                }

                qhat
            } else {
                Word::MAX
            };

            // D4: multiply and subtract. The product occupies n + 1 limbs;
            // its top limb is the multiply overflow only when the divisor
            // fills the full width.
            let (p, p_hi) = divisor.widening_mul_limb(Limb(qhat));
            let p_top = if n < LIMBS { p.limbs[n] } else { p_hi };

            let mut borrow = Limb::ZERO;
            let mut i = 0;
            while i < n {
                (u[j + i], borrow) = u[j + i].borrowing_sub(p.limbs[i], borrow);
                i += 1;
            }
            (u[j + n], borrow) = u[j + n].borrowing_sub(p_top, borrow);

            // D6: the trial digit was one too large if the window borrowed
            // out. Add the divisor back and drop the final carry, which
            // cancels the borrow.
            if borrow.is_nonzero() {
                qhat -= 1;

                let mut carry = Limb::ZERO;
                let mut i = 0;
                while i < n {
                    (u[j + i], carry) = u[j + i].carrying_add(divisor.limbs[i], carry);
                    i += 1;
                }
                u[j + n] = u[j + n].wrapping_add(carry);
            }

            // D5: store the digit
            quotient.limbs[j] = Limb(qhat);
        }

        // D8: the normalized remainder occupies the low n limbs of the
        // working buffer; everything above has been consumed.
        debug_assert!(u[LIMBS].is_zero());
        let mut rem = Self::ZERO;
        let mut i = 0;
        while i < LIMBS {
            rem.limbs[i] = u[i];
            i += 1;
        }

        (quotient, rem.shr_limb(shift).0)
    }
}

impl Div for U512 {
    type Output = Self;

    /// # Panics
    /// - if `rhs == 0`.
    fn div(self, rhs: Self) -> Self {
        self.wrapping_div(&rhs)
    }
}

impl Rem for U512 {
    type Output = Self;

    /// # Panics
    /// - if `rhs == 0`.
    fn rem(self, rhs: Self) -> Self {
        self.wrapping_rem(&rhs)
    }
}

impl Div<&NonZero<U512>> for &U512 {
    type Output = U512;

    fn div(self, rhs: &NonZero<U512>) -> Self::Output {
        self.div_rem(rhs).0
    }
}

impl Div<&NonZero<U512>> for U512 {
    type Output = U512;

    fn div(self, rhs: &NonZero<U512>) -> Self::Output {
        &self / rhs
    }
}

impl Div<NonZero<U512>> for &U512 {
    type Output = U512;

    fn div(self, rhs: NonZero<U512>) -> Self::Output {
        self / &rhs
    }
}

impl Div<NonZero<U512>> for U512 {
    type Output = U512;

    fn div(self, rhs: NonZero<U512>) -> Self::Output {
        &self / &rhs
    }
}

impl DivAssign<&NonZero<U512>> for U512 {
    fn div_assign(&mut self, rhs: &NonZero<U512>) {
        *self = *self / rhs;
    }
}

impl DivAssign<NonZero<U512>> for U512 {
    fn div_assign(&mut self, rhs: NonZero<U512>) {
        *self /= &rhs;
    }
}

impl Rem<&NonZero<U512>> for &U512 {
    type Output = U512;

    fn rem(self, rhs: &NonZero<U512>) -> Self::Output {
        self.div_rem(rhs).1
    }
}

impl Rem<&NonZero<U512>> for U512 {
    type Output = U512;

    fn rem(self, rhs: &NonZero<U512>) -> Self::Output {
        &self % rhs
    }
}

impl Rem<NonZero<U512>> for &U512 {
    type Output = U512;

    fn rem(self, rhs: NonZero<U512>) -> Self::Output {
        self % &rhs
    }
}

impl Rem<NonZero<U512>> for U512 {
    type Output = U512;

    fn rem(self, rhs: NonZero<U512>) -> Self::Output {
        &self % &rhs
    }
}

impl RemAssign<&NonZero<U512>> for U512 {
    fn rem_assign(&mut self, rhs: &NonZero<U512>) {
        *self = *self % rhs;
    }
}

impl RemAssign<NonZero<U512>> for U512 {
    fn rem_assign(&mut self, rhs: NonZero<U512>) {
        *self %= &rhs;
    }
}

impl Div<NonZero<Limb>> for &U512 {
    type Output = U512;

    fn div(self, rhs: NonZero<Limb>) -> Self::Output {
        self.div_rem_limb(rhs).0
    }
}

impl Div<NonZero<Limb>> for U512 {
    type Output = U512;

    fn div(self, rhs: NonZero<Limb>) -> Self::Output {
        &self / rhs
    }
}

impl Rem<NonZero<Limb>> for &U512 {
    type Output = Limb;

    fn rem(self, rhs: NonZero<Limb>) -> Self::Output {
        self.div_rem_limb(rhs).1
    }
}

impl Rem<NonZero<Limb>> for U512 {
    type Output = Limb;

    fn rem(self, rhs: NonZero<Limb>) -> Self::Output {
        &self % rhs
    }
}

impl num_traits::CheckedDiv for U512 {
    #[inline]
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.checked_div_rem(v).map(|(q, _)| q)
    }
}

impl num_traits::CheckedRem for U512 {
    #[inline]
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.checked_div_rem(v).map(|(_, r)| r)
    }
}
