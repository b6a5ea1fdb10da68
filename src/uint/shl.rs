//! [`U512`] bitwise left shift operations.

use super::{LIMBS, U512};
use crate::Limb;
use core::ops::{Shl, ShlAssign};

impl U512 {
    /// Computes `self << shift`.
    ///
    /// # Panics
    /// - if `shift >= Self::BITS`.
    #[must_use]
    #[track_caller]
    pub const fn shl(&self, shift: u32) -> Self {
        match self.overflowing_shl(shift) {
            Some(res) => res,
            None => panic!("`shift` exceeds the bit width"),
        }
    }

    /// Computes `self << shift`, returning `None` if `shift >= Self::BITS`.
    #[must_use]
    pub const fn overflowing_shl(&self, shift: u32) -> Option<Self> {
        if shift < Self::BITS {
            Some(self.unbounded_shl(shift))
        } else {
            None
        }
    }

    /// Computes `self << shift` in a panic-free manner, returning zero if the
    /// shift exceeds the precision.
    #[must_use]
    pub const fn unbounded_shl(&self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let shift_num = (shift / Limb::BITS) as usize;
        let rem = shift % Limb::BITS;

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = LIMBS;
        while i > shift_num {
            i -= 1;
            limbs[i] = self.limbs[i - shift_num];
        }

        let res = Self { limbs };
        if rem == 0 { res } else { res.shl_limb(rem).0 }
    }

    /// Computes `self << shift` where `0 <= shift < Limb::BITS`, returning
    /// the result along with the bits shifted out of the top, right-aligned
    /// in the carry limb.
    #[inline]
    pub(crate) const fn shl_limb(&self, shift: u32) -> (Self, Limb) {
        debug_assert!(shift < Limb::BITS);
        if shift == 0 {
            return (*self, Limb::ZERO);
        }

        let down = Limb::BITS - shift;
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut carry = Limb::ZERO;
        let mut i = 0;

        while i < LIMBS {
            let w = self.limbs[i].0;
            limbs[i] = Limb((w << shift) | carry.0);
            carry = Limb(w >> down);
            i += 1;
        }

        (Self { limbs }, carry)
    }
}

impl Shl<u32> for U512 {
    type Output = U512;

    fn shl(self, shift: u32) -> U512 {
        U512::shl(&self, shift)
    }
}

impl Shl<u32> for &U512 {
    type Output = U512;

    fn shl(self, shift: u32) -> U512 {
        U512::shl(self, shift)
    }
}

impl ShlAssign<u32> for U512 {
    fn shl_assign(&mut self, shift: u32) {
        *self = U512::shl(self, shift);
    }
}
