//! [`U512`] comparison operations.

use super::{LIMBS, U512};
use core::cmp::Ordering;

impl U512 {
    /// Determine whether `self` is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.limbs[i].0 != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Determine whether `self` is non-zero.
    #[inline]
    #[must_use]
    pub const fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Determine whether `self` is odd.
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.limbs[0].0 & 1 == 1
    }

    /// Returns the [`Ordering`] between `self` and `rhs`, comparing from the
    /// most significant limb down.
    #[must_use]
    pub const fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.limbs[i].0 < rhs.limbs[i].0 {
                return Ordering::Less;
            }
            if self.limbs[i].0 > rhs.limbs[i].0 {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Returns `true` if `self` equals `rhs`.
    #[inline]
    pub(crate) const fn eq_vartime(&self, rhs: &Self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.limbs[i].0 != rhs.limbs[i].0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Ord for U512 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for U512 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
