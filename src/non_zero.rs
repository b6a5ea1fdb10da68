//! Wrapper type for non-zero integers.

use crate::{Limb, U512};
use core::{
    fmt,
    num::{NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128},
    ops::Deref,
};

/// Wrapper type for non-zero integers.
///
/// Division APIs take divisors of this type, which makes divide-by-zero
/// unrepresentable rather than a runtime error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T> NonZero<T> {
    /// Create a new non-zero integer, returning `None` if the value is zero.
    pub fn new(n: T) -> Option<Self>
    where
        T: num_traits::Zero,
    {
        if n.is_zero() { None } else { Some(Self(n)) }
    }

    /// Provides access to the contents of `NonZero` in a `const` context.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl NonZero<Limb> {
    /// Creates a new non-zero limb in a const context.
    ///
    /// # Panics
    /// - if the value is zero.
    pub const fn new_unwrap(n: Limb) -> Self {
        if n.is_nonzero() {
            Self(n)
        } else {
            panic!("Invalid value: zero")
        }
    }

    /// Create a [`NonZero<Limb>`] from a [`NonZeroU8`] (const-friendly)
    pub const fn from_u8(n: NonZeroU8) -> Self {
        Self(Limb::from_u8(n.get()))
    }

    /// Create a [`NonZero<Limb>`] from a [`NonZeroU16`] (const-friendly)
    pub const fn from_u16(n: NonZeroU16) -> Self {
        Self(Limb::from_u16(n.get()))
    }

    /// Create a [`NonZero<Limb>`] from a [`NonZeroU32`] (const-friendly)
    pub const fn from_u32(n: NonZeroU32) -> Self {
        Self(Limb::from_u32(n.get()))
    }

    /// Create a [`NonZero<Limb>`] from a [`NonZeroU64`] (const-friendly)
    pub const fn from_u64(n: NonZeroU64) -> Self {
        Self(Limb::from_u64(n.get()))
    }
}

impl NonZero<U512> {
    /// Creates a new non-zero integer in a const context.
    ///
    /// # Panics
    /// - if the value is zero.
    pub const fn new_unwrap(n: U512) -> Self {
        if n.is_nonzero() {
            Self(n)
        } else {
            panic!("Invalid value: zero")
        }
    }

    /// Create a [`NonZero<U512>`] from a [`NonZeroU8`] (const-friendly)
    pub const fn from_u8(n: NonZeroU8) -> Self {
        Self(U512::from_u8(n.get()))
    }

    /// Create a [`NonZero<U512>`] from a [`NonZeroU16`] (const-friendly)
    pub const fn from_u16(n: NonZeroU16) -> Self {
        Self(U512::from_u16(n.get()))
    }

    /// Create a [`NonZero<U512>`] from a [`NonZeroU32`] (const-friendly)
    pub const fn from_u32(n: NonZeroU32) -> Self {
        Self(U512::from_u32(n.get()))
    }

    /// Create a [`NonZero<U512>`] from a [`NonZeroU64`] (const-friendly)
    pub const fn from_u64(n: NonZeroU64) -> Self {
        Self(U512::from_u64(n.get()))
    }

    /// Create a [`NonZero<U512>`] from a [`NonZeroU128`] (const-friendly)
    pub const fn from_u128(n: NonZeroU128) -> Self {
        Self(U512::from_u128(n.get()))
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for NonZero<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: fmt::Binary> fmt::Binary for NonZero<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl<T: fmt::LowerHex> fmt::LowerHex for NonZero<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<T: fmt::UpperHex> fmt::UpperHex for NonZero<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::NonZero;
    use crate::{Limb, U512};

    #[test]
    fn new_rejects_zero() {
        assert_eq!(NonZero::new(Limb::ZERO), None);
        assert_eq!(NonZero::new(U512::ZERO), None);
        assert!(NonZero::new(U512::ONE).is_some());
    }

    #[test]
    fn new_unwrap_const() {
        const TWO: NonZero<U512> = NonZero::<U512>::new_unwrap(U512::from_u8(2));
        assert_eq!(*TWO.as_ref(), U512::from_u8(2));
    }
}
