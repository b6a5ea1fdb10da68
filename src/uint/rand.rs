//! Random [`U512`] generation.

use super::{LIMBS, U512};
use crate::Limb;
use rand_core::RngCore;

impl U512 {
    /// Generate a uniformly random [`U512`] from the given RNG.
    #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
    pub fn random(rng: &mut impl RngCore) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for limb in &mut limbs {
            *limb = Limb::random(rng);
        }

        Self { limbs }
    }
}
