//! Random limb generation.

use crate::Limb;
use rand_core::RngCore;

impl Limb {
    /// Generate a uniformly random [`Limb`] from the given RNG.
    #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
    pub fn random(rng: &mut impl RngCore) -> Self {
        Limb(rng.next_u64())
    }
}
