use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where the quiz gets its randomness from.
///
/// `Seeded` gives a reproducible round order for tests and `--seed` runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RngSource {
    #[default]
    Entropy,
    Seeded(u64),
}

impl RngSource {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(seed)
    }

    /// Build a fresh generator for this source.
    #[must_use]
    pub fn build(&self) -> StdRng {
        match self {
            RngSource::Entropy => StdRng::from_os_rng(),
            RngSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}
