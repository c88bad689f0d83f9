//! Fluent builder for constructing a [`Sim`].

use epi_core::{SimParams, SimRng};

use crate::{Sim, SimError, SimResult};

/// Largest population the `u32` agent IDs can address.
const MAX_POPULATION: usize = u32::MAX as usize;

/// Default grid side when neither `.side()` nor `.size()` is called.
const DEFAULT_SIDE: usize = 20;

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method       | Meaning                              | Default            |
/// |--------------|--------------------------------------|--------------------|
/// | `.side(n)`   | population = n² (the UI's scale)     | side 20 → 400      |
/// | `.size(n)`   | exact population size                | —                  |
/// | `.seed(s)`   | RNG seed for a reproducible run      | OS entropy         |
///
/// `build()` validates the parameters (rejecting non-finite or out-of-range
/// percentages) and creates the initial population with its patient zero.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimParams::default())
///     .side(40)
///     .seed(42)
///     .build()?;
/// ```
pub struct SimBuilder {
    params: SimParams,
    size:   usize,
    seed:   Option<u64>,
}

impl SimBuilder {
    /// Create a builder for a run with the given parameters.
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            size: DEFAULT_SIDE * DEFAULT_SIDE,
            seed: None,
        }
    }

    /// Set the population as a grid side length, squared internally — the
    /// gentler scale parameter-input controls expose for large populations.
    pub fn side(mut self, side: usize) -> Self {
        self.size = side.saturating_mul(side);
        self
    }

    /// Set the exact population size (need not be a perfect square).
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Seed the run's RNG.  The same seed with the same parameters replays
    /// the identical epidemic.  Unseeded runs draw from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;
        if self.size > MAX_POPULATION {
            return Err(SimError::Config(format!(
                "population size {} exceeds the maximum of {MAX_POPULATION}",
                self.size
            )));
        }

        let rng = match self.seed {
            Some(s) => SimRng::new(s),
            None    => SimRng::from_entropy(),
        };
        Ok(Sim::new(self.params, self.size, rng))
    }
}
