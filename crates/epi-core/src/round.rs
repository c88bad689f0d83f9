//! Simulation time model.
//!
//! Time is a monotonically increasing `Round` counter: one round advances
//! every agent's disease state once and resolves one wave of contacts.
//! There is no wall-clock mapping — a round is the canonical (and only)
//! time unit, so all history arithmetic is exact integer math.

use std::fmt;

/// An absolute simulation round counter.
///
/// `u32` bounds a run at ~4.3 billion rounds, far beyond any epidemic
/// trajectory this simulator models.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u32);

impl Round {
    pub const ZERO: Round = Round(0);

    /// Return the round `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Round {
        Round(self.0 + n)
    }

    /// Advance to the next round.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }

    /// Rounds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Round) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u32) -> Round {
        Round(self.0 + rhs)
    }
}

impl std::ops::Sub for Round {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Round) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
