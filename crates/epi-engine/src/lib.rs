//! `epi-engine` — the step engine for the `epi_abm` epidemic simulator.
//!
//! One call to [`step::advance`] moves the whole population forward one
//! round: per-agent disease transitions first, then randomized contact
//! pairing and transmission.  The engine is infallible and strictly
//! sequential; all randomness comes through the injected [`epi_core::SimRng`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`pairing`] | `pair_living` (shuffled two-at-a-time contact pairs)  |
//! | [`step`]    | `advance`, `StepReport`                               |

pub mod pairing;
pub mod step;

#[cfg(test)]
mod tests;

pub use pairing::pair_living;
pub use step::{advance, StepReport};
