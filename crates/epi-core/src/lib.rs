//! `epi-core` — foundational types for the `epi_abm` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                             |
//! | [`round`]   | `Round` (step counter)                                |
//! | [`rng`]     | `SimRng` (seeded simulation-level RNG)                |
//! | [`shuffle`] | `shuffled` (uniform permutation of a sequence)        |
//! | [`params`]  | `SimParams` (disease parameters + validation)         |
//! | [`error`]   | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod round;
pub mod shuffle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use ids::AgentId;
pub use params::SimParams;
pub use rng::SimRng;
pub use round::Round;
pub use shuffle::shuffled;
