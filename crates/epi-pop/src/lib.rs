//! `epi-pop` — agent records and population storage for the `epi_abm`
//! epidemic simulator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`agent`]      | `Agent` (per-individual disease state + position)   |
//! | [`population`] | `Population` (the agent collection)                 |
//! | [`factory`]    | `create` (grid layout + patient zero)               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.  |

pub mod agent;
pub mod factory;
pub mod population;


pub use agent::Agent;
pub use population::Population;
