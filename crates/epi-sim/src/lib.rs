//! `epi-sim` — simulation controller for the `epi_abm` epidemic simulator.
//!
//! # One round per call
//!
//! ```text
//! Sim::step:
//!   ① Advance   — epi_engine::advance mutates the population in place
//!                 (transitions, pairing, transmission).
//!   ② Aggregate — epi_stats::compute counts the new snapshot.
//!   ③ Append    — the record joins the in-memory history time series.
//! ```
//!
//! Each round is atomic: the population satisfies every invariant before and
//! after `step`, and the run loops ([`Sim::run_steps`], [`Sim::run_while`])
//! only ever stop between rounds, never mid-round.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimParams::default())
//!     .side(20)   // 20×20 grid → 400 agents
//!     .seed(42)
//!     .build()?;
//! sim.run_while(|stats| stats.infected > 0, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
