//! Disease parameters.
//!
//! The surrounding UI exposes each field as a slider; the controller
//! validates a `SimParams` once at build/reset time and the engine then
//! assumes the values are in range.  Percent fields are `f64` so fractional
//! chances (e.g. the flu's 4.7% case fatality) survive the trip from the UI.

use crate::{EpiError, EpiResult};

/// Tunable parameters for one simulation run.
///
/// | Field              | Unit             | Effect                                        |
/// |--------------------|------------------|-----------------------------------------------|
/// | `infection_chance` | percent, 0–100   | transmission chance per qualifying contact    |
/// | `death_chance`     | percent, 0–100   | death chance per step while infected          |
/// | `immune_steps`     | steps            | how long immunity lasts before expiring       |
/// | `sick_steps`       | steps            | how long an infection lasts before recovery   |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Percent chance of transmission per qualifying contact.
    pub infection_chance: f64,
    /// Percent chance a currently-infected agent dies each step.
    pub death_chance: f64,
    /// Steps of immunity after recovery; once the counter exceeds this,
    /// immunity expires and the agent is susceptible again.
    pub immune_steps: u32,
    /// Steps an infection lasts; once the counter exceeds this, the agent
    /// is forced into immunity.
    pub sick_steps: u32,
}

impl Default for SimParams {
    /// Seasonal-flu defaults: 50% transmission per contact, 4.7% per-step
    /// fatality while sick, 5 steps of immunity, 7 sick steps.
    fn default() -> Self {
        Self {
            infection_chance: 50.0,
            death_chance:     4.7,
            immune_steps:     5,
            sick_steps:       7,
        }
    }
}

impl SimParams {
    /// Check that every field is within its documented range.
    ///
    /// Percent fields must be finite and in `[0, 100]` — both extremes are
    /// valid (0 disables the mechanism, 100 makes it certain).  The step
    /// counters are unsigned and need no check.
    pub fn validate(&self) -> EpiResult<()> {
        check_percent("infection_chance", self.infection_chance)?;
        check_percent("death_chance", self.death_chance)?;
        Ok(())
    }

    /// Return a copy with both percent fields clamped into `[0, 100]`
    /// (non-finite values become 0).
    ///
    /// For callers that prefer saturation over rejection at the UI boundary.
    pub fn clamped(&self) -> SimParams {
        SimParams {
            infection_chance: clamp_percent(self.infection_chance),
            death_chance:     clamp_percent(self.death_chance),
            ..*self
        }
    }
}

fn check_percent(name: &'static str, value: f64) -> EpiResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(EpiError::ParamOutOfRange {
            name,
            value,
            expected: "a finite percentage in [0, 100]",
        });
    }
    Ok(())
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
