//! The `Agent` record: one simulated individual.

use epi_core::AgentId;

/// One individual: a fixed grid position plus mutable disease state.
///
/// Position is assigned at creation and never changes — contact is resolved
/// by random pairing, not proximity.  Disease state is mutated in place by
/// the step engine each round.
///
/// # State invariants
///
/// - `dead` is absorbing: once true it never reverts, and the engine pins
///   every counter and flag of a dead agent at zero/false.
/// - `infected` and `immune` are mutually exclusive at every round boundary.
/// - `newly_infected` is a per-round rendering signal: it is true only
///   during the round in which infection occurred.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Stable identifier; also this agent's index in the population.
    pub id: AgentId,

    /// Grid coordinates in `[0, 100)`, immutable after creation.
    pub x: f32,
    pub y: f32,

    /// Currently carrying and transmitting the disease.
    pub infected: bool,

    /// Infected during the current round (cleared at the start of every
    /// round before any transitions run).
    pub newly_infected: bool,

    /// Terminal: a dead agent is exempt from all further transitions.
    pub dead: bool,

    /// Consecutive rounds spent infected.
    pub sick_days: u32,

    /// Temporarily protected from infection.
    pub immune: bool,

    /// Consecutive rounds spent immune; governs expiry.
    pub immunity: u32,
}

impl Agent {
    /// A fully susceptible agent at the given grid position.
    pub fn susceptible_at(id: AgentId, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            infected:       false,
            newly_infected: false,
            dead:           false,
            sick_days:      0,
            immune:         false,
            immunity:       0,
        }
    }

    /// Not dead.
    #[inline]
    pub fn alive(&self) -> bool {
        !self.dead
    }

    /// Eligible for infection: not infected, not dead, and with no residual
    /// immunity (an agent mid-immunity is protected even on its last round).
    #[inline]
    pub fn susceptible(&self) -> bool {
        !self.infected && !self.dead && self.immunity == 0
    }
}
