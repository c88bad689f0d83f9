//! The step engine: one round of disease transitions plus transmission.

use epi_core::{AgentId, SimParams, SimRng};
use epi_pop::{Agent, Population};

use crate::pairing::pair_living;

// ── StepReport ────────────────────────────────────────────────────────────────

/// What one round did, beyond the in-place population mutation.
///
/// The contact list is informational only (display collaborators may use it
/// to nudge paired icons together); transmission has already been resolved
/// by the time the report is returned.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Every contact pair drawn this round, dead agents excluded.
    pub contacts: Vec<(AgentId, AgentId)>,
    /// Agents that became infected through contact this round.
    pub new_infections: u32,
    /// Agents that died this round.
    pub deaths: u32,
    /// Agents whose infection ended this round (forced recovery into
    /// immunity after exceeding the sick-step limit).
    pub recoveries: u32,
}

// ── advance ───────────────────────────────────────────────────────────────────

/// Advance the population by one round, in place.
///
/// Phases, in order:
///
/// 1. **Flags** — clear every agent's `newly_infected`.
/// 2. **Dead** — pin a dead agent's counters and flags at zero and skip all
///    remaining per-agent logic (dead is terminal).
/// 3. **Transitions** — for each living agent, in this fixed order:
///    sick-day increment, immunity tick/expiry, forced recovery into
///    immunity, then the per-round death roll.  The expiry and recovery
///    checks are independent and both apply in sequence: an agent whose
///    sick-day count was already over the limit can leave infection with
///    its immunity counter at 1 in the same round its previous immunity
///    expired.  This cascade is observable behavior and is kept as-is.
/// 4. **Contacts** — shuffle the living agents, pair them two at a time,
///    and resolve transmission per pair (see [`maybe_infect`]).
///
/// The population's order and identity are unchanged on return; pairing
/// order affects only transmission resolution.  Population sizes 0 and 1
/// and parameter extremes (0 or 100 percent) are all well-defined.
pub fn advance(population: &mut Population, params: &SimParams, rng: &mut SimRng) -> StepReport {
    let mut report = StepReport::default();

    // ── Phases 1–3: per-agent transitions ─────────────────────────────────
    for a in population.iter_mut() {
        a.newly_infected = false;

        if a.dead {
            a.sick_days = 0;
            a.immunity = 0;
            a.immune = false;
            a.infected = false;
            continue;
        }

        if a.infected {
            a.sick_days += 1;
        }

        if a.immune {
            a.infected = false;
            a.sick_days = 0;
            a.immunity += 1;
            if a.immunity > params.immune_steps {
                a.immune = false;
                a.immunity = 0;
            }
        }

        if a.sick_days > params.sick_steps {
            a.infected = false;
            a.sick_days = 0;
            a.immunity = 1;
            a.immune = true;
            report.recoveries += 1;
        }

        // Still infected after the checks above: roll for death.  The roll
        // is only drawn for infected agents, keeping the RNG stream aligned
        // with the model's draw count.
        if a.infected && rng.percent_roll(params.death_chance) {
            a.sick_days = 0;
            a.immunity = 0;
            a.infected = false;
            a.dead = true;
            report.deaths += 1;
        }
    }

    // ── Phase 4: contact pairing and transmission ─────────────────────────
    report.contacts = pair_living(population, rng);
    for &(a, b) in &report.contacts {
        // Transmission only when exactly one side is infected.  Note the
        // second arm re-reads `b`: if `a` just infected `b`, `a` is itself
        // infected and the arm stays dead, so a pair never double-rolls.
        if population.get(a).infected && !population.get(b).infected {
            if maybe_infect(population.get_mut(b), params, rng) {
                report.new_infections += 1;
            }
        }
        if population.get(b).infected && !population.get(a).infected {
            if maybe_infect(population.get_mut(a), params, rng) {
                report.new_infections += 1;
            }
        }
    }

    report
}

/// Run the susceptibility check for the non-infected side of a contact.
///
/// The transmission roll is drawn *first*, and eligibility (not dead, not
/// already infected, zero residual immunity) is checked after — the draw is
/// consumed even when the target turns out to be protected.  Returns whether
/// the agent was actually infected.
fn maybe_infect(agent: &mut Agent, params: &SimParams, rng: &mut SimRng) -> bool {
    if rng.percent_roll(params.infection_chance) && agent.susceptible() {
        agent.infected = true;
        agent.newly_infected = true;
        return true;
    }
    false
}
