//! Population factory: square-grid layout plus a random patient zero.

use epi_core::{AgentId, SimRng};

use crate::{Agent, Population};

/// Build a population of exactly `size` agents on a square-ish grid and
/// infect one uniformly chosen patient zero.
///
/// Layout: `side = ceil(sqrt(size))`, row `i / side`, column `i % side`,
/// coordinates normalized to `[0, 100)`:
///
/// ```text
/// x = 100 * col / side
/// y = 100 * row / side
/// ```
///
/// `size` need not be a perfect square; the last row is simply left short.
/// Patient zero gets `infected = true, sick_days = 1`; everyone else starts
/// fully susceptible.  For `size == 0` the patient-zero draw is skipped.
///
/// Each call draws patient zero independently from `rng`; there is no state
/// shared between calls.
pub fn create(size: usize, rng: &mut SimRng) -> Population {
    let side = (size as f64).sqrt().ceil() as usize;

    let mut agents = Vec::with_capacity(size);
    for i in 0..size {
        let col = i % side;
        let row = i / side;
        let x = (100 * col) as f32 / side as f32;
        let y = (100 * row) as f32 / side as f32;
        // size <= u32::MAX is a caller contract, enforced by the controller
        // builder; realistic runs are tens of thousands of agents.
        agents.push(Agent::susceptible_at(AgentId(i as u32), x, y));
    }

    if size > 0 {
        let zero = rng.gen_range(0..size);
        agents[zero].infected = true;
        agents[zero].sick_days = 1;
    }

    Population::new(agents)
}
