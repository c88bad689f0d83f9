//! Contact pairing: shuffle the living, walk them two at a time.

use epi_core::{shuffled, AgentId, SimRng};
use epi_pop::Population;

/// Draw this round's contact pairs.
///
/// Shuffles the living (non-dead) agents into a uniformly random order and
/// pairs them `(2i, 2i+1)`.  With an odd number of living agents the last
/// one is left unpaired and has no contact this round.  Dead agents never
/// appear in a pair.
///
/// The pair list is a per-round scratch relation, not persistent state: it
/// is returned to the caller (and surfaced in
/// [`StepReport`][crate::StepReport]) rather than written back onto the
/// agents, so no cyclic partner references exist between agent records.
///
/// Degenerate populations (0 or 1 living agents) yield an empty list.
pub fn pair_living(population: &Population, rng: &mut SimRng) -> Vec<(AgentId, AgentId)> {
    let order = shuffled(&population.living_ids(), rng);
    order.chunks_exact(2).map(|c| (c[0], c[1])).collect()
}
