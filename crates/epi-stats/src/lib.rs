//! `epi-stats` — per-round statistics for the `epi_abm` epidemic simulator.
//!
//! One [`StatsRecord`] summarizes the population after each round; the
//! controller appends them into its history time series.  [`TRACKED`] is the
//! static contract display collaborators read to learn which series exist —
//! a chart or table iterates it instead of hard-coding field names.

use epi_core::Round;
use epi_pop::Population;


// ── StatsRecord ───────────────────────────────────────────────────────────────

/// Summary counts for one simulation round.
///
/// The three counted dimensions are non-exclusive in principle, but by the
/// engine's invariants an agent is never infected and immune at once, so
/// `infected + immune + dead + susceptible` always equals the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsRecord {
    pub round:    Round,
    pub infected: u32,
    pub immune:   u32,
    pub dead:     u32,
}

impl StatsRecord {
    /// Agents in none of the counted states, derived from the population
    /// total (saturating, in case the record and total disagree).
    pub fn susceptible(&self, population_total: usize) -> u32 {
        (population_total as u32).saturating_sub(self.infected + self.immune + self.dead)
    }

    /// Read one counted series by field tag.
    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Infected => self.infected,
            StatField::Immune   => self.immune,
            StatField::Dead     => self.dead,
        }
    }
}

// ── Tracked-stat contract ─────────────────────────────────────────────────────

/// Field tag for one chartable series of the stats history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatField {
    Infected,
    Immune,
    Dead,
}

/// A display label paired with the field it charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedStat {
    pub label: &'static str,
    pub field: StatField,
}

/// The series available to chart or tabulate.  Static configuration, not
/// runtime behavior: display collaborators iterate this to build legends
/// and column headers.
pub const TRACKED: &[TrackedStat] = &[
    TrackedStat { label: "Total Infected", field: StatField::Infected },
    TrackedStat { label: "Total Immune",   field: StatField::Immune },
    TrackedStat { label: "Total Dead",     field: StatField::Dead },
];

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Count the population's current `infected`, `immune`, and `dead` agents.
///
/// Pure and O(population): reads the snapshot, mutates nothing, and is
/// deterministic for a given input.
pub fn compute(population: &Population, round: Round) -> StatsRecord {
    let mut record = StatsRecord {
        round,
        infected: 0,
        immune:   0,
        dead:     0,
    };
    for a in population {
        if a.infected {
            record.infected += 1;
        }
        if a.immune {
            record.immune += 1;
        }
        if a.dead {
            record.dead += 1;
        }
    }
    record
}
