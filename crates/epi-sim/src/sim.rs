//! The `Sim` struct and its round loop.

use epi_core::{Round, SimParams, SimRng};
use epi_engine::{advance, StepReport};
use epi_pop::{factory, Population};
use epi_stats::{compute, StatsRecord};

use crate::SimObserver;

/// The simulation controller.
///
/// Owns the population, parameters, RNG, and the append-only stats history.
/// The step engine and aggregator borrow the population only for the
/// duration of a call; nothing else ever holds it.  Execution is strictly
/// sequential — one round is one atomic unit of work, and the run loops stop
/// only at round boundaries.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Disease parameters, validated at build time.
    pub params: SimParams,

    /// The authoritative population snapshot.  Mutated in place each round;
    /// replaced wholesale by [`reset`][Sim::reset].
    pub population: Population,

    /// Per-round summary records, one per completed round.  The first round
    /// is recorded as `Round(0)`, matching its index into this history.
    pub history: Vec<StatsRecord>,

    /// The single seeded RNG stream behind every random draw in the run.
    rng: SimRng,

    /// Population size used by [`reset`][Sim::reset] to rebuild.
    size: usize,

    /// The round the next `step` call will execute.
    round: Round,
}

impl Sim {
    pub(crate) fn new(params: SimParams, size: usize, mut rng: SimRng) -> Self {
        let population = factory::create(size, &mut rng);
        Self {
            params,
            population,
            history: Vec::new(),
            rng,
            size,
            round: Round::ZERO,
        }
    }

    /// The round the next `step` call will execute (equals the number of
    /// completed rounds).
    #[inline]
    pub fn round(&self) -> Round {
        self.round
    }

    /// Execute one round: advance the population, aggregate, append to
    /// history.  Returns this round's record (also kept in `history`).
    pub fn step(&mut self) -> StatsRecord {
        let (stats, _report) = self.step_inner();
        stats
    }

    /// Run exactly `n` rounds, invoking observer hooks at each boundary.
    pub fn run_steps<O: SimObserver>(&mut self, n: u32, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
    }

    /// Run rounds while `keep_going` returns true for the latest record.
    ///
    /// The predicate is consulted between rounds only — toggling auto-run
    /// off takes effect before the next round fires, never mid-round.  At
    /// least one round always runs.  Calls `on_run_end` when the loop stops
    /// and returns the final round count.
    pub fn run_while<F, O>(&mut self, mut keep_going: F, observer: &mut O) -> Round
    where
        F: FnMut(&StatsRecord) -> bool,
        O: SimObserver,
    {
        loop {
            let stats = self.step_observed(observer);
            if !keep_going(&stats) {
                break;
            }
        }
        observer.on_run_end(self.round);
        self.round
    }

    /// Discard the run: build a fresh population (new patient zero drawn
    /// from the same RNG stream), clear the history, zero the round counter.
    pub fn reset<O: SimObserver>(&mut self, observer: &mut O) {
        self.population = factory::create(self.size, &mut self.rng);
        self.history.clear();
        self.round = Round::ZERO;
        observer.on_reset(&self.population);
    }

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> StatsRecord {
        observer.on_step_start(self.round);
        let (stats, report) = self.step_inner();
        observer.on_step_end(stats.round, &stats, &report, &self.population);
        stats
    }

    fn step_inner(&mut self) -> (StatsRecord, StepReport) {
        let report = advance(&mut self.population, &self.params, &mut self.rng);
        let stats = compute(&self.population, self.round);
        self.history.push(stats);
        self.round.advance();
        (stats, report)
    }
}
