//! Simulation observer trait for progress reporting and display collaborators.

use epi_core::Round;
use epi_engine::StepReport;
use epi_pop::Population;
use epi_stats::StatsRecord;

/// Callbacks invoked by [`Sim`][crate::Sim] at round boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Display collaborators (chart, table,
/// icon grid) attach here: every hook hands out read-only state, keeping the
/// data flow one-directional.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct RoundPrinter;
///
/// impl SimObserver for RoundPrinter {
///     fn on_step_end(&mut self, round: Round, stats: &StatsRecord, _: &StepReport, _: &Population) {
///         println!("{round}: {} infected", stats.infected);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a round's processing begins.
    fn on_step_start(&mut self, _round: Round) {}

    /// Called after a round has been committed to history.
    ///
    /// `report` carries the round's contact pairs and event counts;
    /// `population` is the post-round snapshot.
    fn on_step_end(
        &mut self,
        _round:      Round,
        _stats:      &StatsRecord,
        _report:     &StepReport,
        _population: &Population,
    ) {
    }

    /// Called after [`Sim::reset`][crate::Sim::reset] installs a fresh
    /// population.
    fn on_reset(&mut self, _population: &Population) {}

    /// Called once when a [`run_while`][crate::Sim::run_while] loop stops.
    fn on_run_end(&mut self, _final_round: Round) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call a run
/// method but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
