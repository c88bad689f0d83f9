//! flu — console demo for the epi_abm epidemic simulator.
//!
//! Simulates a seasonal-flu outbreak in a 20×20 population: 50% transmission
//! per contact, 4.7% per-round fatality while sick, 5 rounds of immunity,
//! 7 sick rounds.  Runs until the infection dies out (or a round cap) and
//! prints the tracked statistics as a table, one row per round.

use anyhow::Result;

use epi_core::{Round, SimParams};
use epi_engine::StepReport;
use epi_pop::Population;
use epi_sim::{SimBuilder, SimObserver};
use epi_stats::{StatsRecord, TRACKED};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIDE: usize = 20; // 400 agents
const SEED:      u64   = 42;
const ROUND_CAP: Round = Round(365);

// ── Table printer ─────────────────────────────────────────────────────────────

/// Prints one table row per round, plus the epidemic's peak on exit.
struct TablePrinter {
    total:         usize,
    peak_infected: u32,
    peak_round:    Round,
}

impl TablePrinter {
    fn new(total: usize) -> Self {
        let mut header = String::from("round");
        for t in TRACKED {
            header.push_str(&format!("  {:>14}", t.label));
        }
        header.push_str(&format!("  {:>14}", "Susceptible"));
        println!("{header}");

        Self {
            total,
            peak_infected: 0,
            peak_round:    Round::ZERO,
        }
    }
}

impl SimObserver for TablePrinter {
    fn on_step_end(
        &mut self,
        round: Round,
        stats: &StatsRecord,
        report: &StepReport,
        _population: &Population,
    ) {
        let mut row = format!("{:>5}", round.0);
        for t in TRACKED {
            row.push_str(&format!("  {:>14}", stats.get(t.field)));
        }
        row.push_str(&format!("  {:>14}", stats.susceptible(self.total)));
        if report.new_infections > 0 {
            row.push_str(&format!("   (+{} new)", report.new_infections));
        }
        println!("{row}");

        if stats.infected > self.peak_infected {
            self.peak_infected = stats.infected;
            self.peak_round = round;
        }
    }

    fn on_run_end(&mut self, final_round: Round) {
        println!();
        println!(
            "Run ended after {} rounds; peak of {} infected at {}.",
            final_round.0, self.peak_infected, self.peak_round
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let params = SimParams::default();
    println!("=== flu — epi_abm epidemic simulator ===");
    println!(
        "Population: {}  |  Seed: {SEED}  |  infection {}%  death {}%  immunity {} sick {}",
        GRID_SIDE * GRID_SIDE,
        params.infection_chance,
        params.death_chance,
        params.immune_steps,
        params.sick_steps,
    );
    println!();

    let mut sim = SimBuilder::new(params).side(GRID_SIDE).seed(SEED).build()?;

    let mut printer = TablePrinter::new(sim.population.len());
    sim.run_while(
        |stats| stats.infected > 0 && stats.round < ROUND_CAP,
        &mut printer,
    );

    let total = sim.population.len();
    if let Some(last) = sim.history.last() {
        println!(
            "Final state: {} dead, {} immune, {} susceptible of {} agents.",
            last.dead,
            last.immune,
            last.susceptible(total),
            total
        );
    }

    Ok(())
}
