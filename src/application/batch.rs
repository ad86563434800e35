//! Headless batch runs: many independent simulations side by side.
//!
//! Parallelism is across runs only. Each run steps its own grid serially,
//! so results depend on the run's seed and nothing else.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::domain::{self, Grid, Result};

/// How a run's grid is populated before stepping
#[derive(Clone, Debug, PartialEq)]
pub enum Seeding {
    /// Random fill from a seeded generator
    Random { probability: f64, seed: u64 },
    /// A built-in stamp, centered
    Pattern(String),
}

/// One headless simulation to execute
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRun {
    pub rows: usize,
    pub cols: usize,
    pub seeding: Seeding,
    pub generations: u64,
}

/// Outcome of one run
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub generation: u64,
    pub initial_population: usize,
    pub population: usize,
    pub population_ratio: f64,
    /// First generation at which no cell was alive
    pub extinct_at: Option<u64>,
}

impl BatchRun {
    pub fn random(rows: usize, cols: usize, probability: f64, seed: u64, generations: u64) -> Self {
        Self {
            rows,
            cols,
            seeding: Seeding::Random { probability, seed },
            generations,
        }
    }

    pub fn pattern(rows: usize, cols: usize, name: impl Into<String>, generations: u64) -> Self {
        Self {
            rows,
            cols,
            seeding: Seeding::Pattern(name.into()),
            generations,
        }
    }

    /// Build the starting grid for this run
    pub fn seed_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.rows, self.cols)?;
        match &self.seeding {
            Seeding::Random { probability, seed } => {
                grid.random_fill(*probability, &mut StdRng::seed_from_u64(*seed))?;
            }
            Seeding::Pattern(name) => {
                domain::place_centered(&mut grid, domain::lookup(name)?);
            }
        }
        Ok(grid)
    }

    /// Step the seeded grid up to `generations` times, stopping early
    /// once every cell is dead.
    pub fn run(&self) -> Result<RunSummary> {
        let mut grid = self.seed_grid()?;
        let initial_population = grid.population_count();
        let mut extinct_at = (initial_population == 0).then_some(0);

        while extinct_at.is_none() && grid.generation() < self.generations {
            grid.step();
            if grid.population_count() == 0 {
                extinct_at = Some(grid.generation());
            }
        }

        debug!(
            "run {:?} finished at generation {} with {} alive",
            self.seeding,
            grid.generation(),
            grid.population_count()
        );

        Ok(RunSummary {
            generation: grid.generation(),
            initial_population,
            population: grid.population_count(),
            population_ratio: grid.population_ratio(),
            extinct_at,
        })
    }
}

/// Execute every run in parallel. Summaries come back in input order;
/// any invalid run fails the whole batch.
pub fn run_batch(runs: &[BatchRun]) -> Result<Vec<RunSummary>> {
    runs.par_iter().map(BatchRun::run).collect()
}
