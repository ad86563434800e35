use log::{info, warn};
use rand::Rng;

use crate::config::{DriverConfig, clamp_steps_per_second};
use crate::domain::{self, Cell, Grid, Result};

/// Simulation drives one grid at a caller-chosen cadence.
/// The grid knows nothing about running or timing; that all lives here.
pub struct Simulation {
    pub grid: Grid,
    pub config: DriverConfig,
    pub is_running: bool,
    pub update_timer: f32,
    /// Wall time of the most recent step
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl Simulation {
    /// Create a driver over an empty `rows x cols` grid.
    /// The configured rate is clamped into the speed control's range.
    pub fn new(rows: usize, cols: usize, config: DriverConfig) -> Result<Self> {
        let grid = Grid::new(rows, cols)?;
        let config = DriverConfig {
            steps_per_second: clamp_steps_per_second(config.steps_per_second),
            ..config
        };
        info!("simulation ready: {rows}x{cols} grid, {} gen/s", config.steps_per_second);
        Ok(Self {
            grid,
            is_running: config.start_running,
            config,
            update_timer: 0.0,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Start animating. The next tick steps right away.
    pub fn start(mut self) -> Self {
        if !self.is_running {
            info!("started at generation {}", self.grid.generation());
            self.is_running = true;
            self.update_timer = self.update_interval();
        }
        self
    }

    pub fn pause(mut self) -> Self {
        if self.is_running {
            info!("paused at generation {}", self.grid.generation());
            self.is_running = false;
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.pause() } else { self.start() }
    }

    /// Kill every cell and reset the generation counter. Running state is kept.
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self
    }

    /// Pause, then clear
    pub fn reset(self) -> Self {
        info!("reset");
        self.pause().clear()
    }

    /// Reseed with the configured fill probability using the thread RNG
    pub fn randomize(mut self) -> Self {
        if let Err(err) = self.randomize_with(&mut rand::rng()) {
            warn!("random fill rejected: {err}");
        }
        self
    }

    /// Reseed with the configured fill probability from `rng`
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.grid.random_fill(self.config.fill_probability, rng)
    }

    /// Replace the grid contents with a centered built-in pattern.
    /// Returns how many live cells landed on the grid.
    pub fn load_pattern(&mut self, name: &str) -> Result<usize> {
        let stamp = domain::lookup(name)?;
        let placed = domain::place_centered(&mut self.grid, stamp);
        info!("loaded {name}: {placed} live cells");
        Ok(placed)
    }

    /// Flip one cell, e.g. from a click
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell> {
        self.grid.toggle(row, col)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        let requested = self.config.steps_per_second + delta;
        self.config.steps_per_second = clamp_steps_per_second(requested);
        self
    }

    pub fn set_speed(mut self, steps_per_second: f32) -> Self {
        self.config = self.config.with_steps_per_second(steps_per_second);
        self
    }

    /// Advance the frame clock by `delta_time` seconds and step at most once
    /// when a full interval has elapsed. Leftover time is dropped.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;

        if self.update_timer >= self.update_interval() {
            let start = std::time::Instant::now();
            self.grid.step();
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.update_timer = 0.0;
        }

        self
    }

    /// Seconds between steps at the current rate
    pub fn update_interval(&self) -> f32 {
        1.0 / self.config.steps_per_second
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn population(&self) -> usize {
        self.grid.population_count()
    }

    /// Population as a percentage for display
    pub fn population_percentage(&self) -> f64 {
        self.grid.population_ratio() * 100.0
    }
}
