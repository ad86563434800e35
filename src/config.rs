//! Presentation and driver defaults. The engine itself stores none of
//! these; callers pass them in.

/// Side of one grid cell on screen, in pixels
pub const DEFAULT_CELL_SIZE: f32 = 8.0;

/// Animation rate the driver starts with
pub const DEFAULT_STEPS_PER_SECOND: f32 = 10.0;

/// Bounds for the speed control
pub const MIN_STEPS_PER_SECOND: f32 = 1.0;
pub const MAX_STEPS_PER_SECOND: f32 = 60.0;

/// Chance that a cell starts alive on "Random"
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.3;

/// Pattern thumbnail box, in pixels
pub const PREVIEW_BOX_WIDTH: u32 = 200;
pub const PREVIEW_BOX_HEIGHT: u32 = 150;

/// Largest cell a thumbnail may draw, in pixels
pub const PREVIEW_MAX_CELL_SIZE: u32 = 8;

/// Bring a requested rate into the speed control's range.
/// NaN falls back to the default rate.
pub fn clamp_steps_per_second(steps_per_second: f32) -> f32 {
    if steps_per_second.is_nan() {
        DEFAULT_STEPS_PER_SECOND
    } else {
        steps_per_second.clamp(MIN_STEPS_PER_SECOND, MAX_STEPS_PER_SECOND)
    }
}

/// Options the animation driver recognizes
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Target generations per second while running
    pub steps_per_second: f32,
    /// Whether the animation starts enabled
    pub start_running: bool,
    /// Probability used by "Random"
    pub fill_probability: f64,
    /// Thumbnail cell size cap
    pub preview_max_cell_size: u32,
}

impl DriverConfig {
    pub fn with_steps_per_second(mut self, steps_per_second: f32) -> Self {
        self.steps_per_second = clamp_steps_per_second(steps_per_second);
        self
    }

    pub fn with_fill_probability(mut self, fill_probability: f64) -> Self {
        self.fill_probability = fill_probability;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            start_running: false,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            preview_max_cell_size: PREVIEW_MAX_CELL_SIZE,
        }
    }
}
