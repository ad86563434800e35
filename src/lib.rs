// Domain layer - engine and pattern library
pub mod domain;

// Application layer - driver, batch runs, screen mapping
pub mod application;

pub mod config;

// Front end - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, PatternLibrary, Result, Stamp, presets};
pub use application::{Simulation, Viewport};
