pub mod batch;
mod simulation;
mod viewport;

pub use batch::{BatchRun, RunSummary, Seeding, run_batch};
pub use simulation::Simulation;
pub use viewport::Viewport;
