mod cell;
mod error;
mod grid;
pub mod patterns;
pub mod placement;

pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{PatternLibrary, Stamp, library, lookup, presets};
pub use placement::{PreviewLayout, centered_start, place_centered, preview_layout};
