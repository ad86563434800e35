//! Centering arithmetic shared by live placement and previews.

use log::debug;

use super::{Cell, Grid, Stamp};

/// Start offset that centers `inner` within `outer`, floored.
/// Negative when `inner` is larger than `outer`.
pub fn centered_start(outer: usize, inner: usize) -> isize {
    (outer as isize - inner as isize).div_euclid(2)
}

/// Clear the grid and write `stamp` centered on it.
///
/// Stamp cells that land outside the grid are dropped, so a stamp larger
/// than the grid still shows its middle. Returns the number of live
/// stamp cells that landed.
pub fn place_centered(grid: &mut Grid, stamp: &Stamp) -> usize {
    grid.clear();

    let start_row = centered_start(grid.rows(), stamp.height());
    let start_col = centered_start(grid.cols(), stamp.width());

    let placed = stamp
        .alive_offsets()
        .filter(|&(r, c)| {
            grid.set_clipped(start_row + r as isize, start_col + c as isize, Cell::Alive)
        })
        .count();

    debug!(
        "placed {} at ({start_row}, {start_col}): {placed}/{} cells in bounds",
        stamp.name(),
        stamp.population()
    );
    placed
}

/// Thumbnail sizing for a stamp drawn inside a pixel box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewLayout {
    /// Side of one stamp cell in pixels, at least 1
    pub cell_size: u32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Fit `stamp` into a `box_width x box_height` box with cells no larger than
/// `max_cell_size`, centered on both axes.
pub fn preview_layout(
    stamp: &Stamp,
    box_width: u32,
    box_height: u32,
    max_cell_size: u32,
) -> PreviewLayout {
    let to_u32 = |cells: usize| u32::try_from(cells).unwrap_or(u32::MAX);
    let fit_x = box_width / to_u32(stamp.width());
    let fit_y = box_height / to_u32(stamp.height());
    let cell_size = fit_x.min(fit_y).min(max_cell_size).max(1);

    let offset = |outer: u32, cells: usize| {
        (outer as f32 - to_u32(cells).saturating_mul(cell_size) as f32) / 2.0
    };

    PreviewLayout {
        cell_size,
        offset_x: offset(box_width, stamp.width()),
        offset_y: offset(box_height, stamp.height()),
    }
}
