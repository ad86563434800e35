use crate::config::DEFAULT_CELL_SIZE;

/// Viewport maps between screen pixels and grid coordinates
/// for a fixed cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Grid `(rows, cols)` that fit in an area of the given pixel size
    pub fn grid_dimensions(&self, area_width: f32, area_height: f32) -> (usize, usize) {
        let rows = (area_height / self.cell_size).floor().max(0.0) as usize;
        let cols = (area_width / self.cell_size).floor().max(0.0) as usize;
        (rows, cols)
    }

    /// Convert screen coordinates to `(row, col)`.
    /// `None` when the point is left of or above the grid origin.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let col = ((screen_x - self.offset_x) / self.cell_size).floor();
        let row = ((screen_y - self.offset_y) / self.cell_size).floor();
        (row >= 0.0 && col >= 0.0).then_some((row as usize, col as usize))
    }

    /// Top-left pixel of a grid cell
    pub fn grid_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        let screen_x = col as f32 * self.cell_size + self.offset_x;
        let screen_y = row as f32 * self.cell_size + self.offset_y;
        (screen_x, screen_y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fills_whole_cells_only() {
        let viewport = Viewport::new(8.0);
        assert_eq!(viewport.grid_dimensions(800.0, 600.0), (75, 100));
        assert_eq!(viewport.grid_dimensions(805.0, 7.0), (0, 100));
    }

    #[test]
    fn screen_round_trip_hits_the_same_cell() {
        let viewport = Viewport::new(8.0);
        let (x, y) = viewport.grid_to_screen(3, 5);
        assert_eq!((x, y), (40.0, 24.0));
        assert_eq!(viewport.screen_to_grid(x + 7.9, y + 0.1), Some((3, 5)));
    }

    #[test]
    fn points_before_origin_are_off_grid() {
        let viewport = Viewport::new(8.0);
        assert_eq!(viewport.screen_to_grid(-0.5, 10.0), None);
        assert_eq!(viewport.screen_to_grid(10.0, -3.0), None);
    }
}
