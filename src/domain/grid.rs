use super::{Cell, LifeError, Result};
use log::debug;
use rand::Rng;

/// Grid owns the bounded Life matrix and its generation counter.
///
/// Cells are stored row-major. Edges are hard: coordinates beyond
/// `[0, rows) x [0, cols)` have no cells and are never read or written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// Create a new grid with all cells dead and generation 0
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            generation: 0,
        })
    }

    /// Create a grid with the listed `(row, col)` cells alive.
    pub fn with_alive_cells(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &(row, col) in alive {
            let idx = grid.checked_index(row, col)?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of completed steps since construction or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    /// True when the coordinate is inside the grid and alive
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Paint a single cell. Generation is unchanged.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell and return its new state. Generation is unchanged.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.checked_index(row, col)?;
        let flipped = self.cells[idx].toggle();
        self.cells[idx] = flipped;
        Ok(flipped)
    }

    /// Write through signed coordinates, dropping anything off the grid.
    /// Returns whether the write landed.
    pub(crate) fn set_clipped(&mut self, row: isize, col: isize, cell: Cell) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Count live cells among the 8 surrounding positions.
    /// Positions past an edge do not exist and are not counted.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure evolution - returns the next generation, leaving `self` as is.
    /// Every neighbor count reads this grid, never the one being built.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.evolve(self.count_live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
            generation: self.generation + 1,
        }
    }

    /// Advance one generation. The next grid is built in full and then
    /// swapped in, so no caller ever sees a half-updated matrix.
    pub fn step(&mut self) {
        *self = self.evolve();
        debug!(
            "generation {} population {}",
            self.generation,
            self.population_count()
        );
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.generation = 0;
    }

    /// Reseed every cell independently: alive with `probability`, dead otherwise.
    /// Resets the generation counter.
    pub fn random_fill<R: Rng>(&mut self, probability: f64, rng: &mut R) -> Result<()> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidProbability(probability));
        }
        self.generation = 0;
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(probability)));
        debug!(
            "random fill p={probability} on {}x{} -> {} alive",
            self.rows,
            self.cols,
            self.population_count()
        );
        Ok(())
    }

    /// Number of live cells
    pub fn population_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live cells as a fraction of all cells, in `[0, 1]`
    pub fn population_ratio(&self) -> f64 {
        self.population_count() as f64 / self.cells.len() as f64
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Positions of all live cells in row-major order
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn new_grid_is_empty_at_generation_zero() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population_count(), 0);
        assert_eq!(grid.get(3, 5), Some(Cell::Dead));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 6), None);
    }

    #[test]
    fn corner_counts_only_in_bounds_neighbors() {
        let grid = Grid::with_alive_cells(5, 5, &[(0, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 3);

        let full = Grid::with_alive_cells(3, 3, &all_cells(3, 3)).unwrap();
        assert_eq!(full.count_live_neighbors(0, 0), 3);
        assert_eq!(full.count_live_neighbors(0, 1), 5);
        assert_eq!(full.count_live_neighbors(2, 2), 3);
        assert_eq!(full.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn edges_do_not_wrap() {
        // Alive cells on the far edge must not count for column 0.
        let grid = Grid::with_alive_cells(4, 4, &[(0, 3), (1, 3), (2, 3)]).unwrap();
        assert_eq!(grid.count_live_neighbors(1, 0), 0);
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = Grid::with_alive_cells(5, 5, &[(2, 2)]).unwrap();
        grid.step();
        assert_eq!(grid.population_count(), 0);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn overcrowded_cell_dies() {
        let mut grid =
            Grid::with_alive_cells(5, 5, &[(2, 2), (1, 1), (1, 3), (3, 1), (3, 3)]).unwrap();
        assert_eq!(grid.count_live_neighbors(2, 2), 4);
        grid.step();
        assert!(!grid.is_alive(2, 2));
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut grid = Grid::with_alive_cells(5, 5, &[(1, 1), (1, 3), (3, 2)]).unwrap();
        grid.step();
        assert!(grid.is_alive(2, 2));
    }

    #[test]
    fn block_is_still_life_in_a_corner() {
        let cells = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut grid = Grid::with_alive_cells(4, 4, &cells).unwrap();
        grid.step();
        assert_eq!(grid.alive_cells(), cells.to_vec());
    }

    #[test]
    fn evolve_leaves_source_untouched() {
        let grid = Grid::with_alive_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
        let next = grid.evolve();
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.alive_cells(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next.alive_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(next.generation(), 1);
    }

    #[test]
    fn toggle_flips_without_touching_generation() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.step();
        assert_eq!(grid.toggle(1, 1), Ok(Cell::Alive));
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.toggle(1, 1), Ok(Cell::Dead));
    }

    #[test]
    fn set_paints_in_bounds_only() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();
        assert_eq!(grid.alive_cells(), vec![(2, 1)]);
        assert!(grid.set(0, 3, Cell::Alive).is_err());
        assert_eq!(grid.population_count(), 1);
    }

    #[test]
    fn toggle_out_of_bounds_fails_and_leaves_grid() {
        let mut grid = Grid::with_alive_cells(3, 3, &[(0, 0)]).unwrap();
        let before = grid.clone();
        assert_eq!(
            grid.toggle(3, 0),
            Err(LifeError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3,
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn set_clipped_drops_off_grid_writes() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.set_clipped(-1, 0, Cell::Alive));
        assert!(!grid.set_clipped(0, 2, Cell::Alive));
        assert!(grid.set_clipped(1, 1, Cell::Alive));
        assert_eq!(grid.alive_cells(), vec![(1, 1)]);
    }

    #[test]
    fn clear_kills_everything_and_resets_generation() {
        let mut grid = Grid::with_alive_cells(3, 3, &[(1, 0), (1, 1), (1, 2)]).unwrap();
        grid.step();
        grid.clear();
        assert_eq!(grid.population_count(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn random_fill_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(6, 9).unwrap();

        grid.random_fill(1.0, &mut rng).unwrap();
        assert_eq!(grid.population_count(), 54);
        assert_eq!(grid.population_ratio(), 1.0);

        grid.step();
        grid.random_fill(0.0, &mut rng).unwrap();
        assert_eq!(grid.population_count(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn random_fill_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::with_alive_cells(3, 3, &[(0, 0)]).unwrap();
        grid.step();
        let before = grid.clone();

        for p in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                grid.random_fill(p, &mut rng),
                Err(LifeError::InvalidProbability(_))
            ));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn random_fill_is_reproducible_for_a_seed() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        a.random_fill(0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        b.random_fill(0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn population_ratio_is_a_fraction() {
        let grid = Grid::with_alive_cells(2, 4, &[(0, 0), (1, 3)]).unwrap();
        assert_eq!(grid.population_count(), 2);
        assert_eq!(grid.population_ratio(), 0.25);
    }

    #[test]
    fn iter_cells_is_row_major() {
        let grid = Grid::with_alive_cells(2, 3, &[(1, 2)]).unwrap();
        let positions: Vec<_> = grid.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions[..4], [(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(grid.iter_cells().last(), Some((1, 2, Cell::Alive)));
    }

    fn all_cells(rows: usize, cols: usize) -> Vec<(usize, usize)> {
        (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .collect()
    }
}
