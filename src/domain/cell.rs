/// Cell represents one position of the Life grid.
/// Each cell is either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// State after one generation given the live neighbor count (B3/S23).
    /// Three neighbors always yields a live cell; two keeps the current state.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match neighbors {
            3 => Cell::Alive,
            2 => self,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_cell_dies() {
        for n in [0, 1] {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_two_or_three_neighbors_keep_a_cell_alive() {
        assert!(Cell::Alive.evolve(2).is_alive());
        assert!(Cell::Alive.evolve(3).is_alive());
        assert!(!Cell::Dead.evolve(2).is_alive());
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
    }
}
