use std::collections::BTreeSet;

use life_engine::domain::{Grid, lookup, place_centered, presets};

type Cells = BTreeSet<(usize, usize)>;

fn placed(rows: usize, cols: usize, name: &str) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    place_centered(&mut grid, lookup(name).unwrap());
    grid
}

fn cells(grid: &Grid) -> Cells {
    grid.alive_cells().into_iter().collect()
}

fn shifted(cells: &Cells, dr: usize, dc: usize) -> Cells {
    cells.iter().map(|&(r, c)| (r + dr, c + dc)).collect()
}

/// Steps until the starting cells reappear, up to `limit`
fn period(grid: &mut Grid, limit: u64) -> Option<u64> {
    let start = cells(grid);
    (1..=limit).find(|_| {
        grid.step();
        cells(grid) == start
    })
}

#[test]
fn blinker_flips_and_returns_on_every_grid_size() {
    for size in 3..=9 {
        let mut grid = placed(size, size, presets::BLINKER);
        let start = cells(&grid);
        let (r, c) = grid.alive_cells()[0];
        assert_eq!(start, Cells::from([(r, c), (r + 1, c), (r + 2, c)]));

        grid.step();
        assert_eq!(
            cells(&grid),
            Cells::from([(r + 1, c - 1), (r + 1, c), (r + 1, c + 1)]),
            "phase 1 on {size}x{size}"
        );

        grid.step();
        assert_eq!(cells(&grid), start, "phase 2 on {size}x{size}");
        assert_eq!(grid.generation(), 2);
    }
}

#[test]
fn oscillators_have_their_known_periods() {
    assert_eq!(period(&mut placed(8, 8, presets::TOAD), 6), Some(2));
    assert_eq!(period(&mut placed(8, 8, presets::BEACON), 6), Some(2));
    assert_eq!(period(&mut placed(17, 17, presets::PULSAR), 6), Some(3));
}

#[test]
fn block_never_changes() {
    assert_eq!(period(&mut placed(6, 6, presets::BLOCK), 3), Some(1));
}

#[test]
fn beacon_drops_its_inner_corners_between_phases() {
    let mut grid = placed(8, 8, presets::BEACON);
    assert_eq!(grid.population_count(), 8);
    grid.step();
    assert_eq!(grid.population_count(), 6);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let mut grid = placed(20, 20, presets::GLIDER);
    let start = cells(&grid);
    assert_eq!(
        start,
        Cells::from([(8, 9), (9, 10), (10, 8), (10, 9), (10, 10)])
    );

    for _ in 0..4 {
        grid.step();
    }
    assert_eq!(cells(&grid), shifted(&start, 1, 1));

    for _ in 0..4 {
        grid.step();
    }
    assert_eq!(cells(&grid), shifted(&start, 2, 2));
}

#[test]
fn spaceship_moves_two_cells_east_every_four_generations() {
    let mut grid = placed(12, 20, presets::SPACESHIP);
    let start = cells(&grid);
    for _ in 0..4 {
        grid.step();
    }
    assert_eq!(cells(&grid), shifted(&start, 0, 2));
}

#[test]
fn glider_gun_emits_a_glider_every_thirty_generations() {
    let mut grid = placed(60, 80, presets::GLIDER_GUN);
    assert_eq!(grid.population_count(), 36);

    let mut populations = Vec::new();
    for _ in 0..3 {
        for _ in 0..30 {
            grid.step();
        }
        populations.push(grid.population_count());
    }
    assert_eq!(populations, vec![41, 46, 51]);
    assert_eq!(grid.generation(), 90);
}

#[test]
fn glider_jams_into_the_corner_instead_of_wrapping() {
    // On a torus the glider would keep flying; against hard edges it
    // jams into the corner and settles as a block.
    let mut grid = placed(8, 8, presets::GLIDER);
    for _ in 0..40 {
        grid.step();
    }
    assert_eq!(
        cells(&grid),
        Cells::from([(6, 6), (6, 7), (7, 6), (7, 7)])
    );
}
