//! Headless benchmark: serial step cost per grid size, then a parallel batch

use std::time::Instant;

use life_engine::Result;
use life_engine::application::{BatchRun, run_batch};
use life_engine::domain::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

const FILL_PROBABILITY: f64 = 0.3;

fn benchmark_step(size: usize, iterations: u32) -> Result<f64> {
    let mut grid = Grid::new(size, size)?;
    grid.random_fill(FILL_PROBABILITY, &mut StdRng::seed_from_u64(size as u64))?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Game of Life Step Benchmark ===\n");
    println!("{:>12} {:>12} {:>16}", "Size", "ms/gen", "cells/sec");
    println!("{:-<42}", "");

    for size in [50, 100, 250, 500, 1000] {
        let iterations = if size <= 250 { 100 } else { 10 };
        let ms = benchmark_step(size, iterations)?;
        let cells_per_sec = (size * size) as f64 / (ms / 1000.0);
        println!(
            "{:>12} {:>12.3} {:>15.1}M",
            format!("{size}x{size}"),
            ms,
            cells_per_sec / 1_000_000.0
        );
    }

    println!("\n=== Parallel Batch (64 runs, 200x200, 200 generations) ===\n");

    let runs: Vec<BatchRun> = (0..64)
        .map(|seed| BatchRun::random(200, 200, FILL_PROBABILITY, seed, 200))
        .collect();

    let start = Instant::now();
    let summaries = run_batch(&runs)?;
    let elapsed = start.elapsed().as_secs_f64();

    let extinct = summaries.iter().filter(|s| s.extinct_at.is_some()).count();
    let mean_ratio =
        summaries.iter().map(|s| s.population_ratio).sum::<f64>() / summaries.len() as f64;

    println!("Wall time:        {:.2} s", elapsed);
    println!("Extinct runs:     {extinct}/{}", summaries.len());
    println!("Mean final ratio: {:.2}%", mean_ratio * 100.0);

    Ok(())
}
