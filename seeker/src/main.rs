//! Seeker — generate a random obstacle grid and solve it with A*.

mod input;
mod render;

use std::io::{self, Write as _};

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use gridseek_core::Grid;
use gridseek_paths::find_path;
use gridseek_scenario::generate_scenario;

use input::{read_density, read_dimensions};
use render::{mark_path, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    println!("=== Seeker: A* over a random obstacle grid ===");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let (rows, cols) = read_dimensions(&mut input)?;
    let density = read_density(&mut input)?;

    let mut grid = Grid::new(rows, cols)?;
    let mut rng = rand::rng();
    let scenario = generate_scenario(&mut grid, density.value(), &mut rng)?;

    println!("\nGenerated grid:\n");
    print!("{}", render(&grid, None));

    match find_path(&grid, scenario.start, scenario.goal) {
        Some(path) => {
            println!("\nPath found ({} steps):\n", path.len());
            mark_path(&mut grid, &path);
        }
        None => println!("\nNo path found between S and G.\n"),
    }
    print!("{}", render(&grid, None));

    Ok(())
}

#[cfg(test)]
mod tests {
    use gridseek_core::Grid;
    use gridseek_paths::{find_path, manhattan};
    use gridseek_scenario::generate_scenario;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn seeded_run_is_fully_reproducible() {
        let run = |seed: u64| {
            let mut grid = Grid::new(12, 12).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let scenario = generate_scenario(&mut grid, 0.30, &mut rng).unwrap();
            let path = find_path(&grid, scenario.start, scenario.goal);
            (scenario, path)
        };
        assert_eq!(run(1234), run(1234));
    }

    #[test]
    fn found_paths_are_never_shorter_than_manhattan() {
        for seed in 0..10u64 {
            let mut grid = Grid::new(10, 10).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let scenario = generate_scenario(&mut grid, 0.50, &mut rng).unwrap();
            if let Some(path) = find_path(&grid, scenario.start, scenario.goal) {
                assert!(path.len() as i32 >= manhattan(scenario.start, scenario.goal));
            }
        }
    }
}
