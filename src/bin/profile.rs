use std::time::{Duration, Instant};

use daedal::{
    GeneratorConfig, Maze, generate_maze, generators::Generator, get_rng, logging::init_logging,
};

const SIZE: usize = 255;

/// Mean duration per run; zero runs count as one.
fn average(total: Duration, runs: usize) -> Duration {
    total.div_f64(runs.max(1) as f64)
}

fn main() -> Result<(), daedal::MazeError> {
    let _guard = init_logging("profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    for generator in Generator::ALL {
        let config = GeneratorConfig {
            rows: SIZE,
            cols: SIZE,
            generator,
            seed: Some(0),
            ..Default::default()
        };
        let mut rng = get_rng(config.seed);
        let mut total = Duration::ZERO;
        for _ in 0..num_iters {
            let mut maze = Maze::new(config.rows, config.cols)?;
            let started = Instant::now();
            generate_maze(&mut maze, &config, &mut rng)?;
            total += started.elapsed();
        }
        let mean = average(total, num_iters);
        tracing::info!(
            "[profile] {}: {} runs, {:?} average",
            generator,
            num_iters,
            mean
        );
        println!("{:<22} {:>10.2?} average over {} runs", generator.to_string(), mean, num_iters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_over_many_runs() {
        // More runs than fit in a u32
        let runs = u32::MAX as usize + 1;
        let total = Duration::from_secs(runs as u64);
        assert_eq!(average(total, runs), Duration::from_secs(1));
        assert_eq!(average(Duration::from_secs(3), 0), Duration::from_secs(3));
    }
}
