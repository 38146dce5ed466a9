use std::{str::FromStr, time::Instant};

pub mod age_heap;
mod binary_tree;
pub mod cell_set;
mod growing_tree;
mod hunt_and_kill;
mod prim;
mod recur_backtrack;
mod recur_div;

pub use binary_tree::binary_tree;
pub use growing_tree::growing_tree;
pub use hunt_and_kill::hunt_and_kill;
pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;
pub use recur_div::recursive_division;

use crate::{
    config::GeneratorConfig,
    error::MazeError,
    maze::Maze,
    rng::{RandomSource, get_rng},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generator {
    #[default]
    RecurBacktrack,
    Prim,
    HuntAndKill,
    BinaryTree,
    GrowingTree,
    RecurDiv,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::HuntAndKill,
        Generator::BinaryTree,
        Generator::GrowingTree,
        Generator::RecurDiv,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn short_name(&self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "backtrack",
            Generator::Prim => "prim",
            Generator::HuntAndKill => "hunt",
            Generator::BinaryTree => "binary",
            Generator::GrowingTree => "growing",
            Generator::RecurDiv => "division",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::GrowingTree => write!(f, "Growing Tree"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Generator::ALL
            .into_iter()
            .find(|generator| generator.short_name() == name)
            .ok_or(MazeError::UnknownName {
                kind: "generator",
                name: s.to_string(),
            })
    }
}

/// Runs the configured generator on `maze`, drawing from `rng`.
pub fn generate_maze<R: RandomSource>(
    maze: &mut Maze,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(), MazeError> {
    let started = Instant::now();
    match config.generator {
        Generator::RecurBacktrack => recursive_backtrack(maze, config.start, rng)?,
        Generator::Prim => randomized_prim(maze, rng)?,
        Generator::HuntAndKill => hunt_and_kill(maze, rng)?,
        Generator::BinaryTree => {
            binary_tree(maze, config.vertical_bias, config.horizontal_bias, rng)?
        }
        Generator::GrowingTree => growing_tree(maze, rng)?,
        Generator::RecurDiv => recursive_division(maze, rng)?,
    }
    tracing::info!(
        "[generate] {} on {}x{} cells took {:?}",
        config.generator,
        maze.logical_rows(),
        maze.logical_cols(),
        started.elapsed()
    );
    Ok(())
}

/// Builds a maze from `config`: construct, generate, then add the border if requested.
pub fn generate(config: &GeneratorConfig) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(config.rows, config.cols)?;
    let mut rng = get_rng(config.seed);
    generate_maze(&mut maze, config, &mut rng)?;
    if config.border {
        maze.add_border()?;
    }
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, test_support::assert_perfect};

    #[test]
    fn test_every_generator_is_perfect() {
        for generator in Generator::ALL {
            for (rows, cols) in [(1, 1), (2, 3), (7, 7), (16, 5)] {
                let config = GeneratorConfig {
                    rows,
                    cols,
                    generator,
                    seed: Some(17),
                    border: false,
                    ..Default::default()
                };
                let maze = generate(&config).unwrap();
                assert_perfect(&maze);
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        for generator in Generator::ALL {
            let config = GeneratorConfig {
                rows: 12,
                cols: 9,
                generator,
                seed: Some(2024),
                ..Default::default()
            };
            let first = generate(&config).unwrap();
            let second = generate(&config).unwrap();
            assert_eq!(first.to_digits(), second.to_digits(), "{}", generator);
        }
    }

    #[test]
    fn test_border_is_added() {
        let config = GeneratorConfig {
            rows: 4,
            cols: 6,
            generator: Generator::Prim,
            seed: Some(1),
            ..Default::default()
        };
        let maze = generate(&config).unwrap();
        assert!(maze.has_border());
        assert_eq!((maze.rows(), maze.cols()), (9, 13));
        let digits = maze.to_digits();
        let lines = digits.lines().collect::<Vec<_>>();
        assert!(lines[0].chars().all(|c| c == '1'));
        assert!(lines[8].chars().all(|c| c == '1'));
        assert!(lines.iter().all(|l| l.starts_with('1') && l.ends_with('1')));
    }

    #[test]
    fn test_generating_on_bordered_maze_fails() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.add_border().unwrap();
        let mut rng = get_rng(Some(0));
        for generator in Generator::ALL {
            let config = GeneratorConfig {
                generator,
                ..Default::default()
            };
            assert_eq!(
                generate_maze(&mut maze, &config, &mut rng),
                Err(MazeError::BorderAlreadyAdded)
            );
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = GeneratorConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate(&config),
            Err(MazeError::InvalidDimensions { .. })
        ));

        let config = GeneratorConfig {
            generator: Generator::BinaryTree,
            vertical_bias: Direction::West,
            ..Default::default()
        };
        assert!(matches!(
            generate(&config),
            Err(MazeError::InvalidBias { .. })
        ));
    }

    #[test]
    fn test_generator_names() {
        for generator in Generator::ALL {
            assert_eq!(generator.short_name().parse::<Generator>(), Ok(generator));
        }
        assert_eq!(" Prim ".parse::<Generator>(), Ok(Generator::Prim));
        assert!("kruskal".parse::<Generator>().is_err());
        assert_eq!(Generator::HuntAndKill.to_string(), "Hunt-and-Kill");
    }
}
