use crate::{generators::Generator, maze::Direction};

/// Everything needed to produce one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Logical rows
    pub rows: usize,
    /// Logical columns
    pub cols: usize,
    pub generator: Generator,
    /// Seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Logical start cell of the recursive backtracker.
    pub start: (usize, usize),
    /// Binary Tree vertical bias, north or south.
    pub vertical_bias: Direction,
    /// Binary Tree horizontal bias, east or west.
    pub horizontal_bias: Direction,
    /// Wrap the finished maze in a ring of walls.
    pub border: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            generator: Generator::default(),
            seed: None,
            start: (0, 0),
            vertical_bias: Direction::North,
            horizontal_bias: Direction::West,
            border: true,
        }
    }
}
