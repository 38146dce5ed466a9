//! Perfect maze generation over a double-resolution tile grid.
//!
//! A [`Maze`] of `R x C` logical cells is stored as a `(2R - 1) x (2C - 1)` grid of
//! wall/passage tiles. Six generators carve it into a spanning tree, after which
//! [`Maze::add_border`] wraps it in walls for renderers.

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod rng;

pub use config::GeneratorConfig;
pub use error::MazeError;
pub use generators::{Generator, generate, generate_maze};
pub use maze::{Cell, CellType, Direction, Maze, Pos};
pub use rng::{RandomSource, get_rng};
