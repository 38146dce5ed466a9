use crate::{error::MazeError, maze::Maze, rng::RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// A wall line along a connector row
    Horizontal,
    /// A wall line along a connector column
    Vertical,
}

/// Recursive division: start from an open field and keep splitting it with walls
/// that have a single gap.
pub fn recursive_division<R: RandomSource>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    maze.ensure_unbordered()?;

    // Clear all walls in the maze
    maze.fill_passages();

    let (rows, cols) = (maze.logical_rows(), maze.logical_cols());
    divide(maze, (0, 0), rows, cols, rng)
}

/// Splits the area of `rows x cols` logical cells whose top left logical cell is `origin`.
///
/// Recursion depth is bounded by `rows + cols`, since every split shrinks one extent.
pub(crate) fn divide<R: RandomSource>(
    maze: &mut Maze,
    origin: (usize, usize),
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<(), MazeError> {
    if rows < 2 || cols < 2 {
        tracing::trace!("[division] {}x{} area at {:?} is a corridor", rows, cols, origin);
        return Ok(());
    }

    let (row, col) = origin;

    let orientation = match cols.cmp(&rows) {
        std::cmp::Ordering::Less => Orientation::Horizontal,
        std::cmp::Ordering::Greater => Orientation::Vertical,
        std::cmp::Ordering::Equal => {
            if rng.uniform(2) == 0 {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            }
        }
    };

    match orientation {
        Orientation::Horizontal => {
            // The wall goes below logical row `row + diff`
            let diff = rng.uniform(rows - 1);
            let wall_row = (row + diff) * 2 + 1;
            let gap_col = (col + rng.uniform(cols)) * 2;

            for tile_col in col * 2..=(col + cols - 1) * 2 {
                if tile_col != gap_col {
                    maze.build_wall((wall_row, tile_col))?;
                }
            }

            let upper_rows = diff + 1;
            divide(maze, (row, col), upper_rows, cols, rng)?;
            divide(maze, (row + upper_rows, col), rows - upper_rows, cols, rng)
        }
        Orientation::Vertical => {
            // The wall goes right of logical column `col + diff`
            let diff = rng.uniform(cols - 1);
            let wall_col = (col + diff) * 2 + 1;
            let gap_row = (row + rng.uniform(rows)) * 2;

            for tile_row in row * 2..=(row + rows - 1) * 2 {
                if tile_row != gap_row {
                    maze.build_wall((tile_row, wall_col))?;
                }
            }

            let left_cols = diff + 1;
            divide(maze, (row, col), rows, left_cols, rng)?;
            divide(maze, (row, col + left_cols), rows, cols - left_cols, rng)
        }
    }
}
