use crate::{
    error::MazeError,
    maze::{Direction, Maze, Pos},
    rng::RandomSource,
};

/// Whether `cell` sits on the grid edge that faces `direction`.
fn at_boundary(maze: &Maze, cell: Pos, direction: Direction) -> bool {
    maze.neighbor(cell, direction, 1).is_none()
}

/// Binary Tree: every logical cell opens toward one of two bias directions.
///
/// The corner where both biases hit the boundary is the root of the tree and opens nothing.
/// Cells along the two biased edges are forced into the other direction, which leaves
/// straight corridors along those edges.
pub fn binary_tree<R: RandomSource>(
    maze: &mut Maze,
    vertical: Direction,
    horizontal: Direction,
    rng: &mut R,
) -> Result<(), MazeError> {
    if !vertical.is_vertical() || !horizontal.is_horizontal() {
        return Err(MazeError::InvalidBias {
            vertical,
            horizontal,
        });
    }
    maze.ensure_unbordered()?;
    maze.fill_cross();

    for cell in maze.logical_cells() {
        let direction = match (
            at_boundary(maze, cell, vertical),
            at_boundary(maze, cell, horizontal),
        ) {
            (true, true) => continue,
            (true, false) => horizontal,
            (false, true) => vertical,
            (false, false) => {
                if rng.uniform(2) == 0 {
                    horizontal
                } else {
                    vertical
                }
            }
        };
        maze.carve_toward(cell, direction)?;
    }

    Ok(())
}
