use crate::{
    error::MazeError,
    generators::cell_set::CellSet,
    maze::{Direction, Maze, Pos},
    rng::RandomSource,
};

/// Hunt-and-Kill: random walk until stuck, then scan for a fresh cell next to the walked region.
///
/// Each hunt scans the whole grid, so the worst case is quadratic in the number of cells.
pub fn hunt_and_kill<R: RandomSource>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    maze.ensure_unbordered()?;
    maze.fill_cross();

    let mut visited = CellSet::new(maze);
    let mut current = maze.random_logical(rng);

    // Upper bound on iterations; every iteration visits a new cell, so the
    // failed hunt below ends the loop well before this is reached.
    let total_tiles = maze.rows() * maze.cols();
    let mut processed = 0;

    while processed < total_tiles {
        visited.insert(current);
        let unvisited = maze
            .valid_neighbors(current, 2)
            .filter(|&(_, n)| !visited.contains(n))
            .collect::<Vec<_>>();

        if let Some(&(direction, neighbor)) = rng.pick(&unvisited) {
            // Kill
            maze.carve_toward(current, direction)?;
            current = neighbor;
        } else {
            match hunt(maze, &visited) {
                Some((cell, direction)) => {
                    maze.carve_toward(cell, direction)?;
                    current = cell;
                }
                None => {
                    tracing::debug!(
                        "[hunt] no unvisited cell left after {} iterations",
                        processed + 1
                    );
                    break;
                }
            }
        }

        processed += 1;
    }

    Ok(())
}

/// Scans logical cells in row-major order for the first unvisited passage with a visited neighbor.
/// Returns that cell and the direction of the neighbor to connect to.
fn hunt(maze: &Maze, visited: &CellSet) -> Option<(Pos, Direction)> {
    maze.logical_cells()
        .filter(|&cell| maze.is_passage(cell) && !visited.contains(cell))
        .find_map(|cell| {
            maze.valid_neighbors(cell, 2)
                .find(|&(_, n)| visited.contains(n))
                .map(|(direction, _)| (cell, direction))
        })
}
