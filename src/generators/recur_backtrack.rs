use crate::{
    error::MazeError,
    generators::cell_set::CellSet,
    maze::{Maze, Pos},
    rng::RandomSource,
};

/// Randomized depth-first search from the logical cell `start`.
///
/// Uses an explicit stack, so large mazes cannot overflow the call stack.
pub fn recursive_backtrack<R: RandomSource>(
    maze: &mut Maze,
    start: Pos,
    rng: &mut R,
) -> Result<(), MazeError> {
    maze.ensure_unbordered()?;
    if start.0 >= maze.logical_rows() || start.1 >= maze.logical_cols() {
        return Err(MazeError::InvalidStart {
            row: start.0,
            col: start.1,
        });
    }

    maze.fill_cross();

    let start = (start.0 * 2, start.1 * 2);
    let mut visited = CellSet::new(maze);
    visited.insert(start);

    // The stack only ever holds visited logical cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = maze
            .valid_neighbors(cell, 2)
            .filter(|&(_, c)| !visited.contains(c))
            .collect::<Vec<_>>();

        let Some(&(direction, neighbor)) = rng.pick(&neighbors) else {
            // Dead end, backtrack
            stack.pop();
            continue;
        };

        maze.carve_toward(cell, direction)?;
        visited.insert(neighbor);
        // The current cell stays below the neighbor so we can look at its other neighbors later
        stack.push(neighbor);
    }

    tracing::debug!("[backtrack] visited {} cells", visited.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::test_support::assert_perfect, rng::get_rng};

    #[test]
    fn test_three_by_three_scenario() {
        let mut maze = Maze::new(3, 3).unwrap();
        recursive_backtrack(&mut maze, (0, 0), &mut get_rng(Some(1))).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (5, 5));
        assert_eq!(maze.passage_count(), 8);
        assert_perfect(&maze);
    }

    #[test]
    fn test_perfect_maze() {
        for seed in 0..10 {
            let mut maze = Maze::new(12, 17).unwrap();
            recursive_backtrack(&mut maze, (5, 3), &mut get_rng(Some(seed))).unwrap();
            assert_perfect(&maze);
        }
    }

    #[test]
    fn test_single_cell() {
        let mut maze = Maze::new(1, 1).unwrap();
        recursive_backtrack(&mut maze, (0, 0), &mut get_rng(Some(0))).unwrap();
        assert!(maze.is_passage((0, 0)));
    }

    #[test]
    fn test_invalid_start() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(
            recursive_backtrack(&mut maze, (3, 0), &mut get_rng(Some(0))),
            Err(MazeError::InvalidStart { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_deterministic() {
        let generate = |seed| {
            let mut maze = Maze::new(9, 9).unwrap();
            recursive_backtrack(&mut maze, (0, 0), &mut get_rng(Some(seed))).unwrap();
            maze.to_digits()
        };
        assert_eq!(generate(99), generate(99));
    }
}
