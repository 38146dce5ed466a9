use rand_set::RandSetDefault;

use crate::{
    error::MazeError,
    maze::{Maze, Pos},
    rng::RandomSource,
};

/// Walled logical neighbors of `cell`.
fn walled_neighbors(maze: &Maze, cell: Pos) -> impl Iterator<Item = Pos> {
    maze.valid_neighbors(cell, 2)
        .filter(|&(_, n)| maze.is_wall(n))
        .map(|(_, n)| n)
}

/// Picks a frontier cell uniformly through `rng`, so seeded runs stay reproducible.
fn pick_frontier<R: RandomSource>(frontier: &RandSetDefault<Pos>, rng: &mut R) -> Option<Pos> {
    if frontier.is_empty() {
        return None;
    }
    frontier.iter().nth(rng.uniform(frontier.len())).copied()
}

/// Randomized Prim's algorithm, growing passages out of solid rock.
pub fn randomized_prim<R: RandomSource>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    maze.ensure_unbordered()?;

    // Initialize the maze with walls
    maze.fill_walls();

    let start = maze.random_logical(rng);
    maze.carve(start)?;

    // Currently, all neighbors of the start are walls
    let mut frontier = walled_neighbors(maze, start).collect::<RandSetDefault<_>>();

    while let Some(cell) = pick_frontier(&frontier, rng) {
        // Neighbors that are already part of the maze
        let passages = maze
            .valid_neighbors(cell, 2)
            .filter(|&(_, n)| maze.is_passage(n))
            .collect::<Vec<_>>();

        // Every frontier cell was added next to a passage, so this always picks one
        if let Some(&(direction, _)) = rng.pick(&passages) {
            maze.carve_toward(cell, direction)?;
            maze.carve(cell)?;
            // A cell reached by several explorers is only kept once
            for neighbor in walled_neighbors(maze, cell).collect::<Vec<_>>() {
                frontier.insert(neighbor);
            }
        }

        frontier.remove(&cell);
    }

    Ok(())
}
