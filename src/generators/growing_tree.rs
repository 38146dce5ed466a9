use crate::{
    error::MazeError,
    generators::{
        age_heap::{AgeEntry, AgeHeap},
        cell_set::CellSet,
    },
    maze::{Maze, Pos},
    rng::RandomSource,
};

/// Takes the next active cell: half of the time a uniformly random one,
/// otherwise the newest one (ages count down, so the newest has the smallest age).
fn pick<R: RandomSource>(
    active: &mut AgeHeap<Pos>,
    rng: &mut R,
) -> Result<AgeEntry<Pos>, MazeError> {
    if rng.uniform(2) == 0 {
        if active.is_empty() {
            return Err(MazeError::EmptyContainer);
        }
        let entry = *active
            .get(rng.uniform(active.len()))
            .ok_or(MazeError::EmptyContainer)?;
        active.remove(&entry)
    } else {
        active.pop_min()
    }
}

/// Growing Tree with a 50% random / 50% newest selection policy.
///
/// Sits between Prim's algorithm (always random) and the recursive backtracker
/// (always newest).
pub fn growing_tree<R: RandomSource>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    maze.ensure_unbordered()?;
    maze.fill_cross();

    let mut visited = CellSet::new(maze);
    let mut active = AgeHeap::new();
    let mut age = (maze.rows() * maze.cols()) as i64;

    let start = maze.random_logical(rng);
    visited.insert(start);
    active.push(AgeEntry::new(age, start));

    while !active.is_empty() {
        let entry = pick(&mut active, rng)?;
        let unvisited = maze
            .valid_neighbors(entry.item, 2)
            .filter(|&(_, n)| !visited.contains(n))
            .collect::<Vec<_>>();

        // An exhausted cell is dropped for good
        let Some(&(direction, neighbor)) = rng.pick(&unvisited) else {
            continue;
        };

        maze.carve_toward(entry.item, direction)?;
        age -= 1;
        // The picked cell keeps its age, it may still have unvisited neighbors
        active.push(entry);
        active.push(AgeEntry::new(age, neighbor));
        visited.insert(neighbor);
    }

    tracing::debug!("[growing tree] visited {} cells", visited.len());
    Ok(())
}
