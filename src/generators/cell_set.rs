use crate::maze::{Maze, Pos};

/// Membership over the tiles of one maze, backed by a flat boolean array.
pub struct CellSet {
    marks: Vec<bool>,
    cols: usize,
    len: usize,
}

impl CellSet {
    pub fn new(maze: &Maze) -> Self {
        CellSet {
            marks: vec![false; maze.rows() * maze.cols()],
            cols: maze.cols(),
            len: 0,
        }
    }

    fn index(&self, pos: Pos) -> usize {
        pos.0 * self.cols + pos.1
    }

    /// Returns `true` if `pos` was not already present.
    pub fn insert(&mut self, pos: Pos) -> bool {
        let idx = self.index(pos);
        let fresh = !self.marks[idx];
        if fresh {
            self.marks[idx] = true;
            self.len += 1;
        }
        fresh
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.marks.get(self.index(pos)).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
