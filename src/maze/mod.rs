pub mod cell;
mod grid;

use crossterm::{queue, style};
use std::{fmt, io::Write, str::FromStr};

pub use cell::{Cell, CellType};
use grid::Grid;

use crate::{error::MazeError, rng::RandomSource};

/// A `(row, col)` position in the internal tile grid.
pub type Pos = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Iteration order used by every neighbour lookup.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::East => write!(f, "east"),
        }
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "west" | "w" => Ok(Direction::West),
            "east" | "e" => Ok(Direction::East),
            _ => Err(MazeError::UnknownName {
                kind: "direction",
                name: s.to_string(),
            }),
        }
    }
}

/// A maze stored at double resolution.
///
/// A maze of `R x C` logical cells is backed by a `(2R - 1) x (2C - 1)` tile grid.
/// Tiles with both coordinates even are the logical cells (rooms); every other tile
/// is a connector that is either the wall or the passage between two rooms, or a
/// junction between four connectors.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    logical_rows: usize,
    logical_cols: usize,
    bordered: bool,
}

impl Maze {
    /// Creates a new maze of `rows x cols` logical cells, filled with walls.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let invalid = || MazeError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid());
        }
        // n cells in each dimension -> n - 1 connectors in between -> 2n - 1 total.
        // The bordered size and the cell storage must fit as well.
        let grid_rows = rows.checked_mul(2).ok_or_else(invalid)? - 1;
        let grid_cols = cols.checked_mul(2).ok_or_else(invalid)? - 1;
        let fits = (grid_rows + 2)
            .checked_mul(grid_cols + 2)
            .and_then(|tiles| tiles.checked_mul(std::mem::size_of::<Cell>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(invalid());
        }
        Ok(Maze {
            grid: Grid::new(grid_rows, grid_cols, CellType::Wall),
            logical_rows: rows,
            logical_cols: cols,
            bordered: false,
        })
    }

    /// Number of tile rows, including the border once it has been added.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of tile columns, including the border once it has been added.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn logical_rows(&self) -> usize {
        self.logical_rows
    }

    pub fn logical_cols(&self) -> usize {
        self.logical_cols
    }

    pub fn has_border(&self) -> bool {
        self.bordered
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row, col)
    }

    /// Type of the tile at `pos`, or `None` outside the grid.
    pub fn kind(&self, pos: Pos) -> Option<CellType> {
        self.grid.get(pos.0, pos.1).map(|cell| cell.kind)
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.kind(pos) == Some(CellType::Wall)
    }

    pub fn is_passage(&self, pos: Pos) -> bool {
        self.kind(pos) == Some(CellType::Passage)
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.row_slices()
    }

    /// Sets every tile to a wall.
    pub fn fill_walls(&mut self) {
        self.grid.fill_with(|_, _| CellType::Wall);
    }

    /// Sets every tile to a passage.
    pub fn fill_passages(&mut self) {
        self.grid.fill_with(|_, _| CellType::Passage);
    }

    /// Opens every logical cell and walls up every connector.
    pub fn fill_cross(&mut self) {
        self.grid.fill_with(|row, col| {
            if row % 2 == 0 && col % 2 == 0 {
                CellType::Passage
            } else {
                CellType::Wall
            }
        });
    }

    pub fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        self.grid.contains(row, col)
    }

    /// Whether `pos` is a logical cell (both coordinates even) inside the grid.
    pub fn is_logical(&self, pos: Pos) -> bool {
        !self.bordered && pos.0 % 2 == 0 && pos.1 % 2 == 0 && self.is_within_bounds(pos.0, pos.1)
    }

    /// Returns the tile `stride` steps away from `pos` in `direction`, if it exists.
    pub fn neighbor(&self, pos: Pos, direction: Direction, stride: usize) -> Option<Pos> {
        let (row, col) = pos;
        let target = match direction {
            Direction::North => (row.checked_sub(stride)?, col),
            Direction::South => (row.checked_add(stride)?, col),
            Direction::West => (row, col.checked_sub(stride)?),
            Direction::East => (row, col.checked_add(stride)?),
        };
        self.is_within_bounds(target.0, target.1).then_some(target)
    }

    /// All in-bounds tiles `stride` steps away from `pos`, tagged with their direction.
    pub fn valid_neighbors(&self, pos: Pos, stride: usize) -> impl Iterator<Item = (Direction, Pos)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| {
                self.neighbor(pos, direction, stride)
                    .map(|neighbor| (direction, neighbor))
            })
    }

    /// The connector tile between two adjacent logical cells.
    pub fn connector_between(&self, a: Pos, b: Pos) -> Option<Pos> {
        if !self.is_logical(a) || !self.is_logical(b) {
            return None;
        }
        let adjacent = (a.0 == b.0 && a.1.abs_diff(b.1) == 2) || (a.1 == b.1 && a.0.abs_diff(b.0) == 2);
        adjacent.then(|| ((a.0 + b.0) / 2, (a.1 + b.1) / 2))
    }

    fn cell_mut(&mut self, pos: Pos) -> Result<&mut Cell, MazeError> {
        self.grid.get_mut(pos.0, pos.1).ok_or(MazeError::OutOfBounds {
            row: pos.0,
            col: pos.1,
        })
    }

    pub fn carve(&mut self, pos: Pos) -> Result<(), MazeError> {
        self.cell_mut(pos)?.carve();
        Ok(())
    }

    pub fn build_wall(&mut self, pos: Pos) -> Result<(), MazeError> {
        self.cell_mut(pos)?.build_wall();
        Ok(())
    }

    /// Carves the connector right next to `from` in `direction`.
    pub fn carve_toward(&mut self, from: Pos, direction: Direction) -> Result<(), MazeError> {
        let connector = self
            .neighbor(from, direction, 1)
            .ok_or(MazeError::OutOfBounds {
                row: from.0,
                col: from.1,
            })?;
        tracing::trace!("[maze] carving {:?} {} of {:?}", connector, direction, from);
        self.carve(connector)
    }

    /// Logical cells in row-major order.
    pub fn logical_cells(&self) -> impl Iterator<Item = Pos> + use<> {
        let cols = self.logical_cols;
        (0..self.logical_rows).flat_map(move |row| (0..cols).map(move |col| (row * 2, col * 2)))
    }

    /// Picks a logical cell uniformly at random.
    pub fn random_logical<R: RandomSource>(&self, rng: &mut R) -> Pos {
        (
            rng.uniform(self.logical_rows) * 2,
            rng.uniform(self.logical_cols) * 2,
        )
    }

    /// Number of open connectors joining two horizontally or vertically adjacent logical cells.
    pub fn passage_count(&self) -> usize {
        self.grid
            .cells()
            .filter(|cell| (cell.row % 2 == 1) != (cell.col % 2 == 1) && cell.is_passage())
            .count()
    }

    pub(crate) fn ensure_unbordered(&self) -> Result<(), MazeError> {
        if self.bordered {
            Err(MazeError::BorderAlreadyAdded)
        } else {
            Ok(())
        }
    }

    /// Wraps the grid in a ring of walls. Call once, after generation.
    pub fn add_border(&mut self) -> Result<(), MazeError> {
        self.ensure_unbordered()?;
        self.grid = self.grid.bordered();
        self.bordered = true;
        Ok(())
    }

    /// Newline-delimited digit dump, `1` for walls and `0` for passages.
    pub fn to_digits(&self) -> String {
        self.rows_iter()
            .map(|row| row.iter().map(|cell| char::from(b'0' + cell.kind.code())).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the maze with terminal colours.
    pub fn render_styled(&self, out: &mut impl Write) -> std::io::Result<()> {
        for row in self.rows_iter() {
            for cell in row {
                queue!(out, style::PrintStyledContent(cell.kind.styled()))?;
            }
            queue!(out, style::Print("\n"))?;
        }
        out.flush()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_digits())
    }
}

impl std::ops::Index<Pos> for Maze {
    type Output = Cell;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;

    use super::*;

    /// Asserts that the open connectors form a spanning tree over the logical cells.
    pub fn assert_perfect(maze: &Maze) {
        let total = maze.logical_rows() * maze.logical_cols();
        assert_eq!(
            maze.passage_count(),
            total - 1,
            "a spanning tree over {} cells has {} edges",
            total,
            total - 1
        );
        for pos in maze.logical_cells() {
            assert!(maze.is_passage(pos), "logical cell {:?} is a wall", pos);
        }

        let mut seen = vec![false; maze.rows() * maze.cols()];
        let mut queue = VecDeque::from([(0, 0)]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(pos) = queue.pop_front() {
            for (direction, neighbor) in maze.valid_neighbors(pos, 2) {
                let Some(connector) = maze.neighbor(pos, direction, 1) else {
                    continue;
                };
                let idx = neighbor.0 * maze.cols() + neighbor.1;
                if maze.is_passage(connector) && !seen[idx] {
                    seen[idx] = true;
                    reached += 1;
                    queue.push_back(neighbor);
                }
            }
        }
        assert_eq!(reached, total, "every logical cell must be reachable");
    }
}
