use super::cell::{Cell, CellType};

/// Row-major storage of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, kind: CellType) -> Self {
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col, kind)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.contains(row, col)
            .then(|| &self.data[self.ravel_index(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.contains(row, col) {
            let idx = self.ravel_index(row, col);
            Some(&mut self.data[idx])
        } else {
            None
        }
    }

    /// Sets the type of every cell, keeping coordinates.
    pub fn fill_with(&mut self, mut kind_at: impl FnMut(usize, usize) -> CellType) {
        self.data
            .iter_mut()
            .for_each(|cell| cell.kind = kind_at(cell.row, cell.col));
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on zero, grids are never empty but guard anyway
        self.data.chunks(self.cols.max(1))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    /// Returns a copy of this grid wrapped in a one-cell ring of walls.
    /// Border cells get placeholder coordinates: `(0, 0)` on the sides and
    /// the new outer row index on the top and bottom rows.
    pub fn bordered(&self) -> Grid {
        let rows = self.rows + 2;
        let cols = self.cols + 2;
        let wall_row = |row: usize| (0..cols).map(move |col| Cell::new(row, col, CellType::Wall));

        let mut data = Vec::with_capacity(rows * cols);
        data.extend(wall_row(0));
        for slice in self.row_slices() {
            data.push(Cell::new(0, 0, CellType::Wall));
            data.extend_from_slice(slice);
            data.push(Cell::new(0, 0, CellType::Wall));
        }
        data.extend(wall_row(rows - 1));

        Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        }
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
