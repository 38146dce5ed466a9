use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Represents a tile of the grid, which can be either a wall or a passage.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    #[default]
    Wall,
    Passage,
}

impl CellType {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Serialization code: `1` for a wall, `0` for a passage.
    pub const fn code(self) -> u8 {
        match self {
            CellType::Wall => 1,
            CellType::Passage => 0,
        }
    }

    pub fn styled(self) -> StyledContent<&'static str> {
        let styled_symbol = match self {
            CellType::Wall => "⬜".with(Color::White),
            CellType::Passage => "  ".with(Color::Reset),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellType::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        styled_symbol
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One tile of a maze, addressed by its row and column in the owning grid.
///
/// Cells of the border ring carry placeholder coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub kind: CellType,
}

impl Cell {
    pub const fn new(row: usize, col: usize, kind: CellType) -> Self {
        Cell { row, col, kind }
    }

    pub fn pos(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellType::Wall
    }

    pub fn is_passage(&self) -> bool {
        self.kind == CellType::Passage
    }

    pub fn carve(&mut self) {
        self.kind = CellType::Passage;
    }

    pub fn build_wall(&mut self) {
        self.kind = CellType::Wall;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_export_format() {
        assert_eq!(CellType::Wall.code(), 1);
        assert_eq!(CellType::Passage.code(), 0);
        assert_eq!(CellType::Wall.to_string(), "1");
    }

    #[test]
    fn test_carve_and_build_wall() {
        let mut cell = Cell::new(2, 4, CellType::Wall);
        cell.carve();
        assert!(cell.is_passage());
        cell.build_wall();
        assert!(cell.is_wall());
        assert_eq!(cell.pos(), (2, 4));
    }

    #[test]
    fn test_styled_width() {
        use unicode_width::UnicodeWidthStr;
        for kind in [CellType::Wall, CellType::Passage] {
            assert_eq!(kind.styled().content().width(), 2);
        }
    }
}
