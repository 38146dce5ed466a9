use thiserror::Error;

use crate::maze::Direction;

/// Failures surfaced by maze construction, generation and the age heap.
///
/// Absent neighbours at the grid edge are not errors: lookups return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cannot pop from an empty age heap")]
    EmptyContainer,
    #[error("entry is not present in the age heap")]
    NotFound,
    #[error("position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("the border has already been added to this maze")]
    BorderAlreadyAdded,
    #[error(
        "invalid bias: {vertical} must be north or south and {horizontal} must be east or west"
    )]
    InvalidBias {
        vertical: Direction,
        horizontal: Direction,
    },
    #[error("start cell ({row}, {col}) is outside the logical grid")]
    InvalidStart { row: usize, col: usize },
    #[error("unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}
