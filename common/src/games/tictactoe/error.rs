use thiserror::Error;

use super::types::Side;

/// Recoverable reasons a move is rejected. A rejected move never mutates the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid position ({row}, {col}): row and column must be in 0..3")]
    InvalidPosition { row: usize, col: usize },

    #[error("place {row},{col} occupied by {occupant}")]
    CellOccupied {
        row: usize,
        col: usize,
        occupant: Side,
    },
}
