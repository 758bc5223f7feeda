use super::error::MoveError;
use super::types::{BOARD_SIZE, Cell, Grid, Position, Side};
use super::win_detector::{check_win, has_winning_line};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// 3x3 grid plus the side to move. Human always moves first on a fresh board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    turn: Side,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Side::Human,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Display grid, row by row.
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Result<Cell, MoveError> {
        verify_position(position.row, position.col)?;
        Ok(self.cells[position.row][position.col])
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, MoveError> {
        verify_position(row, col)?;
        Ok(self.cells[row][col] != Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Empty cells in row-major order. This order is the search tie-break order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn apply_move(&mut self, side: Side, row: usize, col: usize) -> Result<(), MoveError> {
        verify_position(row, col)?;

        if let Some(occupant) = self.cells[row][col].occupant() {
            return Err(MoveError::CellOccupied { row, col, occupant });
        }

        self.cells[row][col] = Cell::OccupiedBy(side);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Clears a cell and undoes the turn flip of the move that filled it.
    /// Erasing an empty cell changes nothing.
    pub fn erase_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        verify_position(row, col)?;

        if self.cells[row][col] != Cell::Empty {
            self.cells[row][col] = Cell::Empty;
            self.turn = self.turn.opponent();
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_turn(&mut self, turn: Side) {
        self.turn = turn;
    }

    /// # Panics
    ///
    /// Panics if it is not the human's turn.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        assert_eq!(self.turn, Side::Human, "human move requested on the computer's turn");
        self.apply_move(Side::Human, row, col)
    }

    /// # Panics
    ///
    /// Panics if it is not the computer's turn.
    pub fn apply_computer_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        assert_eq!(self.turn, Side::Computer, "computer move requested on the human's turn");
        self.apply_move(Side::Computer, row, col)
    }

    pub fn is_winner(&self, side: Side) -> bool {
        has_winning_line(&self.cells, side)
    }

    pub fn winner(&self) -> Option<Side> {
        check_win(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }

    pub fn is_draw(&self) -> bool {
        !self.is_winner(Side::Human) && !self.is_winner(Side::Computer) && self.is_full()
    }

    /// Either side has a line, or no empty cell remains.
    pub fn has_ended(&self) -> bool {
        self.is_winner(Side::Human) || self.is_winner(Side::Computer) || self.is_full()
    }

    /// Score from the computer's point of view.
    pub fn score(&self) -> i32 {
        if self.is_winner(Side::Human) {
            LOSS_SCORE
        } else if self.is_winner(Side::Computer) {
            WIN_SCORE
        } else {
            DRAW_SCORE
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn verify_position(row: usize, col: usize) -> Result<(), MoveError> {
    if Position::new(row, col).is_on_board() {
        Ok(())
    } else {
        Err(MoveError::InvalidPosition { row, col })
    }
}
