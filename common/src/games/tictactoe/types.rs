use std::fmt;

pub const BOARD_SIZE: usize = 3;

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    OccupiedBy(Side),
}

impl Cell {
    pub fn occupant(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::OccupiedBy(side) => Some(*side),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Outcome of one minimax pass over a position.
///
/// `position` is `None` only when the searched board had already ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchDecision {
    pub position: Option<Position>,
    pub score: i32,
    pub nodes_explored: u64,
}
