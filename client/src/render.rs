use common::tictactoe::{Board, Cell, Side};

const RULE: &str = "-----------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub human: char,
    pub computer: char,
}

impl Markers {
    fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::OccupiedBy(Side::Human) => self.human,
            Cell::OccupiedBy(Side::Computer) => self.computer,
        }
    }
}

pub fn render_board(board: &Board, markers: &Markers) -> String {
    let mut result = String::new();
    result.push_str(RULE);
    result.push('\n');
    for row in board.grid() {
        let cells: Vec<String> = row
            .iter()
            .map(|&cell| format!(" {} ", markers.symbol(cell)))
            .collect();
        result.push_str(&cells.join("|"));
        result.push('\n');
        result.push_str(RULE);
        result.push('\n');
    }
    result
}
