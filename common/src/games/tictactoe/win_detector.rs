use super::types::{BOARD_SIZE, Cell, Grid, Side};

pub fn check_win(grid: &Grid) -> Option<Side> {
    [Side::Human, Side::Computer]
        .into_iter()
        .find(|&side| has_winning_line(grid, side))
}

pub fn has_winning_line(grid: &Grid, side: Side) -> bool {
    let mark = Cell::OccupiedBy(side);

    for i in 0..BOARD_SIZE {
        if check_row(grid, i, mark) || check_column(grid, i, mark) {
            return true;
        }
    }

    check_main_diagonal(grid, mark) || check_anti_diagonal(grid, mark)
}

fn check_row(grid: &Grid, row: usize, mark: Cell) -> bool {
    grid[row].iter().all(|&cell| cell == mark)
}

fn check_column(grid: &Grid, col: usize, mark: Cell) -> bool {
    (0..BOARD_SIZE).all(|row| grid[row][col] == mark)
}

fn check_main_diagonal(grid: &Grid, mark: Cell) -> bool {
    (0..BOARD_SIZE).all(|i| grid[i][i] == mark)
}

fn check_anti_diagonal(grid: &Grid, mark: Cell) -> bool {
    (0..BOARD_SIZE).all(|i| grid[i][BOARD_SIZE - 1 - i] == mark)
}
