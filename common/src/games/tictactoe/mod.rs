mod board;
mod bot_controller;
mod error;
mod types;
mod win_detector;

pub use board::{Board, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use bot_controller::{best_move, computer_turn, play_best_move};
pub use error::MoveError;
pub use types::{BOARD_SIZE, Cell, Grid, Position, SearchDecision, Side};
pub use win_detector::{check_win, has_winning_line};
