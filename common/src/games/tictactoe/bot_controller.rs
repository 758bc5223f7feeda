use super::board::Board;
use super::types::{Position, SearchDecision, Side};

/// Exhaustive minimax over every reachable position.
///
/// The side to move is read from `board.turn()`: the human minimizes and the
/// computer maximizes. Among equal scores the first candidate in row-major
/// order wins, so the result is fully determined by the board.
pub fn best_move(board: &Board) -> SearchDecision {
    let mut nodes_explored = 0;
    let (position, score) = minimax(board, &mut nodes_explored);
    SearchDecision {
        position,
        score,
        nodes_explored,
    }
}

/// Searches for and plays the computer's move.
///
/// Returns `None` without touching the board when the game has already ended.
///
/// # Panics
///
/// Panics if it is not the computer's turn.
pub fn computer_turn(board: &mut Board) -> Option<Position> {
    play_best_move(board).position
}

/// Like [`computer_turn`], but hands back the whole decision for reporting.
pub fn play_best_move(board: &mut Board) -> SearchDecision {
    assert_eq!(board.turn(), Side::Computer, "computer_turn called on the human's turn");

    let decision = best_move(board);
    if let Some(position) = decision.position {
        // The search only proposes empty in-range cells.
        if let Err(err) = board.apply_computer_move(position.row, position.col) {
            unreachable!("search proposed an illegal move: {err}");
        }
    }
    decision
}

fn minimax(board: &Board, nodes_explored: &mut u64) -> (Option<Position>, i32) {
    *nodes_explored += 1;

    if board.has_ended() {
        return (None, board.score());
    }

    let mover = board.turn();
    let mut best: Option<(Position, i32)> = None;

    for position in board.available_moves() {
        let mut next = board.clone();
        if let Err(err) = next.apply_move(mover, position.row, position.col) {
            unreachable!("available move {position} was rejected: {err}");
        }

        let (_, score) = minimax(&next, nodes_explored);

        let improves = match best {
            None => true,
            Some((_, best_score)) => match mover {
                Side::Human => score < best_score,
                Side::Computer => score > best_score,
            },
        };
        if improves {
            best = Some((position, score));
        }
    }

    match best {
        Some((position, score)) => (Some(position), score),
        None => unreachable!("unfinished board has no available moves"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{LOSS_SCORE, WIN_SCORE};

    fn play(board: &mut Board, moves: &[(Side, usize, usize)]) {
        for &(side, row, col) in moves {
            board.apply_move(side, row, col).unwrap();
        }
    }

    fn board_with_turn(moves: &[(Side, usize, usize)], turn: Side) -> Board {
        let mut board = Board::new();
        play(&mut board, moves);
        board.set_turn(turn);
        board
    }

    #[test]
    fn test_empty_board_is_a_draw_under_perfect_play() {
        let decision = best_move(&Board::new());
        assert_eq!(decision.score, 0);
        assert_eq!(decision.position, Some(Position::new(0, 0)));
        assert_eq!(decision.nodes_explored, 549_946);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_with_turn(
            &[
                (Side::Human, 1, 0),
                (Side::Computer, 0, 0),
                (Side::Human, 1, 1),
                (Side::Computer, 0, 1),
            ],
            Side::Computer,
        );
        let decision = best_move(&board);
        assert_eq!(decision.position, Some(Position::new(0, 2)));
        assert_eq!(decision.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_human_line() {
        let board = board_with_turn(
            &[
                (Side::Human, 1, 0),
                (Side::Computer, 0, 0),
                (Side::Human, 1, 1),
            ],
            Side::Computer,
        );
        let decision = best_move(&board);
        assert_eq!(decision.position, Some(Position::new(1, 2)));
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn test_answers_center_with_first_corner() {
        let board = board_with_turn(&[(Side::Human, 1, 1)], Side::Computer);
        let decision = best_move(&board);
        assert_eq!(decision.position, Some(Position::new(0, 0)));
        assert_eq!(decision.score, 0);
        assert_eq!(decision.nodes_explored, 55_505);
    }

    #[test]
    fn test_answers_corner_with_center() {
        let board = board_with_turn(&[(Side::Human, 0, 0)], Side::Computer);
        assert_eq!(best_move(&board).position, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_defends_against_opposite_corners() {
        let board = board_with_turn(
            &[
                (Side::Human, 0, 0),
                (Side::Computer, 1, 1),
                (Side::Human, 2, 2),
            ],
            Side::Computer,
        );
        let decision = best_move(&board);
        assert_eq!(decision.position, Some(Position::new(0, 1)));
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn test_search_plays_for_the_human_too() {
        let board = board_with_turn(
            &[
                (Side::Computer, 0, 0),
                (Side::Human, 2, 2),
                (Side::Computer, 0, 1),
            ],
            Side::Human,
        );
        let decision = best_move(&board);
        assert_eq!(decision.position, Some(Position::new(0, 2)));
        assert_eq!(decision.score, LOSS_SCORE);
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let board = board_with_turn(&[(Side::Human, 2, 0)], Side::Computer);
        let before = board.clone();
        best_move(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_ended_board_returns_terminal_score_without_move() {
        let board = board_with_turn(
            &[
                (Side::Computer, 2, 0),
                (Side::Human, 0, 0),
                (Side::Computer, 2, 1),
                (Side::Human, 0, 1),
                (Side::Computer, 2, 2),
            ],
            Side::Human,
        );
        let decision = best_move(&board);
        assert_eq!(decision.position, None);
        assert_eq!(decision.score, WIN_SCORE);
        assert_eq!(decision.nodes_explored, 1);
    }

    #[test]
    fn test_computer_turn_applies_best_move() {
        let mut board = Board::new();
        board.apply_human_move(1, 0).unwrap();
        board.apply_computer_move(0, 0).unwrap();
        board.apply_human_move(1, 1).unwrap();

        let played = computer_turn(&mut board);

        assert_eq!(played, Some(Position::new(1, 2)));
        assert_eq!(board.is_occupied(1, 2), Ok(true));
        assert_eq!(board.turn(), Side::Human);
    }

    #[test]
    fn test_computer_turn_on_ended_board_changes_nothing() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                (Side::Human, 0, 0),
                (Side::Computer, 1, 0),
                (Side::Human, 0, 1),
                (Side::Computer, 1, 1),
                (Side::Human, 0, 2),
            ],
        );
        let before = board.clone();
        assert_eq!(computer_turn(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_best_move_reports_decision() {
        let mut board = Board::new();
        board.apply_human_move(1, 1).unwrap();

        let decision = play_best_move(&mut board);

        assert_eq!(decision.position, Some(Position::new(0, 0)));
        assert_eq!(decision.nodes_explored, 55_505);
        assert_eq!(board.is_occupied(0, 0), Ok(true));
    }

    #[test]
    #[should_panic(expected = "human's turn")]
    fn test_computer_turn_out_of_turn_panics() {
        let mut board = Board::new();
        computer_turn(&mut board);
    }
}
