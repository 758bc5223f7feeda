use std::fmt;
use std::io::{self, BufRead, Write};

use common::tictactoe::{Board, Position, Side, play_best_move};
use common::{log, log_debug, log_warn};

use crate::config::Config;
use crate::input::parse_position;
use crate::render::{Markers, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    HumanWon,
    ComputerWon,
    Draw,
    InputClosed,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::HumanWon => write!(f, "Player wins"),
            GameOutcome::ComputerWon => write!(f, "Computer wins"),
            GameOutcome::Draw => write!(f, "Draw"),
            GameOutcome::InputClosed => write!(f, "Input closed"),
        }
    }
}

/// Text game loop: the human moves first, then the computer answers with the
/// minimax choice, until someone wins or the board fills up.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    markers: Markers,
    show_search_summary: bool,
    board: Board,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            markers: Markers {
                human: config.human_marker,
                computer: config.computer_marker,
            },
            show_search_summary: config.show_search_summary,
            board: Board::new(),
        }
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self) -> io::Result<GameOutcome> {
        self.print_board()?;

        loop {
            if self.read_human_move()?.is_none() {
                log_warn!("Input closed before the game finished");
                return self.finish(GameOutcome::InputClosed);
            }
            self.print_board()?;
            if let Some(outcome) = outcome_of(&self.board) {
                return self.finish(outcome);
            }

            writeln!(self.output, "Computer's move...")?;
            self.play_computer_move()?;
            self.print_board()?;
            if let Some(outcome) = outcome_of(&self.board) {
                return self.finish(outcome);
            }
        }
    }

    fn read_human_move(&mut self) -> io::Result<Option<Position>> {
        loop {
            write!(self.output, "Enter position: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let position = match parse_position(&line) {
                Ok(position) => position,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            match self.board.apply_human_move(position.row, position.col) {
                Ok(()) => {
                    log_debug!("Human played {}", position);
                    return Ok(Some(position));
                }
                Err(err) => {
                    log_debug!("Rejected human move {}: {}", position, err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn play_computer_move(&mut self) -> io::Result<()> {
        let decision = play_best_move(&mut self.board);
        let Some(position) = decision.position else {
            return Ok(());
        };

        log!(
            "Computer played {} (score {}, {} positions searched)",
            position,
            decision.score,
            decision.nodes_explored
        );
        if self.show_search_summary {
            writeln!(
                self.output,
                "Computer played {} (score {}, {} positions searched)",
                position, decision.score, decision.nodes_explored
            )?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render_board(&self.board, &self.markers))
    }

    fn finish(&mut self, outcome: GameOutcome) -> io::Result<GameOutcome> {
        writeln!(self.output, "{}", outcome)?;
        log!("Game over: {}", outcome);
        Ok(outcome)
    }
}

fn outcome_of(board: &Board) -> Option<GameOutcome> {
    if board.is_winner(Side::Human) {
        Some(GameOutcome::HumanWon)
    } else if board.is_winner(Side::Computer) {
        Some(GameOutcome::ComputerWon)
    } else if board.is_draw() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
