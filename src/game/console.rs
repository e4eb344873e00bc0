//! Interactive text loop over any reader/writer pair.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::{Player, SidePolicy};
use crate::error::GameError;
use crate::rules::GameResult;
use crate::selector::MoveSelector;
use crate::text::{parse_move, parse_side};

use super::controller::{TurnController, TurnPhase};

/// Prompts, board output and input parsing for one game.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` at end of input. Invalid UTF-8 is decoded lossily so it fails
    /// parsing and re-prompts instead of ending the game.
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Ask which side the human plays.
    pub fn choose_side(&mut self, policy: SidePolicy) -> Result<Player, GameError> {
        loop {
            write!(self.output, "\nChoose your side (white / black): ")?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(GameError::InputClosed)?;
            match parse_side(&line, policy) {
                Ok(side) => return Ok(side),
                Err(err) => writeln!(self.output, "\n{err}")?,
            }
        }
    }

    /// Run the game to completion and announce the result.
    pub fn play<S: MoveSelector>(
        &mut self,
        game: &mut TurnController<S>,
    ) -> Result<GameResult, GameError> {
        loop {
            match game.phase() {
                TurnPhase::GameOver(result) => {
                    self.announce(game.human(), result)?;
                    return Ok(result);
                }
                TurnPhase::AwaitingSelector => {
                    let record = game.play_selector_turn()?;
                    writeln!(self.output, "\nThe computer played {}.", record.mv)?;
                }
                TurnPhase::AwaitingHuman => self.human_turn(game)?,
            }
        }
    }

    fn human_turn<S: MoveSelector>(&mut self, game: &mut TurnController<S>) -> Result<(), GameError> {
        write!(self.output, "{}", game.board())?;
        let example = match game.human() {
            Player::White => "H3 G4",
            Player::Black => "A6 B5",
        };
        write!(self.output, "\nEnter your move (e.g. {example}): ")?;
        self.output.flush()?;

        let line = self.read_line()?.ok_or(GameError::InputClosed)?;
        let outcome = parse_move(&line)
            .map_err(|err| err.to_string())
            .and_then(|mv| game.submit_human(mv).map(|_| ()).map_err(|err| err.to_string()));

        if let Err(reason) = outcome {
            debug!(input = line.trim(), %reason, "invalid human input");
            writeln!(self.output, "\nInvalid move ({reason}), try again.")?;
        }
        Ok(())
    }

    fn announce(&mut self, human: Player, result: GameResult) -> Result<(), GameError> {
        if result.is_winner(human) {
            writeln!(self.output, "\nYou win, the computer has no moves left!")?;
        } else {
            writeln!(self.output, "\nThe computer wins, you have no moves left!")?;
        }
        self.output.flush()?;
        Ok(())
    }
}
