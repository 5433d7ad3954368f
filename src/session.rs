//! Session state: board, turn, game-over flag and score tallies.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::error::MoveError;
use crate::games::tictactoe::rules::{is_full, win::winning_triple};
use crate::games::tictactoe::{Board, Position, Square, Symbol};
use crate::setup::Roster;

/// A participant with a symbol, a display name and a win count.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    symbol: Symbol,
    name: String,
    wins: u32,
}

impl Player {
    /// Creates a player with no wins.
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
            wins: 0,
        }
    }
}

/// What a successful claim did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The round goes on; the other symbol moves next.
    Continue {
        /// Symbol to move next.
        next: Symbol,
    },
    /// The claim completed a line.
    Won {
        /// Winning symbol.
        symbol: Symbol,
        /// The completed line.
        line: [Position; 3],
    },
    /// The claim filled the board without a line.
    Tied,
}

impl Turn {
    /// True when the round has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Turn::Continue { .. })
    }
}

/// In-memory game session.
///
/// Scores and the total-games counter survive round resets; only
/// [`Session::quit`] clears them.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    player1: Player,
    player2: Player,
    board: Board,
    current: Symbol,
    game_over: bool,
    total_games: u32,
    message: String,
    winning_line: Option<[Position; 3]>,
}

impl Session {
    /// Creates a session for the roster. The first round opens with X.
    #[instrument(skip(roster), fields(player1 = %roster.player1(), player2 = %roster.player2()))]
    pub fn new(roster: &Roster) -> Self {
        info!("Creating session");
        Self {
            player1: Player::new(*roster.player1_symbol(), roster.player1().clone()),
            player2: Player::new(roster.player2_symbol(), roster.player2().clone()),
            board: Board::new(),
            current: Symbol::X,
            game_over: false,
            total_games: 0,
            message: String::new(),
            winning_line: None,
        }
    }

    /// The player holding the given symbol.
    pub fn player_for(&self, symbol: Symbol) -> &Player {
        if self.player1.symbol == symbol {
            &self.player1
        } else {
            &self.player2
        }
    }

    fn player_for_mut(&mut self, symbol: Symbol) -> &mut Player {
        if self.player1.symbol == symbol {
            &mut self.player1
        } else {
            &mut self.player2
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player_for(self.current)
    }

    /// Claims a cell for the current symbol.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] while the round is finished and
    /// [`MoveError::Occupied`] when the cell is taken. Neither changes state.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, pos: Position) -> Result<Turn, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let symbol = self.current;
        self.board.set(pos, Square::Occupied(symbol));
        debug!(position = %pos, "Cell claimed");

        if let Some((winner, line)) = winning_triple(&self.board) {
            self.game_over = true;
            self.total_games += 1;
            self.winning_line = Some(line);
            let player = self.player_for_mut(winner);
            player.wins += 1;
            let message = format!("{} wins!", player.name);
            self.message = message;
            info!(winner = %winner, total_games = self.total_games, "Round won");
            return Ok(Turn::Won {
                symbol: winner,
                line,
            });
        }

        if is_full(&self.board) {
            self.game_over = true;
            self.total_games += 1;
            self.message = "It's a tie!".to_string();
            info!(total_games = self.total_games, "Round tied");
            return Ok(Turn::Tied);
        }

        self.current = symbol.opponent();
        Ok(Turn::Continue { next: self.current })
    }

    /// Clears the board for a new round; player 1 moves first.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        debug!("Resetting round");
        self.board.clear();
        self.current = self.player1.symbol;
        self.game_over = false;
        self.message.clear();
        self.winning_line = None;
    }

    /// Zeroes every counter and resets the round.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        info!("Quitting session, scores cleared");
        self.player1.wins = 0;
        self.player2.wins = 0;
        self.total_games = 0;
        self.reset_round();
    }

    /// Installs new identities, as after a re-prompt. Scores start from zero.
    #[instrument(skip(self, roster))]
    pub fn replace_roster(&mut self, roster: &Roster) {
        *self = Self::new(roster);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&Roster::new("Ann", Symbol::X, "Bo"))
    }

    #[test]
    fn test_turns_alternate() {
        let mut s = session();
        assert_eq!(s.play(Position::Center), Ok(Turn::Continue { next: Symbol::O }));
        assert_eq!(s.current_player().name(), "Bo");
        assert_eq!(s.play(Position::TopLeft), Ok(Turn::Continue { next: Symbol::X }));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_state_change() {
        let mut s = session();
        s.play(Position::Center).unwrap();
        assert_eq!(s.play(Position::Center), Err(MoveError::Occupied(Position::Center)));
        assert_eq!(*s.current(), Symbol::O);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        use Position::*;

        let mut s = session();
        let moves = [
            BottomLeft,
            MiddleLeft,
            MiddleRight,
            Center,
            TopLeft,
            BottomCenter,
            TopCenter,
            BottomRight,
        ];
        for pos in moves {
            assert!(!s.play(pos).unwrap().is_terminal());
        }
        assert_eq!(
            s.play(TopRight),
            Ok(Turn::Won {
                symbol: Symbol::X,
                line: [TopLeft, TopCenter, TopRight]
            })
        );
        assert_eq!(*s.winning_line(), Some([TopLeft, TopCenter, TopRight]));
        assert_eq!(s.message(), "Ann wins!");
    }

    #[test]
    fn test_player_for_symbol() {
        let s = Session::new(&Roster::new("Ann", Symbol::O, "Bo"));
        assert_eq!(s.player_for(Symbol::O).name(), "Ann");
        assert_eq!(s.player_for(Symbol::X).name(), "Bo");
    }
}
