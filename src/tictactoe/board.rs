//! Board state representation and the rules that act on it

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// An immutable 3x3 grid.
///
/// The cells are the whole identity of a position: two boards with the same
/// cells are the same node in the game tree, so the value itself is used as
/// the hash key. The side to move is derived from the piece counts.
///
/// Serializes as its 9-character string over `.`, `X` and `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BoardState {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from its 9-character form.
    ///
    /// Whitespace is ignored, so `"X.O ... ..."` parses the same as `"X.O......"`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts break X-first alternation
    /// - Both players have a winning line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = BoardState { cells };
        let count = board.piece_count();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        if board.is_double_win() {
            return Err(crate::Error::ImpossibleState {
                board: board.encode(),
            });
        }

        Ok(board)
    }

    /// Count pieces on the board.
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.piece_count();
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// The side to move: X when the counts are equal, O otherwise.
    ///
    /// Only meaningful for boards that respect alternation, which every
    /// generated board does.
    pub fn to_move(&self) -> Player {
        let count = self.piece_count();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Copy the board with one cell set to `mark`
    #[must_use = "with_mark returns a new board state; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, mark: Player) -> BoardState {
        let mut next = *self;
        next.cells[pos] = mark.to_cell();
        next
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Both players own a full line. Never reachable through play.
    pub fn is_double_win(&self) -> bool {
        self.has_won(Player::X) && self.has_won(Player::O)
    }

    /// Get the winner if there is one. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Decided result of the position, `None` while the game is ongoing
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Win(player))
        } else if !self.cells.contains(&Cell::Empty) {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.outcome() == Some(GameOutcome::Draw)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Successor boards in ascending cell order.
    ///
    /// Terminal boards have none. A successor where both players own a line is
    /// dropped.
    pub fn legal_successors(&self) -> Vec<BoardState> {
        let mark = self.to_move();
        self.legal_moves()
            .into_iter()
            .map(|pos| self.with_mark(pos, mark))
            .filter(|next| !next.is_double_win())
            .collect()
    }

    /// The 9-character key, e.g. `"X...O...."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Render board as three rows separated by newlines
    pub fn format_grid(&self) -> String {
        let encoded = self.encode();
        let rows: Vec<&str> = (0..3).map(|r| &encoded[r * 3..r * 3 + 3]).collect();
        rows.join("\n")
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<BoardState> for String {
    fn from(board: BoardState) -> Self {
        board.encode()
    }
}

impl TryFrom<String> for BoardState {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> BoardState {
        BoardState::from_string(s).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.encode(), ".........");
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_side_to_move_alternates() {
        assert_eq!(board("X........").to_move(), Player::O);
        assert_eq!(board("X...O....").to_move(), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = BoardState::new();
        let next = empty.with_mark(4, Player::X);
        assert_eq!(next.encode(), "....X....");
        assert_eq!(empty.encode(), ".........");
    }

    #[test]
    fn test_win_detection() {
        let state = board("XXX.OO...");
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_o_win_detection() {
        let state = board("XX.OOOX..");
        assert_eq!(state.outcome(), Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn test_draw_detection() {
        let state = board("XOXXOOOXX");
        assert!(state.is_draw());
        assert!(state.legal_successors().is_empty());
    }

    #[test]
    fn test_ongoing_has_no_outcome() {
        let state = board("X...O....");
        assert_eq!(state.outcome(), None);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_successors_in_ascending_cell_order() {
        let state = board("X...O....");
        let successors: Vec<String> = state
            .legal_successors()
            .iter()
            .map(BoardState::encode)
            .collect();
        assert_eq!(
            successors,
            vec![
                "XX..O....",
                "X.X.O....",
                "X..XO....",
                "X...OX...",
                "X...O.X..",
                "X...O..X.",
                "X...O...X",
            ]
        );
    }

    #[test]
    fn test_terminal_board_has_no_successors() {
        let won = board("XXX.OO...");
        assert!(won.legal_moves().is_empty());
        assert!(won.legal_successors().is_empty());
    }

    #[test]
    fn test_from_string_accepts_aliases_and_whitespace() {
        assert_eq!(board("x.o ... ...").encode(), "X.O......");
        assert_eq!(board("X0.......").encode(), "XO.......");
    }

    #[test]
    fn test_from_string_rejects_bad_length() {
        let err = BoardState::from_string("XO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength { got: 2, .. }
        ));
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let err = BoardState::from_string("X?.......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: '?',
                position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_from_string_rejects_o_first() {
        let err = BoardState::from_string("O........").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 1
            }
        ));
    }

    #[test]
    fn test_from_string_rejects_double_win() {
        let err = BoardState::from_string("XXXOOO...").unwrap_err();
        assert!(matches!(err, crate::Error::ImpossibleState { .. }));
    }

    #[test]
    fn test_display_is_the_key() {
        let state = board("X...O....");
        assert_eq!(state.to_string(), "X...O....");
        assert_eq!(state.format_grid(), "X..\n.O.\n...");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let state = board("X...O....");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"X...O....\"");
        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
