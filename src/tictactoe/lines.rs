//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row on any of the eight lines
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// All lines fully occupied by the player, in `WINNING_LINES` order
    pub fn winning_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;

        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert!(LineAnalyzer::winning_lines(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_winning_lines_reports_every_line() {
        // XXX
        // X..
        // X..
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }

        let lines = LineAnalyzer::winning_lines(&cells, Player::X);
        assert_eq!(lines, vec![[0, 1, 2], [0, 3, 6]]);
    }
}
