//! Board state validation logic

use super::{
    board::{BoardState, Player},
    lines::LineAnalyzer,
};

impl BoardState {
    /// Check if the board could arise from the empty board through alternating
    /// play with X moving first.
    pub fn is_valid(&self) -> bool {
        let count = self.piece_count();

        // X moves first, so X is level with O or exactly one ahead
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Two winning lines are only possible when one move completed both
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::winning_lines(&self.cells, player);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}
