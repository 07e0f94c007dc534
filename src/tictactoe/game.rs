//! Game outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// Decided result of a position. Ongoing positions have no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Short tag used in exported datasets: `X`, `O` or `Draw`
    pub fn tag(self) -> &'static str {
        match self {
            GameOutcome::Win(Player::X) => "X",
            GameOutcome::Win(Player::O) => "O",
            GameOutcome::Draw => "Draw",
        }
    }

    /// Tag for an optional outcome; ongoing positions map to the empty string.
    pub fn tag_of(outcome: Option<GameOutcome>) -> &'static str {
        outcome.map_or("", GameOutcome::tag)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_wire_format() {
        assert_eq!(GameOutcome::Win(Player::X).tag(), "X");
        assert_eq!(GameOutcome::Win(Player::O).tag(), "O");
        assert_eq!(GameOutcome::Draw.tag(), "Draw");
        assert_eq!(GameOutcome::tag_of(None), "");
    }

    #[test]
    fn display_names_the_winner() {
        assert_eq!(GameOutcome::Win(Player::O).to_string(), "O wins");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
    }
}
