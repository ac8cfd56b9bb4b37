use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Player one starts on row 0 and aims for the top row,
/// player two starts on the top row and aims for row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub const fn goal_row(self, board_size: usize) -> usize {
        match self {
            Player::One => board_size - 1,
            Player::Two => 0,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        match player {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = SnapshotError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(SnapshotError::InvalidPlayer(id)),
        }
    }
}
