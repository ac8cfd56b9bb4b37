use crate::player::Player;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    #[default]
    Ongoing,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(player),
            GameResult::Ongoing => None,
        }
    }
}
