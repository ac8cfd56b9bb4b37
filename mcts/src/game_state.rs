use std::hash::Hash;

/// The two sides of an alternating-move game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// A two-player, perfect-information, alternating-move game as seen by the
/// search. Implementers provide legal-move generation and mutation; the
/// search never inspects the state beyond this interface.
pub trait GameState: Clone {
    type Move: Clone + Eq + Hash;

    /// All legal moves for the side to move. An empty set is treated as a
    /// terminal position by the search, never as an error.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Apply a move produced by [`GameState::possible_moves`] on this exact
    /// state. Anything else is a contract violation.
    fn play(&mut self, my_move: &Self::Move);

    fn side_to_move(&self) -> Side;

    fn winner(&self) -> Option<Side>;
}
