use quoridor::{Game, Move, Player};

use crate::game_state::{GameState, Side};

fn side(player: Player) -> Side {
    match player {
        Player::One => Side::First,
        Player::Two => Side::Second,
    }
}

impl<const N: usize> GameState for Game<N> {
    type Move = Move;

    fn possible_moves(&self) -> Vec<Move> {
        self.possible_moves()
    }

    fn play(&mut self, my_move: &Move) {
        // Moves come from the generator, so the unchecked mutator applies.
        self.apply(*my_move);
    }

    fn side_to_move(&self) -> Side {
        side(self.to_move)
    }

    fn winner(&self) -> Option<Side> {
        self.result().winner().map(side)
    }
}
