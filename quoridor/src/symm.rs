//! Left-right reflection. Unlike games with a symmetric goal, Quoridor's
//! goal rows pin the vertical axis as the only board symmetry that maps a
//! position to an equivalent one for the same players.

use crate::{game::Game, moves::Move, wall::Wall};

impl Wall {
    #[must_use]
    pub fn mirror(self, board_size: usize) -> Self {
        // The wall spans cell columns x and x + 1; the reflected span is
        // anchored at the smaller of the two mirrored columns.
        Wall::new(board_size - 2 - self.x, self.y, self.orientation)
    }
}

impl Move {
    #[must_use]
    pub fn mirror(self, board_size: usize) -> Self {
        match self {
            Move::Pawn { x, y } => Move::Pawn {
                x: board_size - 1 - x,
                y,
            },
            Move::Wall { x, y, orientation } => Move::Wall {
                x: board_size - 2 - x,
                y,
                orientation,
            },
        }
    }
}

impl<const N: usize> Game<N> {
    /// The position reflected across the vertical axis, with connectivity
    /// rebuilt by replaying the mirrored walls.
    #[must_use]
    pub fn mirror(&self) -> Self {
        let mut mirrored = Game {
            pawns: [self.pawns[0].mirror(), self.pawns[1].mirror()],
            walls_left: self.walls_left,
            to_move: self.to_move,
            ..Game::default()
        };
        for wall in &self.placed_walls {
            let wall = wall.mirror(N);
            mirrored.graph.remove_wall(&wall);
            mirrored.occupied[wall.x][wall.y] = true;
            mirrored.placed_walls.push(wall);
        }
        mirrored
    }
}
