use crate::{
    error::PlayError,
    game_result::GameResult,
    graph::Graph,
    moves::Move,
    player::Player,
    pos::Pos,
    wall::Wall,
};

/// Walls in each player's starting supply. Ten on the standard 9x9 board,
/// scaled down for smaller boards.
pub const fn default_starting_walls(width: usize) -> u8 {
    ((width * width - 1) / 8) as u8
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game<const N: usize> {
    pub graph: Graph<N>,
    pub pawns: [Pos<N>; 2],
    pub walls_left: [u8; 2],
    pub placed_walls: Vec<Wall>,
    /// Which intersections already host a wall, of either orientation.
    /// Only the `(N - 1) x (N - 1)` intersection grid is used.
    pub occupied: [[bool; N]; N],
    pub to_move: Player,
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        let walls = default_starting_walls(N);
        Game {
            graph: Graph::default(),
            pawns: [Pos { x: N / 2, y: 0 }, Pos { x: N / 2, y: N - 1 }],
            walls_left: [walls, walls],
            placed_walls: Vec::new(),
            occupied: [[false; N]; N],
            to_move: Player::One,
        }
    }
}

impl<const N: usize> Game<N> {
    pub fn pawn(&self, player: Player) -> Pos<N> {
        self.pawns[player.index()]
    }

    pub fn walls_left(&self, player: Player) -> u8 {
        self.walls_left[player.index()]
    }

    /// Whether `player` still has at least one route to their goal row.
    pub fn has_path(&self, player: Player) -> bool {
        self.graph
            .has_path(self.pawn(player), player.goal_row(N))
    }

    /// Terminal iff a pawn stands on its goal row. Both conditions can
    /// never hold at once since only one pawn moves per ply.
    pub fn result(&self) -> GameResult {
        if self.pawns[0].y == N - 1 {
            GameResult::Winner(Player::One)
        } else if self.pawns[1].y == 0 {
            GameResult::Winner(Player::Two)
        } else {
            GameResult::Ongoing
        }
    }

    /// Validate and apply a move.
    pub fn play(&mut self, my_move: Move) -> Result<(), PlayError> {
        if self.result() != GameResult::Ongoing {
            return Err(PlayError::GameOver);
        }
        match my_move {
            Move::Pawn { x, y } => {
                if x >= N || y >= N {
                    return Err(PlayError::OutOfBounds);
                }
                let destination = Pos { x, y };
                if !self
                    .legal_pawn_moves(self.to_move)
                    .contains(&destination)
                {
                    return Err(PlayError::UnreachableSquare);
                }
            }
            Move::Wall { x, y, orientation } => {
                self.check_wall(&Wall::new(x, y, orientation))?;
            }
        }
        self.apply(my_move);
        Ok(())
    }

    /// Apply a move without validating it.
    ///
    /// The caller must supply a move drawn from [`Game::possible_moves`];
    /// applying anything else violates the state's invariants.
    pub fn apply(&mut self, my_move: Move) {
        match my_move {
            Move::Pawn { x, y } => {
                self.pawns[self.to_move.index()] = Pos { x, y };
            }
            Move::Wall { x, y, orientation } => {
                let wall = Wall::new(x, y, orientation);
                self.graph.remove_wall(&wall);
                self.placed_walls.push(wall);
                self.occupied[x][y] = true;
                self.walls_left[self.to_move.index()] -= 1;
            }
        }
        self.to_move = self.to_move.opponent();
    }
}
