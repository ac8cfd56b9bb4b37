use arrayvec::ArrayVec;

use crate::{
    error::PlayError,
    game::Game,
    moves::Move,
    player::Player,
    pos::{Direction, Pos},
    wall::{Orientation, Wall},
};

impl<const N: usize> Game<N> {
    /// Legal destination squares for the given player's pawn.
    ///
    /// A neighbor occupied by the opponent turns into the straight jump
    /// when the edge behind the opponent is open, and otherwise into the
    /// side-steps reachable from the opponent's square. At board edges the
    /// missing jump or side-step is simply absent.
    pub fn legal_pawn_moves(&self, player: Player) -> ArrayVec<Pos<N>, 5> {
        let pawn = self.pawn(player);
        let opponent = self.pawn(player.opponent());
        let mut moves = ArrayVec::new();

        for direction in Direction::ALL {
            if !self.graph.connected(pawn, direction) {
                continue;
            }
            let Some(next) = pawn.step(direction) else {
                continue;
            };
            if next != opponent {
                moves.push(next);
                continue;
            }
            if self.graph.connected(opponent, direction) {
                if let Some(landing) = opponent.step(direction) {
                    moves.push(landing);
                }
            } else {
                for side in direction.orthogonal() {
                    if self.graph.connected(opponent, side) {
                        if let Some(landing) = opponent.step(side) {
                            moves.push(landing);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Check all five wall-legality clauses.
    ///
    /// The connectivity clause runs against a disposable clone of the graph
    /// with the candidate's edges already removed; the live graph is never
    /// touched.
    pub fn check_wall(&self, wall: &Wall) -> Result<(), PlayError> {
        let Wall { x, y, .. } = *wall;
        if x >= N - 1 || y >= N - 1 {
            return Err(PlayError::OutOfBounds);
        }
        if self.walls_left(self.to_move) == 0 {
            return Err(PlayError::NoWallsLeft);
        }
        if self.occupied[x][y] {
            return Err(PlayError::IntersectionOccupied);
        }
        if self.placed_walls.iter().any(|other| other.abuts(*wall)) {
            return Err(PlayError::WallOverlap);
        }

        let mut graph = self.graph.clone();
        graph.remove_wall(wall);
        let both_keep_paths = graph.has_path(self.pawn(Player::One), Player::One.goal_row(N))
            && graph.has_path(self.pawn(Player::Two), Player::Two.goal_row(N));
        if both_keep_paths {
            Ok(())
        } else {
            Err(PlayError::GoalCutOff)
        }
    }

    pub fn is_legal_wall(&self, wall: &Wall) -> bool {
        self.check_wall(wall).is_ok()
    }

    /// All legal moves for the side to move: pawn destinations first, then
    /// every legal wall placement in row-major, horizontal-then-vertical
    /// order. The order is deterministic.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .legal_pawn_moves(self.to_move)
            .into_iter()
            .map(|pos| Move::Pawn { x: pos.x, y: pos.y })
            .collect();

        if self.walls_left(self.to_move) > 0 {
            for x in 0..N - 1 {
                for y in 0..N - 1 {
                    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                        let wall = Wall::new(x, y, orientation);
                        if self.is_legal_wall(&wall) {
                            moves.push(wall.into());
                        }
                    }
                }
            }
        }
        moves
    }
}
