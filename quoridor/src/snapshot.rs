use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::SnapshotError,
    game::Game,
    moves::Move,
    player::Player,
    pos::Pos,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coords {
    pub x: usize,
    pub y: usize,
}

/// The wire state format. Sufficient to reconstruct a [`Game`], including
/// the connectivity graph, by replaying the placed walls' edge removals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board_size: usize,
    pub pawns: BTreeMap<Player, Coords>,
    pub wall_counts: BTreeMap<Player, u8>,
    pub current_player: Player,
    pub placed_walls: Vec<Move>,
}

impl<const N: usize> From<&Game<N>> for Snapshot {
    fn from(game: &Game<N>) -> Self {
        let mut pawns = BTreeMap::new();
        let mut wall_counts = BTreeMap::new();
        for player in [Player::One, Player::Two] {
            let pawn = game.pawn(player);
            pawns.insert(player, Coords {
                x: pawn.x,
                y: pawn.y,
            });
            wall_counts.insert(player, game.walls_left(player));
        }
        Snapshot {
            board_size: N,
            pawns,
            wall_counts,
            current_player: game.to_move,
            placed_walls: game.placed_walls.iter().map(|&wall| wall.into()).collect(),
        }
    }
}

impl<const N: usize> TryFrom<Snapshot> for Game<N> {
    type Error = SnapshotError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        if snapshot.board_size != N {
            return Err(SnapshotError::BoardSizeMismatch {
                expected: N,
                actual: snapshot.board_size,
            });
        }

        let mut game = Game::default();
        for player in [Player::One, Player::Two] {
            let coords = snapshot
                .pawns
                .get(&player)
                .ok_or(SnapshotError::MissingPlayer(player))?;
            if coords.x >= N || coords.y >= N {
                return Err(SnapshotError::PawnOutOfBounds);
            }
            game.pawns[player.index()] = Pos {
                x: coords.x,
                y: coords.y,
            };
            game.walls_left[player.index()] = *snapshot
                .wall_counts
                .get(&player)
                .ok_or(SnapshotError::MissingPlayer(player))?;
        }
        if game.pawns[0] == game.pawns[1] {
            return Err(SnapshotError::PawnsOverlap);
        }
        game.to_move = snapshot.current_player;

        // Rebuild connectivity by replaying each wall's edge removals,
        // rejecting wall sets the rules engine could never have produced.
        for entry in &snapshot.placed_walls {
            let wall = entry.as_wall().ok_or(SnapshotError::NotAWall)?;
            if wall.x >= N - 1 || wall.y >= N - 1 || game.occupied[wall.x][wall.y] {
                return Err(SnapshotError::InvalidWall);
            }
            if game.placed_walls.iter().any(|other| other.abuts(wall)) {
                return Err(SnapshotError::InvalidWall);
            }
            game.graph.remove_wall(&wall);
            game.occupied[wall.x][wall.y] = true;
            game.placed_walls.push(wall);
        }
        Ok(game)
    }
}
