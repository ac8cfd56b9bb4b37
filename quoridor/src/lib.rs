mod error;
mod game;
mod game_result;
mod graph;
mod move_gen;
mod moves;
mod player;
mod pos;
mod snapshot;
mod symm;
mod wall;

pub use error::{PlayError, SnapshotError};
pub use game::{default_starting_walls, Game};
pub use game_result::GameResult;
pub use graph::Graph;
pub use moves::Move;
pub use player::Player;
pub use pos::{Direction, Pos};
pub use snapshot::{Coords, Snapshot};
pub use wall::{Orientation, Wall};
