use serde::{Deserialize, Serialize};

use crate::wall::{Orientation, Wall};

/// The wire value type for a single move:
/// `{"type": "move", "x": .., "y": ..}` for a pawn step or
/// `{"type": "wall", "x": .., "y": .., "orientation": "h" | "v"}`
/// for a wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Move {
    #[serde(rename = "move")]
    Pawn { x: usize, y: usize },
    #[serde(rename = "wall")]
    Wall {
        x: usize,
        y: usize,
        orientation: Orientation,
    },
}

impl From<Wall> for Move {
    fn from(wall: Wall) -> Self {
        Move::Wall {
            x: wall.x,
            y: wall.y,
            orientation: wall.orientation,
        }
    }
}

impl Move {
    pub fn as_wall(self) -> Option<Wall> {
        match self {
            Move::Wall { x, y, orientation } => Some(Wall::new(x, y, orientation)),
            Move::Pawn { .. } => None,
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Move::Wall { .. })
    }
}
