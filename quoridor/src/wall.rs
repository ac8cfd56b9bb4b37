use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

/// A two-unit wall anchored at intersection `(x, y)` with
/// `0 <= x, y < N - 1`. A horizontal wall blocks the two vertical edges
/// between rows `y` and `y + 1` at columns `x` and `x + 1`; a vertical wall
/// blocks the two horizontal edges between columns `x` and `x + 1` at rows
/// `y` and `y + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(x: usize, y: usize, orientation: Orientation) -> Self {
        Wall { x, y, orientation }
    }

    pub const fn horizontal(x: usize, y: usize) -> Self {
        Wall::new(x, y, Orientation::Horizontal)
    }

    pub const fn vertical(x: usize, y: usize) -> Self {
        Wall::new(x, y, Orientation::Vertical)
    }

    /// Whether two same-orientation walls sit one step apart along their
    /// own axis, which would merge them into a three-unit wall.
    pub fn abuts(self, other: Wall) -> bool {
        self.orientation == other.orientation
            && match self.orientation {
                Orientation::Horizontal => {
                    self.y == other.y && (self.x + 1 == other.x || other.x + 1 == self.x)
                }
                Orientation::Vertical => {
                    self.x == other.x && (self.y + 1 == other.y || other.y + 1 == self.y)
                }
            }
    }
}
