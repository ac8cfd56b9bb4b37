use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    #[error("given coordinates are not on the board")]
    OutOfBounds,
    #[error("the pawn cannot reach that square")]
    UnreachableSquare,
    #[error("there are no walls left to place")]
    NoWallsLeft,
    #[error("a wall already occupies that intersection")]
    IntersectionOccupied,
    #[error("a wall of the same orientation directly abuts that one")]
    WallOverlap,
    #[error("the wall would cut a pawn off from its goal row")]
    GoalCutOff,
    #[error("the game is already over")]
    GameOver,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot board size {actual} does not match the expected {expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },
    #[error("invalid player id {0}")]
    InvalidPlayer(u8),
    #[error("missing entry for player {0:?}")]
    MissingPlayer(crate::Player),
    #[error("pawn position is out of bounds")]
    PawnOutOfBounds,
    #[error("both pawns occupy the same square")]
    PawnsOverlap,
    #[error("placed wall is out of bounds or overlaps another wall")]
    InvalidWall,
    #[error("a placed move entry is not a wall")]
    NotAWall,
}
