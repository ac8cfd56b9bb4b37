use arrayvec::ArrayVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos<const N: usize> {
    pub x: usize,
    pub y: usize,
}

impl<const N: usize> Pos<N> {
    pub fn neighbors(self) -> ArrayVec<Pos<N>, 4> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.step(direction))
            .collect()
    }

    /// The adjacent position in the given direction, if it is on the board.
    pub fn step(self, direction: Direction) -> Option<Pos<N>> {
        let Pos { x, y } = self;
        match direction {
            Direction::Up => (y < N - 1).then(|| Pos { x, y: y + 1 }),
            Direction::Down => (y > 0).then(|| Pos { x, y: y - 1 }),
            Direction::Left => (x > 0).then(|| Pos { x: x - 1, y }),
            Direction::Right => (x < N - 1).then(|| Pos { x: x + 1, y }),
        }
    }

    /// mirror along the vertical axis
    #[must_use]
    pub const fn mirror(&self) -> Self {
        Pos {
            x: N - 1 - self.x,
            y: self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The two directions orthogonal to this one,
    /// used for side-steps around a blocked jump.
    #[must_use]
    pub const fn orthogonal(self) -> [Self; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Down, Direction::Up],
        }
    }

    /// mirror along the vertical axis
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            vertical => vertical,
        }
    }
}
