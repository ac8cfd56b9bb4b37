use std::collections::VecDeque;

use crate::{
    pos::{Direction, Pos},
    wall::{Orientation, Wall},
};

const fn bit(direction: Direction) -> u8 {
    match direction {
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 4,
        Direction::Right => 8,
    }
}

/// Per-cell adjacency for the pawn-movement grid. Each cell holds a bitmask
/// of the directions a pawn may leave it in. Edges are only ever removed
/// (by wall placement), never re-added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<const N: usize> {
    edges: [[u8; N]; N],
}

impl<const N: usize> Default for Graph<N> {
    fn default() -> Self {
        let mut edges = [[0u8; N]; N];
        for (x, column) in edges.iter_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                let pos: Pos<N> = Pos { x, y };
                for direction in Direction::ALL {
                    if pos.step(direction).is_some() {
                        *cell |= bit(direction);
                    }
                }
            }
        }
        Graph { edges }
    }
}

impl<const N: usize> Graph<N> {
    pub fn connected(&self, pos: Pos<N>, direction: Direction) -> bool {
        self.edges[pos.x][pos.y] & bit(direction) != 0
    }

    /// Remove the edge in both directions.
    pub fn disconnect(&mut self, pos: Pos<N>, direction: Direction) {
        if let Some(neighbor) = pos.step(direction) {
            self.edges[pos.x][pos.y] &= !bit(direction);
            self.edges[neighbor.x][neighbor.y] &= !bit(direction.opposite());
        }
    }

    /// Sever the two edge pairs blocked by the given wall.
    pub fn remove_wall(&mut self, wall: &Wall) {
        let Wall { x, y, orientation } = *wall;
        match orientation {
            Orientation::Horizontal => {
                self.disconnect(Pos { x, y }, Direction::Up);
                self.disconnect(Pos { x: x + 1, y }, Direction::Up);
            }
            Orientation::Vertical => {
                self.disconnect(Pos { x, y }, Direction::Right);
                self.disconnect(Pos { x, y: y + 1 }, Direction::Right);
            }
        }
    }

    /// Breadth-first search from `start` for any cell in `goal_row`.
    pub fn has_path(&self, start: Pos<N>, goal_row: usize) -> bool {
        let mut seen = [[false; N]; N];
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(pos) = queue.pop_front() {
            if seen[pos.x][pos.y] {
                continue;
            }
            seen[pos.x][pos.y] = true;
            if pos.y == goal_row {
                return true;
            }
            for direction in Direction::ALL {
                if self.connected(pos, direction) {
                    if let Some(neighbor) = pos.step(direction) {
                        if !seen[neighbor.x][neighbor.y] {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }
        false
    }
}
