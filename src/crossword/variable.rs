use std::fmt;
use std::fmt::Display;

use crate::collections::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

/// A slot for one word in the crossword
///
/// Two variables are equal when they start at the same cell, run in the same direction
/// and have the same length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    i: usize,
    j: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    pub fn new(i: usize, j: usize, direction: Direction, length: usize) -> Self {
        Self {
            i,
            j,
            direction,
            length,
        }
    }

    /// The row of the first cell
    pub fn i(&self) -> usize {
        self.i
    }

    /// The column of the first cell
    pub fn j(&self) -> usize {
        self.j
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The number of letters in the slot
    pub fn length(&self) -> usize {
        self.length
    }

    /// The coordinate of the `k`th letter of the slot
    pub fn cell(&self, k: usize) -> Coord {
        debug_assert!(k < self.length);
        match self.direction {
            Direction::Across => Coord::new(self.i, self.j + k),
            Direction::Down => Coord::new(self.i + k, self.j),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.i,
            self.j,
            self.direction.name(),
            self.length
        )
    }
}
