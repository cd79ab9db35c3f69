mod coord;

pub use self::coord::Coord;

use std::ops::{Deref, Index, IndexMut};

/// A container of elements arranged in a rectangle, stored in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new `Grid` with the specified dimensions, filled with a value
    pub fn with_value(height: usize, width: usize, val: T) -> Grid<T>
    where
        T: Clone,
    {
        Grid {
            width,
            height,
            elements: vec![val; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if coord.row() < self.height && coord.col() < self.width {
            Some(&self[coord])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on zero
        self.elements.chunks(self.width.max(1))
    }
}

impl<T> Deref for Grid<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[coord.as_index(self.width)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        &mut self.elements[coord.as_index(self.width)]
    }
}
