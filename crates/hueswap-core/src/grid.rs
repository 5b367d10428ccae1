//! Square row-major container indexed by [`Position`].

use std::ops::{Index, IndexMut};

use crate::Position;

/// A `dimension × dimension` grid of values.
///
/// # Examples
///
/// ```
/// use hueswap_core::{Grid, Position};
///
/// let mut grid = Grid::from_fn(3, |pos| pos.row() * 10 + pos.col());
/// assert_eq!(grid[Position::new(2, 1)], 21);
///
/// grid.swap(Position::new(0, 0), Position::new(2, 1));
/// assert_eq!(grid[Position::new(0, 0)], 21);
/// assert_eq!(grid.get(Position::new(3, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    dimension: u16,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every position in row-major order.
    pub fn from_fn(dimension: u16, f: impl FnMut(Position) -> T) -> Self {
        let cells = Position::all(dimension).map(f).collect();
        Self { dimension, cells }
    }

    /// Returns the number of cells per side.
    #[must_use]
    pub fn dimension(&self) -> u16 {
        self.dimension
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.dimension)
    }

    /// Returns a reference to the value at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.offset(pos).map(|i| &mut self.cells[i])
    }

    /// Exchanges the values at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) {
        let a = self.offset_or_panic(a);
        let b = self.offset_or_panic(b);
        self.cells.swap(a, b);
    }

    /// Iterates over all positions of this grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        Position::all(self.dimension)
    }

    /// Iterates over all positions and their values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::all(self.dimension).zip(&self.cells)
    }

    /// Iterates over all values in row-major order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| {
            usize::from(pos.row()) * usize::from(self.dimension) + usize::from(pos.col())
        })
    }

    fn offset_or_panic(&self, pos: Position) -> usize {
        match self.offset(pos) {
            Some(i) => i,
            None => panic!(
                "position {pos} is out of bounds for dimension {}",
                self.dimension
            ),
        }
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.offset_or_panic(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let i = self.offset_or_panic(pos);
        &mut self.cells[i]
    }
}
