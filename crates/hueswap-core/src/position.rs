//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a square puzzle grid.
///
/// `row` advances downwards and `col` advances to the right; `(0, 0)` is the
/// top-left cell.
///
/// # Examples
///
/// ```
/// use hueswap_core::Position;
///
/// let positions: Vec<_> = Position::all(2).collect();
/// assert_eq!(
///     positions,
///     [
///         Position::new(0, 0),
///         Position::new(0, 1),
///         Position::new(1, 0),
///         Position::new(1, 1),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u16,
    col: u16,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u16 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u16 {
        self.col
    }

    /// Returns `true` if the position lies on a grid with `dimension` cells per side.
    #[must_use]
    pub const fn is_within(self, dimension: u16) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// Iterates over every position of a `dimension × dimension` grid in row-major order.
    pub fn all(dimension: u16) -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
