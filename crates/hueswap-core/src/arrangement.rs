//! Displayed identities of grid positions.

use crate::{Grid, Position};

/// Records, for every grid position, which original cell it currently displays.
///
/// A freshly created arrangement is solved: every position displays itself.
/// Swapping two positions exchanges the identities they display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrangement {
    identities: Grid<Position>,
}

impl Arrangement {
    /// Creates a solved arrangement with `dimension` cells per side.
    #[must_use]
    pub fn solved(dimension: u16) -> Self {
        Self {
            identities: Grid::from_fn(dimension, |pos| pos),
        }
    }

    /// Returns the number of cells per side.
    #[must_use]
    pub fn dimension(&self) -> u16 {
        self.identities.dimension()
    }

    /// Returns the identity displayed at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn identity(&self, pos: Position) -> Option<Position> {
        self.identities.get(pos).copied()
    }

    /// Returns `true` if `pos` displays its own identity.
    #[must_use]
    pub fn is_home(&self, pos: Position) -> bool {
        self.identity(pos) == Some(pos)
    }

    /// Returns `true` if every position displays its own identity.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.identities.iter().all(|(pos, identity)| pos == *identity)
    }

    /// Returns the number of positions not displaying their own identity.
    #[must_use]
    pub fn misplaced_count(&self) -> usize {
        self.identities
            .iter()
            .filter(|(pos, identity)| pos != *identity)
            .count()
    }

    /// Exchanges the identities displayed at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.identities.swap(a, b);
    }

    /// Iterates over all positions and the identities they display.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.identities.iter().map(|(pos, identity)| (pos, *identity))
    }
}
