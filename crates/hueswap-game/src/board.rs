use hueswap_core::{Arrangement, ColorField, Grid, Position, Rgb};
use hueswap_generator::GeneratedPuzzle;

/// A snapshot of one grid position.
///
/// `color` is always the field color of `identity`, never of `home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The position this cell occupies.
    pub home: Position,
    /// The original cell whose color this position currently shows.
    pub identity: Position,
    /// The color currently shown.
    pub color: Rgb,
    /// Whether the cell can take part in swaps.
    pub movable: bool,
}

impl Cell {
    /// Returns `true` if the cell shows its own color.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.home == self.identity
    }
}

/// The live puzzle board.
///
/// Colors are looked up from the field through the arrangement, so a cell's color
/// can never disagree with its displayed identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    field: ColorField,
    arrangement: Arrangement,
    movable: Grid<bool>,
}

impl Board {
    /// Creates a board from a generated puzzle, keeping its shuffled arrangement.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle's field and arrangement disagree on the dimension.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            seed: _,
            corners: _,
            field,
            fixed,
            arrangement,
        } = puzzle;
        assert_eq!(field.dimension(), arrangement.dimension());
        Self::with_arrangement(field, &fixed, arrangement)
    }

    /// Creates an unshuffled (won) board.
    #[must_use]
    pub fn solved(field: ColorField, fixed: &[Position]) -> Self {
        let arrangement = Arrangement::solved(field.dimension());
        Self::with_arrangement(field, fixed, arrangement)
    }

    fn with_arrangement(field: ColorField, fixed: &[Position], arrangement: Arrangement) -> Self {
        let mut movable = Grid::from_fn(field.dimension(), |_| true);
        for pos in fixed {
            if let Some(slot) = movable.get_mut(*pos) {
                *slot = false;
            }
        }
        Self {
            field,
            arrangement,
            movable,
        }
    }

    /// Returns the number of cells per side.
    #[must_use]
    pub fn dimension(&self) -> u16 {
        self.field.dimension()
    }

    /// Returns the unshuffled color field.
    #[must_use]
    pub fn field(&self) -> &ColorField {
        &self.field
    }

    /// Returns the current arrangement of displayed identities.
    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        let identity = self.arrangement.identity(pos)?;
        Some(Cell {
            home: pos,
            identity,
            color: self.field[identity],
            movable: self.movable[pos],
        })
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.arrangement.iter().map(|(home, identity)| Cell {
            home,
            identity,
            color: self.field[identity],
            movable: self.movable[home],
        })
    }

    /// Returns `true` if `pos` is on the board and movable.
    #[must_use]
    pub fn is_movable(&self, pos: Position) -> bool {
        self.movable.get(pos).copied().unwrap_or(false)
    }

    /// Returns the number of fixed cells.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.movable.values().filter(|movable| !**movable).count()
    }

    /// Returns `true` if every cell shows its own color.
    ///
    /// A board fresh from [`Board::solved`] is always won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.arrangement.is_solved()
    }

    pub(crate) fn identity(&self, pos: Position) -> Option<Position> {
        self.arrangement.identity(pos)
    }

    pub(crate) fn swap(&mut self, a: Position, b: Position) {
        debug_assert!(self.is_movable(a) && self.is_movable(b));
        self.arrangement.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use hueswap_core::{CORNER_PALETTES, Corners};
    use hueswap_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn field(dimension: u16) -> ColorField {
        ColorField::generate(&CORNER_PALETTES[0], dimension).unwrap()
    }

    #[test]
    fn test_solved_board_is_won() {
        let board = Board::solved(field(4), &[Position::new(0, 0), Position::new(3, 1)]);
        assert!(board.is_won());
        assert_eq!(board.fixed_count(), 2);
        assert!(!board.is_movable(Position::new(0, 0)));
        assert!(!board.is_movable(Position::new(3, 1)));
        assert!(board.is_movable(Position::new(1, 1)));
        assert!(!board.is_movable(Position::new(4, 4)));
        assert!(board.cells().all(|cell| cell.is_home()));
    }

    #[test]
    fn test_cell_color_follows_identity() {
        let mut board = Board::solved(field(3), &[]);
        let a = Position::new(0, 0);
        let b = Position::new(2, 1);
        board.swap(a, b);

        let cell_a = board.cell(a).unwrap();
        assert_eq!(cell_a.home, a);
        assert_eq!(cell_a.identity, b);
        assert_eq!(cell_a.color, board.field()[b]);
        assert!(!cell_a.is_home());

        for cell in board.cells() {
            assert_eq!(cell.color, board.field()[cell.identity]);
        }
        assert!(board.cell(Position::new(3, 0)).is_none());
    }

    #[test]
    fn test_swap_then_swap_back_restores_identities() {
        let mut board = Board::solved(field(2), &[]);
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);
        board.swap(a, b);
        assert!(!board.is_won());
        assert_eq!(board.cell(a).unwrap().identity, b);
        assert_eq!(board.cell(b).unwrap().identity, a);
        board.swap(a, b);
        assert!(board.is_won());
    }

    #[test]
    fn test_new_keeps_generated_arrangement() {
        let generator = PuzzleGenerator::default();
        let corners: Corners = CORNER_PALETTES[3];
        let puzzle = generator
            .generate_with_corners(corners, 5, PuzzleSeed::from_bytes([7; 32]))
            .unwrap();
        let board = Board::new(puzzle.clone());

        assert_eq!(board.dimension(), 5);
        assert_eq!(board.arrangement(), &puzzle.arrangement);
        assert_eq!(board.fixed_count(), puzzle.fixed.len());
        assert!(!board.is_won());
        for pos in &puzzle.fixed {
            let cell = board.cell(*pos).unwrap();
            assert!(!cell.movable);
            assert!(cell.is_home());
        }
    }
}
