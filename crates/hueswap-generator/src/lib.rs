//! Puzzle generation for Hueswap.
//!
//! A puzzle is generated in four steps:
//!
//! 1. pick a set of corner colors from the palette,
//! 2. build the [`ColorField`] spanned by those corners,
//! 3. choose the fixed cells ([`select_fixed`]),
//! 4. scramble the displayed identities of the movable cells ([`shuffle`]) until the
//!    arrangement is no longer solved.
//!
//! Every random decision is drawn from a PCG stream seeded by a [`PuzzleSeed`], so a
//! puzzle is fully reproducible from its seed, dimension and palette list.
//!
//! # Examples
//!
//! ```
//! use hueswap_generator::{PuzzleGenerator, fixed_cell_count};
//!
//! let generator = PuzzleGenerator::default();
//! let puzzle = generator.generate(4).unwrap();
//!
//! assert_eq!(puzzle.field.dimension(), 4);
//! assert_eq!(puzzle.fixed.len(), fixed_cell_count(4));
//! assert!(!puzzle.arrangement.is_solved());
//! ```

use hueswap_core::{Arrangement, CORNER_PALETTES, ColorField, Corners, FieldError, Position};
use rand::Rng as _;

pub use self::{
    partition::{fixed_cell_count, movable_positions, select_fixed},
    seed::{PuzzleSeed, PuzzleSeedParseError},
    shuffle::shuffle,
};

mod partition;
mod seed;
mod shuffle;

/// Upper bound on shuffle passes spent trying to leave the solved state.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Errors returned by puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// The color field could not be generated.
    #[display("invalid field parameters: {_0}")]
    Field(#[from] FieldError),
    /// More fixed cells were requested than the grid holds.
    #[display("cannot fix {count} cells on a grid of {cells} cells")]
    TooManyFixed {
        /// Requested number of fixed cells.
        count: usize,
        /// Number of cells on the grid.
        cells: usize,
    },
    /// The generator was created without any corner palettes.
    #[display("no corner palettes to choose from")]
    EmptyPalette,
}

/// A generated, shuffled puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// Corner colors of the field.
    pub corners: Corners,
    /// Unshuffled color field; `field[pos]` is the color that belongs at `pos`.
    pub field: ColorField,
    /// Fixed positions in row-major order.
    pub fixed: Vec<Position>,
    /// Shuffled arrangement of displayed identities.
    pub arrangement: Arrangement,
}

impl GeneratedPuzzle {
    /// Returns the number of cells per side.
    #[must_use]
    pub fn dimension(&self) -> u16 {
        self.field.dimension()
    }
}

/// Generates shuffled puzzles from a list of corner palettes.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    palettes: &'a [Corners],
}

impl Default for PuzzleGenerator<'static> {
    fn default() -> Self {
        Self::new(&CORNER_PALETTES)
    }
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator that picks corners uniformly from `palettes`.
    #[must_use]
    pub const fn new(palettes: &'a [Corners]) -> Self {
        Self { palettes }
    }

    /// Generates a puzzle with `dimension` cells per side from a random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, dimension: u16) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(dimension, PuzzleSeed::random())
    }

    /// Generates a puzzle with `dimension` cells per side from `seed`.
    ///
    /// The same seed, dimension and palette list always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyPalette`] if the generator has no palettes and
    /// [`GenerateError::Field`] if `dimension` is zero.
    pub fn generate_with_seed(
        &self,
        dimension: u16,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        if self.palettes.is_empty() {
            return Err(GenerateError::EmptyPalette);
        }
        let mut rng = seed.rng();
        let corners = self.palettes[rng.random_range(0..self.palettes.len())];
        generate_from_rng(corners, dimension, seed, &mut rng)
    }

    /// Generates a puzzle with explicit corner colors, ignoring the palette list.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Field`] if `dimension` is zero.
    pub fn generate_with_corners(
        &self,
        corners: Corners,
        dimension: u16,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        generate_from_rng(corners, dimension, seed, &mut seed.rng())
    }
}

fn generate_from_rng<R>(
    corners: Corners,
    dimension: u16,
    seed: PuzzleSeed,
    rng: &mut R,
) -> Result<GeneratedPuzzle, GenerateError>
where
    R: rand::Rng + ?Sized,
{
    let field = ColorField::generate(&corners, dimension)?;
    let fixed = select_fixed(dimension, fixed_cell_count(dimension), rng)?;
    let movable = movable_positions(dimension, &fixed);

    let mut arrangement = Arrangement::solved(dimension);
    if movable.len() < 2 {
        log::warn!(
            "puzzle with dimension {dimension} has {} movable cells and cannot be shuffled",
            movable.len()
        );
    } else {
        let mut attempts = 0;
        while arrangement.is_solved() && attempts < MAX_SHUFFLE_ATTEMPTS {
            if attempts > 0 {
                log::debug!("shuffle left the puzzle solved, retrying (attempt {attempts})");
            }
            shuffle(&mut arrangement, &movable, rng);
            attempts += 1;
        }
        if arrangement.is_solved() {
            log::warn!("puzzle is still solved after {MAX_SHUFFLE_ATTEMPTS} shuffles");
        }
    }

    log::info!(
        "generated puzzle: dimension={dimension}, fixed={}, misplaced={}, seed={seed}",
        fixed.len(),
        arrangement.misplaced_count()
    );

    Ok(GeneratedPuzzle {
        seed,
        corners,
        field,
        fixed,
        arrangement,
    })
}
