//! Selection of the cells that stay fixed for a whole puzzle.

use hueswap_core::Position;
use rand::{Rng, seq::index};

use crate::GenerateError;

/// Returns the number of fixed cells for a grid: `floor(dimension² / 3)`.
///
/// # Examples
///
/// ```
/// use hueswap_generator::fixed_cell_count;
///
/// assert_eq!(fixed_cell_count(1), 0);
/// assert_eq!(fixed_cell_count(2), 1);
/// assert_eq!(fixed_cell_count(3), 3);
/// assert_eq!(fixed_cell_count(5), 8);
/// ```
#[must_use]
pub fn fixed_cell_count(dimension: u16) -> usize {
    cell_count(dimension) / 3
}

/// Picks `count` distinct positions uniformly at random, without replacement.
///
/// The returned positions are sorted in row-major order.
///
/// # Errors
///
/// Returns [`GenerateError::TooManyFixed`] if `count` exceeds the number of cells.
pub fn select_fixed<R>(
    dimension: u16,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Position>, GenerateError>
where
    R: Rng + ?Sized,
{
    let cells = cell_count(dimension);
    if count > cells {
        return Err(GenerateError::TooManyFixed { count, cells });
    }
    let all = Position::all(dimension).collect::<Vec<_>>();
    let mut fixed = index::sample(rng, cells, count)
        .into_iter()
        .map(|i| all[i])
        .collect::<Vec<_>>();
    fixed.sort_unstable();
    Ok(fixed)
}

/// Returns every position of the grid that is not in `fixed`, in row-major order.
#[must_use]
pub fn movable_positions(dimension: u16, fixed: &[Position]) -> Vec<Position> {
    Position::all(dimension)
        .filter(|pos| !fixed.contains(pos))
        .collect()
}

fn cell_count(dimension: u16) -> usize {
    let side = usize::from(dimension);
    side * side
}
