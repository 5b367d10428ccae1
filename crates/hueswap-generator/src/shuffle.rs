//! Scrambling of displayed identities among movable cells.

use hueswap_core::{Arrangement, Position};
use rand::Rng;

/// Scrambles `arrangement` by exchanging identities among `movable` positions only.
///
/// Each movable position in turn is paired with a uniformly random movable
/// position (possibly itself) and the two exchange their displayed identities.
/// This is a single pass of pairwise swaps: it does not guarantee that every cell
/// ends up misplaced, nor even that the arrangement is unsolved afterwards.
/// Positions not listed in `movable` are never touched.
///
/// # Panics
///
/// Panics if a position in `movable` lies outside the arrangement.
pub fn shuffle<R>(arrangement: &mut Arrangement, movable: &[Position], rng: &mut R)
where
    R: Rng + ?Sized,
{
    if movable.is_empty() {
        return;
    }
    for &pos in movable {
        let other = movable[rng.random_range(0..movable.len())];
        arrangement.swap(pos, other);
    }
}
