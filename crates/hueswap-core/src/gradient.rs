//! One-dimensional color gradients.

use crate::Rgb;

/// Returns `count` colors evenly spaced between `from` and `to`.
///
/// The first element is exactly `from` and the last exactly `to`; every channel
/// of the intermediate colors is rounded to the nearest integer (ties round up).
/// A `count` of 1 yields `[from]` and a `count` of 0 yields an empty vector.
///
/// For `count >= 2` interpolation is computed with integer arithmetic, so the
/// result is symmetric: `interpolate(a, b, n)[i] == interpolate(b, a, n)[n - 1 - i]`.
/// A single color always comes from `from`, so `count == 1` is not symmetric.
///
/// # Examples
///
/// ```
/// use hueswap_core::{Rgb, interpolate};
///
/// let colors = interpolate(Rgb::new(0, 0, 0), Rgb::new(90, 30, 0), 4);
/// assert_eq!(
///     colors,
///     [
///         Rgb::new(0, 0, 0),
///         Rgb::new(30, 10, 0),
///         Rgb::new(60, 20, 0),
///         Rgb::new(90, 30, 0),
///     ]
/// );
/// ```
#[must_use]
pub fn interpolate(from: Rgb, to: Rgb, count: usize) -> Vec<Rgb> {
    match count {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let steps = count - 1;
            (0..count)
                .map(|i| {
                    Rgb::new(
                        weighted_channel(from.r, to.r, steps - i, i),
                        weighted_channel(from.g, to.g, steps - i, i),
                        weighted_channel(from.b, to.b, steps - i, i),
                    )
                })
                .collect()
        }
    }
}

// (a * wa + b * wb) / (wa + wb), rounded half up. `wa + wb` must be non-zero.
fn weighted_channel(a: u8, b: u8, wa: usize, wb: usize) -> u8 {
    let total = wa + wb;
    let weighted = usize::from(a) * wa + usize::from(b) * wb;
    let rounded = (2 * weighted + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_rgb() -> impl Strategy<Value = Rgb> {
        any::<[u8; 3]>().prop_map(Rgb::from)
    }

    #[test]
    fn test_small_counts() {
        let a = Rgb::new(1, 2, 3);
        let b = Rgb::new(200, 100, 50);
        assert!(interpolate(a, b, 0).is_empty());
        assert_eq!(interpolate(a, b, 1), [a]);
        assert_eq!(interpolate(a, b, 2), [a, b]);
    }

    #[test]
    fn test_single_color_is_start_color() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(0, 0, 1);
        assert_eq!(interpolate(a, b, 1), [a]);
        assert_eq!(interpolate(b, a, 1), [b]);
    }

    #[test]
    fn test_rounding_is_half_up() {
        // midpoint of 0 and 1 is 0.5
        let colors = interpolate(Rgb::new(0, 0, 0), Rgb::new(1, 1, 1), 3);
        assert_eq!(colors[1], Rgb::new(1, 1, 1));
        let colors = interpolate(Rgb::new(0, 0, 0), Rgb::new(255, 0, 0), 3);
        assert_eq!(colors[1], Rgb::new(128, 0, 0));
    }

    #[test]
    fn test_identical_endpoints_are_constant() {
        let c = Rgb::new(17, 34, 51);
        assert!(interpolate(c, c, 9).into_iter().all(|x| x == c));
    }

    proptest! {
        #[test]
        fn prop_endpoints_are_exact(a in arb_rgb(), b in arb_rgb(), n in 2_usize..64) {
            let colors = interpolate(a, b, n);
            prop_assert_eq!(colors.len(), n);
            prop_assert_eq!(colors[0], a);
            prop_assert_eq!(colors[n - 1], b);
        }

        #[test]
        fn prop_symmetric(a in arb_rgb(), b in arb_rgb(), n in 2_usize..64) {
            let forward = interpolate(a, b, n);
            let mut backward = interpolate(b, a, n);
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_channels_are_monotonic(a in arb_rgb(), b in arb_rgb(), n in 2_usize..64) {
            let colors = interpolate(a, b, n);
            for pair in colors.windows(2) {
                let [x, y] = [pair[0], pair[1]];
                for (cx, cy, ca, cb) in [(x.r, y.r, a.r, b.r), (x.g, y.g, a.g, b.g), (x.b, y.b, a.b, b.b)] {
                    if ca <= cb {
                        prop_assert!(cx <= cy);
                    } else {
                        prop_assert!(cx >= cy);
                    }
                }
            }
        }
    }
}
