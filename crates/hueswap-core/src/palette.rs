//! Corner color sets puzzles are drawn from.

use crate::{Corners, Rgb};

const fn corners(tl: u32, tr: u32, br: u32, bl: u32) -> Corners {
    Corners::new(
        Rgb::from_packed(tl),
        Rgb::from_packed(tr),
        Rgb::from_packed(br),
        Rgb::from_packed(bl),
    )
}

/// The corner color sets a new puzzle picks from uniformly at random.
///
/// Every set has four distinct corners, so even the smallest grid shows a
/// gradient in both directions.
pub const CORNER_PALETTES: [Corners; 10] = [
    corners(0xff_5f6d, 0xff_c371, 0x2d_c6ff, 0x6a_3093),
    corners(0xf7_97f0, 0xff_f6b7, 0x62_f4c7, 0x3a_4ed5),
    corners(0xfe_e140, 0xfa_709a, 0x30_1b5c, 0x00_b4a0),
    corners(0x43_cea2, 0x18_5a9d, 0xe9_4057, 0xf8_e5a6),
    corners(0xff_9a8b, 0xff_6a88, 0x55_2fa0, 0xb8_f2e6),
    corners(0x0b_486b, 0xf5_6217, 0xff_ee8c, 0x63_c6a1),
    corners(0xc3_37e0, 0x4c_c9f0, 0xe8_ff9c, 0xff_8552),
    corners(0xff_d3a5, 0xfd_6585, 0x12_2f5d, 0x7e_e8c3),
    corners(0x2b_2d42, 0x8d_99ae, 0xf4_d35e, 0xee_6352),
    corners(0x9b_f6ff, 0xff_b3c6, 0xa0_2c5d, 0x1e_6f5c),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_palettes_have_distinct_corners() {
        for (i, palette) in CORNER_PALETTES.iter().enumerate() {
            let distinct = palette.to_array().into_iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), 4, "palette {i} repeats a corner color");
        }
    }

    #[test]
    fn test_palettes_are_unique() {
        let distinct = CORNER_PALETTES.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), CORNER_PALETTES.len());
    }
}
