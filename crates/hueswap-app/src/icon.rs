//! Window icon rendered from a built-in palette.

use eframe::egui::IconData;
use hueswap_core::{CORNER_PALETTES, ColorField, FieldError, Position};

const ICON_TILES: u16 = 4;
const TILE_SIZE: u32 = 16;
const TILE_GAP: u32 = 2;

/// Renders a solved 4×4 board as an RGBA icon.
pub fn app_icon() -> Result<IconData, FieldError> {
    let field = ColorField::generate(&CORNER_PALETTES[0], ICON_TILES)?;
    let side = TILE_SIZE * u32::from(ICON_TILES);

    let mut rgba = Vec::new();
    for row in 0..ICON_TILES {
        for py in 0..TILE_SIZE {
            for col in 0..ICON_TILES {
                let color = field[Position::new(row, col)];
                for px in 0..TILE_SIZE {
                    let gap = px >= TILE_SIZE - TILE_GAP || py >= TILE_SIZE - TILE_GAP;
                    let pixel = if gap {
                        [0, 0, 0, 0]
                    } else {
                        [color.r, color.g, color.b, u8::MAX]
                    };
                    rgba.extend_from_slice(&pixel);
                }
            }
        }
    }

    Ok(IconData {
        rgba,
        width: side,
        height: side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(icon: &IconData, x: u32, y: u32) -> [u8; 4] {
        let offset = usize::try_from((y * icon.width + x) * 4).unwrap();
        icon.rgba[offset..offset + 4].try_into().unwrap()
    }

    #[test]
    fn icon_shows_solved_field() {
        let icon = app_icon().unwrap();
        let field = ColorField::generate(&CORNER_PALETTES[0], ICON_TILES).unwrap();
        assert_eq!(icon.width, 64);
        assert_eq!(icon.height, 64);
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);

        let top_left = field[Position::new(0, 0)];
        assert_eq!(pixel(&icon, 0, 0), [top_left.r, top_left.g, top_left.b, 255]);
        let bottom_right = field[Position::new(3, 3)];
        assert_eq!(
            pixel(&icon, 48, 48),
            [bottom_right.r, bottom_right.g, bottom_right.b, 255]
        );
        // tiles are separated by transparent gutters
        assert_eq!(pixel(&icon, 15, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(&icon, 0, 15), [0, 0, 0, 0]);
    }
}
