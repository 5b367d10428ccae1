use eframe::egui::{Color32, Visuals};
use hueswap_core::Rgb;

/// Opacity of the "×" drawn on fixed cells.
const FIXED_MARK_ALPHA: f32 = 0.7;

/// Color palette for the puzzle grid.
///
/// Cell fills come from the puzzle itself; the palette only covers what is drawn
/// on top of them.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub background: Color32,
    pub fixed_mark: Color32,
    pub selection_ring: Color32,
    pub next_level_button: Color32,
    pub next_level_text: Color32,
}

impl GridPalette {
    /// Initialize the palette using the current visuals.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let (fixed_mark, selection_ring) = if visuals.dark_mode {
            (Color32::from_gray(0x10), Color32::from_gray(0x20))
        } else {
            (Color32::BLACK, Color32::from_gray(0x33))
        };
        Self {
            background: visuals.extreme_bg_color,
            fixed_mark: fixed_mark.gamma_multiply(FIXED_MARK_ALPHA),
            selection_ring,
            next_level_button: Color32::from_rgb(0x2d, 0xc6, 0xff),
            next_level_text: Color32::WHITE,
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    pub fn new() -> Self {
        Self {
            light: GridPalette::from_visuals(&Visuals::light()),
            dark: GridPalette::from_visuals(&Visuals::dark()),
        }
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for GridTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub fn cell_fill(color: Rgb) -> Color32 {
    let [r, g, b] = color.to_array();
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Color32, Visuals};
    use hueswap_core::Rgb;

    use super::{GridTheme, cell_fill};

    #[test]
    fn palette_follows_dark_mode() {
        let theme = GridTheme::new();
        assert_eq!(
            theme.palette_for(&Visuals::dark()).background,
            Visuals::dark().extreme_bg_color
        );
        assert_eq!(
            theme.palette_for(&Visuals::light()).background,
            Visuals::light().extreme_bg_color
        );
        assert!(theme.light.fixed_mark.a() < 255);
    }

    #[test]
    fn cell_fill_keeps_channels() {
        assert_eq!(
            cell_fill(Rgb::new(0x12, 0x34, 0x56)),
            Color32::from_rgb(0x12, 0x34, 0x56)
        );
    }
}
