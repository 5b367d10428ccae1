#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) ring_radius: f32,
    pub(crate) ring_width: f32,
    pub(crate) mark_font_size: f32,
}

impl LayoutScale {
    pub(crate) const RING_RADIUS_FACTOR: f32 = 0.12;
    pub(crate) const RING_WIDTH_FACTOR: f32 = 0.03;
    pub(crate) const MARK_FONT_FACTOR: f32 = 0.45;
    const MIN_RING_WIDTH: f32 = 1.5;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            ring_radius: cell_size * Self::RING_RADIUS_FACTOR,
            ring_width: f32::max(cell_size * Self::RING_WIDTH_FACTOR, Self::MIN_RING_WIDTH),
            mark_font_size: cell_size * Self::MARK_FONT_FACTOR,
        }
    }

    /// Fits a `dimension × dimension` grid into a square of side `side`.
    #[must_use]
    pub(crate) fn fit(side: f32, dimension: u16) -> Self {
        Self::new(side.max(0.0) / f32::from(dimension.max(1)))
    }

    #[must_use]
    pub(crate) fn grid_side(&self, dimension: u16) -> f32 {
        self.cell_size * f32::from(dimension)
    }
}
