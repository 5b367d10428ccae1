use std::sync::Arc;

use eframe::egui::{Align2, CursorIcon, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use hueswap_core::{Grid, Position, Rgb};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        grid_theme::{self, GridPalette, GridTheme},
        layout::LayoutScale,
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const FIXED = 0b0000_0010;
        const IN_FLIGHT = 0b0000_0100;
        const TAPPABLE = 0b0000_1000;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GridCell {
    pub(crate) color: Rgb,
    pub(crate) visual_state: GridVisualState,
    /// Displacement of an animating cell, in cell units.
    pub(crate) offset: Vec2,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    grid: Grid<GridCell>,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(grid: Grid<GridCell>) -> Self {
        Self { grid }
    }

    #[must_use]
    pub(crate) fn dimension(&self) -> u16 {
        self.grid.dimension()
    }
}

const MARK: &str = "×";

fn cell_rect(origin: Pos2, pos: Position, cell_size: f32) -> Rect {
    let min = origin
        + Vec2::new(
            cell_size * f32::from(pos.col()),
            cell_size * f32::from(pos.row()),
        );
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::new();
    let palette = grid_theme.palette_for(visuals);
    let grid_side = scale.grid_side(vm.dimension());

    let (grid_rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());

    let painter = ui.painter();
    painter.rect_filled(grid_rect, 0.0, palette.background);

    // cells in motion are painted last so they pass over the others
    let (moving, resting): (Vec<_>, Vec<_>) = vm
        .grid
        .iter()
        .partition(|(_, cell)| cell.visual_state.contains(GridVisualState::IN_FLIGHT));
    for (pos, cell) in resting.into_iter().chain(moving) {
        let rect = cell_rect(grid_rect.min, pos, cell_size).translate(cell.offset * cell_size);
        draw_cell(painter, rect, cell, scale, palette);
    }

    for (pos, cell) in vm.grid.iter() {
        if !cell.visual_state.contains(GridVisualState::TAPPABLE) {
            continue;
        }
        let rect = cell_rect(grid_rect.min, pos, cell_size);
        let response = ui
            .interact(rect, ui.id().with((pos.row(), pos.col())), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.clicked() {
            action_queue.request(Action::TapCell(pos));
        }
    }
}

fn draw_cell(
    painter: &Painter,
    rect: Rect,
    cell: &GridCell,
    scale: &LayoutScale,
    palette: &GridPalette,
) {
    painter.rect_filled(rect, 0.0, grid_theme::cell_fill(cell.color));

    if cell.visual_state.contains(GridVisualState::FIXED) {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            MARK,
            FontId::proportional(scale.mark_font_size),
            palette.fixed_mark,
        );
    }
    if cell.visual_state.contains(GridVisualState::SELECTED) {
        painter.circle_stroke(
            rect.center(),
            scale.ring_radius,
            Stroke::new(scale.ring_width, palette.selection_ring),
        );
    }
}
