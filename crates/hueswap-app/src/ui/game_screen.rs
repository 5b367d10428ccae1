use eframe::egui::{Ui, Vec2};
use egui_extras::{Size, StripBuilder};

use super::{grid, status_line, toolbar};
use crate::{
    action::ActionRequestQueue,
    ui::{grid::GridViewModel, layout::LayoutScale, status_line::StatusLineViewModel},
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(grid_vm: GridViewModel, status_line_vm: StatusLineViewModel) -> Self {
        Self {
            grid_vm,
            status_line_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let bar_height = ui.spacing().interact_size.y;
    let bars = Vec2::new(0.0, 2.0 * bar_height + 4.0 * spacing.y);
    let grid_side = (ui.available_size() - bars).min_elem();
    let scale = LayoutScale::fit(grid_side, vm.grid_vm.dimension());
    let grid_side = scale.grid_side(vm.grid_vm.dimension());

    StripBuilder::new(ui)
        .size(Size::exact(bar_height))
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::remainder())
        .size(Size::exact(bar_height))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                toolbar::show(ui, action_queue);
            });
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, &scale, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_line_vm);
            });
        });
}
