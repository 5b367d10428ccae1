use eframe::egui::{Ui, Vec2};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn show(ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(8.0, 0.0);
        if ui
            .button("Reset")
            .on_hover_text("New puzzle at the current level (Ctrl+R)")
            .clicked()
        {
            action_queue.request(Action::Reset);
        }
        if ui
            .button("Reset all")
            .on_hover_text("Start over from the first level (Ctrl+Shift+R)")
            .clicked()
        {
            action_queue.request(Action::ResetAll);
        }
    });
}
