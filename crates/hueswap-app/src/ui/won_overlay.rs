use eframe::egui::{Button, Context, Id, Modal, RichText};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::GridTheme,
};

pub(crate) fn show(ctx: &Context, action_queue: &mut ActionRequestQueue) {
    let style = ctx.style();
    let grid_theme = GridTheme::new();
    let palette = grid_theme.palette_for(&style.visuals);

    Modal::new(Id::new("won_overlay")).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("You won!").strong().size(30.0));
            ui.add_space(8.0);
            let next_level = ui.add(
                Button::new(
                    RichText::new("Next level")
                        .strong()
                        .size(22.0)
                        .color(palette.next_level_text),
                )
                .fill(palette.next_level_button),
            );
            if ui.memory(|memory| memory.focused().is_none()) {
                next_level.request_focus();
            }
            if next_level.clicked() {
                action_queue.request(Action::NextLevel);
            }
        });
    });
}
