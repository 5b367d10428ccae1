use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum GameStatus {
    InProgress,
    Solved,
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    level: u16,
    status: GameStatus,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(level: u16, status: GameStatus) -> Self {
        Self { level, status }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Level {}", vm.level)).strong());
        ui.separator();
        match vm.status {
            GameStatus::InProgress => {
                ui.label("Tap two cells to swap them.");
            }
            GameStatus::Solved => {
                ui.label(RichText::new("Solved!").color(ui.visuals().warn_fg_color));
            }
        }
    });
}
