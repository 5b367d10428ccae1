//! Hueswap application UI.
//!
//! # Design Notes
//! - One puzzle on screen at a time; the grid fills the largest square that fits.
//! - Pointer taps arm and swap cells; swaps animate before they are committed.
//! - Only the level is persisted. Every launch starts a fresh puzzle at that level.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use hueswap_game::Level;
use hueswap_generator::GenerateError;

use crate::{
    action::{self, Action, ActionRequestQueue},
    game_factory,
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct HueswapApp {
    app_state: AppState,
    ui_state: UiState,
}

impl HueswapApp {
    pub fn new(cc: &CreationContext<'_>) -> Result<Self, GenerateError> {
        let level = cc
            .storage
            .and_then(storage::load_level)
            .unwrap_or(Level::DEFAULT);
        log::info!("starting at level {level}");
        let session = game_factory::generate_session(level).inspect_err(|e| {
            log::error!("failed to generate the first puzzle at level {level}: {e}");
        })?;
        Ok(Self {
            app_state: AppState::new(level, session),
            ui_state: UiState::new(),
        })
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for HueswapApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.now = ctx.input(|i| i.time);
        for id in self.ui_state.tweens.finished(self.ui_state.now) {
            action_queue.request(Action::CompleteSwap(id));
        }
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let won_overlay = self.ui_state.is_won_overlay_visible();
        if !won_overlay {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
                action::handler::handle_all(
                    &mut self.app_state,
                    &mut self.ui_state,
                    &mut action_queue,
                );
            });
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if won_overlay {
            ui::won_overlay::show(ctx, &mut action_queue);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.ui_state.needs_repaint() {
            ctx.request_repaint();
        }

        self.apply_persistence(frame);
    }
}
