use eframe::egui::Vec2;
use hueswap_core::{Grid, Rgb};

use crate::{
    state::{AppState, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        status_line::{GameStatus, StatusLineViewModel},
    },
};

/// How far solved cells fade toward white while the won overlay is shown.
const WON_FADE: f32 = 0.3;

fn build_grid(app_state: &AppState, ui_state: &UiState) -> Grid<GridCell> {
    let session = &app_state.session;
    let board = session.board();
    let faded = ui_state.is_won_overlay_visible();

    Grid::from_fn(board.dimension(), |pos| {
        let Some(cell) = board.cell(pos) else {
            unreachable!("grid and board share a dimension");
        };
        let mut visual_state = GridVisualState::empty();
        if !cell.movable {
            visual_state |= GridVisualState::FIXED;
        }
        if session.selection() == Some(pos) {
            visual_state |= GridVisualState::SELECTED;
        }
        if session.tap_capability(pos).is_ok() {
            visual_state |= GridVisualState::TAPPABLE;
        }
        let offset = ui_state.tweens.offset(pos, ui_state.now);
        if offset.is_some() {
            visual_state |= GridVisualState::IN_FLIGHT;
        }
        let color = if faded {
            cell.color.lerp(Rgb::WHITE, WON_FADE)
        } else {
            cell.color
        };
        GridCell {
            color,
            visual_state,
            offset: offset.unwrap_or(Vec2::ZERO),
        }
    })
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let status = if app_state.session.is_solved() {
        GameStatus::Solved
    } else {
        GameStatus::InProgress
    };
    // the stored level moves on as soon as a puzzle is solved; show the one on screen
    let level = app_state.session.board().dimension();
    let status_line_vm = StatusLineViewModel::new(level, status);
    let grid_vm = GridViewModel::new(build_grid(app_state, ui_state));
    GameScreenViewModel::new(grid_vm, status_line_vm)
}
