use hueswap_core::Position;
use hueswap_game::{CommitOutcome, Level, PuzzleSession, SwapId, TapOutcome};
use hueswap_generator::GenerateError;

use crate::{
    action::{Action, ActionRequestQueue},
    game_factory,
    state::{AppState, AppStateAccess, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };
    ctx.handle_action(action);
}

impl ActionContext<'_> {
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::TapCell(pos) => self.tap_cell(pos),
            Action::ClearSelection => self.app_state.session_mut().clear_selection(),
            Action::CompleteSwap(id) => self.complete_swap(id),
            Action::NextLevel => {
                if self.app_state.as_ref().session.is_solved() {
                    self.start_new_session();
                } else {
                    log::debug!("ignoring next level request on an unsolved puzzle");
                }
            }
            Action::Reset => self.start_new_session(),
            Action::ResetAll => {
                self.app_state.as_mut().level = Level::MIN;
                self.start_new_session();
            }
        }
    }

    fn tap_cell(&mut self, pos: Position) {
        match self.app_state.session_mut().tap(pos) {
            Ok(TapOutcome::SwapStarted(swap)) => {
                self.ui_state
                    .tweens
                    .start(swap.id(), swap.first(), swap.second(), self.ui_state.now);
            }
            Ok(TapOutcome::Armed(_) | TapOutcome::Disarmed) => {}
            Err(e) => log::debug!("ignoring tap on {pos}: {e}"),
        }
    }

    fn complete_swap(&mut self, id: SwapId) {
        let outcome = self.app_state.session_mut().complete_swap(id);
        if let CommitOutcome::Committed { solved: true } = outcome {
            let app_state = self.app_state.as_mut();
            let solved = app_state.level;
            app_state.level = solved.next();
            log::info!("level {solved} solved, next level is {}", app_state.level);
            self.ui_state.won_at = Some(self.ui_state.now);
        }
    }

    fn start_new_session(&mut self) {
        let level = self.app_state.as_ref().level;
        self.replace_session(level, game_factory::generate_session(level));
    }

    fn replace_session(&mut self, level: Level, result: Result<PuzzleSession, GenerateError>) {
        match result {
            Ok(session) => {
                *self.app_state.session_mut() = session;
                self.ui_state.reset_for_new_session();
                log::info!("started a new puzzle at level {level}");
            }
            Err(e) => log::error!("failed to generate a puzzle at level {level}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use hueswap_core::Position;
    use hueswap_game::{Level, PuzzleSession};
    use hueswap_generator::{GenerateError, PuzzleGenerator, PuzzleSeed};

    use super::{ActionContext, handle, handle_all};
    use crate::{
        action::{Action, ActionRequestQueue},
        state::{AppState, UiState},
        tween::SWAP_DURATION,
    };

    fn states(level: Level) -> (AppState, UiState) {
        let generator = PuzzleGenerator::default();
        let seed = PuzzleSeed::from_bytes([9; 32]);
        let session = PuzzleSession::generate_with_seed(&generator, level, seed).unwrap();
        (AppState::new(level, session), UiState::new())
    }

    /// Returns a pair of cells whose swap sends one identity home.
    fn next_fixing_pair(app_state: &AppState) -> Option<(Position, Position)> {
        let board = app_state.session.board();
        let misplaced = board.cells().find(|cell| !cell.is_home())?;
        let holder = board.cells().find(|cell| cell.identity == misplaced.home)?;
        Some((misplaced.home, holder.home))
    }

    /// Taps both cells and lets the animation run to completion.
    fn swap_through_actions(
        app_state: &mut AppState,
        ui_state: &mut UiState,
        (a, b): (Position, Position),
    ) {
        handle(app_state, ui_state, Action::TapCell(a));
        handle(app_state, ui_state, Action::TapCell(b));
        ui_state.now += SWAP_DURATION;
        let mut queue = ActionRequestQueue::default();
        for id in ui_state.tweens.finished(ui_state.now) {
            queue.request(Action::CompleteSwap(id));
        }
        handle_all(app_state, ui_state, &mut queue);
    }

    #[test]
    fn tap_pair_animates_then_commits() {
        let (mut app_state, mut ui_state) = states(Level::new(4).unwrap());
        let (a, b) = next_fixing_pair(&app_state).unwrap();
        let before = app_state.session.board().cell(a).unwrap().identity;

        handle(&mut app_state, &mut ui_state, Action::TapCell(a));
        assert_eq!(app_state.session.selection(), Some(a));
        handle(&mut app_state, &mut ui_state, Action::TapCell(b));
        assert!(ui_state.tweens.is_animating());
        assert_eq!(app_state.session.board().cell(a).unwrap().identity, before);

        ui_state.now = SWAP_DURATION;
        let finished = ui_state.tweens.finished(ui_state.now);
        assert_eq!(finished.len(), 1);
        handle(&mut app_state, &mut ui_state, Action::CompleteSwap(finished[0]));
        assert_eq!(app_state.session.board().cell(a).unwrap().identity, a);

        // a second completion of the same swap changes nothing
        let board = app_state.session.board().clone();
        handle(&mut app_state, &mut ui_state, Action::CompleteSwap(finished[0]));
        assert_eq!(app_state.session.board(), &board);
        assert_eq!(app_state.is_dirty(), app_state.session.is_solved());
    }

    #[test]
    fn rejected_and_cleared_taps_leave_board_alone() {
        let (mut app_state, mut ui_state) = states(Level::new(3).unwrap());
        let fixed = app_state
            .session
            .board()
            .cells()
            .find(|cell| !cell.movable)
            .unwrap()
            .home;
        let board = app_state.session.board().clone();

        handle(&mut app_state, &mut ui_state, Action::TapCell(fixed));
        handle(&mut app_state, &mut ui_state, Action::TapCell(Position::new(9, 9)));
        assert_eq!(app_state.session.selection(), None);

        let (a, _) = next_fixing_pair(&app_state).unwrap();
        handle(&mut app_state, &mut ui_state, Action::TapCell(a));
        handle(&mut app_state, &mut ui_state, Action::ClearSelection);
        assert_eq!(app_state.session.selection(), None);
        assert_eq!(app_state.session.board(), &board);
        assert!(!ui_state.tweens.is_animating());
    }

    #[test]
    fn solving_advances_level_and_next_level_regenerates() {
        let (mut app_state, mut ui_state) = states(Level::DEFAULT);
        handle(&mut app_state, &mut ui_state, Action::NextLevel);
        assert_eq!(app_state.session.board().dimension(), 2);
        assert!(!app_state.session.is_solved());

        while let Some(pair) = next_fixing_pair(&app_state) {
            swap_through_actions(&mut app_state, &mut ui_state, pair);
        }

        assert!(app_state.session.is_solved());
        assert!(app_state.is_dirty());
        assert_eq!(app_state.level, Level::DEFAULT.next());
        assert_eq!(ui_state.won_at, Some(ui_state.now));

        handle(&mut app_state, &mut ui_state, Action::NextLevel);
        assert_eq!(app_state.session.board().dimension(), 3);
        assert!(!app_state.session.is_solved());
        assert_eq!(ui_state.won_at, None);
    }

    #[test]
    fn reset_keeps_level_and_reset_all_returns_to_minimum() {
        let level = Level::new(5).unwrap();
        let (mut app_state, mut ui_state) = states(level);
        let (a, b) = next_fixing_pair(&app_state).unwrap();
        handle(&mut app_state, &mut ui_state, Action::TapCell(a));
        handle(&mut app_state, &mut ui_state, Action::TapCell(b));

        handle(&mut app_state, &mut ui_state, Action::Reset);
        assert_eq!(app_state.level, level);
        assert_eq!(app_state.session.board().dimension(), 5);
        assert!(!ui_state.tweens.is_animating());
        assert!(!app_state.is_dirty());

        handle(&mut app_state, &mut ui_state, Action::ResetAll);
        assert_eq!(app_state.level, Level::MIN);
        assert_eq!(app_state.session.board().dimension(), 2);
        assert!(app_state.is_dirty());
    }

    #[test]
    fn failed_generation_keeps_current_session() {
        let (mut app_state, mut ui_state) = states(Level::new(3).unwrap());
        let (a, _) = next_fixing_pair(&app_state).unwrap();
        handle(&mut app_state, &mut ui_state, Action::TapCell(a));
        let session = app_state.session.clone();

        let mut ctx = ActionContext {
            app_state: app_state.access(),
            ui_state: &mut ui_state,
        };
        ctx.replace_session(Level::new(3).unwrap(), Err(GenerateError::EmptyPalette));

        assert_eq!(app_state.session, session);
        assert_eq!(app_state.session.selection(), Some(a));
    }
}
