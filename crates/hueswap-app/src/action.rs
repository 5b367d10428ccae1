use std::mem;

use hueswap_core::Position;
use hueswap_game::SwapId;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// A pointer tap on the cell at the given grid position.
    TapCell(Position),
    ClearSelection,
    /// The swap animation for the given swap has finished.
    CompleteSwap(SwapId),
    /// Start the puzzle for the stored level after a win.
    NextLevel,
    /// Regenerate the puzzle at the stored level.
    Reset,
    /// Store the minimum level and regenerate.
    ResetAll,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
