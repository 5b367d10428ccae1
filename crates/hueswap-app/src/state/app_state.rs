use hueswap_game::{Level, PuzzleSession};

// AppState holds the level (persisted) and the live session (not persisted).
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) level: Level,
    pub(crate) session: PuzzleSession,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(level: Level, session: PuzzleSession) -> Self {
        Self {
            level,
            session,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Mutable access to [`AppState`] that records when persisted fields may change.
#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }

    /// Returns the session without marking the state dirty.
    pub(crate) fn session_mut(&mut self) -> &mut PuzzleSession {
        &mut self.app_state.session
    }
}
