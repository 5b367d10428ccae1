use crate::tween::SwapTweens;

/// Delay between the winning swap and the "You won!" overlay, in seconds.
pub(crate) const WON_OVERLAY_DELAY: f64 = 0.4;

// UiState holds ephemeral UI-only state (animations, overlay timing). It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    /// Input time of the current frame, in seconds.
    pub(crate) now: f64,
    pub(crate) tweens: SwapTweens,
    pub(crate) won_at: Option<f64>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Forgets everything tied to the previous session.
    pub(crate) fn reset_for_new_session(&mut self) {
        self.tweens.clear();
        self.won_at = None;
    }

    #[must_use]
    pub(crate) fn is_won_overlay_visible(&self) -> bool {
        self.won_at
            .is_some_and(|won_at| self.now - won_at >= WON_OVERLAY_DELAY)
    }

    #[must_use]
    pub(crate) fn needs_repaint(&self) -> bool {
        self.tweens.is_animating() || (self.won_at.is_some() && !self.is_won_overlay_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::{UiState, WON_OVERLAY_DELAY};

    #[test]
    fn won_overlay_waits_for_delay() {
        let mut ui_state = UiState::new();
        assert!(!ui_state.is_won_overlay_visible());
        assert!(!ui_state.needs_repaint());

        ui_state.now = 0.1;
        ui_state.won_at = Some(0.0);
        assert!(!ui_state.is_won_overlay_visible());
        assert!(ui_state.needs_repaint());

        ui_state.now = WON_OVERLAY_DELAY;
        assert!(ui_state.is_won_overlay_visible());
        assert!(!ui_state.needs_repaint());

        ui_state.reset_for_new_session();
        assert!(!ui_state.is_won_overlay_visible());
    }
}
