//! Swap animations.
//!
//! A [`SwapTweens`] runner tracks every swap that is being animated. Each frame the
//! app asks it where a cell should be drawn ([`SwapTweens::offset`]) and which
//! animations have ended ([`SwapTweens::finished`]); an ended animation is reported
//! exactly once, and the app turns it into a swap commit.

use std::mem;

use eframe::egui::Vec2;
use hueswap_core::Position;
use hueswap_game::SwapId;

/// Duration of one swap animation, in seconds.
pub const SWAP_DURATION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SwapTween {
    id: SwapId,
    first: Position,
    second: Position,
    started_at: f64,
}

impl SwapTween {
    fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= SWAP_DURATION
    }

    #[expect(clippy::cast_possible_truncation)]
    fn progress(&self, now: f64) -> f32 {
        let t = ((now - self.started_at) / SWAP_DURATION).clamp(0.0, 1.0);
        ease_out(t) as f32
    }
}

/// Quadratic ease-out.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn delta(from: Position, to: Position) -> Vec2 {
    Vec2::new(
        f32::from(to.col()) - f32::from(from.col()),
        f32::from(to.row()) - f32::from(from.row()),
    )
}

/// Runs the animations of in-flight swaps.
///
/// Times are seconds on any monotonic clock; the app uses egui's input time.
#[derive(Debug, Default, Clone)]
pub struct SwapTweens {
    active: Vec<SwapTween>,
}

impl SwapTweens {
    /// Starts animating the swap `id` of the cells at `first` and `second`.
    pub fn start(&mut self, id: SwapId, first: Position, second: Position, now: f64) {
        self.active.push(SwapTween {
            id,
            first,
            second,
            started_at: now,
        });
    }

    /// Removes and returns the swaps whose animation has ended by `now`.
    pub fn finished(&mut self, now: f64) -> Vec<SwapId> {
        let (done, active): (Vec<_>, Vec<_>) = mem::take(&mut self.active)
            .into_iter()
            .partition(|tween| tween.is_finished(now));
        self.active = active;
        done.into_iter().map(|tween| tween.id).collect()
    }

    /// Returns how far the cell at `pos` is displaced, in cell units, or `None` if it
    /// is not being animated.
    ///
    /// `x` grows along columns and `y` along rows.
    #[must_use]
    pub fn offset(&self, pos: Position, now: f64) -> Option<Vec2> {
        self.active.iter().find_map(|tween| {
            let target = if tween.first == pos {
                tween.second
            } else if tween.second == pos {
                tween.first
            } else {
                return None;
            };
            Some(delta(pos, target) * tween.progress(now))
        })
    }

    /// Returns `true` while any animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Drops every animation without reporting it.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use hueswap_game::{Level, PuzzleSession, TapOutcome};
    use hueswap_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn swap_ids(count: usize) -> Vec<SwapId> {
        let generator = PuzzleGenerator::default();
        let level = Level::new(8).unwrap();
        let seed = PuzzleSeed::from_bytes([1; 32]);
        let mut session = PuzzleSession::generate_with_seed(&generator, level, seed).unwrap();
        let movable = session
            .board()
            .cells()
            .filter(|cell| cell.movable)
            .map(|cell| cell.home)
            .collect::<Vec<_>>();
        let mut ids = vec![];
        for pair in movable.chunks_exact(2).take(count) {
            session.tap(pair[0]).unwrap();
            let Ok(TapOutcome::SwapStarted(swap)) = session.tap(pair[1]) else {
                panic!("second tap starts a swap");
            };
            ids.push(swap.id());
        }
        ids
    }

    #[test]
    fn test_offset_follows_eased_progress() {
        let id = swap_ids(1)[0];
        let a = Position::new(0, 0);
        let b = Position::new(2, 1);
        let mut tweens = SwapTweens::default();
        tweens.start(id, a, b, 10.0);

        assert_eq!(tweens.offset(a, 10.0), Some(Vec2::ZERO));
        assert_eq!(tweens.offset(b, 10.0), Some(Vec2::ZERO));
        assert_eq!(tweens.offset(Position::new(1, 1), 10.0), None);

        let half = tweens.offset(a, 10.25).unwrap();
        assert!((half.x - 0.75).abs() < 1e-5);
        assert!((half.y - 1.5).abs() < 1e-5);
        let back = tweens.offset(b, 10.25).unwrap();
        assert!((back.x + 0.75).abs() < 1e-5);
        assert!((back.y + 1.5).abs() < 1e-5);

        assert_eq!(tweens.offset(a, 20.0), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn test_finished_reports_each_swap_once() {
        let ids = swap_ids(2);
        let mut tweens = SwapTweens::default();
        tweens.start(ids[0], Position::new(0, 0), Position::new(0, 1), 0.0);
        tweens.start(ids[1], Position::new(1, 0), Position::new(1, 1), 0.3);
        assert!(tweens.is_animating());

        assert!(tweens.finished(0.2).is_empty());
        assert_eq!(tweens.finished(SWAP_DURATION), [ids[0]]);
        assert!(tweens.finished(SWAP_DURATION).is_empty());
        assert_eq!(tweens.offset(Position::new(0, 0), SWAP_DURATION), None);
        assert_eq!(tweens.finished(1.0), [ids[1]]);
        assert!(!tweens.is_animating());
    }

    #[test]
    fn test_clear_drops_animations() {
        let ids = swap_ids(1);
        let mut tweens = SwapTweens::default();
        tweens.start(ids[0], Position::new(0, 0), Position::new(0, 1), 0.0);
        tweens.clear();
        assert!(!tweens.is_animating());
        assert!(tweens.finished(10.0).is_empty());
    }
}
