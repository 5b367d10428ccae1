//! Game state management for Hueswap.
//!
//! This crate turns a [`GeneratedPuzzle`] into a playable [`PuzzleSession`]:
//!
//! - [`Board`] holds the color field, the current arrangement and which cells are
//!   movable, and answers whether the puzzle is won.
//! - [`PuzzleSession`] mediates player taps: arming a cell, starting a swap, and
//!   committing it once the caller's animation has finished.
//! - [`Level`] is the grid size of the current puzzle and grows by one per win.
//!
//! Swaps are two-phase. [`PuzzleSession::tap`] returns a [`PendingSwap`] that the
//! caller animates; the board only changes when [`PuzzleSession::complete_swap`] is
//! called with its [`SwapId`]. Completing an unknown or already completed swap is a
//! no-op.
//!
//! # Example
//!
//! ```
//! use hueswap_core::Position;
//! use hueswap_game::{CommitOutcome, Level, PuzzleSession, TapOutcome};
//! use hueswap_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::default();
//! let mut session = PuzzleSession::generate(&generator, Level::DEFAULT).unwrap();
//! assert!(!session.is_solved());
//!
//! let movable = session
//!     .board()
//!     .cells()
//!     .filter(|cell| cell.movable)
//!     .map(|cell| cell.home)
//!     .collect::<Vec<Position>>();
//!
//! assert!(matches!(session.tap(movable[0]), Ok(TapOutcome::Armed(_))));
//! let Ok(TapOutcome::SwapStarted(swap)) = session.tap(movable[1]) else {
//!     panic!("second tap starts a swap");
//! };
//! assert!(matches!(
//!     session.complete_swap(swap.id()),
//!     CommitOutcome::Committed { .. }
//! ));
//! assert_eq!(session.complete_swap(swap.id()), CommitOutcome::Stale);
//! ```
//!
//! [`GeneratedPuzzle`]: hueswap_generator::GeneratedPuzzle

pub use self::{board::*, level::*, session::*};

mod board;
mod level;
mod session;

/// Why a tap on a cell cannot be acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum TapBlockReason {
    /// The position lies outside the board.
    #[display("position is outside the board")]
    OutOfBounds,
    /// The puzzle is solved and no longer accepts input.
    #[display("board is frozen")]
    BoardFrozen,
    /// The cell is fixed and can never be swapped.
    #[display("cell is fixed")]
    FixedCell,
    /// The cell is part of a swap that has not completed yet.
    #[display("cell is already being swapped")]
    CellInFlight,
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the board.
    #[display("position is outside the board")]
    OutOfBounds,
    /// The puzzle is solved and no longer accepts input.
    #[display("cannot modify a solved board")]
    BoardFrozen,
    /// The cell is fixed and can never be swapped.
    #[display("cannot swap a fixed cell")]
    FixedCell,
    /// The cell is part of a swap that has not completed yet.
    #[display("cannot swap a cell that is already being swapped")]
    CellInFlight,
    /// Both positions of a swap are the same cell.
    #[display("cannot swap a cell with itself")]
    SameCell,
}

impl From<TapBlockReason> for GameError {
    fn from(reason: TapBlockReason) -> Self {
        match reason {
            TapBlockReason::OutOfBounds => GameError::OutOfBounds,
            TapBlockReason::BoardFrozen => GameError::BoardFrozen,
            TapBlockReason::FixedCell => GameError::FixedCell,
            TapBlockReason::CellInFlight => GameError::CellInFlight,
        }
    }
}
