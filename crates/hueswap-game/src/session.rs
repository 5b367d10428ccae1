use std::collections::BTreeMap;

use hueswap_core::Position;
use hueswap_generator::{GenerateError, PuzzleGenerator, PuzzleSeed};

use crate::{Board, GameError, Level, TapBlockReason};

/// Identifies a started swap within one [`PuzzleSession`].
///
/// Ids increase monotonically and are never reused by the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct SwapId(u64);

/// A swap that has been started but not yet committed.
///
/// The caller animates the two cells and then hands [`PendingSwap::id`] back to
/// [`PuzzleSession::complete_swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwap {
    id: SwapId,
    first: Position,
    second: Position,
    first_identity: Position,
    second_identity: Position,
}

impl PendingSwap {
    /// Returns the id used to commit this swap.
    #[must_use]
    pub fn id(&self) -> SwapId {
        self.id
    }

    /// Returns the cell that was armed first.
    #[must_use]
    pub fn first(&self) -> Position {
        self.first
    }

    /// Returns the cell that was tapped second.
    #[must_use]
    pub fn second(&self) -> Position {
        self.second
    }

    /// Returns `true` if `pos` is one of the two swapped cells.
    #[must_use]
    pub fn involves(&self, pos: Position) -> bool {
        self.first == pos || self.second == pos
    }
}

/// Whether the session still accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionPhase {
    /// Taps are accepted.
    Playing,
    /// The board is won and frozen.
    Solved,
}

/// What a tap on a cell would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TapOperation {
    /// Arm the cell.
    Arm,
    /// Disarm the currently armed cell.
    Disarm,
    /// Start a swap with the armed cell.
    Swap {
        /// The armed cell.
        with: Position,
    },
}

/// Result of a successful [`PuzzleSession::tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The cell is now armed.
    Armed(Position),
    /// The armed cell was tapped again and is no longer armed.
    Disarmed,
    /// A swap between the armed cell and the tapped cell has started.
    SwapStarted(PendingSwap),
}

/// Result of [`PuzzleSession::complete_swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CommitOutcome {
    /// The identities were exchanged.
    Committed {
        /// Whether this commit solved the puzzle.
        solved: bool,
    },
    /// The swap was unknown, already committed, or no longer matches the board.
    Stale,
}

/// One puzzle being played.
///
/// The session owns the [`Board`], the armed cell and the table of in-flight swaps.
/// Input is only accepted while the phase is [`SessionPhase::Playing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSession {
    board: Board,
    selection: Option<Position>,
    in_flight: BTreeMap<SwapId, PendingSwap>,
    next_swap_id: u64,
    phase: SessionPhase,
}

impl PuzzleSession {
    /// Creates a session for `board`.
    ///
    /// A board that is already won (a degenerate puzzle) starts frozen.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let phase = if board.is_won() {
            SessionPhase::Solved
        } else {
            SessionPhase::Playing
        };
        Self {
            board,
            selection: None,
            in_flight: BTreeMap::new(),
            next_swap_id: 0,
            phase,
        }
    }

    /// Generates a fresh puzzle for `level` from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the generator fails.
    pub fn generate(generator: &PuzzleGenerator<'_>, level: Level) -> Result<Self, GenerateError> {
        let puzzle = generator.generate(level.dimension())?;
        Ok(Self::new(Board::new(puzzle)))
    }

    /// Generates the puzzle for `level` described by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the generator fails.
    pub fn generate_with_seed(
        generator: &PuzzleGenerator<'_>,
        level: Level,
        seed: PuzzleSeed,
    ) -> Result<Self, GenerateError> {
        let puzzle = generator.generate_with_seed(level.dimension(), seed)?;
        Ok(Self::new(Board::new(puzzle)))
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the armed cell.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns `true` once the puzzle is won.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase.is_solved()
    }

    /// Iterates over the swaps that have started but not been committed, oldest first.
    pub fn pending_swaps(&self) -> impl Iterator<Item = &PendingSwap> + '_ {
        self.in_flight.values()
    }

    /// Returns `true` if `pos` is part of an in-flight swap.
    #[must_use]
    pub fn is_in_flight(&self, pos: Position) -> bool {
        self.in_flight.values().any(|swap| swap.involves(pos))
    }

    /// Returns what tapping `pos` would do, without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the [`TapBlockReason`] if the tap would be rejected.
    pub fn tap_capability(&self, pos: Position) -> Result<TapOperation, TapBlockReason> {
        if !pos.is_within(self.board.dimension()) {
            return Err(TapBlockReason::OutOfBounds);
        }
        if self.phase.is_solved() {
            return Err(TapBlockReason::BoardFrozen);
        }
        if !self.board.is_movable(pos) {
            return Err(TapBlockReason::FixedCell);
        }
        if self.is_in_flight(pos) {
            return Err(TapBlockReason::CellInFlight);
        }
        Ok(match self.selection {
            None => TapOperation::Arm,
            Some(selected) if selected == pos => TapOperation::Disarm,
            Some(selected) => TapOperation::Swap { with: selected },
        })
    }

    /// Handles a tap on `pos`.
    ///
    /// The first tap arms a movable cell, tapping it again disarms it, and tapping a
    /// second movable cell starts a swap. The board is unchanged until the swap is
    /// committed with [`PuzzleSession::complete_swap`].
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the cell is outside the board, fixed or already
    /// being swapped, or if the puzzle is solved. The selection is left untouched.
    pub fn tap(&mut self, pos: Position) -> Result<TapOutcome, GameError> {
        let operation = self.tap_capability(pos)?;
        let outcome = match operation {
            TapOperation::Arm => {
                self.selection = Some(pos);
                TapOutcome::Armed(pos)
            }
            TapOperation::Disarm => {
                self.selection = None;
                TapOutcome::Disarmed
            }
            TapOperation::Swap { with } => {
                self.selection = None;
                TapOutcome::SwapStarted(self.start_swap(with, pos)?)
            }
        };
        Ok(outcome)
    }

    /// Clears the armed cell, if any.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Commits the swap identified by `id`.
    ///
    /// The record is removed whatever the outcome, so committing the same id twice
    /// returns [`CommitOutcome::Stale`] the second time. When the last in-flight swap
    /// commits and every cell is home, the session becomes solved.
    pub fn complete_swap(&mut self, id: SwapId) -> CommitOutcome {
        let Some(swap) = self.in_flight.remove(&id) else {
            log::debug!("ignoring completion of unknown swap {id}");
            return CommitOutcome::Stale;
        };
        if self.board.identity(swap.first) != Some(swap.first_identity)
            || self.board.identity(swap.second) != Some(swap.second_identity)
        {
            log::debug!("ignoring completion of stale swap {id}");
            return CommitOutcome::Stale;
        }

        self.board.swap(swap.first, swap.second);
        log::debug!("committed swap {id}: {} <-> {}", swap.first, swap.second);

        let solved = self.in_flight.is_empty() && self.board.is_won();
        if solved {
            self.phase = SessionPhase::Solved;
            self.selection = None;
            log::info!("puzzle solved at dimension {}", self.board.dimension());
        }
        CommitOutcome::Committed { solved }
    }

    /// Starts and immediately commits a swap between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SameCell`] if `a == b`, or the reason either cell cannot
    /// be tapped.
    pub fn swap_now(&mut self, a: Position, b: Position) -> Result<CommitOutcome, GameError> {
        if a == b {
            return Err(GameError::SameCell);
        }
        self.tap_capability(a)?;
        self.tap_capability(b)?;
        if self.selection.is_some_and(|selected| selected == a || selected == b) {
            self.selection = None;
        }
        let swap = self.start_swap(a, b)?;
        Ok(self.complete_swap(swap.id))
    }

    fn start_swap(&mut self, first: Position, second: Position) -> Result<PendingSwap, GameError> {
        let first_identity = self.board.identity(first).ok_or(GameError::OutOfBounds)?;
        let second_identity = self.board.identity(second).ok_or(GameError::OutOfBounds)?;
        let id = SwapId(self.next_swap_id);
        self.next_swap_id += 1;
        let swap = PendingSwap {
            id,
            first,
            second,
            first_identity,
            second_identity,
        };
        self.in_flight.insert(id, swap);
        log::debug!("started swap {id}: {first} <-> {second}");
        Ok(swap)
    }
}
