use hueswap_game::{Level, PuzzleSession};
use hueswap_generator::{GenerateError, PuzzleGenerator};

/// Starts a session for `level` with a random palette and seed.
pub fn generate_session(level: Level) -> Result<PuzzleSession, GenerateError> {
    let generator = PuzzleGenerator::default();
    PuzzleSession::generate(&generator, level)
}
