use std::fmt::{self, Display};

/// The current puzzle size: a level-`n` puzzle has `n × n` cells.
///
/// Levels start at [`Level::MIN`] and grow by one with every solved puzzle, up to
/// [`Level::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u16);

/// Errors returned when a level value is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelError {
    /// The value is below [`Level::MIN`].
    #[display("level {value} is below the minimum of {}", Level::MIN)]
    TooSmall {
        /// The rejected value.
        value: u32,
    },
    /// The value is above [`Level::MAX`].
    #[display("level {value} is above the maximum of {}", Level::MAX)]
    TooLarge {
        /// The rejected value.
        value: u32,
    },
}

impl Level {
    /// The smallest level; also the level of a fresh install.
    pub const MIN: Self = Self(2);
    /// The largest level.
    pub const MAX: Self = Self(99);
    /// The level used when no valid level is stored.
    pub const DEFAULT: Self = Self::MIN;

    /// Creates a level.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError`] if `value` is outside `MIN..=MAX`.
    pub fn new(value: u32) -> Result<Self, LevelError> {
        if value < u32::from(Self::MIN.0) {
            Err(LevelError::TooSmall { value })
        } else if value > u32::from(Self::MAX.0) {
            Err(LevelError::TooLarge { value })
        } else {
            // in range, so it fits in u16
            Ok(Self(u16::try_from(value).unwrap_or(Self::MAX.0)))
        }
    }

    /// Returns the number of cells per side.
    #[must_use]
    pub const fn dimension(self) -> u16 {
        self.0
    }

    /// Returns the level value.
    #[must_use]
    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the following level, saturating at [`Level::MAX`].
    #[must_use]
    pub fn next(self) -> Self {
        Self(u16::min(self.0 + 1, Self::MAX.0))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_checks() {
        assert_eq!(Level::new(0), Err(LevelError::TooSmall { value: 0 }));
        assert_eq!(Level::new(1), Err(LevelError::TooSmall { value: 1 }));
        assert_eq!(Level::new(2), Ok(Level::MIN));
        assert_eq!(Level::new(99), Ok(Level::MAX));
        assert_eq!(Level::new(100), Err(LevelError::TooLarge { value: 100 }));
        assert_eq!(Level::try_from(7).map(Level::dimension), Ok(7));
    }

    #[test]
    fn test_next_and_default() {
        assert_eq!(Level::default(), Level::DEFAULT);
        assert_eq!(Level::DEFAULT.dimension(), 2);
        assert_eq!(Level::MIN.next().dimension(), 3);
        assert_eq!(Level::MAX.next(), Level::MAX);
        assert_eq!(u32::from(Level::new(5).unwrap()), 5);
        assert_eq!(Level::new(12).unwrap().to_string(), "12");
    }
}
