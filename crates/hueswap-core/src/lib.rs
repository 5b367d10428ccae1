//! Core data structures for Hueswap.
//!
//! This crate provides the building blocks shared by puzzle generation, game
//! management and rendering.
//!
//! # Overview
//!
//! 1. **Colors** - [`color`]: 24-bit RGB colors with hex parsing and formatting.
//! 2. **Gradients** - [`gradient`]: evenly spaced linear interpolation between two colors,
//!    and [`field`]: the two-dimensional color field spanned by four corner colors.
//! 3. **Grid geometry** - [`position`] and [`grid`]: `(row, col)` coordinates and a
//!    square row-major container indexed by them.
//! 4. **Arrangements** - [`arrangement`]: which original cell each grid position
//!    currently displays.
//! 5. **Palettes** - [`palette`]: the fixed set of corner colors puzzles are drawn from.
//!
//! # Examples
//!
//! ```
//! use hueswap_core::{Arrangement, ColorField, Corners, Position, Rgb};
//!
//! let corners = Corners::new(
//!     Rgb::new(255, 0, 0),
//!     Rgb::new(0, 255, 0),
//!     Rgb::new(0, 0, 255),
//!     Rgb::new(255, 255, 0),
//! );
//! let field = ColorField::generate(&corners, 4).unwrap();
//! assert_eq!(field[Position::new(0, 0)], corners.top_left);
//! assert_eq!(field[Position::new(3, 3)], corners.bottom_right);
//!
//! let mut arrangement = Arrangement::solved(4);
//! assert!(arrangement.is_solved());
//! arrangement.swap(Position::new(0, 1), Position::new(2, 2));
//! assert!(!arrangement.is_solved());
//! ```

pub mod arrangement;
pub mod color;
pub mod field;
pub mod gradient;
pub mod grid;
pub mod palette;
pub mod position;

pub use self::{
    arrangement::Arrangement,
    color::{ColorParseError, Rgb},
    field::{ColorField, Corners, FieldError},
    gradient::interpolate,
    grid::Grid,
    palette::CORNER_PALETTES,
    position::Position,
};
