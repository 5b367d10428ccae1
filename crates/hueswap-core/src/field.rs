//! Two-dimensional color fields spanned by four corner colors.

use std::ops::Index;

use crate::{Grid, Position, Rgb, gradient::interpolate};

/// The four corner colors of a puzzle.
///
/// The array order used by [`Corners::from_array`] and [`Corners::to_array`] is
/// clockwise from the top-left corner: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corners {
    /// Color at `(0, 0)`.
    pub top_left: Rgb,
    /// Color at `(0, d - 1)`.
    pub top_right: Rgb,
    /// Color at `(d - 1, d - 1)`.
    pub bottom_right: Rgb,
    /// Color at `(d - 1, 0)`.
    pub bottom_left: Rgb,
}

impl Corners {
    /// Creates corners in clockwise order starting at the top-left.
    #[must_use]
    pub const fn new(top_left: Rgb, top_right: Rgb, bottom_right: Rgb, bottom_left: Rgb) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Creates corners from `[top_left, top_right, bottom_right, bottom_left]`.
    #[must_use]
    pub const fn from_array([top_left, top_right, bottom_right, bottom_left]: [Rgb; 4]) -> Self {
        Self::new(top_left, top_right, bottom_right, bottom_left)
    }

    /// Returns `[top_left, top_right, bottom_right, bottom_left]`.
    #[must_use]
    pub const fn to_array(self) -> [Rgb; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl TryFrom<&[Rgb]> for Corners {
    type Error = FieldError;

    fn try_from(colors: &[Rgb]) -> Result<Self, Self::Error> {
        let colors: [Rgb; 4] = colors
            .try_into()
            .map_err(|_| FieldError::CornerCount { len: colors.len() })?;
        Ok(Self::from_array(colors))
    }
}

/// Errors returned when a color field cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FieldError {
    /// The requested dimension was zero.
    #[display("field dimension must be positive")]
    InvalidDimension,
    /// The number of corner colors was not four.
    #[display("expected 4 corner colors, found {len}")]
    CornerCount {
        /// Number of colors supplied.
        len: usize,
    },
}

/// A square field of colors interpolated between four corners.
///
/// The left edge runs from `top_left` down to `bottom_left`, the right edge from
/// `top_right` down to `bottom_right`, and each row is interpolated from its
/// left-edge color to its right-edge color.
///
/// # Examples
///
/// ```
/// use hueswap_core::{ColorField, Corners, Position, Rgb};
///
/// let corners = Corners::new(
///     Rgb::new(0, 0, 0),
///     Rgb::new(200, 0, 0),
///     Rgb::new(200, 200, 0),
///     Rgb::new(0, 200, 0),
/// );
/// let field = ColorField::generate(&corners, 3).unwrap();
/// assert_eq!(field.dimension(), 3);
/// assert_eq!(field[Position::new(1, 1)], Rgb::new(100, 100, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorField {
    colors: Grid<Rgb>,
}

impl ColorField {
    /// Generates the color field for `corners` with `dimension` cells per side.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidDimension`] if `dimension` is zero.
    pub fn generate(corners: &Corners, dimension: u16) -> Result<Self, FieldError> {
        if dimension == 0 {
            return Err(FieldError::InvalidDimension);
        }
        let len = usize::from(dimension);
        let left = interpolate(corners.top_left, corners.bottom_left, len);
        let right = interpolate(corners.top_right, corners.bottom_right, len);
        let rows = left
            .into_iter()
            .zip(right)
            .map(|(l, r)| interpolate(l, r, len))
            .collect::<Vec<_>>();
        let colors = Grid::from_fn(dimension, |pos| {
            rows[usize::from(pos.row())][usize::from(pos.col())]
        });
        Ok(Self { colors })
    }

    /// Returns the number of cells per side.
    #[must_use]
    pub fn dimension(&self) -> u16 {
        self.colors.dimension()
    }

    /// Returns the color at `pos`, or `None` if it lies outside the field.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Rgb> {
        self.colors.get(pos).copied()
    }

    /// Iterates over all positions and their colors in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Rgb)> + '_ {
        self.colors.iter().map(|(pos, color)| (pos, *color))
    }
}

impl Index<Position> for ColorField {
    type Output = Rgb;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.colors[pos]
    }
}
