//! RGB color representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 24-bit RGB color.
///
/// Colors can be converted to and from a packed `0xRRGGBB` integer and parsed from
/// hex text (`#rrggbb`, `0xrrggbb` or bare `rrggbb`).
///
/// # Examples
///
/// ```
/// use hueswap_core::Rgb;
///
/// let color: Rgb = "#2dc6ff".parse().unwrap();
/// assert_eq!(color, Rgb::new(0x2d, 0xc6, 0xff));
/// assert_eq!(color.to_packed(), 0x2d_c6ff);
/// assert_eq!(color.to_string(), "#2dc6ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Returns the color packed as `0xRRGGBB`.
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Returns the channels as an `[r, g, b]` array.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linearly interpolates towards `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`; `0.0` yields `self` and `1.0` yields `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueswap_core::Rgb;
    ///
    /// let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
    /// assert_eq!(mid, Rgb::new(128, 128, 128));
    /// ```
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let value = value.round().clamp(0.0, 255.0) as u8;
            value
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Errors returned when parsing an [`Rgb`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ColorParseError {
    /// The hex part did not have exactly six digits.
    #[display("expected 6 hex digits, found {len}")]
    InvalidLength {
        /// Number of characters found after the prefix.
        len: usize,
    },
    /// The text contained a non-hex character.
    #[display("invalid hex digit in color: {text:?}")]
    InvalidDigit {
        /// The rejected input.
        text: String,
    },
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength { len: digits.len() });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                text: s.to_owned(),
            });
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit {
            text: s.to_owned(),
        })?;
        Ok(Self::from_packed(packed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_conversions() {
        let color = Rgb::from_packed(0x12_3456);
        assert_eq!(color, Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(color.to_packed(), 0x12_3456);

        // high byte is ignored
        assert_eq!(Rgb::from_packed(0xff12_3456), color);

        assert_eq!(Rgb::from([1, 2, 3]), Rgb::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(Rgb::new(1, 2, 3)), [1, 2, 3]);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("0xFF8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#fff".parse::<Rgb>(),
            Err(ColorParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "#gg0000".parse::<Rgb>(),
            Err(ColorParseError::InvalidDigit { .. })
        ));
        // `from_str_radix` would accept a sign, the parser must not
        assert!(matches!(
            "+12345".parse::<Rgb>(),
            Err(ColorParseError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_lerp_endpoints_and_clamp() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 0, 90);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(130, 100, 60));
    }
}
