use crate::err::Error;

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine whether this layer is the foreground.
    pub fn is_foreground(&self) -> bool {
        matches!(*self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub fn is_background(&self) -> bool {
        matches!(*self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match *self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A 3/4-bit color index.
///
/// Valid indexes are 0 through 9, i.e., the eight standard colors black, red,
/// green, yellow, blue, magenta, cyan, and white, the extended color slot 8,
/// and 9 for the terminal's default color. The foreground SGR parameter is 30
/// plus the index, the background parameter 40 plus the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnsiIndex(u8);

impl AnsiIndex {
    /// Black.
    pub const BLACK: Self = Self(0);
    /// Red.
    pub const RED: Self = Self(1);
    /// Green.
    pub const GREEN: Self = Self(2);
    /// Yellow.
    pub const YELLOW: Self = Self(3);
    /// Blue.
    pub const BLUE: Self = Self(4);
    /// Magenta.
    pub const MAGENTA: Self = Self(5);
    /// Cyan.
    pub const CYAN: Self = Self(6);
    /// White.
    pub const WHITE: Self = Self(7);
    /// The terminal's default color.
    pub const DEFAULT: Self = Self(9);

    /// The range of valid indexes.
    pub const RANGE: core::ops::RangeInclusive<u8> = 0..=9;

    /// Create a new index, returning `None` if it is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index <= 9 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the index.
    #[inline]
    pub const fn index(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AnsiIndex {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| Error::out_of_bounds(i64::from(value), 0..=9))
    }
}

impl From<AnsiIndex> for u8 {
    fn from(value: AnsiIndex) -> Self {
        value.0
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A color at one of three depths.
///
/// Each variant determines the SGR parameters for the color, with the
/// [`Layer`] picking foreground or background:
///
/// | Variant | Foreground | Background |
/// |---|---|---|
/// | `Ansi(c)` | `3c` | `4c` |
/// | `EightBit(n)` | `38;5;n` | `48;5;n` |
/// | `Rgb(r, g, b)` | `38;2;r;g;b` | `48;2;r;g;b` |
///
/// The 8-bit indexes 0–7 are the standard colors, 8–15 their bright versions,
/// 16–231 a 6×6×6 cube with index 16 + 36r + 6g + b, and 232–255 a grayscale
/// ramp from black to white. Since indexes and channels are `u8`, Rust's type
/// system rules out values beyond 255. Use [`ColorSpec::try_from`] with wider
/// integers to check values coming from elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// A 3/4-bit color.
    Ansi(AnsiIndex),
    /// An 8-bit indexed color.
    EightBit(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Compute the 8-bit index of a color in the embedded 6×6×6 RGB cube.
    ///
    /// This function returns `None` if any coordinate exceeds 5.
    pub const fn cube(r: u8, g: u8, b: u8) -> Option<Self> {
        if 5 < r || 5 < g || 5 < b {
            None
        } else {
            Some(Self::EightBit(16 + 36 * r + 6 * g + b))
        }
    }

    /// Compute the 8-bit index of a gray level between 0 and 23 inclusive.
    ///
    /// This function returns `None` if the level exceeds 23.
    pub const fn gray(level: u8) -> Option<Self> {
        if 23 < level {
            None
        } else {
            Some(Self::EightBit(232 + level))
        }
    }

    /// Write the SGR parameters for this color on the given layer.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        out: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match *self {
            Self::Ansi(index) => write!(out, "{}", 30 + layer.offset() + index.index()),
            Self::EightBit(n) => write!(out, "{};5;{}", 38 + layer.offset(), n),
            Self::Rgb(r, g, b) => write!(out, "{};2;{};{};{}", 38 + layer.offset(), r, g, b),
        }
    }
}

impl From<AnsiIndex> for ColorSpec {
    fn from(value: AnsiIndex) -> Self {
        Self::Ansi(value)
    }
}

/// Check the channels of a 24-bit color.
///
/// Channels outside `0..=255` are rejected, never clamped.
///
/// ```
/// # use csistyle::style::ColorSpec;
/// # use csistyle::err::ErrorKind;
/// assert_eq!(ColorSpec::try_from([10, 20, 30]).unwrap(), ColorSpec::Rgb(10, 20, 30));
/// assert_eq!(
///     ColorSpec::try_from([10, 256, 30]).unwrap_err().kind(),
///     ErrorKind::OutOfBounds
/// );
/// ```
impl TryFrom<[i64; 3]> for ColorSpec {
    type Error = Error;

    fn try_from(value: [i64; 3]) -> Result<Self, Self::Error> {
        fn channel(value: i64) -> Result<u8, Error> {
            u8::try_from(value).map_err(|_| Error::out_of_bounds(value, 0..=255))
        }

        let [r, g, b] = value;
        Ok(Self::Rgb(channel(r)?, channel(g)?, channel(b)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cmd::DynSetColor;
    use crate::err::ErrorKind;

    #[test]
    fn test_layer() {
        assert!(Layer::Foreground.is_foreground());
        assert!(!Layer::Foreground.is_background());
        assert!(Layer::Background.is_background());
        assert_eq!(Layer::Foreground.offset(), 0);
        assert_eq!(Layer::Background.offset(), 10);
    }

    #[test]
    fn test_ansi_index() {
        for index in AnsiIndex::RANGE {
            assert_eq!(AnsiIndex::try_from(index).unwrap().index(), index);
        }

        for index in 10..=u8::MAX {
            assert!(AnsiIndex::new(index).is_none());
            let error = AnsiIndex::try_from(index).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::OutOfBounds);
        }

        assert_eq!(u8::from(AnsiIndex::WHITE), 7);
        assert_eq!(AnsiIndex::DEFAULT.index(), 9);
    }

    #[test]
    fn test_params() {
        let s = |layer, color| format!("{}", DynSetColor(layer, color));

        assert_eq!(s(Layer::Foreground, ColorSpec::Ansi(AnsiIndex::RED)), "\x1b[31m");
        assert_eq!(s(Layer::Background, ColorSpec::Ansi(AnsiIndex::RED)), "\x1b[41m");
        assert_eq!(s(Layer::Foreground, ColorSpec::EightBit(196)), "\x1b[38;5;196m");
        assert_eq!(s(Layer::Background, ColorSpec::EightBit(196)), "\x1b[48;5;196m");
        assert_eq!(
            s(Layer::Foreground, ColorSpec::Rgb(10, 20, 30)),
            "\x1b[38;2;10;20;30m"
        );
        assert_eq!(
            s(Layer::Background, ColorSpec::Rgb(10, 20, 30)),
            "\x1b[48;2;10;20;30m"
        );
    }

    #[test]
    fn test_cube_and_gray() {
        assert_eq!(ColorSpec::cube(0, 0, 0), Some(ColorSpec::EightBit(16)));
        assert_eq!(ColorSpec::cube(5, 0, 0), Some(ColorSpec::EightBit(196)));
        assert_eq!(ColorSpec::cube(5, 5, 5), Some(ColorSpec::EightBit(231)));
        assert_eq!(ColorSpec::cube(6, 0, 0), None);
        assert_eq!(ColorSpec::gray(0), Some(ColorSpec::EightBit(232)));
        assert_eq!(ColorSpec::gray(23), Some(ColorSpec::EightBit(255)));
        assert_eq!(ColorSpec::gray(24), None);
    }

    #[test]
    fn test_rgb_channels() {
        assert_eq!(
            ColorSpec::try_from([0, 128, 255]).unwrap(),
            ColorSpec::Rgb(0, 128, 255)
        );

        for bad in [[-1, 0, 0], [0, 256, 0], [0, 0, 1_000]] {
            let error = ColorSpec::try_from(bad).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::OutOfBounds);
        }
    }
}
