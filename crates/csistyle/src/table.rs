//! Code tables for control characters and SGR parameters.
//!
//! This module documents the codes that surround styled output: The common C0
//! control characters in [`ControlCode`] and the meaning of SGR parameters in
//! [`SGR_PARAMETERS`]. Both tables are read-only. They serve as labels when
//! rendering codes for humans and as catalog when validating codes.
//!
//! ```
//! # use csistyle::table::{ControlCode, SgrParameter};
//! let bell: ControlCode = "BEL".parse()?;
//! assert_eq!(bell.code(), 7);
//!
//! let bold = SgrParameter::by_name("Bold")?;
//! assert_eq!(bold.first(), 1);
//! assert_eq!(SgrParameter::lookup(34).map(|p| p.name()), Some("Foreground"));
//! # Ok::<(), csistyle::err::Error>(())
//! ```

use crate::err::Error;

/// The enumeration of common control characters.
///
/// Each variant's discriminant is the character's code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlCode {
    /// Bell: Makes an audible noise.
    BEL = 0x07,
    /// Backspace: Moves the cursor left, possibly wrapping to the previous line.
    BS = 0x08,
    /// Horizontal tab: Moves the cursor right to the next multiple of 8.
    HT = 0x09,
    /// Line feed: Moves to the next line, scrolling at the bottom of the screen.
    LF = 0x0a,
    /// Form feed: Moves a printer to the top of the next page.
    FF = 0x0c,
    /// Carriage return: Moves the cursor to column zero.
    CR = 0x0d,
    /// Escape: Starts all escape sequences.
    ESC = 0x1b,
}

impl ControlCode {
    /// Get the code.
    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Get the symbolic name.
    pub const fn name(&self) -> &'static str {
        use self::ControlCode::*;

        match *self {
            BEL => "BEL",
            BS => "BS",
            HT => "HT",
            LF => "LF",
            FF => "FF",
            CR => "CR",
            ESC => "ESC",
        }
    }

    /// Get the caret notation, e.g., `^G` for the bell.
    pub const fn caret(&self) -> &'static str {
        use self::ControlCode::*;

        match *self {
            BEL => "^G",
            BS => "^H",
            HT => "^I",
            LF => "^J",
            FF => "^L",
            CR => "^M",
            ESC => "^[",
        }
    }

    /// Get a human-readable description.
    pub const fn description(&self) -> &'static str {
        use self::ControlCode::*;

        match *self {
            BEL => "bell",
            BS => "backspace",
            HT => "tab",
            LF => "line feed",
            FF => "form feed",
            CR => "carriage return",
            ESC => "escape",
        }
    }

    const fn successor(&self) -> Option<Self> {
        use self::ControlCode::*;

        Some(match *self {
            BEL => BS,
            BS => HT,
            HT => LF,
            LF => FF,
            FF => CR,
            CR => ESC,
            ESC => return None,
        })
    }

    /// Get an iterator over all control codes in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        core::iter::successors(Some(Self::BEL), Self::successor)
    }

    /// Look up the control code with the given value.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().find(|c| c.code() == code)
    }
}

impl From<ControlCode> for u8 {
    fn from(value: ControlCode) -> Self {
        value.code()
    }
}

impl core::str::FromStr for ControlCode {
    type Err = Error;

    /// Parse a control code from its symbolic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::unknown_name(s))
    }
}

/// Display the control character itself.
impl core::fmt::Display for ControlCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <_ as core::fmt::Write>::write_char(f, char::from(self.code()))
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The meaning of an SGR parameter or a range of SGR parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SgrParameter {
    first: u8,
    last: u8,
    name: &'static str,
    description: &'static str,
}

impl SgrParameter {
    const fn one(code: u8, name: &'static str, description: &'static str) -> Self {
        Self {
            first: code,
            last: code,
            name,
            description,
        }
    }

    const fn range(first: u8, last: u8, name: &'static str, description: &'static str) -> Self {
        Self {
            first,
            last,
            name,
            description,
        }
    }

    /// Get the first code with this meaning.
    pub const fn first(&self) -> u8 {
        self.first
    }

    /// Get the last code with this meaning.
    pub const fn last(&self) -> u8 {
        self.last
    }

    /// Get the codes with this meaning.
    pub const fn codes(&self) -> core::ops::RangeInclusive<u8> {
        self.first..=self.last
    }

    /// Get the symbolic name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get a human-readable description.
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Look up the meaning of the given code.
    pub fn lookup(code: u8) -> Option<&'static Self> {
        SGR_PARAMETERS
            .iter()
            .find(|p| p.first <= code && code <= p.last)
    }

    /// Look up the parameter with the given symbolic name.
    pub fn by_name(name: &str) -> Result<&'static Self, Error> {
        SGR_PARAMETERS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::unknown_name(name))
    }

    /// Determine whether the code appears in the catalog.
    pub fn is_known(code: u8) -> bool {
        Self::lookup(code).is_some()
    }
}

/// The catalog of SGR parameters, in ascending order.
///
/// Codes 56 and 57 as well as 60–89 and 98–99 are not part of the catalog.
pub static SGR_PARAMETERS: &[SgrParameter] = &[
    SgrParameter::one(0, "Reset", "all attributes off"),
    SgrParameter::one(1, "Bold", "bold or increased intensity"),
    SgrParameter::one(2, "Faint", "faint, decreased intensity, or dim"),
    SgrParameter::one(3, "Italic", "italic, not widely supported"),
    SgrParameter::one(4, "Underline", "underline"),
    SgrParameter::one(5, "SlowBlink", "blinking less than 150 times per minute"),
    SgrParameter::one(6, "RapidBlink", "blinking 150 or more times per minute"),
    SgrParameter::one(7, "Reverse", "swap foreground and background colors"),
    SgrParameter::one(8, "Conceal", "hide text, not widely supported"),
    SgrParameter::one(9, "CrossedOut", "strike through text"),
    SgrParameter::one(10, "PrimaryFont", "primary (default) font"),
    SgrParameter::range(11, 19, "AlternativeFont", "alternative font n - 10"),
    SgrParameter::one(20, "Fraktur", "gothic font, rarely supported"),
    SgrParameter::one(21, "DoubleUnderline", "double underline, or not bold on some terminals"),
    SgrParameter::one(22, "NormalIntensity", "neither bold nor faint"),
    SgrParameter::one(23, "NotItalic", "neither italic nor blackletter"),
    SgrParameter::one(24, "NotUnderlined", "neither singly nor doubly underlined"),
    SgrParameter::one(25, "NotBlinking", "turn blinking off"),
    SgrParameter::one(26, "ProportionalSpacing", "not known to be used on terminals"),
    SgrParameter::one(27, "NotReversed", "not reversed"),
    SgrParameter::one(28, "Reveal", "not concealed"),
    SgrParameter::one(29, "NotCrossedOut", "not crossed out"),
    SgrParameter::range(30, 37, "Foreground", "set 3-bit foreground color"),
    SgrParameter::one(38, "ExtendedForeground", "set foreground color, followed by 5;n or 2;r;g;b"),
    SgrParameter::one(39, "DefaultForeground", "default foreground color"),
    SgrParameter::range(40, 47, "Background", "set 3-bit background color"),
    SgrParameter::one(48, "ExtendedBackground", "set background color, followed by 5;n or 2;r;g;b"),
    SgrParameter::one(49, "DefaultBackground", "default background color"),
    SgrParameter::one(50, "NoProportionalSpacing", "disable proportional spacing"),
    SgrParameter::one(51, "Framed", "framed"),
    SgrParameter::one(52, "Encircled", "encircled"),
    SgrParameter::one(53, "Overlined", "overlined"),
    SgrParameter::one(54, "NotFramed", "neither framed nor encircled"),
    SgrParameter::one(55, "NotOverlined", "not overlined"),
    SgrParameter::one(58, "UnderlineColor", "set underline color, followed by 5;n or 2;r;g;b"),
    SgrParameter::one(59, "DefaultUnderlineColor", "default underline color"),
    SgrParameter::range(90, 97, "BrightForeground", "set bright foreground color"),
    SgrParameter::range(100, 107, "BrightBackground", "set bright background color"),
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::cmd::Effect;
    use crate::err::ErrorKind;

    #[test]
    fn test_control_codes() {
        let codes: Vec<_> = ControlCode::all().map(|c| c.code()).collect();
        assert_eq!(codes, vec![7, 8, 9, 10, 12, 13, 27]);

        for code in ControlCode::all() {
            assert_eq!(code.name().parse::<ControlCode>().unwrap(), code);
            assert_eq!(ControlCode::from_code(code.code()), Some(code));
            assert_eq!(code.to_string().as_bytes(), &[code.code()]);
            assert!(code.caret().starts_with('^'));
        }

        assert_eq!(ControlCode::from_code(0x0b), None);
        assert_eq!(ControlCode::LF.description(), "line feed");
        assert_eq!(u8::from(ControlCode::CR), 13);

        let error = "bel".parse::<ControlCode>().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownName);
    }

    #[test]
    fn test_sgr_catalog_is_sorted() {
        for pair in SGR_PARAMETERS.windows(2) {
            if let [first, second] = pair {
                assert!(first.first() <= first.last());
                assert!(first.last() < second.first());
            }
        }
    }

    #[test]
    fn test_sgr_lookup() {
        assert_eq!(SgrParameter::lookup(0).map(|p| p.name()), Some("Reset"));
        assert_eq!(SgrParameter::lookup(59).map(|p| p.name()), Some("DefaultUnderlineColor"));
        assert_eq!(SgrParameter::lookup(15).map(|p| p.codes()), Some(11..=19));
        assert_eq!(SgrParameter::lookup(96).map(|p| p.name()), Some("BrightForeground"));

        for code in [56, 57, 60, 89, 98, 99, 108, 255] {
            assert!(!SgrParameter::is_known(code));
        }

        for effect in Effect::all() {
            assert!(SgrParameter::is_known(effect.code()));
            assert!(SgrParameter::is_known(effect.undo_code()));
        }

        let parameter = SgrParameter::by_name("ExtendedForeground").unwrap();
        assert_eq!(parameter.first(), 38);
        assert!(parameter.description().contains("5;n"));

        let error = SgrParameter::by_name("Sparkle").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownName);
    }
}
