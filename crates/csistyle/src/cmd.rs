//! A library of terminal commands.
//!
//! This module provides straight-forward struct and enum types that implement
//! the [`Command`] trait and, where applicable, also the [`Sgr`] trait.
//! Organized by topic, it covers:
//!
//!   * Generic sequences:
//!       * [`SetCode`] and [`DynSetCode`] for `CSI n m`
//!       * [`DynCsi`] for `CSI` followed by arbitrary bytes
//!   * Cursor movement:
//!       * Relative [`MoveUp`], [`MoveDown`], [`MoveRight`], [`MoveLeft`],
//!         [`MoveToNextLine`], and [`MoveToPreviousLine`], plus their `Dyn`
//!         counterparts
//!       * Absolute [`MoveToColumn`], [`MoveTo`], [`DynMoveToColumn`], and
//!         [`DynMoveTo`]
//!       * [`RequestCursorPosition`]
//!   * Erasing content:
//!       * [`EraseDisplay`] and [`DynEraseDisplay`]
//!       * [`EraseLine`] and [`DynEraseLine`]
//!   * Scrolling:
//!       * [`ScrollUp`], [`ScrollDown`], [`DynScrollUp`], and [`DynScrollDown`]
//!   * Styling content:
//!       * [`ResetStyle`] and [`DefaultColors`]
//!       * [`SetDefaultForeground`], [`SetForeground8`], [`SetForeground24`],
//!         [`DynSetForeground8`], and [`DynSetForeground24`]
//!       * [`SetDefaultBackground`], [`SetBackground8`], [`SetBackground24`],
//!         [`DynSetBackground8`], and [`DynSetBackground24`]
//!       * [`SetDefaultUnderline`], [`SetUnderline8`], [`SetUnderline24`],
//!         [`DynSetUnderline8`], and [`DynSetUnderline24`]
//!       * [`DynSetColor`] for any [`ColorSpec`]
//!       * [`Effect::Bold`], [`Effect::Dim`], [`Effect::Italic`],
//!         [`Effect::Underline`], [`Effect::SlowBlink`],
//!         [`Effect::RapidBlink`], [`Effect::Reverse`], [`Effect::Conceal`],
//!         and [`Effect::Strikeout`]
//!
//! Most commands are implemented by zero-sized unit structs and enum variants.
//! Commands that require arguments come in two flavors, a static flavor relying
//! on const generics and a dynamic flavor storing the arguments. The command
//! name for the latter flavor starts with `Dyn`. Where a parameter has a
//! documented default, the dynamic flavor's [`Default`] implementation uses it,
//! e.g., `DynMoveUp::default()` moves up one row.
//!
//! No command validates its arguments. The terminal decides what to make of,
//! say, moving the cursor to row zero.
//!
//!
//! # Example
//!
//! Executing a command is as simple as writing its display:
//! ```
//! # use csistyle::{fuse_sgr, cmd::{Effect, ResetStyle, SetForeground8}};
//! let s = format!(
//!     "{}Wow!{}",
//!     fuse_sgr!(Effect::Bold, Effect::Underline, SetForeground8::<124>),
//!     ResetStyle
//! );
//! assert_eq!(s, "\x1b[1;4;38;5;124mWow!\x1b[0m");
//! ```

use crate::style::{ColorSpec, Layer};
use crate::{Command, Sgr, CSI};

macro_rules! declare_unit_struct {
    ($name:ident) => {
        #[doc = concat!("The unit `",stringify!($name),"` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;
    };
}

macro_rules! declare_n_struct {
    ($name:ident( $( $arg:ident : $typ:ty ),+ $(,)? )) => {
        #[doc = concat!("The dynamic `",stringify!($name),"(",stringify!($($arg),+),")` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name( $( pub $typ ),+ );
    };
    ($name:ident< $( $arg:ident : $typ:ty ),+ >) => {
        #[doc = concat!("The static `",stringify!($name),"<",stringify!($($arg),+),">` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name< $(const $arg: $typ),+ >;
    }
}

macro_rules! implement_default {
    ($name:ident( $( $value:expr ),+ )) => {
        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self( $( $value ),+ )
            }
        }
    };
}

macro_rules! implement_command {
    ($name:ident $(< $( $arg:ident : $typ:ty ),+ >)? : $selfish:ident ; $output:ident $body:block) => {
        impl $(< $(const $arg: $typ),+ >)? $crate::Command for $name $(< $($arg),+ >)? {}

        impl $(< $(const $arg: $typ),+ >)? ::core::fmt::Display for $name $(< $($arg),+ >)? {
            #[inline]
            fn fmt(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $body
            }
        }
    }
}

macro_rules! define_unit_command {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_command!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! define_cmd_1 {
    ($name:ident <$arg:ident : $typ:ty>, $dyn_name:ident, $suffix:literal, $default:expr) => {
        declare_n_struct!($name<$arg : $typ>);
        implement_command!($name<$arg : $typ>: self; f {
            f.write_str(CSI)?;
            <_ as ::core::fmt::Display>::fmt(&$arg, f)?;
            f.write_str($suffix)
        });

        declare_n_struct!($dyn_name($arg : $typ));
        implement_default!($dyn_name($default));
        implement_command!($dyn_name: self; f {
            f.write_str(CSI)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
            f.write_str($suffix)
        });
    }
}

macro_rules! define_cmd_2 {
    (
        $name:ident <$arg1:ident : $typ1:ty, $arg2:ident : $typ2:ty>,
            $dyn_name:ident, $suffix:literal, $default1:expr, $default2:expr
    ) => {
        declare_n_struct!($name<$arg1 : $typ1, $arg2 : $typ2>);
        implement_command!($name<$arg1 : $typ1, $arg2 : $typ2>: self; f {
            f.write_str(CSI)?;
            <_ as ::core::fmt::Display>::fmt(&$arg1, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&$arg2, f)?;
            f.write_str($suffix)
        });

        declare_n_struct!($dyn_name($arg1 : $typ1, $arg2 : $typ2));
        implement_default!($dyn_name($default1, $default2));
        implement_command!($dyn_name: self; f {
            f.write_str(CSI)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&self.1, f)?;
            f.write_str($suffix)
        });
    }
}

macro_rules! implement_sgr {
    ($name:ident $(< $( $arg:ident : $typ:ty ),+ >)? : $selfish:ident ; $output:ident $body:block) => {
        impl $(< $(const $arg: $typ),+ >)? $crate::Command for $name $(< $($arg),+ >)? {}

        impl $(< $(const $arg: $typ),+ >)? $crate::Sgr for $name $(< $($arg),+ >)? {
            #[inline]
            fn write_param(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $body
            }
        }

        impl $(< $(const $arg: $typ),+ >)?  ::core::fmt::Display for $name $(< $($arg),+ >)? {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(CSI)?;
                self.write_param(f)?;
                f.write_str("m")
            }
        }
    };
}

macro_rules! define_unit_sgr {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_sgr!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! define_8bit_color {
    ($name:ident, $dyn_name:ident, $prefix:literal) => {
        declare_n_struct!($name<COLOR: u8>);
        implement_sgr!($name<COLOR: u8>: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&COLOR, f)
        });

        declare_n_struct!($dyn_name(COLOR: u8));
        implement_default!($dyn_name(0));
        implement_sgr!($dyn_name: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)
        });
    }
}

macro_rules! define_24bit_color {
    ($name:ident, $dyn_name:ident, $prefix:literal, $default:literal) => {
        declare_n_struct!($name<R: u8, G: u8, B: u8>);
        implement_sgr!($name<R: u8, G: u8, B: u8>: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&R, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&G, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&B, f)
        });

        declare_n_struct!($dyn_name(R: u8, G: u8, B: u8));
        implement_default!($dyn_name($default, $default, $default));
        implement_sgr!($dyn_name: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&self.1, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&self.2, f)
        });
    }
}

// ====================================== Library ======================================

// ---------------------------------- Generic Sequences ----------------------------------

declare_n_struct!(SetCode<CODE: u16>);
implement_sgr!(SetCode<CODE: u16>: self; f {
    <_ as ::core::fmt::Display>::fmt(&CODE, f)
});

declare_n_struct!(DynSetCode(CODE: u16));
implement_default!(DynSetCode(0));
implement_sgr!(DynSetCode: self; f {
    <_ as ::core::fmt::Display>::fmt(&self.0, f)
});

/// The dynamic `DynCsi(String)` command.
///
/// This command writes the control sequence introducer followed by the given
/// string, verbatim. It defaults to `0m`, i.e., a reset. Since it has a
/// string-valued field, it cannot be copied, only cloned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynCsi(String);

impl DynCsi {
    /// Create a new generic control sequence.
    pub fn new<S: Into<String>>(sequence: S) -> Self {
        Self(sequence.into())
    }

    /// Get the bytes following the control sequence introducer.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for DynCsi {
    fn default() -> Self {
        Self::new("0m")
    }
}

implement_command!(DynCsi: self; f {
    f.write_str(CSI)?;
    f.write_str(self.0.as_str())
});

// --------------------------------- Cursor Management ---------------------------------

define_cmd_1!(MoveUp<ROWS: u16>, DynMoveUp, "A", 1);
define_cmd_1!(MoveDown<ROWS: u16>, DynMoveDown, "B", 1);
define_cmd_1!(MoveRight<COLUMNS: u16>, DynMoveRight, "C", 1);
define_cmd_1!(MoveLeft<COLUMNS: u16>, DynMoveLeft, "D", 1);

define_cmd_1!(MoveToNextLine<ROWS: u16>, DynMoveToNextLine, "E", 1);
define_cmd_1!(MoveToPreviousLine<ROWS: u16>, DynMoveToPreviousLine, "F", 1);

define_cmd_1!(MoveToColumn<COLUMN: u16>, DynMoveToColumn, "G", 1);

define_cmd_2!(MoveTo<ROW: u16, COLUMN: u16>, DynMoveTo, "H", 1, 1);

impl DynMoveTo {
    /// Move to the first column of the given 1-based row.
    ///
    /// Terminals treat an omitted column as column 1, so `CSI 17H` and
    /// `CSI 17;1H` are equivalent. This constructor always writes the explicit
    /// form.
    #[inline]
    pub const fn with_row(row: u16) -> Self {
        Self(row, 1)
    }

    /// Move to the given 1-based column of the first row.
    #[inline]
    pub const fn with_column(column: u16) -> Self {
        Self(1, column)
    }
}

define_unit_command!(RequestCursorPosition, "\x1b[6n");

// -------------------------------- Content Management ---------------------------------

/// The enumeration of `EraseDisplay` commands.
///
/// Each variant's discriminant is the parameter of the `CSI n J` sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EraseDisplay {
    /// Erase from the cursor to the end of the screen.
    ToEnd = 0,
    /// Erase from the beginning of the screen to the cursor.
    ToStart = 1,
    /// Erase the entire screen.
    All = 2,
    /// Erase the entire screen and the scrollback buffer.
    AllAndScrollback = 3,
}

impl Command for EraseDisplay {}

impl core::fmt::Display for EraseDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <_ as core::fmt::Display>::fmt(&DynEraseDisplay::from(*self), f)
    }
}

declare_n_struct!(DynEraseDisplay(MODE: u16));
implement_command!(DynEraseDisplay: self; f {
    f.write_str(CSI)?;
    <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
    f.write_str("J")
});

impl From<EraseDisplay> for DynEraseDisplay {
    fn from(value: EraseDisplay) -> Self {
        Self(value as u16)
    }
}

/// The enumeration of `EraseLine` commands.
///
/// None of these commands change the cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EraseLine {
    /// Erase from the cursor to the end of the line.
    ToEnd = 0,
    /// Erase from the beginning of the line to the cursor.
    ToStart = 1,
    /// Erase the entire line.
    All = 2,
}

impl Command for EraseLine {}

impl core::fmt::Display for EraseLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <_ as core::fmt::Display>::fmt(&DynEraseLine::from(*self), f)
    }
}

declare_n_struct!(DynEraseLine(MODE: u16));
implement_command!(DynEraseLine: self; f {
    f.write_str(CSI)?;
    <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
    f.write_str("K")
});

impl From<EraseLine> for DynEraseLine {
    fn from(value: EraseLine) -> Self {
        Self(value as u16)
    }
}

// ------------------------------------- Scrolling -------------------------------------

define_cmd_1!(ScrollUp<ROWS: u16>, DynScrollUp, "S", 1);
define_cmd_1!(ScrollDown<ROWS: u16>, DynScrollDown, "T", 1);

// --------------------------------- Style Management ----------------------------------

define_unit_sgr!(ResetStyle, "0");

// The trailing separator is part of the established output format.
define_unit_command!(DefaultColors, "\x1b[39;49;m");

define_unit_sgr!(SetDefaultForeground, "39");
define_unit_sgr!(SetDefaultBackground, "49");
define_unit_sgr!(SetDefaultUnderline, "59");

define_8bit_color!(SetForeground8, DynSetForeground8, "38;5;");
define_8bit_color!(SetBackground8, DynSetBackground8, "48;5;");
define_8bit_color!(SetUnderline8, DynSetUnderline8, "58;5;");

define_24bit_color!(SetForeground24, DynSetForeground24, "38;2;", 255);
define_24bit_color!(SetBackground24, DynSetBackground24, "48;2;", 0);
define_24bit_color!(SetUnderline24, DynSetUnderline24, "58;2;", 255);

/// The dynamic `DynSetColor(layer, color)` command.
///
/// This command applies any [`ColorSpec`] to the given [`Layer`].
///
/// ```
/// # use csistyle::cmd::DynSetColor;
/// # use csistyle::style::{ColorSpec, Layer};
/// let cmd = DynSetColor(Layer::Background, ColorSpec::Rgb(1, 2, 3));
/// assert_eq!(format!("{}", cmd), "\x1b[48;2;1;2;3m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynSetColor(pub Layer, pub ColorSpec);

implement_sgr!(DynSetColor: self; f {
    self.1.write_sgr_params(self.0, f)
});

/// The enumeration of unit `Effect` commands.
///
/// Each variant's discriminant is the SGR parameter enabling the effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Effect {
    /// Bold or increased intensity.
    Bold = 1,
    /// Faint or decreased intensity.
    Dim = 2,
    /// Italic, though not all terminals support it.
    Italic = 3,
    /// Single underline.
    Underline = 4,
    /// Blinking less than 150 times per minute.
    SlowBlink = 5,
    /// Blinking 150 or more times per minute.
    RapidBlink = 6,
    /// Swapped foreground and background colors.
    Reverse = 7,
    /// Hidden text.
    Conceal = 8,
    /// Crossed-out text.
    Strikeout = 9,
}

impl Effect {
    /// Get the SGR parameter enabling this effect.
    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Get the SGR parameter that restores default appearance.
    ///
    /// Bold and dim share the same parameter, as do both blink speeds.
    pub const fn undo_code(&self) -> u8 {
        use self::Effect::*;

        match *self {
            Bold | Dim => 22,
            Italic => 23,
            Underline => 24,
            SlowBlink | RapidBlink => 25,
            Reverse => 27,
            Conceal => 28,
            Strikeout => 29,
        }
    }

    const fn successor(&self) -> Option<Self> {
        use self::Effect::*;

        Some(match *self {
            Bold => Dim,
            Dim => Italic,
            Italic => Underline,
            Underline => SlowBlink,
            SlowBlink => RapidBlink,
            RapidBlink => Reverse,
            Reverse => Conceal,
            Conceal => Strikeout,
            Strikeout => return None,
        })
    }

    /// Get an iterator over all effects.
    pub fn all() -> impl Iterator<Item = Self> {
        core::iter::successors(Some(Self::Bold), Self::successor)
    }
}

impl From<Effect> for u8 {
    fn from(value: Effect) -> Self {
        value.code()
    }
}

implement_sgr!(Effect: self; f {
    <_ as ::core::fmt::Display>::fmt(&self.code(), f)
});

// =====================================================================================
