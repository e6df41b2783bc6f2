//! Helper module with this crate's error type.
//!
//! Errors only arise from the strict constructors that check values coming
//! from outside the type system, such as converting a `u8` into an
//! [`AnsiIndex`](crate::style::AnsiIndex) or parsing a
//! [`ControlCode`](crate::table::ControlCode) from its name. The lenient
//! styling methods of [`Styler`](crate::style::Styler) instead signal
//! out-of-range colors with an empty sequence.

/// The enumeration of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A color index, color code, or color channel is out of bounds.
    OutOfBounds,
    /// A name does not appear in a code table.
    UnknownName,
}

impl ErrorKind {
    /// Turn the error kind to an error message.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::OutOfBounds => "value out of bounds",
            Self::UnknownName => "unknown code name",
        }
    }
}

/// A styling error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    context: String,
}

impl Error {
    /// Create a new out-of-bounds error.
    pub fn out_of_bounds(value: i64, expected: core::ops::RangeInclusive<i64>) -> Self {
        Self {
            kind: ErrorKind::OutOfBounds,
            context: format!(
                "{} does not fit into range {}..={}",
                value,
                expected.start(),
                expected.end()
            ),
        }
    }

    /// Create a new unknown-name error.
    pub fn unknown_name(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownName,
            context: format!("{:?}", name),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind.as_str())?;
        f.write_str(": ")?;
        f.write_str(&self.context)
    }
}

impl std::error::Error for Error {}
