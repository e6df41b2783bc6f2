//! Helper module with the options for creating stylers.
//!
//! This module provides the initial state of a
//! [`Styler`](crate::style::Styler) and the corresponding builder. Every
//! styler owns a copy of its options; there is no process-wide default to
//! mutate.
//!
//!
//! # Example
//!
//! ```
//! # use csistyle::opt::Options;
//! # use csistyle::style::{AnsiIndex, ColorSpec};
//! let options = Options::builder()
//!     .foreground(ColorSpec::EightBit(214))
//!     .effect(1)
//!     .build();
//!
//! assert_eq!(options.foreground(), ColorSpec::EightBit(214));
//! assert_eq!(options.background(), ColorSpec::Ansi(AnsiIndex::BLACK));
//! assert_eq!(options.effect(), 1);
//! ```

use crate::style::{AnsiIndex, ColorSpec};

#[derive(Clone, Debug)]
struct OptionData {
    foreground: ColorSpec,
    background: ColorSpec,
    effect: u8,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            foreground: ColorSpec::Ansi(AnsiIndex::WHITE),
            background: ColorSpec::Ansi(AnsiIndex::BLACK),
            effect: 0,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the initial foreground color.
    pub fn foreground(&mut self, color: ColorSpec) -> &mut Self {
        self.0.foreground = color;
        self
    }

    /// Set the initial background color.
    pub fn background(&mut self, color: ColorSpec) -> &mut Self {
        self.0.background = color;
        self
    }

    /// Set the default effect code.
    ///
    /// Zero means no effect.
    pub fn effect(&mut self, effect: u8) -> &mut Self {
        self.0.effect = effect;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the initial foreground color, 4-bit white by default.
    pub fn foreground(&self) -> ColorSpec {
        self.0.foreground
    }

    /// Get the initial background color, 4-bit black by default.
    pub fn background(&self) -> ColorSpec {
        self.0.background
    }

    /// Get the default effect code, 0 by default.
    pub fn effect(&self) -> u8 {
        self.0.effect
    }
}
