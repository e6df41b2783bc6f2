//! Stateful text styling with SGR escape sequences.
//!
//! This module's main abstraction is the [`Styler`], which tracks the
//! foreground color, background color, and active effects of one text stream.
//! Colors are [`ColorSpec`]s at one of three depths, 3/4-bit with an
//! [`AnsiIndex`], 8-bit, or 24-bit, and they apply to one [`Layer`]. Active
//! effects are kept in an [`EffectSet`].
//!
//! The styler is one of two independent capabilities. The other one,
//! positioning the cursor and erasing content, is provided by the commands in
//! [`cmd`](crate::cmd). Applications combine the two by interleaving their
//! output:
//!
//! ```
//! # use csistyle::cmd::{DynMoveTo, EraseLine, Effect};
//! # use csistyle::style::Styler;
//! let mut styler = Styler::new();
//! let line = format!(
//!     "{}{}{}TSLA{}",
//!     DynMoveTo::with_row(3),
//!     EraseLine::All,
//!     styler.fg4bit(2, Effect::Bold.code()),
//!     styler.reset(),
//! );
//! assert_eq!(line, "\x1b[3;1H\x1b[2K\x1b[1;32mTSLA\x1b[0m");
//! ```

mod color;
mod effect;
mod styler;

pub use color::{AnsiIndex, ColorSpec, Layer};
pub use effect::EffectSet;
pub use styler::Styler;
