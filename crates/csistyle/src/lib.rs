//! # csistyle
//!
//! This crate encodes **ANSI escape sequences** for moving the cursor, erasing
//! content, scrolling, and styling text with colors and effects. It is an
//! encoder only: Every operation is a pure computation producing a string, and
//! the crate never reads from or writes to a terminal. Its only dependency is
//! the [`tracing`](https://crates.io/crates/tracing) facade for diagnostics.
//!
//! The crate offers two independent capabilities:
//!
//!   * The [`cmd`] module provides a **library of stateless [`Command`]s**,
//!     one per control sequence, including cursor movement, erasure,
//!     scrolling, a cursor position request, and 8-bit as well as 24-bit
//!     colors. A command's [`Display`](core::fmt::Display) implementation
//!     writes its escape sequence. Commands that also implement [`Sgr`] can be
//!     fused into a single sequence with [`fuse_sgr!`].
//!   * The [`style`] module provides the **stateful [`Styler`](style::Styler)**,
//!     which tracks the colors and active effects of one text stream and
//!     returns the escape sequence for each update.
//!
//! The [`table`] module documents the codes of common control characters and
//! SGR parameters, the [`opt`] module configures stylers, and the [`util`]
//! module renders escape sequences readably.
//!
//!
//! # Example
//!
//! ```
//! # use csistyle::cmd::{Effect, EraseDisplay, MoveTo, ResetStyle};
//! # use csistyle::style::Styler;
//! # use csistyle::fuse;
//! let mut styler = Styler::new();
//!
//! let s = format!(
//!     "{}{}AAPL{}",
//!     fuse!(EraseDisplay::All, MoveTo::<1, 1>),
//!     styler.fg24bit(255, 165, 0),
//!     ResetStyle,
//! );
//! assert_eq!(s, "\x1b[2J\x1b[1;1H\x1b[38;2;255;165;0mAAPL\x1b[0m");
//!
//! assert_eq!(styler.toggle_effect(Effect::Underline), "\x1b[4m");
//! ```

mod api;
pub mod cmd;
pub mod err;
pub mod opt;
pub mod style;
pub mod table;
pub mod util;

pub use api::{Command, Params, Sgr, CSI};
