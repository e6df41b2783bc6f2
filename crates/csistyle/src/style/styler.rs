use tracing::{debug, trace};

use super::{AnsiIndex, ColorSpec, EffectSet, Layer};
use crate::cmd::{DefaultColors, DynSetColor, ResetStyle};
use crate::opt::Options;
use crate::{Params, CSI};

/// The most recently produced 4-bit foreground sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Memo {
    color: u8,
    effect: u8,
    sequence: String,
}

/// Write a color, optionally prefixed with an effect.
///
/// An effect of zero writes the color only, so that it does not reset any
/// effects already in force.
fn prefixed(effect: u8, layer: Layer, color: ColorSpec) -> String {
    let command = DynSetColor(layer, color);
    if effect == 0 {
        command.to_string()
    } else {
        format!("{}{};{}m", CSI, effect, Params(&command))
    }
}

/// Replace ANSI index 8 with the default color.
///
/// On its own, parameter 38 or 48 introduces an extended color and would
/// swallow the parameters following it.
fn restorable(color: ColorSpec) -> ColorSpec {
    match color {
        ColorSpec::Ansi(index) if index.index() == 8 => ColorSpec::Ansi(AnsiIndex::DEFAULT),
        _ => color,
    }
}

/// A stateful text styler.
///
/// A styler tracks the state of one logical text stream: its foreground and
/// background colors, a default effect, and the [`EffectSet`] of currently
/// active effects. Its methods update that state and return the escape
/// sequence for the update, leaving it to the caller to write the sequence.
/// Each stream should own its own styler; stylers are not meant to be shared.
///
/// The 4-bit color methods are lenient: For an out-of-range color, they return
/// an empty string and leave the state untouched. All other colors are `u8`
/// values and hence always in range.
///
///
/// # Example
///
/// ```
/// # use csistyle::cmd::Effect;
/// # use csistyle::style::Styler;
/// let mut styler = Styler::new();
///
/// assert_eq!(styler.fg8bit(196), "\x1b[38;5;196m");
/// assert_eq!(styler.toggle_effect(Effect::Bold), "\x1b[1m");
/// assert_eq!(styler.toggle_effect(Effect::Italic), "\x1b[1;3m");
/// assert_eq!(styler.toggle_effect(Effect::Bold), "\x1b[3m");
/// assert_eq!(styler.fg4bit(12, 0), "");
/// ```
#[derive(Clone, Debug)]
pub struct Styler {
    foreground: ColorSpec,
    background: ColorSpec,
    default_effect: u8,
    effects: EffectSet,
    memo: Option<Memo>,
}

impl Default for Styler {
    fn default() -> Self {
        Self::with_options(&Options::default())
    }
}

impl Styler {
    /// Create a new styler with the default options.
    ///
    /// The foreground is 4-bit white, the background 4-bit black, and there is
    /// no default effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new styler with the given options.
    pub fn with_options(options: &Options) -> Self {
        Self {
            foreground: options.foreground(),
            background: options.background(),
            default_effect: options.effect(),
            effects: EffectSet::new(),
            memo: None,
        }
    }

    /// Get the current foreground color.
    pub fn foreground(&self) -> ColorSpec {
        self.foreground
    }

    /// Get the current background color.
    pub fn background(&self) -> ColorSpec {
        self.background
    }

    /// Get the default effect used by [`Styler::fg4`] and [`Styler::bg4`].
    pub fn default_effect(&self) -> u8 {
        self.default_effect
    }

    /// Get the active effects.
    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }

    // ---------------------------------------------------------------------------------------------

    /// Toggle the given effect.
    ///
    /// This method flips the effect's membership in the set of active effects
    /// and returns a sequence listing *all* active effects, e.g., `CSI 1;3m`
    /// for bold and italic. Once the last effect has been toggled off, the
    /// result is `CSI m`.
    pub fn toggle_effect<E: Into<u8>>(&mut self, effect: E) -> String {
        let code = effect.into();
        let active = self.effects.toggle(code);
        trace!(code, active, "toggled effect");
        self.effects.to_string()
    }

    /// Deactivate all effects without emitting a sequence.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Get the sequence restoring default foreground and background colors.
    ///
    /// The result is always `CSI 39;49;m`, independent of this styler's state.
    pub fn default_colors(&self) -> String {
        DefaultColors.to_string()
    }

    /// Get the sequence resetting all colors and effects.
    ///
    /// The result is always `CSI 0m`. This method does *not* clear the set of
    /// active effects, so the next [`Styler::toggle_effect`] reports them
    /// again. Use [`Styler::clear_effects`] to forget them.
    pub fn reset(&self) -> String {
        ResetStyle.to_string()
    }

    /// Get a sequence that resets the terminal and then re-applies this
    /// styler's state, i.e., active effects, foreground, and background.
    ///
    /// A 4-bit color with index 8 has no standalone parameter and is restored
    /// as the default color.
    pub fn restore(&self) -> String {
        let effects = if self.effects.is_empty() {
            String::new()
        } else {
            format!(";{}", Params(&self.effects))
        };

        format!(
            "{}0{};{};{}m",
            CSI,
            effects,
            Params(&DynSetColor(Layer::Foreground, restorable(self.foreground))),
            Params(&DynSetColor(Layer::Background, restorable(self.background)))
        )
    }

    // ---------------------------------------------------------------------------------------------

    /// Set a 3/4-bit foreground color.
    ///
    /// The color must be between 0 and 9 inclusive, with 0–7 the standard
    /// colors and 9 the default color. Otherwise, this method returns an empty
    /// string. A non-zero effect prefixes the color, e.g., `CSI 1;31m` for
    /// bold red, whereas an effect of zero produces the color only, e.g.,
    /// `CSI 31m`.
    ///
    /// The styler remembers the last color and effect with the resulting
    /// sequence. If both are unchanged, it returns the remembered sequence
    /// instead of formatting a new one.
    pub fn fg4bit(&mut self, color: u8, effect: u8) -> String {
        let Some(index) = AnsiIndex::new(color) else {
            debug!(color, "ignoring out-of-range 4-bit foreground color");
            return String::new();
        };

        self.foreground = ColorSpec::Ansi(index);
        if let Some(ref memo) = self.memo {
            if memo.color == color && memo.effect == effect {
                trace!(color, effect, "reusing 4-bit foreground sequence");
                return memo.sequence.clone();
            }
        }

        let sequence = prefixed(effect, Layer::Foreground, self.foreground);
        self.memo = Some(Memo {
            color,
            effect,
            sequence: sequence.clone(),
        });
        sequence
    }

    /// Set a 3/4-bit background color by its SGR code.
    ///
    /// The code must be between 40 and 49 inclusive. Otherwise, this method
    /// returns an empty string. Effects work as for [`Styler::fg4bit`].
    pub fn bg4bit(&mut self, code: u8, effect: u8) -> String {
        let Some(index) = code.checked_sub(40).and_then(AnsiIndex::new) else {
            debug!(code, "ignoring out-of-range 4-bit background code");
            return String::new();
        };

        self.background = ColorSpec::Ansi(index);
        prefixed(effect, Layer::Background, self.background)
    }

    /// Set a 3/4-bit foreground color with the default effect.
    pub fn fg4(&mut self, color: u8) -> String {
        self.fg4bit(color, self.default_effect)
    }

    /// Set a 3/4-bit background color with the default effect.
    pub fn bg4(&mut self, code: u8) -> String {
        self.bg4bit(code, self.default_effect)
    }

    /// Set an 8-bit foreground color.
    ///
    /// Indexes 0–7 are the standard colors, 8–15 the high-intensity colors,
    /// 16–231 the 6×6×6 cube, and 232–255 a grayscale ramp.
    pub fn fg8bit(&mut self, color: u8) -> String {
        self.foreground = ColorSpec::EightBit(color);
        DynSetColor(Layer::Foreground, self.foreground).to_string()
    }

    /// Set an 8-bit background color.
    pub fn bg8bit(&mut self, color: u8) -> String {
        self.background = ColorSpec::EightBit(color);
        DynSetColor(Layer::Background, self.background).to_string()
    }

    /// Set a 24-bit foreground color.
    pub fn fg24bit(&mut self, r: u8, g: u8, b: u8) -> String {
        self.foreground = ColorSpec::Rgb(r, g, b);
        DynSetColor(Layer::Foreground, self.foreground).to_string()
    }

    /// Set a 24-bit background color.
    pub fn bg24bit(&mut self, r: u8, g: u8, b: u8) -> String {
        self.background = ColorSpec::Rgb(r, g, b);
        DynSetColor(Layer::Background, self.background).to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cmd::Effect;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let styler = Styler::new();
        assert_eq!(styler.foreground(), ColorSpec::Ansi(AnsiIndex::WHITE));
        assert_eq!(styler.background(), ColorSpec::Ansi(AnsiIndex::BLACK));
        assert_eq!(styler.default_effect(), 0);
        assert!(styler.effects().is_empty());
        assert_eq!(styler.restore(), "\x1b[0;37;40m");
    }

    #[test]
    fn test_fg4bit() {
        let mut styler = Styler::new();
        let mut rng = rand::rng();

        for color in 0..=9 {
            assert_eq!(styler.fg4bit(color, 0), format!("\x1b[3{}m", color));

            let effect = rng.random_range(1..=u8::MAX);
            let s = styler.fg4bit(color, effect);
            assert_eq!(s, format!("\x1b[{};3{}m", effect, color));
            assert!(s.ends_with(&format!("{};3{}m", effect, color)));
            assert_eq!(styler.foreground(), ColorSpec::Ansi(AnsiIndex::new(color).unwrap()));
        }

        styler.fg8bit(100);
        for _ in 0..100 {
            let color = rng.random_range(10..=u8::MAX);
            let effect = rng.random::<u8>();
            assert_eq!(styler.fg4bit(color, effect), "");
        }
        assert_eq!(styler.foreground(), ColorSpec::EightBit(100));
    }

    #[test]
    fn test_fg4bit_memo() {
        let mut styler = Styler::new();
        assert!(styler.memo.is_none());

        assert_eq!(styler.fg4bit(2, 0), "\x1b[32m");
        let memo = styler.memo.clone().unwrap();
        assert_eq!((memo.color, memo.effect), (2, 0));

        assert_eq!(styler.fg4bit(2, 0), "\x1b[32m");
        assert_eq!(styler.memo, Some(memo));

        // A different effect is a different sequence.
        assert_eq!(styler.fg4bit(2, 4), "\x1b[4;32m");
        assert_eq!(styler.memo.as_ref().map(|m| m.effect), Some(4));

        // Rejected colors leave the memo alone.
        assert_eq!(styler.fg4bit(10, 4), "");
        assert_eq!(styler.memo.as_ref().map(|m| m.color), Some(2));
    }

    #[test]
    fn test_bg4bit() {
        let mut styler = Styler::new();

        for code in 40..=49 {
            assert_eq!(styler.bg4bit(code, 0), format!("\x1b[{}m", code));
            assert_eq!(styler.bg4bit(code, 7), format!("\x1b[7;{}m", code));
            assert_eq!(
                styler.background(),
                ColorSpec::Ansi(AnsiIndex::new(code - 40).unwrap())
            );
        }

        styler.bg24bit(1, 2, 3);
        for code in (0..40).chain(50..=u8::MAX) {
            assert_eq!(styler.bg4bit(code, 0), "");
            assert_eq!(styler.bg4bit(code, 1), "");
        }
        assert_eq!(styler.background(), ColorSpec::Rgb(1, 2, 3));
    }

    #[test]
    fn test_default_effect() {
        let options = Options::builder().effect(1).build();
        let mut styler = Styler::with_options(&options);
        assert_eq!(styler.fg4(1), "\x1b[1;31m");
        assert_eq!(styler.bg4(44), "\x1b[1;44m");
        assert_eq!(styler.fg4(11), "");

        let mut styler = Styler::new();
        assert_eq!(styler.fg4(1), "\x1b[31m");
        assert_eq!(styler.bg4(44), "\x1b[44m");
    }

    #[test]
    fn test_toggle_effect() {
        let mut styler = Styler::new();
        styler.toggle_effect(Effect::Italic);
        styler.toggle_effect(Effect::Strikeout);
        let before = styler.effects().clone();

        let on = styler.toggle_effect(Effect::Bold);
        let off = styler.toggle_effect(Effect::Bold);
        assert_eq!(styler.effects(), &before);
        assert_eq!(on, "\x1b[3;9;1m");
        assert_eq!(off, "\x1b[3;9m");
        assert_eq!(on.replace(";1m", "m"), off);

        // Toggling an active code that is not last moves it to the end.
        let off = styler.toggle_effect(Effect::Italic);
        let on = styler.toggle_effect(Effect::Italic);
        assert_eq!(off, "\x1b[9m");
        assert_eq!(on, "\x1b[9;3m");
        assert_eq!(styler.effects(), &before);

        let mut rng = rand::rng();
        for _ in 0..100 {
            let code = rng.random::<u8>();
            let before = styler.effects().clone();
            styler.toggle_effect(code);
            styler.toggle_effect(code);
            assert_eq!(styler.effects(), &before);
        }
    }

    #[test]
    fn test_reset_and_default() {
        let mut styler = Styler::new();
        assert_eq!(styler.reset(), "\x1b[0m");
        assert_eq!(styler.default_colors(), "\x1b[39;49;m");

        styler.toggle_effect(Effect::Underline);
        styler.fg24bit(9, 8, 7);
        assert_eq!(styler.reset(), "\x1b[0m");
        assert_eq!(styler.default_colors(), "\x1b[39;49;m");

        // Resetting does not forget the active effects.
        assert!(styler.effects().contains(4));
        assert_eq!(styler.toggle_effect(Effect::Bold), "\x1b[4;1m");

        styler.clear_effects();
        assert!(styler.effects().is_empty());
        assert_eq!(styler.toggle_effect(Effect::Bold), "\x1b[1m");
    }

    #[test]
    fn test_8bit_and_24bit() {
        let mut styler = Styler::new();
        assert_eq!(styler.fg8bit(0), "\x1b[38;5;0m");
        assert_eq!(styler.bg8bit(255), "\x1b[48;5;255m");
        assert_eq!(styler.fg24bit(10, 20, 30), "\x1b[38;2;10;20;30m");
        assert_eq!(styler.bg24bit(0, 0, 0), "\x1b[48;2;0;0;0m");
        assert_eq!(styler.foreground(), ColorSpec::Rgb(10, 20, 30));
        assert_eq!(styler.background(), ColorSpec::Rgb(0, 0, 0));

        let mut rng = rand::rng();
        for _ in 0..100 {
            let (r, g, b) = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
            assert_eq!(styler.fg24bit(r, g, b), format!("\x1b[38;2;{};{};{}m", r, g, b));
            assert_eq!(styler.bg24bit(r, g, b), format!("\x1b[48;2;{};{};{}m", r, g, b));
        }
    }

    #[test]
    fn test_restore_index_8() {
        let mut styler = Styler::new();
        assert_eq!(styler.fg4bit(8, 0), "\x1b[38m");
        assert_eq!(styler.bg4bit(48, 0), "\x1b[48m");
        assert_eq!(styler.restore(), "\x1b[0;39;49m");

        styler.toggle_effect(Effect::Bold);
        styler.fg4bit(3, 0);
        assert_eq!(styler.restore(), "\x1b[0;1;33;49m");
    }

    #[test]
    fn test_bold_red_scenario() {
        let mut styler = Styler::new();
        assert_eq!(styler.fg8bit(196), "\x1b[38;5;196m");
        assert_eq!(styler.toggle_effect(Effect::Bold), "\x1b[1m");
        assert_eq!(styler.restore(), "\x1b[0;1;38;5;196;40m");
        assert_eq!(styler.toggle_effect(Effect::Bold), "\x1b[m");
        assert_eq!(styler.restore(), "\x1b[0;38;5;196;40m");
    }
}
