//! Helper module for displaying escape sequences.
//!
//! Escape sequences are invisible when printed to a terminal and unreadable in
//! most logs. [`nicely`] makes them visible by replacing control characters
//! with mnemonics.

/// Nicely format a character.
fn format_nicely<W>(c: char, output: &mut W) -> core::fmt::Result
where
    W: core::fmt::Write + ?Sized,
{
    if (' '..='~').contains(&c) || (!c.is_ascii() && !c.is_control()) {
        return output.write_char(c);
    }

    // Letters are math sans-serif so that a mnemonic never reads like a
    // hexadecimal number.
    let replacement = match c {
        '\x00' => "‹𝗇𝗎𝗅›",
        '\x07' => "‹𝖻𝖾𝗅›",
        '\x08' => "‹𝖻s›",
        '\x09' => "‹𝗁𝗍›",
        '\x0a' => "‹𝗅𝖿›",
        '\x0b' => "‹𝗏𝗍›",
        '\x0d' => "‹𝖼𝗋›",
        '\x1b' => "‹𝖾𝗌𝖼›",
        '\x7f' => "‹𝖽𝖾𝗅›",
        _ => "",
    };
    if !replacement.is_empty() {
        return output.write_str(replacement);
    }

    write!(output, "‹{:02x}›", u32::from(c))
}

/// A newtype for nicely formatting a string.
struct Nicely<'a>(&'a str);

impl core::fmt::Display for Nicely<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            if c == '"' {
                f.write_str("\\\"")?;
            } else {
                format_nicely(c, f)?;
            }
        }
        f.write_str("\"")
    }
}

impl core::fmt::Debug for Nicely<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Turn the string into a value that displays nicely.
///
/// Printable ASCII and non-control Unicode characters display as themselves,
/// common C0 controls as mnemonics such as `‹𝖾𝗌𝖼›`, and all other controls as
/// two-digit hexadecimal numbers.
///
/// ```
/// # use csistyle::util::nicely;
/// # use csistyle::cmd::SetForeground8;
/// let s = format!("{}", nicely(&SetForeground8::<196>.to_string()));
/// assert_eq!(s, "\"‹𝖾𝗌𝖼›[38;5;196m\"");
/// ```
pub fn nicely(s: &str) -> impl core::fmt::Debug + core::fmt::Display + '_ {
    Nicely(s)
}
