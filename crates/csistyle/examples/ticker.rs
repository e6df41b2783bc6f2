use std::io::{Result, Write};

use csistyle::cmd::{DynMoveTo, Effect, EraseDisplay, EraseLine, ResetStyle};
use csistyle::opt::Options;
use csistyle::style::{AnsiIndex, ColorSpec, Styler};
use csistyle::fuse;

/// A made-up quote, derived from the symbol so that output is reproducible.
fn quote(symbol: &str) -> i32 {
    let hash = symbol
        .bytes()
        .fold(17_i32, |acc, b| acc.wrapping_mul(31).wrapping_add(i32::from(b)));
    hash.rem_euclid(2001) - 1000
}

/// Format a change in hundredths of a percent, e.g., `-0.50%` for -50.
fn percent(change: i32) -> String {
    let sign = if change < 0 { '-' } else { '+' };
    format!("{}{}.{:02}%", sign, change.abs() / 100, change.abs() % 100)
}

/// Render one row of the ticker board.
fn render(styler: &mut Styler, row: u16, symbol: &str) -> String {
    let change = quote(symbol);
    let color = match change.signum() {
        1 => styler.fg4(AnsiIndex::GREEN.index()),
        -1 => styler.fg4(AnsiIndex::RED.index()),
        _ => styler.fg8bit(244),
    };

    format!(
        "{}{}{}{:<6}{} {}{}",
        DynMoveTo::with_row(row),
        EraseLine::All,
        color,
        symbol,
        styler.toggle_effect(Effect::Underline),
        percent(change),
        styler.reset(),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(-50), "-0.50%");
        assert_eq!(percent(-1), "-0.01%");
        assert_eq!(percent(0), "+0.00%");
        assert_eq!(percent(1234), "+12.34%");
        assert_eq!(percent(-1000), "-10.00%");
    }

    #[test]
    fn test_render() {
        let row = render(&mut Styler::new(), 2, "AAPL");
        assert!(row.starts_with("\x1b[2;1H\x1b[2K"));
        assert!(row.contains(&percent(quote("AAPL"))));
        assert!(row.ends_with("\x1b[0m"));
    }
}

fn main() -> Result<()> {
    let symbols: Vec<String> = std::env::args().skip(1).collect();
    let symbols = if symbols.is_empty() {
        vec!["AAPL".to_string(), "MSFT".to_string(), "TSLA".to_string()]
    } else {
        symbols
    };

    let options = Options::builder()
        .foreground(ColorSpec::Ansi(AnsiIndex::DEFAULT))
        .background(ColorSpec::Ansi(AnsiIndex::DEFAULT))
        .effect(Effect::Bold.code())
        .build();
    let mut styler = Styler::with_options(&options);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", fuse!(EraseDisplay::All))?;
    for (row, symbol) in symbols.iter().enumerate() {
        let row = u16::try_from(row + 1).unwrap_or(u16::MAX);
        write!(stdout, "{}", render(&mut styler, row, symbol))?;
        styler.clear_effects();
    }

    let last = u16::try_from(symbols.len() + 2).unwrap_or(u16::MAX);
    writeln!(stdout, "{}{}", DynMoveTo::with_row(last), ResetStyle)?;
    stdout.flush()
}
