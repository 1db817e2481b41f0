//! Crossterm terminal backend.
//!
//! The `Driver` owns a writer (stdout in the playground, a byte buffer in
//! tests), switches the terminal into the alternate screen, and paints
//! [`CellUpdate`]s. Color strings are parsed as named colors or `#rrggbb`.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::frame::CellUpdate;
use super::strip::CellStyle;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// Writes are queued; call [`Driver::flush`] to send them.
pub struct Driver<W: Write = BufWriter<Stdout>> {
    writer: W,
    in_alt_screen: bool,
}

impl Driver {
    /// Create a driver writing to buffered stdout.
    pub fn stdout() -> Self {
        Self::with_writer(BufWriter::new(io::stdout()))
    }

    /// Get the terminal size (columns, rows).
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl<W: Write> Driver<W> {
    /// Create a driver around an arbitrary writer.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            in_alt_screen: false,
        }
    }

    /// Enter the alternate screen, enable raw mode and mouse capture.
    pub fn enter(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        self.in_alt_screen = true;
        Ok(())
    }

    /// Undo [`Driver::enter`]. No-op if the driver never entered.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.in_alt_screen {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(self.writer, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
        self.in_alt_screen = false;
        Ok(())
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))
    }

    /// Queue a batch of cell updates.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_cell_style(&update.cell.style)?;
            queue!(
                self.writer,
                Print(update.cell.ch),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }

    /// Flush queued output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the driver and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(color) = style.fg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetForegroundColor(color))?;
        }
        if let Some(color) = style.bg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetBackgroundColor(color))?;
        }
        let attributes = [
            (style.bold, Attribute::Bold),
            (style.dim, Attribute::Dim),
            (style.italic, Attribute::Italic),
            (style.underline, Attribute::Underlined),
            (style.reverse, Attribute::Reverse),
        ];
        for (on, attribute) in attributes {
            if on {
                queue!(self.writer, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a color string into a crossterm `Color`.
///
/// Accepts `#rrggbb`, `#rgb`, and the basic named colors (with `dark_` and
/// `grey`/`gray` variants). Returns `None` for anything else.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" | "darkred" => Some(Color::DarkRed),
        "dark_green" | "darkgreen" => Some(Color::DarkGreen),
        "dark_blue" | "darkblue" => Some(Color::DarkBlue),
        "dark_cyan" | "darkcyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }),
        3 => {
            // #abc expands to #aabbcc
            let (r, g, b) = (channel(0..1)?, channel(1..2)?, channel(2..3)?);
            Some(Color::Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::StyledCell;

    #[test]
    fn parse_hex() {
        assert_eq!(parse_color("#0696d7"), Some(Color::Rgb { r: 6, g: 150, b: 215 }));
        assert_eq!(parse_color("#abc"), Some(Color::Rgb { r: 0xaa, g: 0xbb, b: 0xcc }));
    }

    #[test]
    fn parse_hex_invalid() {
        assert_eq!(parse_color("#ff00"), None);
        assert_eq!(parse_color("#gghhii"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn parse_named() {
        assert_eq!(parse_color(" Red "), Some(Color::Red));
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGrey));
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("rainbow"), None);
    }

    #[test]
    fn apply_updates_writes_characters() {
        let mut driver = Driver::with_writer(Vec::new());
        let updates = vec![CellUpdate {
            x: 1,
            y: 0,
            cell: StyledCell::new('Z', CellStyle::default()),
        }];
        driver.apply_updates(&updates).unwrap();
        driver.flush().unwrap();
        let out = String::from_utf8(driver.into_inner()).unwrap();
        assert!(out.contains('Z'));
    }

    #[test]
    fn leave_without_enter_is_noop() {
        let mut driver = Driver::with_writer(Vec::new());
        driver.leave().unwrap();
        assert!(driver.into_inner().is_empty());
    }
}
