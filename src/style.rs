//! Colors, staged text styles, and their SGR escape codes.
//!
//! Every code produced here is a plain ANSI `CSI ... m` sequence. Nothing is
//! negotiated with the terminal; an ANSI-compatible emulator is assumed.

use serde::{Deserialize, Serialize};

/// SGR reset: clears every attribute and color.
pub const RESET: &str = "\x1b[0m";
/// SGR bold.
pub const BOLD: &str = "\x1b[1m";
/// SGR italic.
pub const ITALIC: &str = "\x1b[3m";

/// A terminal color.
///
/// The eight standard colors map to SGR 30-37 (foreground) and 40-47
/// (background). Bright, 256-color and truecolor values are passed through
/// as-is; whether the terminal honors them is up to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index (`38;5;n` / `48;5;n`)
    Indexed(u8),
    /// 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`)
    Rgb(u8, u8, u8),
}

/// Whether a color is being written as foreground or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

/// SGR parameter form of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    /// Offset 0-7 into the standard (`false`) or bright (`true`) range
    Palette(u8, bool),
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// How this color is encoded in an SGR parameter list.
    fn encoding(self) -> Encoding {
        match self {
            Color::Black => Encoding::Palette(0, false),
            Color::Red => Encoding::Palette(1, false),
            Color::Green => Encoding::Palette(2, false),
            Color::Yellow => Encoding::Palette(3, false),
            Color::Blue => Encoding::Palette(4, false),
            Color::Magenta => Encoding::Palette(5, false),
            Color::Cyan => Encoding::Palette(6, false),
            Color::White => Encoding::Palette(7, false),
            Color::BrightBlack => Encoding::Palette(0, true),
            Color::BrightRed => Encoding::Palette(1, true),
            Color::BrightGreen => Encoding::Palette(2, true),
            Color::BrightYellow => Encoding::Palette(3, true),
            Color::BrightBlue => Encoding::Palette(4, true),
            Color::BrightMagenta => Encoding::Palette(5, true),
            Color::BrightCyan => Encoding::Palette(6, true),
            Color::BrightWhite => Encoding::Palette(7, true),
            Color::Indexed(n) => Encoding::Indexed(n),
            Color::Rgb(r, g, b) => Encoding::Rgb(r, g, b),
        }
    }

    fn push_sgr(self, layer: Layer, buf: &mut String) {
        let extended = match layer {
            Layer::Foreground => "38",
            Layer::Background => "48",
        };
        buf.push_str("\x1b[");
        match self.encoding() {
            Encoding::Palette(n, bright) => {
                let base: u16 = match (layer, bright) {
                    (Layer::Foreground, false) => 30,
                    (Layer::Background, false) => 40,
                    (Layer::Foreground, true) => 90,
                    (Layer::Background, true) => 100,
                };
                buf.push_str(&(base + u16::from(n)).to_string());
            }
            Encoding::Indexed(n) => {
                buf.push_str(extended);
                buf.push_str(";5;");
                buf.push_str(&n.to_string());
            }
            Encoding::Rgb(r, g, b) => {
                buf.push_str(extended);
                buf.push_str(";2;");
                buf.push_str(&r.to_string());
                buf.push(';');
                buf.push_str(&g.to_string());
                buf.push(';');
                buf.push_str(&b.to_string());
            }
        }
        buf.push('m');
    }

    /// Append the foreground escape code for this color to `buf`.
    pub fn push_fg(self, buf: &mut String) {
        self.push_sgr(Layer::Foreground, buf);
    }

    /// Append the background escape code for this color to `buf`.
    pub fn push_bg(self, buf: &mut String) {
        self.push_sgr(Layer::Background, buf);
    }

    /// Foreground escape code as an owned string.
    pub fn fg_code(self) -> String {
        let mut buf = String::with_capacity(8);
        self.push_fg(&mut buf);
        buf
    }

    /// Background escape code as an owned string.
    pub fn bg_code(self) -> String {
        let mut buf = String::with_capacity(8);
        self.push_bg(&mut buf);
        buf
    }
}

/// Style attributes staged for the next print.
///
/// `None` means "never set" and emits nothing, which keeps an explicit
/// color distinct from the terminal default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    /// True if any attribute is staged.
    pub fn is_active(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || self.bold || self.italic
    }

    /// Append start codes in fixed order: foreground, background, bold, italic.
    ///
    /// Appends nothing for an inactive style.
    pub fn push_start_codes(&self, buf: &mut String) {
        if let Some(fg) = self.fg {
            fg.push_fg(buf);
        }
        if let Some(bg) = self.bg {
            bg.push_bg(buf);
        }
        if self.bold {
            buf.push_str(BOLD);
        }
        if self.italic {
            buf.push_str(ITALIC);
        }
    }
}
