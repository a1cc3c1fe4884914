//! The terminal controller.
//!
//! [`Terminal`] is the only object that writes to the output sink. It keeps a
//! logical cursor and a staged style so callers can ask where they are
//! without a round trip to the terminal. The model is updated optimistically
//! and never re-synchronized: anything else writing to the same sink will
//! make it drift.
//!
//! Sink write errors are deliberately not surfaced. Every operation is
//! fire-and-forget; a broken pipe simply means nothing appears.

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;

use crate::style::{Color, Style, RESET};

/// Width used when the real terminal cannot be queried.
pub const FALLBACK_WIDTH: u16 = 80;
/// Height used when the real terminal cannot be queried.
pub const FALLBACK_HEIGHT: u16 = 24;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CLEAR_TO_EOL: &str = "\x1b[0K";
const CLEAR_TO_BOL: &str = "\x1b[1K";

/// Logical cursor position, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    /// Top-left corner.
    pub const HOME: Position = Position { row: 1, col: 1 };

    /// `(row, col)` tuple.
    pub fn as_tuple(self) -> (u16, u16) {
        (self.row, self.col)
    }

    /// Position after `text` is written from here.
    ///
    /// Newlines move to column 1 of the next row. Every other `char` moves
    /// one column right; tabs, wide characters and control codes are not
    /// interpreted.
    pub fn advance(self, text: &str) -> Position {
        text.chars().fold(self, |pos, c| {
            if c == '\n' {
                Position {
                    row: pos.row.saturating_add(1),
                    col: 1,
                }
            } else {
                Position {
                    row: pos.row,
                    col: pos.col.saturating_add(1),
                }
            }
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::HOME
    }
}

/// Terminal dimensions in cells, captured once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Size of the terminal attached to stdout, or 80x24 if it can't be read.
    pub fn detect() -> Size {
        match terminal_size::terminal_size_of(std::io::stdout()) {
            Some((terminal_size::Width(width), terminal_size::Height(height)))
                if width > 0 && height > 0 =>
            {
                Size { width, height }
            }
            _ => {
                tracing::debug!(
                    "terminal size unavailable, using {}x{}",
                    FALLBACK_WIDTH,
                    FALLBACK_HEIGHT
                );
                Size::default()
            }
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
        }
    }
}

#[derive(Debug)]
struct State<W> {
    cursor: Position,
    size: Size,
    pending: Style,
    sink: W,
}

impl<W: Write> State<W> {
    fn emit(&mut self, s: &str) {
        // Fire-and-forget: write failures are the sink's business.
        let _ = self.sink.write_all(s.as_bytes());
    }
}

/// A lightweight terminal controller over any [`Write`] sink.
///
/// All operations take `&self` and run as a single critical section, so a
/// controller can be shared between threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use termlib::{Color, Terminal};
///
/// let term = Terminal::with_size(Vec::new(), 80, 24);
/// term.move_to(3, 5);
/// term.set_foreground(Color::Red);
/// term.print("hi");
/// assert_eq!(term.position().as_tuple(), (3, 7));
/// assert_eq!(term.into_sink(), b"\x1b[3;5H\x1b[31mhi\x1b[0m");
/// ```
#[derive(Debug)]
pub struct Terminal<W: Write> {
    state: Mutex<State<W>>,
}

impl<W: Write> Terminal<W> {
    /// Create a controller writing to `sink`.
    ///
    /// The size is read from the terminal attached to stdout; when that
    /// fails the controller assumes 80x24. Never fails.
    pub fn new(sink: W) -> Self {
        Self::from_parts(sink, Size::detect())
    }

    /// Create a controller with a fixed size instead of querying the terminal.
    pub fn with_size(sink: W, width: u16, height: u16) -> Self {
        Self::from_parts(sink, Size { width, height })
    }

    fn from_parts(sink: W, size: Size) -> Self {
        Self {
            state: Mutex::new(State {
                cursor: Position::HOME,
                size,
                pending: Style::default(),
                sink,
            }),
        }
    }

    /// Terminal width captured at construction.
    pub fn width(&self) -> u16 {
        self.state.lock().size.width
    }

    /// Terminal height captured at construction.
    pub fn height(&self) -> u16 {
        self.state.lock().size.height
    }

    /// Width and height captured at construction.
    pub fn size(&self) -> Size {
        self.state.lock().size
    }

    /// Current logical cursor position.
    pub fn position(&self) -> Position {
        self.state.lock().cursor
    }

    /// Style staged for the next print.
    pub fn pending_style(&self) -> Style {
        self.state.lock().pending
    }

    /// Move the cursor to `(row, col)`, 1-based.
    ///
    /// Coordinates are not checked against the terminal size.
    pub fn move_to(&self, row: u16, col: u16) {
        let mut state = self.state.lock();
        state.emit(&format!("\x1b[{};{}H", row, col));
        state.cursor = Position { row, col };
    }

    /// Erase the whole display and home the cursor.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.emit(CLEAR_SCREEN);
        state.cursor = Position::HOME;
    }

    /// Erase from the cursor to the end of the line. The cursor does not move.
    pub fn clear_to_eol(&self) {
        self.state.lock().emit(CLEAR_TO_EOL);
    }

    /// Erase from the start of the line to the cursor. The cursor does not move.
    pub fn clear_to_bol(&self) {
        self.state.lock().emit(CLEAR_TO_BOL);
    }

    /// Stage a foreground color for the next print. Writes nothing.
    pub fn set_foreground(&self, color: Color) {
        self.state.lock().pending.fg = Some(color);
    }

    /// Stage a background color for the next print. Writes nothing.
    pub fn set_background(&self, color: Color) {
        self.state.lock().pending.bg = Some(color);
    }

    /// Stage bold for the next print. Writes nothing.
    pub fn set_bold(&self) {
        self.state.lock().pending.bold = true;
    }

    /// Stage italic for the next print. Writes nothing.
    pub fn set_italic(&self) {
        self.state.lock().pending.italic = true;
    }

    /// Emit a full reset immediately and drop any staged style.
    ///
    /// Unlike the setters this writes to the sink, even when nothing is staged.
    pub fn reset_style(&self) {
        let mut state = self.state.lock();
        state.emit(RESET);
        state.pending = Style::default();
    }

    /// Write `text`, wrapped in the staged style if there is one.
    ///
    /// A staged style applies to this call only: the text is followed by a
    /// reset and the staged style is cleared. The cursor advances by the
    /// characters in `text`.
    pub fn print(&self, text: &str) {
        let mut state = self.state.lock();
        let style = std::mem::take(&mut state.pending);

        if style.is_active() {
            // One buffer so the styled segment reaches the sink in one write.
            let mut out = String::with_capacity(text.len() + 32);
            style.push_start_codes(&mut out);
            out.push_str(text);
            out.push_str(RESET);
            state.emit(&out);
        } else {
            state.emit(text);
        }

        state.cursor = state.cursor.advance(text);
    }

    /// Format `args` and print the result. See [`term_print!`](crate::term_print).
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(literal) => self.print(literal),
            None => self.print(&args.to_string()),
        }
    }

    /// Print `text` followed by a newline, as one styled segment.
    pub fn println(&self, text: &str) {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.print(&line);
    }

    /// Flush the sink. A no-op for unbuffered sinks; errors are ignored.
    pub fn refresh(&self) {
        let mut state = self.state.lock();
        if let Err(e) = state.sink.flush() {
            tracing::trace!("flush failed: {}", e);
        }
    }

    /// Consume the controller and return its sink.
    pub fn into_sink(self) -> W {
        self.state.into_inner().sink
    }
}

/// Print formatted text through a [`Terminal`].
///
/// With only a literal the text is passed through as-is, so braces in plain
/// text are never treated as format directives. With arguments it formats
/// like [`format!`].
///
/// ```
/// use termlib::{term_print, Terminal};
///
/// let term = Terminal::with_size(Vec::new(), 80, 24);
/// term_print!(term, "{literal}");
/// term_print!(term, " {}%", 50);
/// assert_eq!(term.into_sink(), b"{literal} 50%");
/// ```
#[macro_export]
macro_rules! term_print {
    ($term:expr, $text:expr $(,)?) => {
        $term.print($text)
    };
    ($term:expr, $fmt:expr, $($arg:tt)+) => {
        $term.print_fmt(::std::format_args!($fmt, $($arg)+))
    };
}

/// Like [`term_print!`] with a trailing newline in the same styled segment.
#[macro_export]
macro_rules! term_println {
    ($term:expr $(,)?) => {
        $term.print("\n")
    };
    ($term:expr, $text:expr $(,)?) => {
        $term.println($text)
    };
    ($term:expr, $fmt:expr, $($arg:tt)+) => {
        $term.println(&::std::format!($fmt, $($arg)+))
    };
}
