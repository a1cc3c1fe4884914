//! termlib - a light weight terminal interface library
//!
//! Issues cursor movement, screen clearing and text styling escape sequences
//! to any [`std::io::Write`] sink, while tracking the cursor position and
//! staged style locally so they can be queried without asking the terminal.
//!
//! ```
//! use termlib::{Color, Terminal};
//!
//! let term = Terminal::with_size(Vec::new(), 80, 24);
//! term.clear();
//! term.set_foreground(Color::Green);
//! term.set_bold();
//! term.print("ready");
//! assert_eq!(term.position().as_tuple(), (1, 6));
//! ```
//!
//! Sequences are hard-coded ANSI (CSI/SGR); no terminfo lookup is done.

pub mod cli;
pub mod config;
pub mod demo;
pub mod style;
pub mod terminal;

pub use config::{Config, ConfigError, DemoConfig};
pub use style::{Color, Style};
pub use terminal::{Position, Size, Terminal};
