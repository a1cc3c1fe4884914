//! Behavior of the controller through its public API

use termlib::{term_print, Color, Position, Style, Terminal};

use crate::helpers::{visible, SharedBuffer};

fn term() -> (Terminal<SharedBuffer>, SharedBuffer) {
    let buf = SharedBuffer::default();
    (Terminal::with_size(buf.clone(), 80, 24), buf)
}

// ============================================================================
// Escape Output
// ============================================================================

#[test]
fn snapshot_fully_styled_print() {
    let (term, buf) = term();
    term.set_foreground(Color::Red);
    term.set_background(Color::Yellow);
    term.set_bold();
    term.set_italic();
    term.print("Styled");
    insta::assert_snapshot!(visible(&buf.contents()), @"ESC[31mESC[43mESC[1mESC[3mStyledESC[0m");
}

#[test]
fn snapshot_move_clear_print_sequence() {
    let (term, buf) = term();
    term.move_to(5, 10);
    term.clear();
    term.print("Hello");
    term.clear_to_eol();
    insta::assert_snapshot!(visible(&buf.contents()), @"ESC[5;10HESC[2JESC[HHelloESC[0K");
    assert_eq!(term.position().as_tuple(), (1, 6));
}

#[test]
fn output_is_visible_before_terminal_is_dropped() {
    let (term, buf) = term();
    term.move_to(3, 5);
    term.clear_to_bol();
    assert_eq!(buf.contents(), "\x1b[3;5H\x1b[1K");
    assert_eq!(term.position().as_tuple(), (3, 5));
}

#[test]
fn styled_then_plain_print() {
    let (term, buf) = term();
    term.set_foreground(Color::Red);
    term.print("a");
    term.print("b");
    assert_eq!(visible(&buf.contents()), "ESC[31maESC[0mb");
}

#[test]
fn background_only_style() {
    let (term, buf) = term();
    term.set_background(Color::Magenta);
    term.print("bg");
    assert_eq!(visible(&buf.contents()), "ESC[45mbgESC[0m");
}

#[test]
fn extended_colors_pass_through() {
    let (term, buf) = term();
    term.set_foreground(Color::Indexed(208));
    term.set_background(Color::Rgb(10, 20, 30));
    term.print("x");
    assert_eq!(visible(&buf.contents()), "ESC[38;5;208mESC[48;2;10;20;30mxESC[0m");
}

// ============================================================================
// Cursor Tracking
// ============================================================================

#[test]
fn move_to_always_wins() {
    let (term, _buf) = term();
    for (row, col) in [(1, 1), (24, 80), (3, 7), (1000, 1)] {
        term.print("noise\nmore");
        term.move_to(row, col);
        assert_eq!(term.position(), Position { row, col });
    }
}

#[test]
fn print_without_newline_adds_char_count() {
    let (term, _buf) = term();
    term.move_to(7, 3);
    term.print("twelve chars");
    assert_eq!(term.position().as_tuple(), (7, 15));
}

#[test]
fn print_with_newlines_counts_after_last_newline() {
    let (term, _buf) = term();
    term.move_to(2, 40);
    term.print("first\nsecond\nend");
    assert_eq!(term.position().as_tuple(), (4, 4));
}

#[test]
fn erase_operations_keep_cursor() {
    let (term, _buf) = term();
    term.move_to(9, 9);
    term.clear_to_eol();
    term.clear_to_bol();
    assert_eq!(term.position().as_tuple(), (9, 9));
}

// ============================================================================
// Style State
// ============================================================================

#[test]
fn reset_style_is_eager_and_repeatable() {
    let (term, buf) = term();
    term.set_italic();
    term.reset_style();
    assert_eq!(term.pending_style(), Style::default());
    term.reset_style();
    assert_eq!(term.pending_style(), Style::default());
    assert_eq!(visible(&buf.contents()), "ESC[0mESC[0m");
}

#[test]
fn pending_style_layers_attributes() {
    let (term, _buf) = term();
    term.set_bold();
    term.set_foreground(Color::Cyan);
    assert_eq!(
        term.pending_style(),
        Style {
            fg: Some(Color::Cyan),
            bold: true,
            ..Default::default()
        }
    );
}

#[test]
fn formatted_print_wraps_whole_message() {
    let (term, buf) = term();
    term.set_foreground(Color::Green);
    term_print!(term, "{} of {}", 3, 10);
    assert_eq!(visible(&buf.contents()), "ESC[32m3 of 10ESC[0m");
    assert_eq!(term.position().as_tuple(), (1, 8));
}

#[test]
fn new_with_non_tty_sink_falls_back_or_detects() {
    let term = Terminal::new(Vec::new());
    assert!(term.width() > 0);
    assert!(term.height() > 0);
}
