//! The `tldemo` walkthrough.
//!
//! Drives a [`Terminal`] through a simulated task: each item is printed on
//! the top row in the next palette color while a bold progress line is kept
//! on the bottom row.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::DemoConfig;
use crate::style::Color;
use crate::terminal::Terminal;
use crate::{term_print, term_println};

/// Longest single sleep between stop-flag checks.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    pub steps: u32,
    pub delay: Duration,
    pub palette: Vec<Color>,
}

impl DemoOptions {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            steps: config.steps,
            delay: config.delay(),
            palette: config.effective_palette(),
        }
    }
}

/// Outcome of a demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    /// Items processed before the run ended
    pub completed: u32,
    /// Whether the stop flag ended the run early
    pub interrupted: bool,
}

/// Percentage of `done` out of `total`, rounded down.
pub fn progress_percent(done: u32, total: u32) -> u32 {
    if total == 0 {
        100
    } else {
        (u64::from(done) * 100 / u64::from(total)) as u32
    }
}

/// Sleep for `delay`, waking early if `stop` is raised.
///
/// # Returns
/// `true` if the stop flag was seen
fn pause(delay: Duration, stop: &AtomicBool) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if stop.load(Ordering::SeqCst) {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep((deadline - now).min(POLL_INTERVAL));
    }
}

/// Run the walkthrough on `term` until all steps finish or `stop` is raised.
///
/// The final status line and a style reset are always written, so an
/// interrupted run leaves the terminal in its default style.
pub fn run<W: Write>(term: &Terminal<W>, options: &DemoOptions, stop: &AtomicBool) -> DemoSummary {
    let mut completed = 0;
    let mut interrupted = false;

    term.clear();

    for i in 1..=options.steps {
        if stop.load(Ordering::SeqCst) {
            interrupted = true;
            break;
        }

        term.move_to(1, 1);
        term.clear_to_eol();
        if !options.palette.is_empty() {
            term.set_foreground(options.palette[(i as usize - 1) % options.palette.len()]);
        }
        term_print!(term, "Processing item {} of {}...", i, options.steps);

        if pause(options.delay, stop) {
            interrupted = true;
            break;
        }

        term.move_to(term.height(), 1);
        term.clear_to_eol();
        term.set_bold();
        term_print!(term, "Progress: {}%", progress_percent(i, options.steps));
        term.refresh();
        completed = i;
    }

    term.move_to(term.height(), 1);
    term.clear_to_eol();
    if interrupted {
        term.set_foreground(Color::Yellow);
        term.print("Task interrupted.");
    } else {
        term.set_foreground(Color::Green);
        term.set_bold();
        term.print("Task completed!");
    }
    term.reset_style();
    term_println!(term);
    term.refresh();

    tracing::debug!(completed, interrupted, "demo finished");

    DemoSummary {
        completed,
        interrupted,
    }
}
