//! Command-line definition for `tldemo`.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definition the binary parses.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// `<version> <git sha>` for dev builds, bare version for release builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " ", env!("VERGEN_GIT_SHA"));
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date embedded by the build script.
pub const RELEASE_DATE: &str = env!("TERMLIB_BUILD_DATE");

pub const LICENSE_TEXT: &str = "\
termlib is a light weight terminal interface library. Sort of a ncurses light.
Copyright (C) 2025 R. S. Doiel

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.";

const LONG_ABOUT: &str = "\
tldemo demonstrates the simple terminal UI that can be built with termlib: \
cursor movement, line clearing and one-shot text styling. It walks through a \
simulated task, printing each item in a different color and a progress line \
on the bottom row of the terminal.

This is a bare bones approach, not a full TUI package.";

/// Demonstrate termlib's cursor, clearing and styling operations
#[derive(Debug, Parser)]
#[command(name = "tldemo", version = VERSION, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Display license
    #[arg(long)]
    pub license: bool,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of simulated work items
    #[arg(long, value_name = "N")]
    pub steps: Option<u32>,

    /// Pause between items in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(steps) = self.steps {
            config.demo.steps = steps;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.demo.delay_ms = delay_ms;
        }
    }
}
