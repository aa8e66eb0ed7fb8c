//! synthlog's own diagnostic logger.
//!
//! Generated records may be streaming to stdout, so every diagnostic goes to
//! stderr. The logger lives in a `OnceLock`: the first `init` wins.

use crate::level::Level;
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Diagnostics> = OnceLock::new();

const SCOPE_WIDTH: usize = 8;
const RESET: &str = "\x1b[0m";

/// Minimum level plus rendering choices for stderr diagnostics.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    min_level: Level,
    colors: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            colors: io::stderr().is_terminal(),
        }
    }

    /// Forces ANSI colors on or off regardless of whether stderr is a terminal.
    #[must_use]
    pub const fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Renders one diagnostic as `[LEVEL] SCOPE    message`.
    #[must_use]
    pub fn format_line(&self, level: Level, scope: &str, msg: &str) -> String {
        let tag = format!("[{:<5}]", level.as_str().to_uppercase());
        let tag = if self.colors {
            format!("{}{tag}{RESET}", level_color(level))
        } else {
            tag
        };
        format!("{tag} {scope:<SCOPE_WIDTH$} {msg}")
    }

    fn log(&self, level: Level, scope: &str, msg: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = self.format_line(level, scope, msg);
        // Nowhere left to report a failing stderr.
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

const fn level_color(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => "\x1b[35m",
        Level::Info => "\x1b[36m",
        Level::Warn => "\x1b[33m",
        Level::Error => "\x1b[31m",
    }
}

/// Initializes with an explicit level. Only the first call takes effect.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Diagnostics::new(level));
    if !was_init {
        debug("INTERNAL", &format!("Diagnostics ready at level {level}"));
    }
}

/// Pre-init calls silently vanish rather than failing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, scope, msg);
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
