//! Log capture for the terminal UI.
//!
//! The alternate screen owns stdout and stderr, so log records are buffered by
//! `tui-logger` and shown in the log pane instead of being printed.

use std::sync::OnceLock;

use log::LevelFilter;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the in-memory logger. Safe to call more than once; only the first
/// call installs it. Returns whether log capture is active.
pub fn initialize(level: LevelFilter) -> bool {
	let installed = *INSTALLED.get_or_init(|| tui_logger::init_logger(level).is_ok());
	if installed {
		tui_logger::set_default_level(level);
	}
	installed
}

/// Whether [`initialize`] installed the logger. Records are moved into the
/// widget buffer by the logger's own background task.
#[must_use]
pub fn is_initialized() -> bool {
	INSTALLED.get().copied().unwrap_or(false)
}

/// Parse a level name such as `warn` or `DEBUG`.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}
