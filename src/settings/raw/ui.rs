use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: &str = "info";

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) log_level: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) input_title: String,
	pub(super) initial_query: String,
	pub(super) theme: String,
	pub(super) log_level: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log_level = Some(level);
		}
	}

	pub(super) fn finalize(self, default_title: String) -> UiResolution {
		UiResolution {
			input_title: non_blank(self.title).unwrap_or(default_title),
			// The initial query is sent verbatim, surrounding whitespace included.
			initial_query: self.initial_query.unwrap_or_default(),
			theme: non_blank(self.theme)
				.map(|theme| theme.to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			log_level: non_blank(self.log_level)
				.map(|level| level.to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		}
	}
}
