use phonebook::ClientOptions;
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// `[api]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) endpoint: Option<String>,
	pub(super) timeout_ms: Option<u64>,
	pub(super) user_agent: Option<String>,
}

pub(super) struct ApiResolution {
	pub(super) endpoint: Option<String>,
	pub(super) timeout_ms: u64,
	pub(super) user_agent: String,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.endpoint = Some(endpoint);
		}
		if let Some(timeout_ms) = cli.timeout_ms {
			self.timeout_ms = Some(timeout_ms);
		}
	}

	pub(super) fn finalize(self) -> ApiResolution {
		ApiResolution {
			endpoint: non_blank(self.endpoint),
			timeout_ms: self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
			user_agent: non_blank(self.user_agent)
				.unwrap_or_else(|| ClientOptions::default().user_agent),
		}
	}
}
