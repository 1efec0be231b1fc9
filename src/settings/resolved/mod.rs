use std::time::Duration;

use log::LevelFilter;
use phonebook::{ClientOptions, Url, logging};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(super) use validation::parse_endpoint;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: Url,
	pub timeout_ms: u64,
	pub user_agent: String,
	pub input_title: String,
	pub initial_query: String,
	pub theme: String,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Transport settings for the HTTP client.
	pub fn client_options(&self) -> ClientOptions {
		ClientOptions {
			timeout: Some(Duration::from_millis(self.timeout_ms)),
			user_agent: self.user_agent.clone(),
		}
	}

	pub fn log_filter(&self) -> LevelFilter {
		logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
