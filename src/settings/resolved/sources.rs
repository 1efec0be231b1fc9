use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_endpoint: Option<SettingSource>,
	pub(crate) api_timeout_ms: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_endpoint(&self) -> SettingSource {
		self.api_endpoint
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.endpoint"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.api_timeout_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.timeout_ms"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.ui_log_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.log_level"))
	}
}
