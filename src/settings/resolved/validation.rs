use phonebook::{Url, logging, ui::style};

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Parse the search endpoint, which must be an absolute http(s) URL.
pub(crate) fn parse_endpoint(
	value: Option<&str>,
	sources: &ConfigSources,
) -> Result<Url, ConfigError> {
	let Some(value) = value else {
		return Err(ConfigError::invalid(
			"api.endpoint",
			"(unset)",
			sources.source_for_endpoint(),
			"an endpoint is required; pass --endpoint or set api.endpoint",
		));
	};

	let url = Url::parse(value).map_err(|err| {
		ConfigError::invalid(
			"api.endpoint",
			value,
			sources.source_for_endpoint(),
			format!("not a valid URL: {err}"),
		)
	})?;

	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid(
			"api.endpoint",
			value,
			sources.source_for_endpoint(),
			"scheme must be http or https",
		));
	}

	Ok(url)
}

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout_ms == 0 {
		return Err(ConfigError::invalid(
			"api.timeout_ms",
			config.timeout_ms.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if style::by_name(&config.theme).is_none() {
		let known: Vec<_> = style::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.as_str(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", known.join(", ")),
		));
	}

	if logging::parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			"ui.log_level",
			config.log_level.as_str(),
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}
