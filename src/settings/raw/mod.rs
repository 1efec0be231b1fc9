use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, parse_endpoint};
use super::util::default_title_for;

mod api;
mod ui;

use api::ApiSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.api.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            api_endpoint: detect_source(
                cli.endpoint.is_some(),
                self.api.endpoint.is_some(),
                "PHONEBOOK__API__ENDPOINT",
                "--endpoint",
                "api.endpoint",
            ),
            api_timeout_ms: detect_source(
                cli.timeout_ms.is_some(),
                self.api.timeout_ms.is_some(),
                "PHONEBOOK__API__TIMEOUT_MS",
                "--timeout-ms",
                "api.timeout_ms",
            ),
            ui_theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "PHONEBOOK__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            ui_log_level: detect_source(
                cli.log_level.is_some(),
                self.ui.log_level.is_some(),
                "PHONEBOOK__UI__LOG_LEVEL",
                "--log-level",
                "ui.log_level",
            ),
        };

        let api = self.api.finalize();
        let endpoint = parse_endpoint(api.endpoint.as_deref(), &sources).map_err(Error::new)?;
        let ui = self.ui.finalize(default_title_for(&endpoint));

        let config = ResolvedConfig {
            endpoint,
            timeout_ms: api.timeout_ms,
            user_agent: api.user_agent,
            input_title: ui.input_title,
            initial_query: ui.initial_query,
            theme: ui.theme,
            log_level: ui.log_level,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
