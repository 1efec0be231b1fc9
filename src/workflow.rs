use anyhow::Result;
use phonebook::{PhonebookUi, PickOutcome, logging};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
    search_ui: PhonebookUi,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let log_level = config.log_filter();
        let capture_logs = logging::initialize(log_level);
        let client_options = config.client_options();

        let ResolvedConfig {
            endpoint,
            input_title,
            initial_query,
            theme,
            ..
        } = config;

        log::info!("searching {endpoint}");
        let mut search_ui = PhonebookUi::http(endpoint, client_options)?
            .with_input_title(input_title)
            .with_initial_query(initial_query)
            .with_theme_name(&theme);
        if capture_logs {
            search_ui = search_ui.with_log_pane(log_level);
        }

        Ok(Self { search_ui })
    }

    pub(crate) fn run(self) -> Result<PickOutcome> {
        self.search_ui.run()
    }
}
