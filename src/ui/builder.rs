use std::sync::Arc;

use anyhow::{Context, Result};
use log::LevelFilter;
use phonebook_client::{ClientOptions, HttpPhonebook, PhonebookApi, Url};

use super::App;
use super::outcome::PickOutcome;
use crate::ui::style::{self, Theme};

/// A small builder for configuring the interactive phonebook search before
/// running it.
pub struct PhonebookUi {
	api: Arc<dyn PhonebookApi>,
	input_title: Option<String>,
	initial_query: String,
	theme: Option<Theme>,
	log_pane: Option<LevelFilter>,
}

impl PhonebookUi {
	/// Create a search UI backed by any [`PhonebookApi`].
	pub fn new(api: Arc<dyn PhonebookApi>) -> Self {
		Self {
			api,
			input_title: None,
			initial_query: String::new(),
			theme: None,
			log_pane: None,
		}
	}

	/// Create a search UI that queries the HTTP service at `endpoint`.
	pub fn http(endpoint: Url, options: ClientOptions) -> Result<Self> {
		let client = HttpPhonebook::new(endpoint.clone(), options)
			.with_context(|| format!("failed to create a client for {endpoint}"))?;
		Ok(Self::new(Arc::new(client)))
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Select a bundled theme by name. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Offer the runtime log pane (toggled with F2), showing records at
	/// `level` and above.
	pub fn with_log_pane(mut self, level: LevelFilter) -> Self {
		self.log_pane = Some(level);
		self
	}

	/// Build the [`App`] without starting the terminal loop.
	pub fn build<'a>(self) -> Result<App<'a>> {
		let mut app = App::new(self.api)?;
		if let Some(title) = self.input_title {
			app.set_input_title(title);
		}
		if !self.initial_query.is_empty() {
			app.set_initial_query(self.initial_query);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(level) = self.log_pane {
			app.enable_log_pane(level);
		}
		Ok(app)
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<PickOutcome> {
		self.build()?.run()
	}
}
