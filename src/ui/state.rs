use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use anyhow::Result;
use log::LevelFilter;
use phonebook_client::{ContactRecord, PhonebookApi};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::controller::{Disposition, QueryController, RequestDispatcher, Snapshot};
use crate::ui::components::{LogPane, SearchInput};
use crate::ui::style::Theme;

pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub(crate) input_title: Option<String>,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) controller: QueryController,
	dispatcher: RequestDispatcher,
	pub(crate) log_pane: Option<LogPane>,
	pub(crate) initial_results_timeout: Option<Duration>,
}

impl<'a> App<'a> {
	pub fn new(api: Arc<dyn PhonebookApi>) -> Result<Self> {
		let dispatcher = RequestDispatcher::new(api)?;
		Ok(Self {
			search_input: SearchInput::new(""),
			table_state: TableState::default(),
			input_title: None,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			controller: QueryController::new(),
			dispatcher,
			log_pane: None,
			initial_results_timeout: Some(Duration::from_millis(250)),
		})
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_input_title(&mut self, title: impl Into<String>) {
		self.input_title = Some(title.into());
	}

	/// Pre-fill the input without issuing a request.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		self.search_input = SearchInput::new(query);
	}

	pub fn enable_log_pane(&mut self, level: LevelFilter) {
		self.log_pane = Some(LogPane::new(level));
	}

	#[must_use]
	pub fn snapshot(&self) -> Snapshot<'_> {
		self.controller.snapshot()
	}

	/// Issue a request for the current input text.
	pub(crate) fn submit_query(&mut self) {
		let pending = self.controller.on_query_changed(self.search_input.text());
		self.table_state.select(None);
		self.dispatcher.dispatch(pending);
	}

	/// Drain settlements waiting on the dispatcher channel.
	pub(crate) fn pump_settlements(&mut self) {
		loop {
			match self.dispatcher.try_recv() {
				Ok(settlement) => {
					if self.controller.on_request_settled(settlement) == Disposition::Applied {
						self.ensure_selection();
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.results_len();
		if len == 0 {
			self.table_state.select(None);
		} else if let Some(selected) = self.table_state.selected() {
			if selected >= len {
				self.table_state.select(Some(len - 1));
			}
		} else {
			self.table_state.select(Some(0));
		}
	}

	pub(crate) fn results_len(&self) -> usize {
		self.controller.snapshot().results.len()
	}

	pub(crate) fn current_selection(&self) -> Option<ContactRecord> {
		let selected = self.table_state.selected()?;
		self.controller.snapshot().results.get(selected).cloned()
	}

	pub(crate) fn log_pane_visible(&self) -> bool {
		self.log_pane.as_ref().is_some_and(LogPane::is_visible)
	}
}
