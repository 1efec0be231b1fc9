use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::PickOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickOutcome>> {
		match key.code {
			KeyCode::Esc => {
				return Ok(Some(PickOutcome::cancelled(self.search_input.text())));
			}
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(PickOutcome::cancelled(self.search_input.text())));
			}
			KeyCode::Enter => {
				let selection = self.current_selection();
				return Ok(Some(PickOutcome::accepted(
					self.search_input.text(),
					selection,
				)));
			}
			KeyCode::F(2) => {
				if let Some(pane) = self.log_pane.as_mut() {
					pane.toggle();
				}
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::PageUp | KeyCode::PageDown if self.log_pane_visible() => {
				if let Some(pane) = self.log_pane.as_ref() {
					pane.handle_key(key);
				}
			}
			_ => {
				if self.search_input.input(key) {
					self.submit_query();
				}
			}
		}
		Ok(None)
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.results_len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}
}
