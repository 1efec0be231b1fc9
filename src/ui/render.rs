use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
};

use super::App;
use super::components::{
	InputContext, ResultsContext, StatusState, render_input_line, render_results,
};

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let (search_area, log_area) = self.split_for_logs(area);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(search_area);

		let snapshot = self.controller.snapshot();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			input_title: self.input_title.as_deref(),
			area: layout[0],
			theme: &self.theme,
		};
		let status = StatusState {
			is_loading: snapshot.is_loading,
			throbber_state: &self.throbber_state,
		};
		render_input_line(frame, input_ctx, status);

		let results_ctx = ResultsContext {
			snapshot,
			phase: self.controller.phase(),
			theme: &self.theme,
		};
		render_results(frame, layout[1], &mut self.table_state, results_ctx);

		if let (Some(pane), Some(log_area)) = (self.log_pane.as_ref(), log_area) {
			pane.render(frame, log_area, &self.theme);
		}
	}

	fn split_for_logs(&self, area: Rect) -> (Rect, Option<Rect>) {
		if !self.log_pane_visible() {
			return (area, None);
		}
		let halves = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
			.split(area);
		(halves[0], Some(halves[1]))
	}
}
