use phonebook_client::ContactRecord;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Cell, Clear, Paragraph, Row, Table, TableState, Wrap};

use crate::controller::{Phase, Snapshot};
use crate::ui::style::Theme;

const HEADER_HEIGHT: u16 = 1;
const IDLE_HINT: &str = "Start typing to search the phonebook";
const EMPTY_MESSAGE: &str = "No contacts";

/// Argument bundle for rendering the result area.
pub struct ResultsContext<'a> {
	pub snapshot: Snapshot<'a>,
	pub phase: Phase,
	pub theme: &'a Theme,
}

/// Render the contact table, or the message that stands in for it.
///
/// An error replaces the list entirely until the next query.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	context: ResultsContext<'_>,
) {
	let ResultsContext {
		snapshot,
		phase,
		theme,
	} = context;

	match phase {
		Phase::Idle => render_message(frame, area, IDLE_HINT, theme.empty_style()),
		Phase::Failed => {
			let message = format!("Something went wrong: {}", snapshot.error.unwrap_or_default());
			render_message(frame, area, &message, theme.error_style());
		}
		Phase::Loading | Phase::Succeeded => {
			render_table(frame, area, table_state, snapshot.results, theme);
			if phase == Phase::Succeeded && snapshot.results.is_empty() {
				render_below_header(frame, area, EMPTY_MESSAGE, theme.empty_style());
			}
		}
	}
}

fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	results: &[ContactRecord],
	theme: &Theme,
) {
	let header = Row::new(vec![Cell::from("Name"), Cell::from("Phone")])
		.style(theme.header_style())
		.height(HEADER_HEIGHT);
	let rows = results.iter().map(|contact| {
		Row::new(vec![
			Cell::from(contact.name.as_str()),
			Cell::from(contact.phone_number.as_str()),
		])
	});
	let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
		.header(header)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol("> ");

	frame.render_stateful_widget(table, area, table_state);
}

fn render_below_header(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	if area.height <= HEADER_HEIGHT {
		return;
	}
	let mut message_area = area;
	message_area.y += HEADER_HEIGHT;
	message_area.height -= HEADER_HEIGHT;
	render_message(frame, message_area, message, style);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let paragraph = Paragraph::new(message)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true })
		.style(style);
	frame.render_widget(Clear, area);
	frame.render_widget(paragraph, area);
}
