use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const LOADING_LABEL: &str = "loading ...";

/// Single-line text input backed by `tui-textarea`.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("type a name");
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press to the input. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter | KeyCode::Tab => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub input_title: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Request status shown at the right edge of the input row.
pub struct StatusState<'a> {
	pub is_loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `<title> > <input>` with a spinner while a request is in flight.
pub fn render_input_line(frame: &mut Frame, input: InputContext<'_>, status: StatusState<'_>) {
	let InputContext {
		search_input,
		input_title,
		area,
		theme,
	} = input;

	let prompt = input_title.map(|title| format!("{title} > ")).unwrap_or_default();
	let status_line = status_line(&status, theme);
	let status_width = status_line.width() as u16;

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt.width() as u16),
			Constraint::Min(1),
			Constraint::Length(status_width),
		])
		.split(area);

	if !prompt.is_empty() {
		frame.render_widget(
			Paragraph::new(prompt.as_str()).style(theme.prompt_style()),
			horizontal[0],
		);
	}
	search_input.render(frame, horizontal[1]);
	if status_width > 0 {
		frame.render_widget(Paragraph::new(status_line), horizontal[2]);
	}
}

fn status_line(status: &StatusState<'_>, theme: &Theme) -> Line<'static> {
	if !status.is_loading {
		return Line::default();
	}

	let muted = theme.empty_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	Line::from(vec![
		spinner.to_symbol_span(status.throbber_state),
		Span::styled(LOADING_LABEL, muted),
	])
}
