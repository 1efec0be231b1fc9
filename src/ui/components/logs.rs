use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::ui::style::Theme;

/// Toggleable pane showing records captured by [`crate::logging`].
pub struct LogPane {
	widget: TuiWidgetState,
	level: LevelFilter,
	visible: bool,
}

impl LogPane {
	/// Create a hidden pane showing records at `level` and above.
	#[must_use]
	pub fn new(level: LevelFilter) -> Self {
		let widget = TuiWidgetState::new().set_default_display_level(level);
		Self {
			widget,
			level,
			visible: false,
		}
	}

	#[must_use]
	pub fn level(&self) -> LevelFilter {
		self.level
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Scroll keys are forwarded to the log widget; everything else stays with
	/// the search input.
	pub fn handle_key(&self, key: KeyEvent) -> bool {
		let event = match key.code {
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			_ => return false,
		};
		self.widget.transition(event);
		true
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let title = format!("Runtime log [{}]", self.level.as_str().to_ascii_lowercase());
		let widget = TuiLoggerSmartWidget::default()
			.title_log(title.as_str())
			.title_target("Targets")
			.highlight_style(theme.highlight_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}
