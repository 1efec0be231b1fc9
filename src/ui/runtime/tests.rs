use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::LevelFilter;
use phonebook_client::{ContactRecord, PhonebookApi, RequestFailed, SearchOutcome};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::controller::Phase;
use crate::ui::{App, PhonebookUi};

/// Answers from a fixed table; unknown queries return no contacts.
struct Directory {
	entries: HashMap<&'static str, SearchOutcome>,
}

impl Directory {
	fn sample() -> Self {
		let mut entries = HashMap::new();
		entries.insert(
			"Smith",
			Ok(vec![
				ContactRecord::new("Smith, J", "555-0100"),
				ContactRecord::new("Smith, K", "555-0101"),
			]),
		);
		entries.insert("broken", Err(RequestFailed::network("network unreachable")));
		Self { entries }
	}
}

#[async_trait]
impl PhonebookApi for Directory {
	async fn search(&self, query: &str) -> SearchOutcome {
		self.entries.get(query).cloned().unwrap_or_else(|| Ok(Vec::new()))
	}
}

/// Never answers.
struct Silent;

#[async_trait]
impl PhonebookApi for Silent {
	async fn search(&self, _query: &str) -> SearchOutcome {
		std::future::pending().await
	}
}

fn app_with(api: impl PhonebookApi + 'static) -> App<'static> {
	PhonebookUi::new(Arc::new(api))
		.with_input_title("Phonebook")
		.build()
		.unwrap()
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		let outcome = app
			.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
			.unwrap();
		assert!(outcome.is_none());
	}
}

fn wait_until_settled(app: &mut App) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while app.controller.snapshot().is_loading && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(5));
		app.pump_settlements();
	}
	app.pump_settlements();
}

fn render(app: &mut App) -> String {
	render_sized(app, 60, 10)
}

fn render_sized(app: &mut App, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

fn row_of(view: &str, needle: &str) -> Option<usize> {
	view.lines().position(|line| line.contains(needle))
}

fn press(app: &mut App, code: KeyCode) -> Option<crate::ui::PickOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

#[test]
fn idle_screen_invites_typing() {
	let mut app = app_with(Directory::sample());

	let view = render(&mut app);

	assert_eq!(app.controller.phase(), Phase::Idle);
	assert!(view.contains("Phonebook > "));
	assert!(view.contains("Start typing to search the phonebook"));
}

#[test]
fn typed_query_renders_matching_contacts() {
	let mut app = app_with(Directory::sample());

	type_text(&mut app, "Smith");
	wait_until_settled(&mut app);
	let view = render(&mut app);

	assert_eq!(app.controller.snapshot().query_text, "Smith");
	assert!(view.contains("Smith, J"));
	assert!(view.contains("555-0100"));
	assert!(!view.contains("loading ..."));
	assert_eq!(app.table_state.selected(), Some(0));
}

#[test]
fn every_keystroke_issues_a_request_but_only_the_last_lands() {
	let mut app = app_with(Directory::sample());

	type_text(&mut app, "Smith");
	assert_eq!(app.controller.latest_token().map(|token| token.get()), Some(5));
	wait_until_settled(&mut app);

	let names: Vec<_> = app
		.snapshot()
		.results
		.iter()
		.map(|record| record.name.clone())
		.collect();
	assert_eq!(names, ["Smith, J", "Smith, K"]);
}

#[test]
fn failure_replaces_the_list_with_an_error_line() {
	let mut app = app_with(Directory::sample());

	type_text(&mut app, "broken");
	wait_until_settled(&mut app);
	let view = render(&mut app);

	assert_eq!(app.controller.phase(), Phase::Failed);
	assert!(view.contains("Something went wrong: network unreachable"));
	assert!(!view.contains("Name"));
}

#[test]
fn empty_result_renders_an_empty_list() {
	let mut app = app_with(Directory::sample());

	type_text(&mut app, "Zzz");
	wait_until_settled(&mut app);
	let view = render(&mut app);

	assert_eq!(app.controller.phase(), Phase::Succeeded);
	assert!(view.contains("No contacts"));
	assert!(!view.contains("Something went wrong"));
}

#[test]
fn loading_indicator_shows_while_request_is_pending() {
	let mut app = app_with(Silent);

	type_text(&mut app, "Smith");
	app.pump_settlements();
	let view = render(&mut app);

	assert!(view.contains("loading ..."));
}

#[test]
fn deleting_back_to_empty_still_searches() {
	let mut app = app_with(Directory::sample());

	type_text(&mut app, "S");
	app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE))
		.unwrap();
	assert_eq!(app.controller.snapshot().query_text, "");
	assert!(app.controller.snapshot().is_loading);

	wait_until_settled(&mut app);
	assert_eq!(app.controller.phase(), Phase::Succeeded);
}

#[test]
fn enter_accepts_the_highlighted_contact() {
	let mut app = app_with(Directory::sample());
	type_text(&mut app, "Smith");
	wait_until_settled(&mut app);

	app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
		.unwrap();
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
		.unwrap()
		.expect("enter ends the session");

	assert!(outcome.accepted);
	assert_eq!(outcome.query, "Smith");
	assert_eq!(
		outcome.selected_contact(),
		Some(&ContactRecord::new("Smith, K", "555-0101"))
	);
}

#[test]
fn escape_cancels_without_a_selection() {
	let mut app = app_with(Directory::sample());
	type_text(&mut app, "Smith");
	wait_until_settled(&mut app);

	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
		.unwrap()
		.expect("escape ends the session");

	assert!(!outcome.accepted);
	assert_eq!(outcome.selected_contact(), None);
}

#[test]
fn initial_query_is_issued_on_start() {
	let mut app = PhonebookUi::new(Arc::new(Directory::sample()))
		.with_initial_query("Smith")
		.build()
		.unwrap();
	app.initial_results_timeout = Some(Duration::from_secs(5));

	app.hydrate_initial_results();

	assert_eq!(app.controller.phase(), Phase::Succeeded);
	assert_eq!(app.results_len(), 2);
}

#[test]
fn empty_initial_query_stays_idle() {
	let mut app = app_with(Directory::sample());

	app.hydrate_initial_results();

	assert_eq!(app.controller.phase(), Phase::Idle);
	assert_eq!(app.controller.latest_token(), None);
}

#[test]
fn log_pane_toggle_is_ignored_when_disabled() {
	let mut app = app_with(Directory::sample());

	app.handle_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE))
		.unwrap();

	assert!(!app.log_pane_visible());
}

#[test]
fn f2_shows_the_log_pane_below_the_results() {
	let mut app = PhonebookUi::new(Arc::new(Directory::sample()))
		.with_log_pane(LevelFilter::Warn)
		.build()
		.unwrap();
	type_text(&mut app, "Smith");
	wait_until_settled(&mut app);

	let hidden = render_sized(&mut app, 60, 20);
	assert!(!hidden.contains("Runtime log"));

	assert!(press(&mut app, KeyCode::F(2)).is_none());
	assert!(app.log_pane_visible());
	let shown = render_sized(&mut app, 60, 20);

	let log_row = row_of(&shown, "Runtime log [warn]").expect("log pane title");
	let header_row = row_of(&shown, "Name").expect("results header");
	assert!(header_row < log_row);
	assert!(log_row >= 12);
	assert!(shown.contains("Smith, J"));

	press(&mut app, KeyCode::F(2));
	assert!(!app.log_pane_visible());
	assert!(!render_sized(&mut app, 60, 20).contains("Runtime log"));
}

#[test]
fn page_keys_scroll_the_log_without_searching() {
	let mut app = PhonebookUi::new(Arc::new(Directory::sample()))
		.with_log_pane(LevelFilter::Debug)
		.build()
		.unwrap();
	type_text(&mut app, "Smith");
	wait_until_settled(&mut app);
	let token = app.controller.latest_token();
	press(&mut app, KeyCode::F(2));

	assert!(press(&mut app, KeyCode::PageUp).is_none());
	assert!(press(&mut app, KeyCode::PageDown).is_none());

	assert_eq!(app.controller.snapshot().query_text, "Smith");
	assert_eq!(app.controller.latest_token(), token);
	assert_eq!(app.controller.phase(), Phase::Succeeded);
}

#[test]
fn builder_applies_an_explicit_theme() {
	let app = PhonebookUi::new(Arc::new(Directory::sample()))
		.with_theme(crate::ui::style::LIGHT)
		.build()
		.unwrap();

	assert_eq!(app.theme, crate::ui::style::LIGHT);
}
