use std::fmt;

use log::debug;
use phonebook_client::{ContactRecord, SearchOutcome};

/// Identifier handed out to every issued request.
///
/// Tokens grow monotonically for the lifetime of a controller and are never
/// reused, so comparing a settlement's token with the latest issued one is
/// enough to tell whether it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u64);

impl Token {
	#[must_use]
	pub fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Text currently typed into the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
	pub text: String,
}

/// Renderable state of the most recent request.
///
/// `results` is always a sequence; "nothing loaded yet" and "no matches" both
/// render as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
	pub is_loading: bool,
	pub error: Option<String>,
	pub results: Vec<ContactRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Loading,
	Succeeded,
	Failed,
}

/// A request the host must run and report back through
/// [`QueryController::on_request_settled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
	pub token: Token,
	pub query: String,
}

/// Final outcome of a request, tagged with the token it was issued under.
#[derive(Debug)]
pub struct Settlement {
	pub token: Token,
	pub outcome: SearchOutcome,
}

/// What the controller did with a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	Applied,
	/// Superseded by a newer query or already settled; dropped without effect.
	Stale,
}

/// Read-only view handed to the renderer after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
	pub query_text: &'a str,
	pub is_loading: bool,
	pub error: Option<&'a str>,
	pub results: &'a [ContactRecord],
}

/// Owns the query text and the state of the single logically current request.
#[derive(Debug, Default)]
pub struct QueryController {
	query: QueryState,
	request: RequestState,
	issued: u64,
	latest: Option<Token>,
}

impl QueryController {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Record new query text and start a request for it.
	///
	/// Always moves to [`Phase::Loading`], clearing any previous error and
	/// results, and invalidates every request issued before this one.
	pub fn on_query_changed(&mut self, text: impl Into<String>) -> PendingRequest {
		self.query.text = text.into();
		self.issued = self.issued.saturating_add(1);
		let token = Token(self.issued);
		self.latest = Some(token);

		self.request.is_loading = true;
		self.request.error = None;
		self.request.results.clear();

		debug!("query {token} issued for {:?}", self.query.text);
		PendingRequest {
			token,
			query: self.query.text.clone(),
		}
	}

	/// Apply a settlement if it belongs to the latest outstanding request.
	pub fn on_request_settled(&mut self, settlement: Settlement) -> Disposition {
		let Settlement { token, outcome } = settlement;
		if !self.is_awaiting(token) {
			debug!("discarding stale settlement for query {token}");
			return Disposition::Stale;
		}

		self.request.is_loading = false;
		match outcome {
			Ok(records) => {
				debug!("query {token} settled with {} record(s)", records.len());
				self.request.error = None;
				self.request.results = records;
			}
			Err(failure) => {
				debug!("query {token} settled with a {} failure", failure.kind);
				self.request.results.clear();
				self.request.error = Some(failure.message);
			}
		}
		Disposition::Applied
	}

	fn is_awaiting(&self, token: Token) -> bool {
		self.request.is_loading && self.latest == Some(token)
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		if self.latest.is_none() {
			Phase::Idle
		} else if self.request.is_loading {
			Phase::Loading
		} else if self.request.error.is_some() {
			Phase::Failed
		} else {
			Phase::Succeeded
		}
	}

	#[must_use]
	pub fn snapshot(&self) -> Snapshot<'_> {
		Snapshot {
			query_text: &self.query.text,
			is_loading: self.request.is_loading,
			error: self.request.error.as_deref(),
			results: &self.request.results,
		}
	}

	#[must_use]
	pub fn latest_token(&self) -> Option<Token> {
		self.latest
	}

	#[must_use]
	pub fn query(&self) -> &QueryState {
		&self.query
	}

	#[must_use]
	pub fn request(&self) -> &RequestState {
		&self.request
	}
}

#[cfg(test)]
mod tests {
	use phonebook_client::RequestFailed;

	use super::*;

	fn smith() -> ContactRecord {
		ContactRecord::new("Smith, J", "555-0100")
	}

	fn succeed(token: Token, records: Vec<ContactRecord>) -> Settlement {
		Settlement {
			token,
			outcome: Ok(records),
		}
	}

	fn fail(token: Token, message: &str) -> Settlement {
		Settlement {
			token,
			outcome: Err(RequestFailed::network(message)),
		}
	}

	#[test]
	fn starts_idle_with_a_renderable_empty_list() {
		let controller = QueryController::new();
		let snapshot = controller.snapshot();
		assert_eq!(controller.phase(), Phase::Idle);
		assert_eq!(snapshot.query_text, "");
		assert!(!snapshot.is_loading);
		assert_eq!(snapshot.error, None);
		assert!(snapshot.results.is_empty());
		assert_eq!(controller.latest_token(), None);
	}

	#[test]
	fn successful_query_shows_its_records() {
		let mut controller = QueryController::new();
		let pending = controller.on_query_changed("Smith");
		assert_eq!(pending.query, "Smith");
		assert_eq!(controller.phase(), Phase::Loading);

		let disposition = controller.on_request_settled(succeed(pending.token, vec![smith()]));

		assert_eq!(disposition, Disposition::Applied);
		let snapshot = controller.snapshot();
		assert!(!snapshot.is_loading);
		assert_eq!(snapshot.error, None);
		assert_eq!(snapshot.results, [smith()]);
		assert_eq!(controller.phase(), Phase::Succeeded);
	}

	#[test]
	fn empty_results_are_a_success_not_an_error() {
		let mut controller = QueryController::new();
		let pending = controller.on_query_changed("Zzz");

		controller.on_request_settled(succeed(pending.token, Vec::new()));

		let snapshot = controller.snapshot();
		assert!(!snapshot.is_loading);
		assert_eq!(snapshot.error, None);
		assert!(snapshot.results.is_empty());
		assert_eq!(controller.phase(), Phase::Succeeded);
	}

	#[test]
	fn superseded_request_is_discarded() {
		let mut controller = QueryController::new();
		let first = controller.on_query_changed("X");
		let second = controller.on_query_changed("Y");
		assert!(second.token > first.token);

		let stale = controller.on_request_settled(succeed(first.token, vec![smith()]));
		assert_eq!(stale, Disposition::Stale);
		assert!(controller.snapshot().is_loading);
		assert!(controller.snapshot().results.is_empty());

		let fresh = ContactRecord::new("Young, Y", "555-0142");
		let applied = controller.on_request_settled(succeed(second.token, vec![fresh.clone()]));
		assert_eq!(applied, Disposition::Applied);
		assert_eq!(controller.snapshot().results, [fresh]);
		assert_eq!(controller.snapshot().query_text, "Y");
	}

	#[test]
	fn stale_outcome_after_newer_settlement_leaves_state_untouched() {
		let mut controller = QueryController::new();
		let first = controller.on_query_changed("X");
		let second = controller.on_query_changed("Y");
		controller.on_request_settled(succeed(second.token, Vec::new()));

		let disposition = controller.on_request_settled(fail(first.token, "boom"));

		assert_eq!(disposition, Disposition::Stale);
		assert_eq!(controller.phase(), Phase::Succeeded);
		assert_eq!(controller.snapshot().error, None);
	}

	#[test]
	fn only_the_last_of_many_queries_is_reflected() {
		let mut controller = QueryController::new();
		let pending: Vec<_> = ["S", "Sm", "Smi", "Smit", "Smith"]
			.into_iter()
			.map(|text| controller.on_query_changed(text))
			.collect();

		// Settle in reverse issue order; only the last issued may land.
		for request in pending.iter().rev() {
			let records = vec![ContactRecord::new(request.query.clone(), "555-0000")];
			let disposition = controller.on_request_settled(succeed(request.token, records));
			let expected = if request.query == "Smith" {
				Disposition::Applied
			} else {
				Disposition::Stale
			};
			assert_eq!(disposition, expected, "query {:?}", request.query);
		}

		assert_eq!(controller.snapshot().results[0].name, "Smith");
	}

	#[test]
	fn duplicate_settlement_for_the_latest_token_is_ignored() {
		let mut controller = QueryController::new();
		let pending = controller.on_query_changed("Smith");
		controller.on_request_settled(succeed(pending.token, vec![smith()]));

		let again = controller.on_request_settled(fail(pending.token, "late failure"));

		assert_eq!(again, Disposition::Stale);
		assert_eq!(controller.snapshot().results, [smith()]);
	}

	#[test]
	fn repeating_the_same_query_matches_issuing_it_once() {
		let mut once = QueryController::new();
		let only = once.on_query_changed("Smith");
		once.on_request_settled(succeed(only.token, vec![smith()]));

		let mut twice = QueryController::new();
		let first = twice.on_query_changed("Smith");
		let second = twice.on_query_changed("Smith");
		twice.on_request_settled(succeed(first.token, vec![smith()]));
		twice.on_request_settled(succeed(second.token, vec![smith()]));

		assert_eq!(once.snapshot(), twice.snapshot());
		assert_eq!(once.phase(), twice.phase());
	}

	#[test]
	fn empty_query_still_issues_a_request() {
		let mut controller = QueryController::new();
		let pending = controller.on_query_changed("");
		assert_eq!(pending.query, "");
		assert!(controller.snapshot().is_loading);

		controller.on_request_settled(succeed(pending.token, Vec::new()));
		assert_eq!(controller.phase(), Phase::Succeeded);
	}

	#[test]
	fn failure_surfaces_message_and_clears_results() {
		let mut controller = QueryController::new();
		let earlier = controller.on_query_changed("Smith");
		controller.on_request_settled(succeed(earlier.token, vec![smith()]));

		let pending = controller.on_query_changed("Smithers");
		controller.on_request_settled(fail(pending.token, "network unreachable"));

		let snapshot = controller.snapshot();
		assert!(!snapshot.is_loading);
		assert_eq!(snapshot.error, Some("network unreachable"));
		assert!(snapshot.results.is_empty());
		assert_eq!(controller.phase(), Phase::Failed);
		assert_eq!(controller.query().text, "Smithers");
		assert_eq!(
			controller.request(),
			&RequestState {
				is_loading: false,
				error: Some("network unreachable".to_string()),
				results: Vec::new(),
			}
		);
	}

	#[test]
	fn new_query_clears_previous_error_and_results() {
		let mut controller = QueryController::new();
		let failed = controller.on_query_changed("X");
		controller.on_request_settled(fail(failed.token, "network unreachable"));

		controller.on_query_changed("Y");

		let snapshot = controller.snapshot();
		assert!(snapshot.is_loading);
		assert_eq!(snapshot.error, None);
		assert!(snapshot.results.is_empty());
	}
}
