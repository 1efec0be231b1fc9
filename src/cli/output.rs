use anyhow::Result;
use phonebook::PickOutcome;
use serde_json::json;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &PickOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match outcome.selected_contact() {
		Some(contact) => contact.to_string(),
		None => "No selection".to_string(),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let selection = match outcome.selected_contact() {
		Some(contact) => serde_json::to_value(contact)?,
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
