use phonebook_client::ContactRecord;

/// Captures how the user left the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
	pub accepted: bool,
	pub query: String,
	pub selection: Option<ContactRecord>,
}

impl PickOutcome {
	pub(crate) fn accepted(query: impl Into<String>, selection: Option<ContactRecord>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection,
		}
	}

	pub(crate) fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	/// Return the chosen contact, if the user confirmed one.
	#[must_use]
	pub fn selected_contact(&self) -> Option<&ContactRecord> {
		if self.accepted {
			self.selection.as_ref()
		} else {
			None
		}
	}
}
