//! Core crate exports for building and running the `phonebook` search screen.
//!
//! The root module re-exports the controller, the client types and the UI
//! builder so that embedders can wire up a search without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod controller;
pub mod logging;
pub mod ui;

pub use controller::{
	Disposition, PendingRequest, Phase, QueryController, QueryState, RequestDispatcher,
	RequestState, Settlement, Snapshot, Token,
};
pub use phonebook_client::{
	ClientOptions, ContactRecord, FailureKind, HttpPhonebook, PhonebookApi, RequestFailed,
	SearchOutcome, Url,
};
pub use ui::style::{Theme, by_name, default_theme, names};
pub use ui::{App, PhonebookUi, PickOutcome};
