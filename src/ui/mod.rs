//! Interactive terminal UI for the phonebook search.
//!
//! The [`builder`] module exposes the public-facing [`PhonebookUi`] builder.
//! The remaining submodules implement the event loop, rendering, key handling
//! and the widgets/styles they draw with.

mod actions;
mod builder;
pub mod components;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::PhonebookUi;
pub use outcome::PickOutcome;
pub use state::App;
