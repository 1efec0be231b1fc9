//! UI building blocks shared across rendering and state modules.

/// Single-line query input and the status indicator beside it.
pub mod input;
/// Runtime log pane.
pub mod logs;
/// Result table and the messages that replace it.
pub mod results;

pub use input::{InputContext, SearchInput, StatusState, render_input_line};
pub use logs::LogPane;
pub use results::{ResultsContext, render_results};
