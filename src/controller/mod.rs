//! Query lifecycle: the token-checked state machine and the task dispatcher
//! that runs searches off the UI thread.

mod dispatcher;
mod state;

pub use dispatcher::RequestDispatcher;
pub use state::{
	Disposition, PendingRequest, Phase, QueryController, QueryState, RequestState, Settlement,
	Snapshot, Token,
};
