use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use phonebook_client::PhonebookApi;
use tokio::runtime::{Builder, Runtime};

use super::state::{PendingRequest, Settlement};

/// Runs searches as background tasks and hands their settlements back to the
/// UI thread through a channel.
///
/// In-flight calls are never cancelled; a superseded request simply settles
/// into a token the controller no longer accepts.
pub struct RequestDispatcher {
	runtime: Runtime,
	api: Arc<dyn PhonebookApi>,
	tx: Sender<Settlement>,
	rx: Receiver<Settlement>,
}

impl RequestDispatcher {
	pub fn new(api: Arc<dyn PhonebookApi>) -> Result<Self> {
		let runtime = Builder::new_multi_thread()
			.worker_threads(1)
			.thread_name("phonebook-fetch")
			.enable_all()
			.build()
			.context("failed to start the request runtime")?;
		let (tx, rx) = mpsc::channel();

		Ok(Self {
			runtime,
			api,
			tx,
			rx,
		})
	}

	/// Start `request` in the background. Returns immediately.
	pub fn dispatch(&self, request: PendingRequest) {
		let PendingRequest { token, query } = request;
		let api = Arc::clone(&self.api);
		let tx = self.tx.clone();

		self.runtime.spawn(async move {
			let outcome = api.search(&query).await;
			match &outcome {
				Ok(records) => {
					debug!("request {token} returned {} record(s)", records.len());
				}
				Err(failure) => {
					warn!(
						"request {token} for {query:?} failed ({}): {}; {}",
						failure.kind,
						failure.message,
						failure.detail.as_deref().unwrap_or("no further detail"),
					);
				}
			}
			// The receiver only disappears when the UI is shutting down.
			let _ = tx.send(Settlement { token, outcome });
		});
	}

	pub fn try_recv(&self) -> Result<Settlement, TryRecvError> {
		self.rx.try_recv()
	}

	pub fn recv_timeout(&self, timeout: Duration) -> Result<Settlement, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}
