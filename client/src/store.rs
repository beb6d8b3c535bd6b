//! Calculator store
//!
//! Shared handle around [`CalculatorState`] that performs submissions
//! against a [`CalculatorApi`]. Clones share the same state, so a UI layer
//! can hand one clone to the input widgets and another to the renderer.
//!
//! Overlapping submissions resolve to the latest one: each call to
//! [`CalculatorStore::fetch_sum`] takes a sequence number, and an outcome
//! arriving after a newer call has started is discarded. The loading flag
//! is therefore cleared by whichever call started last.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use shared::{ProcessId, process_debug, process_warn};

use crate::state::CalculatorState;
use crate::traits::CalculatorApi;

pub struct CalculatorStore<A> {
    api: Arc<A>,
    state: Arc<RwLock<CalculatorState>>,
    latest_request: Arc<AtomicU64>,
}

impl<A> Clone for CalculatorStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            latest_request: self.latest_request.clone(),
        }
    }
}

impl<A: CalculatorApi> CalculatorStore<A> {
    /// Create a store in its initial state
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(CalculatorState::new())),
            latest_request: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Overwrite both operands. Validation is left to the server.
    pub async fn set_numbers(&self, a: f64, b: f64) {
        let mut state = self.state.write().await;
        state.number_a = a;
        state.number_b = b;
    }

    /// Submit the current operands and record the outcome.
    ///
    /// Failures end up in the `error` field; nothing is returned to the caller.
    /// Dropping the returned future before it completes cancels the request
    /// and leaves the loading state.
    pub async fn fetch_sum(&self) {
        let (request_id, a, b) = {
            let mut state = self.state.write().await;
            let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            state.begin_request();
            (request_id, state.number_a, state.number_b)
        };
        let pending = PendingRequest::new(self, request_id);

        let outcome = self.api.fetch_sum(a, b).await;

        let mut state = self.state.write().await;
        pending.disarm();
        if self.latest_request.load(Ordering::SeqCst) != request_id {
            process_debug!(ProcessId::current(), "Discarding outcome of superseded request #{}", request_id);
            return;
        }

        match outcome {
            Ok(response) => {
                process_debug!(ProcessId::current(), "Request #{} settled: sum = {}", request_id, response.sum);
                state.settle_ok(response.sum);
            }
            Err(error) => {
                process_warn!(ProcessId::current(), "Request #{} failed: {}", request_id, error);
                state.settle_err(error.user_message());
            }
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> CalculatorState {
        self.state.read().await.clone()
    }

    /// Display message of the current state
    pub async fn display_message(&self) -> String {
        self.state.read().await.display_message()
    }
}

/// Leaves the loading state if a submission is dropped before it settles
struct PendingRequest {
    state: Arc<RwLock<CalculatorState>>,
    latest_request: Arc<AtomicU64>,
    request_id: u64,
    armed: bool,
}

impl PendingRequest {
    fn new<A>(store: &CalculatorStore<A>, request_id: u64) -> Self {
        Self {
            state: store.state.clone(),
            latest_request: store.latest_request.clone(),
            request_id,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        process_debug!(ProcessId::current(), "Request #{} cancelled before settling", self.request_id);

        if let Ok(mut state) = self.state.try_write() {
            if self.latest_request.load(Ordering::SeqCst) == self.request_id {
                state.cancel_request();
            }
            return;
        }

        // Lock is busy; finish the cleanup on the runtime once it frees up
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let state = self.state.clone();
        let latest_request = self.latest_request.clone();
        let request_id = self.request_id;
        runtime.spawn(async move {
            let mut state = state.write().await;
            if latest_request.load(Ordering::SeqCst) == request_id {
                state.cancel_request();
            }
        });
    }
}
