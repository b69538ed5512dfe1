//! Runs controller requests concurrently and feeds outcomes back in
//! arrival order.
//!
//! # Design
//! The session is the single owner of the `TodoController`. Each dispatched
//! request runs on tokio's blocking pool and sends its outcome back over an
//! unbounded channel tagged with its `Operation`. Nothing orders, cancels,
//! or times out outstanding requests.

use tokio::sync::mpsc;
use tracing::debug;

use todo_core::{ApiError, HttpResponse, Operation, PendingRequest, TodoClient, TodoController};

use crate::transport::HttpTransport;

/// Outcome of one dispatched request.
#[derive(Debug)]
pub struct Completion {
    pub operation: Operation,
    pub outcome: Result<HttpResponse, ApiError>,
}

pub struct Session {
    controller: TodoController,
    transport: HttpTransport,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl Session {
    pub fn new(client: TodoClient, transport: HttpTransport) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller: TodoController::new(client),
            transport,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn controller(&self) -> &TodoController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TodoController {
        &mut self.controller
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, pending: PendingRequest) {
        let PendingRequest { operation, request } = pending;
        debug!(?operation, method = %request.method, url = %request.url, "dispatching request");

        self.in_flight += 1;
        let tx = self.tx.clone();
        let transport = self.transport.clone();
        tokio::task::spawn_blocking(move || {
            let outcome = transport.execute(request);
            // The receiver lives as long as the session; a send error means
            // the session is gone and nobody cares about the outcome.
            let _ = tx.send(Completion { operation, outcome });
        });
    }

    /// Waits for the next outcome. Pends forever when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.rx.recv().await
    }

    pub fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.controller.apply(completion.operation, completion.outcome);
    }

    /// Applies outcomes until nothing is in flight.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.rx.recv().await {
                Some(completion) => self.apply(completion),
                None => break,
            }
        }
    }
}
