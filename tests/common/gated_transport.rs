//! In-memory transport whose write exchanges stay open until the test
//! settles them, for interleaving add/remove calls deterministically.

#![allow(dead_code)]

use async_trait::async_trait;
use favplaces::places::Place;
use favplaces::transport::{PlacesTransport, TransportError};
use parking_lot::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Put,
    Delete,
}

/// One exchange waiting for the test to decide its outcome.
struct OpenCall {
    op: Op,
    place_id: String,
    settle: Option<oneshot::Sender<bool>>,
}

#[derive(Default)]
pub struct GatedTransport {
    remote: Mutex<Vec<Place>>,
    fail_fetch: Mutex<bool>,
    calls: Mutex<Vec<OpenCall>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote(places: Vec<Place>) -> Self {
        Self {
            remote: Mutex::new(places),
            ..Self::default()
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.lock() = fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// `(op, place_id)` for every exchange started so far.
    pub fn calls(&self) -> Vec<(Op, String)> {
        self.calls
            .lock()
            .iter()
            .map(|c| (c.op, c.place_id.clone()))
            .collect()
    }

    /// Wait until at least `n` exchanges have started.
    pub async fn wait_for_calls(&self, n: usize) {
        let start = std::time::Instant::now();
        while self.call_count() < n {
            assert!(
                start.elapsed() < Duration::from_secs(2),
                "expected {} exchanges, saw {}",
                n,
                self.call_count()
            );
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    }

    pub fn succeed(&self, index: usize) {
        self.settle(index, true);
    }

    pub fn fail(&self, index: usize) {
        self.settle(index, false);
    }

    /// Settle the open exchange for `op` on `place_id`.
    pub fn succeed_op(&self, op: Op, place_id: &str) {
        self.settle(self.position(op, place_id), true);
    }

    pub fn fail_op(&self, op: Op, place_id: &str) {
        self.settle(self.position(op, place_id), false);
    }

    fn position(&self, op: Op, place_id: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .position(|c| c.op == op && c.place_id == place_id && c.settle.is_some())
            .expect("no open exchange for that place")
    }

    fn settle(&self, index: usize, ok: bool) {
        let sender = self.calls.lock()[index]
            .settle
            .take()
            .expect("exchange already settled");
        let _ = sender.send(ok);
    }

    async fn open(&self, op: Op, place_id: &str) -> Result<(), TransportError> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push(OpenCall {
            op,
            place_id: place_id.to_string(),
            settle: Some(tx),
        });
        match rx.await {
            Ok(true) => Ok(()),
            Ok(false) => Err(TransportError::Status {
                url: "http://gated/user-places".to_string(),
                status: 500,
            }),
            Err(_) => Err(TransportError::Aborted),
        }
    }
}

#[async_trait]
impl PlacesTransport for GatedTransport {
    async fn fetch_places(&self, _path: &str) -> Result<Vec<Place>, TransportError> {
        if *self.fail_fetch.lock() {
            return Err(TransportError::Status {
                url: "http://gated/user-places".to_string(),
                status: 503,
            });
        }
        Ok(self.remote.lock().clone())
    }

    async fn put_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        self.open(Op::Put, place_id).await
    }

    async fn delete_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        self.open(Op::Delete, place_id).await
    }
}
