use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::error::OperationFailed;
use crate::transport::TransportError;

/// Handle to an in-flight add/remove exchange.
///
/// The exchange runs on its own task. Dropping the handle only gives up
/// interest in the outcome: the request, and any rollback it triggers,
/// still complete.
#[must_use = "the exchange runs regardless; await the handle to observe its outcome"]
pub struct PendingOp {
    handle: JoinHandle<Result<(), OperationFailed>>,
    failure_message: String,
}

impl PendingOp {
    /// Spawn `exchange` onto the current Tokio runtime.
    ///
    /// `failure_message` is reported if the task dies without an outcome.
    pub(crate) fn spawn<F>(exchange: F, failure_message: String) -> Self
    where
        F: Future<Output = Result<(), OperationFailed>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(exchange),
            failure_message,
        }
    }

    /// Whether the exchange has already settled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Future for PendingOp {
    type Output = Result<(), OperationFailed>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let polled = Pin::new(&mut self.handle).poll(cx);
        match polled {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(e)) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Poll::Ready(Err(_)) => Poll::Ready(Err(OperationFailed::new(
                self.failure_message.clone(),
                TransportError::Aborted,
            ))),
        }
    }
}
