//! Async signature result types delivered over a oneshot channel

use crate::{Result, SignatureError};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

const TASK_DROPPED: &str = "Signature task dropped";

fn task_dropped() -> SignatureError {
    tracing::warn!("{TASK_DROPPED} before producing a digest");
    SignatureError::internal(TASK_DROPPED)
}

/// Pending keyed signature, resolving to the hex digest
pub struct AsyncSignatureResult {
    receiver: oneshot::Receiver<Result<String>>,
}

/// Pending keyed signature passed through a user result handler
pub struct AsyncSignatureResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<String>>,
    handler: Option<F>,
}

/// Pending keyed signature with error transformation
pub struct AsyncSignatureResultWithError<E> {
    receiver: oneshot::Receiver<Result<String>>,
    error_handler: E,
}

impl AsyncSignatureResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<String>>) -> Self {
        Self { receiver }
    }

    /// Create a result that is already resolved
    #[must_use]
    pub fn ready(result: Result<String>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Resolve through `handler` instead of yielding the `Result`
    pub fn on_result<F, T>(self, handler: F) -> AsyncSignatureResultWithHandler<F>
    where
        F: FnOnce(Result<String>) -> T,
    {
        AsyncSignatureResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

impl Future for AsyncSignatureResult {
    type Output = Result<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(task_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncSignatureResultWithHandler<F>
where
    F: FnOnce(Result<String>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Handler already consumed: the future completed on an earlier poll
        if this.handler.is_none() {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(task_dropped()),
            Poll::Pending => return Poll::Pending,
        };

        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}

impl<E> AsyncSignatureResultWithError<E> {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<String>>, error_handler: E) -> Self {
        Self {
            receiver,
            error_handler,
        }
    }
}

impl<E> Future for AsyncSignatureResultWithError<E>
where
    E: Fn(SignatureError) -> SignatureError + Unpin,
{
    type Output = Result<String>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(digest))) => Poll::Ready(Ok(digest)),
            Poll::Ready(Ok(Err(e))) => Poll::Ready(Err((this.error_handler)(e))),
            Poll::Ready(Err(_)) => Poll::Ready(Err((this.error_handler)(task_dropped()))),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ready_result_resolves_immediately() {
        let digest = AsyncSignatureResult::ready(Ok("abc".to_string())).await;
        assert_eq!(digest.ok().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn dropped_sender_is_an_internal_error() {
        let (tx, rx) = oneshot::channel::<Result<String>>();
        drop(tx);
        let result = AsyncSignatureResult::new(rx).await;
        assert!(matches!(result, Err(SignatureError::Internal(msg)) if msg == TASK_DROPPED));
    }

    #[tokio::test]
    async fn handler_receives_dropped_error() {
        let (tx, rx) = oneshot::channel::<Result<String>>();
        drop(tx);
        let fallback = AsyncSignatureResult::new(rx)
            .on_result(|result| result.unwrap_or_else(|_| "fallback".to_string()))
            .await;
        assert_eq!(fallback, "fallback");
    }

    #[tokio::test]
    async fn error_handler_transforms_errors() {
        let (tx, rx) = oneshot::channel::<Result<String>>();
        let _ = tx.send(Err(SignatureError::internal("boom")));
        let result = AsyncSignatureResultWithError::new(rx, |e: SignatureError| {
            SignatureError::config(format!("wrapped: {e}"))
        })
        .await;
        assert!(
            matches!(result, Err(SignatureError::Config(msg)) if msg == "wrapped: Internal error: boom")
        );
    }
}
