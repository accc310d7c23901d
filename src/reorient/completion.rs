//! Single-use completion signal for a reorientation request.
//!
//! A [`CompletionSource`] is held by the state machine and resolved exactly
//! once, either finished or cancelled. Any number of [`Completion`] clones
//! observe the outcome, synchronously through [`Completion::status`] or by
//! awaiting it.

use crate::core::RequestId;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use thiserror::Error;

/// Outcome of a reorientation request as seen by its waiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Pending,
    Finished,
    Cancelled,
}

/// The request was superseded before its animation finished.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Reorientation {0} was superseded before it finished")]
pub struct Cancelled(pub RequestId);

#[derive(Debug)]
struct Slot {
    status: CompletionStatus,
    wakers: Vec<Waker>,
}

/// Resolving side of a completion. Not cloneable.
#[derive(Debug)]
pub struct CompletionSource {
    id: RequestId,
    slot: Rc<RefCell<Slot>>,
}

/// Observing side of a completion.
///
/// Resolves to `Ok(())` when the animation finished and to
/// `Err(Cancelled)` when a later request replaced this one.
#[derive(Debug, Clone)]
pub struct Completion {
    id: RequestId,
    slot: Rc<RefCell<Slot>>,
}

impl CompletionSource {
    /// Create a pending source and its first observer.
    pub fn new() -> (Self, Completion) {
        let id = RequestId::new();
        let slot = Rc::new(RefCell::new(Slot {
            status: CompletionStatus::Pending,
            wakers: Vec::new(),
        }));
        let completion = Completion {
            id,
            slot: Rc::clone(&slot),
        };
        (Self { id, slot }, completion)
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn status(&self) -> CompletionStatus {
        self.slot.borrow().status
    }

    /// Resolve successfully. Returns `false` if already resolved.
    pub fn finish(self) -> bool {
        self.resolve(CompletionStatus::Finished)
    }

    /// Resolve as cancelled. Returns `false` if already resolved.
    pub fn cancel(self) -> bool {
        self.resolve(CompletionStatus::Cancelled)
    }

    fn resolve(&self, outcome: CompletionStatus) -> bool {
        let wakers = {
            let mut slot = self.slot.borrow_mut();
            if slot.status != CompletionStatus::Pending {
                return false;
            }
            slot.status = outcome;
            std::mem::take(&mut slot.wakers)
        };

        for waker in wakers {
            waker.wake();
        }
        true
    }
}

impl Drop for CompletionSource {
    fn drop(&mut self) {
        // A source dropped unresolved would leave its waiters hanging.
        self.resolve(CompletionStatus::Cancelled);
    }
}

impl Completion {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn status(&self) -> CompletionStatus {
        self.slot.borrow().status
    }

    pub fn is_pending(&self) -> bool {
        self.status() == CompletionStatus::Pending
    }

    pub fn is_finished(&self) -> bool {
        self.status() == CompletionStatus::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.status() == CompletionStatus::Cancelled
    }
}

impl Future for Completion {
    type Output = Result<(), Cancelled>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match slot.status {
            CompletionStatus::Finished => Poll::Ready(Ok(())),
            CompletionStatus::Cancelled => Poll::Ready(Err(Cancelled(self.id))),
            CompletionStatus::Pending => {
                if !slot.wakers.iter().any(|w| w.will_wake(cx.waker())) {
                    slot.wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_completion_is_pending() {
        let (source, completion) = CompletionSource::new();
        assert_eq!(source.id(), completion.id());
        assert!(completion.is_pending());
        assert_eq!(source.status(), CompletionStatus::Pending);
    }

    #[test]
    fn finish_is_visible_to_every_clone() {
        let (source, completion) = CompletionSource::new();
        let other = completion.clone();

        assert!(source.finish());
        assert!(completion.is_finished());
        assert!(other.is_finished());
    }

    #[test]
    fn cancel_is_observed_synchronously() {
        let (source, completion) = CompletionSource::new();
        assert!(source.cancel());
        assert!(completion.is_cancelled());
    }

    #[test]
    fn dropping_unresolved_source_cancels() {
        let (source, completion) = CompletionSource::new();
        drop(source);
        assert!(completion.is_cancelled());
    }

    #[tokio::test]
    async fn awaiting_finished_completion_succeeds() {
        let (source, completion) = CompletionSource::new();
        source.finish();
        assert_eq!(completion.await, Ok(()));
    }

    #[tokio::test]
    async fn awaiting_cancelled_completion_reports_request() {
        let (source, completion) = CompletionSource::new();
        let id = source.id();
        source.cancel();
        assert_eq!(completion.await, Err(Cancelled(id)));
    }

    #[tokio::test]
    async fn pending_waiter_is_woken_on_finish() {
        let (source, completion) = CompletionSource::new();
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async move {
                let waiter = tokio::task::spawn_local(completion);
                tokio::task::yield_now().await;
                source.finish();
                assert_eq!(waiter.await.unwrap(), Ok(()));
            })
            .await;
    }
}
