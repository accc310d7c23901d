//! Phase transition history.
//!
//! Keeps an ordered, timestamped record of the latest phase changes a machine
//! has gone through, tagged with the request that caused it.

use super::request::RequestId;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Why a transition was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    /// A new orientation was requested.
    Requested,
    /// A new request replaced one still in flight.
    Superseded,
    /// The animation driver reported completion.
    Finished,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{ReorientPhase, RequestId, StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ReorientPhase::Idle,
///     to: ReorientPhase::Reorienting,
///     timestamp: Utc::now(),
///     request: RequestId::new(),
///     cause: TransitionCause::Requested,
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The request that triggered the transition
    pub request: RequestId,
    pub cause: TransitionCause,
}

/// Transitions kept by [`StateHistory::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Ordered history of the most recent state transitions.
///
/// At most `limit` transitions are kept; recording past the limit drops the
/// oldest entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default = "default_limit")]
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// History keeping at most `limit` transitions. Zero keeps none.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition, dropping the oldest ones beyond the limit.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push_back(transition);
        while self.transitions.len() > self.limit {
            self.transitions.pop_front();
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition followed by the
    /// `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Transitions caused by `request`, oldest first.
    pub fn for_request(&self, request: RequestId) -> Vec<&StateTransition<S>> {
        self.transitions
            .iter()
            .filter(|t| t.request == request)
            .collect()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }
}
