//! Per-piece reorientation state machine.

use crate::core::{
    orientation_steps, ReorientPhase, RequestId, State, StateHistory, StateTransition,
    TrackPiece, TransitionCause, DEFAULT_HISTORY_LIMIT,
};
use crate::reorient::completion::{Completion, CompletionSource};
use crate::reorient::error::ReorientError;
use chrono::Utc;
use std::collections::HashSet;

/// An accepted reorientation request.
///
/// The caller forwards `orientation_delta` to its animation driver and keeps
/// `completion` to learn how the request ended.
#[derive(Debug, Clone)]
pub struct Reorientation {
    pub completion: Completion,
    /// Quarter-turns from the initial piece to the requested one.
    pub orientation_delta: u8,
}

/// Tracks the orientation of one track piece and its in-flight animation.
///
/// The machine is `Idle` or `Reorienting`. At most one completion is pending
/// at a time; a new request cancels the previous one before installing
/// itself.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{CardinalDirection::*, TrackPiece};
/// use switchyard::reorient::ReorientationMachine;
///
/// let initial = TrackPiece::from_directions(North, East).unwrap();
/// let mut machine = ReorientationMachine::new(initial);
///
/// let first = machine.request_orientation(initial.rotated_by(1)).unwrap();
/// let second = machine.request_orientation(initial.rotated_by(2)).unwrap();
/// assert!(first.completion.is_cancelled());
/// assert_eq!(second.orientation_delta, 2);
///
/// machine.notify_rotation_finished().unwrap();
/// assert!(second.completion.is_finished());
/// assert!(!machine.is_reorienting());
/// ```
#[derive(Debug)]
pub struct ReorientationMachine {
    initial: TrackPiece,
    current: TrackPiece,
    accepted: HashSet<TrackPiece>,
    pending: Option<CompletionSource>,
    history: StateHistory<ReorientPhase>,
}

impl ReorientationMachine {
    /// Create an idle machine oriented as `initial`.
    pub fn new(initial: TrackPiece) -> Self {
        Self::with_history_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Like [`new`](Self::new), keeping at most `limit` history entries.
    pub fn with_history_limit(initial: TrackPiece, limit: usize) -> Self {
        Self {
            initial,
            current: initial,
            accepted: initial.rotations().into_iter().collect(),
            pending: None,
            history: StateHistory::with_limit(limit),
        }
    }

    pub fn initial_piece(&self) -> TrackPiece {
        self.initial
    }

    /// The most recently requested orientation.
    ///
    /// This changes as soon as a request is accepted, before the animation
    /// catches up.
    pub fn current_piece(&self) -> TrackPiece {
        self.current
    }

    pub fn accepted_orientations(&self) -> &HashSet<TrackPiece> {
        &self.accepted
    }

    pub fn phase(&self) -> ReorientPhase {
        if self.pending.is_some() {
            ReorientPhase::Reorienting
        } else {
            ReorientPhase::Idle
        }
    }

    pub fn is_reorienting(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the request currently being animated.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending.as_ref().map(CompletionSource::id)
    }

    pub fn history(&self) -> &StateHistory<ReorientPhase> {
        &self.history
    }

    /// Whether `target` is one of the rotations of the initial piece.
    pub fn supports_orientation(&self, target: &TrackPiece) -> bool {
        self.accepted.contains(target)
    }

    /// Start reorienting towards `target`.
    ///
    /// Returns `None` and leaves the machine untouched when `target` is not
    /// supported. Otherwise any in-flight request is cancelled first.
    pub fn request_orientation(&mut self, target: TrackPiece) -> Option<Reorientation> {
        if !self.supports_orientation(&target) {
            tracing::debug!(
                initial = %self.initial,
                target = %target,
                "ignoring unsupported orientation"
            );
            return None;
        }

        let from = self.phase();
        let cause = match self.pending.take() {
            Some(previous) => {
                let superseded = previous.id();
                previous.cancel();
                tracing::debug!(request = %superseded, "superseded in-flight reorientation");
                TransitionCause::Superseded
            }
            None => TransitionCause::Requested,
        };

        self.current = target;
        let orientation_delta = orientation_steps(&self.initial, &target)
            .expect("accepted orientations share the initial piece's shape");

        let (source, completion) = CompletionSource::new();
        let request = source.id();
        self.pending = Some(source);
        self.record(from, request, cause);

        tracing::debug!(
            request = %request,
            target = %target,
            orientation_delta,
            "reorientation requested"
        );

        Some(Reorientation {
            completion,
            orientation_delta,
        })
    }

    /// Called when the animation driver reports that the rotation finished.
    ///
    /// The machine is already `Idle` by the time the completion resolves.
    pub fn notify_rotation_finished(&mut self) -> Result<(), ReorientError> {
        let Some(source) = self.pending.take() else {
            return Err(ReorientError::InvalidState {
                phase: self.phase(),
            });
        };

        let request = source.id();
        self.record(ReorientPhase::Reorienting, request, TransitionCause::Finished);
        tracing::debug!(request = %request, piece = %self.current, "reorientation finished");

        source.finish();
        Ok(())
    }

    fn record(&mut self, from: ReorientPhase, request: RequestId, cause: TransitionCause) {
        let to = self.phase();
        tracing::trace!(from = from.name(), to = to.name(), ?cause, "phase transition");
        self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            request,
            cause,
        });
    }
}
