//! Reorientation errors.

use crate::core::ReorientPhase;
use thiserror::Error;

/// Errors raised by the reorientation state machine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ReorientError {
    /// The animation driver signalled completion for a rotation it was never
    /// asked to perform, or one that had already been superseded.
    #[error("Rotation finished while {phase:?}; no reorientation was in flight")]
    InvalidState { phase: ReorientPhase },
}
