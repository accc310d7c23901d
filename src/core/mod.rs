//! Pure track geometry and state machine vocabulary.
//!
//! This module contains everything that has no side effects:
//! - The four-direction rotation algebra
//! - Track pieces and their shapes
//! - Orientation matching between pieces
//! - Phases, request identifiers and transition history
//!
//! Nothing here performs I/O or logging.

mod direction;
mod history;
mod orientation;
mod piece;
mod request;
mod state;

pub use direction::{rotate_clockwise, rotation_steps_to, CardinalDirection};
pub use history::{StateHistory, StateTransition, TransitionCause, DEFAULT_HISTORY_LIMIT};
pub use orientation::{orientation_steps, OrientationError};
pub use piece::{PieceError, Shape, TrackPiece};
pub use request::RequestId;
pub use state::{ReorientPhase, State};
