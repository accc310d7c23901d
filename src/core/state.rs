//! Phases of a reorientation state machine.
//!
//! Phases implement the `State` trait so they can be named in log events and
//! recorded in a [`StateHistory`](super::StateHistory).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing where
/// a machine currently is.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history entries
/// - `PartialEq`: states are compared when reading history paths
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: history can be exported
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Whether work is outstanding while in this state.
    ///
    /// Default implementation returns `false`.
    fn is_busy(&self) -> bool {
        false
    }
}

/// Phase of a single track piece's reorientation.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{ReorientPhase, State};
///
/// assert_eq!(ReorientPhase::Idle.name(), "Idle");
/// assert!(ReorientPhase::Reorienting.is_busy());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ReorientPhase {
    /// No animation is in flight.
    #[default]
    Idle,
    /// A requested orientation is being animated.
    Reorienting,
}

impl State for ReorientPhase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Reorienting => "Reorienting",
        }
    }

    fn is_busy(&self) -> bool {
        matches!(self, Self::Reorienting)
    }
}
