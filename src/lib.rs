//! Switchyard: rotatable track pieces for grid puzzles
//!
//! Switchyard keeps a pure core for the geometry of track pieces and wraps it
//! in a small imperative shell that drives animations and pointer events.
//!
//! # Core Concepts
//!
//! - **Directions**: four cardinal directions closed under quarter-turns
//! - **Track pieces**: unordered pairs of distinct directions, Straight or Elbow
//! - **Orientation matching**: how many quarter-turns separate two pieces
//! - **Reorientation**: a per-piece state machine with a single cancellable
//!   completion for the animation in flight
//!
//! # Example
//!
//! ```rust
//! use switchyard::core::{orientation_steps, CardinalDirection::*, TrackPiece};
//! use switchyard::reorient::ReorientationMachine;
//!
//! let initial = TrackPiece::from_directions(North, East).unwrap();
//! let target = TrackPiece::from_directions(South, East).unwrap();
//! assert_eq!(orientation_steps(&initial, &target), Ok(1));
//!
//! let mut machine = ReorientationMachine::new(initial);
//! let reorientation = machine.request_orientation(target).unwrap();
//! assert_eq!(reorientation.orientation_delta, 1);
//!
//! machine.notify_rotation_finished().unwrap();
//! assert!(reorientation.completion.is_finished());
//! ```

pub mod config;
pub mod core;
pub mod level;
pub mod reorient;
pub mod track;

// Re-export commonly used types
pub use config::{ConfigError, TrackConfiguration};
pub use crate::core::{
    orientation_steps, CardinalDirection, OrientationError, PieceError, ReorientPhase, Shape,
    TrackPiece,
};
pub use level::{GridPosition, Level, LevelError};
pub use reorient::{Cancelled, Completion, ReorientError, ReorientationMachine};
pub use track::{AnimationDriver, TrackController};
