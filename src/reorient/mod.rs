//! Cancellable reorientation of a single track piece.
//!
//! The [`ReorientationMachine`] keeps the logical orientation of one piece
//! and hands out a [`Completion`] for each accepted request. It never talks
//! to an animator directly; the orientation delta it computes is returned to
//! the caller, which forwards it (see [`crate::track::TrackController`]).
//!
//! # Key Concepts
//!
//! - **Single slot**: only one completion is pending at a time
//! - **Supersede, never queue**: a new request cancels the previous one
//! - **Idle before resolve**: waiters already see `Idle` when a completion
//!   finishes

mod completion;
mod error;
mod machine;

pub use completion::{Cancelled, Completion, CompletionSource, CompletionStatus};
pub use error::ReorientError;
pub use machine::{Reorientation, ReorientationMachine};
