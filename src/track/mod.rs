//! Track pieces as game objects.
//!
//! This is the imperative shell around [`crate::reorient`]: it owns the
//! animation driver and the pointer notifications, and forwards the
//! machine's orientation deltas.

mod animator;
mod controller;
mod events;

pub use animator::{AnimationDriver, AnimatorWrite, RecordingDriver};
pub use controller::TrackController;
pub use events::{Observers, SubscriptionId};
