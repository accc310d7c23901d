//! Boundary to the animation system.

use crate::config::AnimatorProperties;

/// Receives animation parameters for one track piece.
///
/// After `set_orientation` the driver must call back
/// [`TrackController::finish_rotating`](super::TrackController::finish_rotating)
/// exactly once when the rotation has played, unless another orientation was
/// set in the meantime.
pub trait AnimationDriver {
    /// Quarter-turns from the initial piece: 0..=3 for elbows, 0..=1 for
    /// straight pieces.
    fn set_orientation(&mut self, delta: u8);

    fn set_highlighted(&mut self, highlighted: bool);
}

impl<A: AnimationDriver + ?Sized> AnimationDriver for Box<A> {
    fn set_orientation(&mut self, delta: u8) {
        (**self).set_orientation(delta);
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        (**self).set_highlighted(highlighted);
    }
}

/// A parameter write recorded by [`RecordingDriver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimatorWrite {
    Integer { property: String, value: i32 },
    Bool { property: String, value: bool },
}

/// Driver that records every parameter write under its configured name.
///
/// Useful for headless runs and tests, where no real animator exists.
#[derive(Clone, Debug)]
pub struct RecordingDriver {
    properties: AnimatorProperties,
    writes: Vec<AnimatorWrite>,
}

impl RecordingDriver {
    pub fn new(properties: AnimatorProperties) -> Self {
        Self {
            properties,
            writes: Vec::new(),
        }
    }

    pub fn writes(&self) -> &[AnimatorWrite] {
        &self.writes
    }

    /// The last orientation value written, if any.
    pub fn last_orientation(&self) -> Option<i32> {
        self.writes.iter().rev().find_map(|w| match w {
            AnimatorWrite::Integer { property, value }
                if *property == self.properties.orientation => {
                Some(*value)
            }
            _ => None,
        })
    }
}

impl AnimationDriver for RecordingDriver {
    fn set_orientation(&mut self, delta: u8) {
        self.writes.push(AnimatorWrite::Integer {
            property: self.properties.orientation.clone(),
            value: i32::from(delta),
        });
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.writes.push(AnimatorWrite::Bool {
            property: self.properties.highlight.clone(),
            value: highlighted,
        });
    }
}
