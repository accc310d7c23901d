//! Configuration error types.

use crate::core::{CardinalDirection, PieceError};
use thiserror::Error;

/// A single problem found while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Both directions of a track piece are {direction}")]
    SameDirections { direction: CardinalDirection },

    #[error("Animator property `{field}` is empty")]
    EmptyProperty { field: &'static str },

    /// A train path needs a start and an end point
    #[error("Train path has {points} point(s); it needs none or at least two")]
    TrainPathTooShort { points: usize },

    #[error("More than one track piece is placed at ({x}, {z})")]
    DuplicatePosition { x: i32, z: i32 },

    /// A violation of the track placed at `(x, z)`
    #[error("Track at ({x}, {z}): {violation}")]
    Track {
        x: i32,
        z: i32,
        violation: Box<ConfigViolation>,
    },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violation found, not just the first
    #[error("Invalid configuration ({} violation(s)): {}", .0.len(), describe(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error(transparent)]
    Piece(#[from] PieceError),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Violations carried by an `Invalid` error.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_lists_every_violation() {
        let error = ConfigError::Invalid(vec![
            ConfigViolation::EmptyProperty { field: "highlight_prop" },
            ConfigViolation::TrainPathTooShort { points: 1 },
        ]);

        let message = error.to_string();
        assert!(message.contains("2 violation(s)"));
        assert!(message.contains("highlight_prop"));
        assert!(message.contains("1 point(s)"));
        assert_eq!(error.violations().len(), 2);
    }

    #[test]
    fn track_violation_names_its_position() {
        let violation = ConfigViolation::Track {
            x: 3,
            z: -1,
            violation: Box::new(ConfigViolation::TrainPathTooShort { points: 1 }),
        };

        assert_eq!(
            violation.to_string(),
            "Track at (3, -1): Train path has 1 point(s); it needs none or at least two"
        );
    }
}
