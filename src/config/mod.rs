//! Track and level configuration.
//!
//! Configuration is plain serde data, usually loaded from JSON. Resolving it
//! validates every field, optionally repairs equal directions, and produces
//! the values the rest of the crate works with.
//!
//! # Example
//!
//! ```rust
//! use switchyard::config::TrackConfiguration;
//! use switchyard::core::CardinalDirection::*;
//!
//! let config = TrackConfiguration::from_json(
//!     r#"{ "direction1": "PositiveX", "direction2": "PositiveX" }"#,
//! )
//! .unwrap();
//!
//! assert!(config.resolve(false).is_err());
//!
//! let resolved = config.resolve(true).unwrap();
//! assert_eq!(resolved.piece.directions(), (North, East));
//! ```

use crate::core::{CardinalDirection, TrackPiece};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;

pub mod error;
mod validation;

pub use error::{ConfigError, ConfigViolation};

pub const DEFAULT_HIGHLIGHT_PROP: &str = "Highlight";
pub const DEFAULT_ORIENTATION_PROP: &str = "Orientation";

/// A point in 3D space.
pub type Point = [f32; 3];

/// The route a train follows across a piece.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainPath(Vec<Point>);

impl TrainPath {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

/// Names of the animator parameters a piece drives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimatorProperties {
    /// Boolean parameter toggled when the piece is highlighted
    pub highlight: String,
    /// Integer parameter holding the quarter-turn count
    pub orientation: String,
}

/// Serialized configuration of one track piece.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackConfiguration {
    /// One of the track's initial directions.
    pub direction1: CardinalDirection,

    /// The other initial direction.
    pub direction2: CardinalDirection,

    #[serde(default = "default_highlight_prop")]
    pub highlight_prop: String,

    /// Valid values written to it are 0..=3 for elbows and 0..=1 for
    /// straight pieces.
    #[serde(default = "default_orientation_prop")]
    pub orientation_prop: String,

    /// Path from `direction1` to `direction2`.
    #[serde(default)]
    pub train_path: TrainPath,
}

fn default_highlight_prop() -> String {
    DEFAULT_HIGHLIGHT_PROP.to_string()
}

fn default_orientation_prop() -> String {
    DEFAULT_ORIENTATION_PROP.to_string()
}

/// A validated track configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTrack {
    pub piece: TrackPiece,
    /// Oriented from `piece.directions().0` to `piece.directions().1`.
    pub train_path: TrainPath,
    pub animator: AnimatorProperties,
}

impl TrackConfiguration {
    /// Configuration with default property names and no train path.
    pub fn new(direction1: CardinalDirection, direction2: CardinalDirection) -> Self {
        Self {
            direction1,
            direction2,
            highlight_prop: default_highlight_prop(),
            orientation_prop: default_orientation_prop(),
            train_path: TrainPath::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every problem with this configuration.
    pub fn validate(&self) -> Vec<ConfigViolation> {
        validation::track_violations(self)
    }

    /// Replace `direction2` if it equals `direction1`.
    ///
    /// Returns whether anything changed.
    pub fn fix_directions(&mut self) -> bool {
        if self.direction1 != self.direction2 {
            return false;
        }

        let replacement = if self.direction1 == CardinalDirection::North {
            CardinalDirection::South
        } else {
            CardinalDirection::North
        };
        tracing::warn!(
            direction = %self.direction1,
            replacement = %replacement,
            "track directions were the same; second direction changed automatically"
        );
        self.direction2 = replacement;
        true
    }

    /// Validate and convert into a [`ResolvedTrack`].
    ///
    /// With `fix_properties` set, equal directions are repaired (and logged)
    /// instead of reported. Other violations are always errors.
    pub fn resolve(&self, fix_properties: bool) -> Result<ResolvedTrack, ConfigError> {
        let mut config = self.clone();
        if fix_properties {
            config.fix_directions();
        }

        let violations = config.validate();
        if !violations.is_empty() {
            return Err(ConfigError::Invalid(violations));
        }

        let piece = TrackPiece::from_directions(config.direction1, config.direction2)?;
        let train_path = if piece.directions().0 == config.direction1 {
            config.train_path
        } else {
            config.train_path.reversed()
        };

        Ok(ResolvedTrack {
            piece,
            train_path,
            animator: AnimatorProperties {
                highlight: config.highlight_prop,
                orientation: config.orientation_prop,
            },
        })
    }
}

/// A track piece placed on the level grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackGridElement {
    /// Index along the X axis.
    pub x: i32,
    /// Index along the Z axis.
    pub z: i32,
    pub track: TrackConfiguration,
}

/// Serialized configuration of a whole level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelConfiguration {
    #[serde(default)]
    pub tracks: Vec<TrackGridElement>,
}

/// A validated track together with its grid position.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedElement {
    pub x: i32,
    pub z: i32,
    pub track: ResolvedTrack,
}

impl LevelConfiguration {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every problem with this level.
    ///
    /// Duplicate positions come first, followed by each track's own
    /// violations tagged with its position.
    pub fn validate(&self) -> Vec<ConfigViolation> {
        self.violations(false)
    }

    /// Validate every track and resolve them in configuration order.
    ///
    /// Fails with all violations across the level, not just the first bad
    /// track.
    pub fn resolve(&self, fix_properties: bool) -> Result<Vec<ResolvedElement>, ConfigError> {
        let violations = self.violations(fix_properties);
        if !violations.is_empty() {
            return Err(ConfigError::Invalid(violations));
        }

        self.tracks
            .iter()
            .map(|element| {
                Ok(ResolvedElement {
                    x: element.x,
                    z: element.z,
                    track: element.track.resolve(fix_properties)?,
                })
            })
            .collect()
    }

    fn violations(&self, fix_properties: bool) -> Vec<ConfigViolation> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut checks: Vec<validation::Check> = self
            .tracks
            .iter()
            .map(|element| {
                let position = (element.x, element.z);
                if !seen.insert(position) && reported.insert(position) {
                    Validation::fail(ConfigViolation::DuplicatePosition {
                        x: element.x,
                        z: element.z,
                    })
                } else {
                    Validation::success(())
                }
            })
            .collect();
        checks.extend(
            self.tracks
                .iter()
                .map(|element| validation::placed_track(element, fix_properties)),
        );

        validation::into_violations(Validation::all_vec(checks).map(|_| ()))
    }
}
