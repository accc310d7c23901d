//! Four-direction rotation algebra.
//!
//! Directions form a cycle of order four under quarter-turn rotation. All
//! arithmetic is done on the direction's index modulo 4, so any integer step
//! count (including negative ones) is valid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four grid directions.
///
/// North maps to the positive Z axis and East to the positive X axis, so the
/// axis spellings are accepted when deserializing configuration.
///
/// # Example
///
/// ```rust
/// use switchyard::core::CardinalDirection;
///
/// let d = CardinalDirection::North;
/// assert_eq!(d.rotate_clockwise(1), CardinalDirection::East);
/// assert_eq!(d.rotate_clockwise(-1), CardinalDirection::West);
/// assert_eq!(d.rotation_steps_to(CardinalDirection::West), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardinalDirection {
    #[serde(alias = "PositiveZ")]
    North,
    #[serde(alias = "PositiveX")]
    East,
    #[serde(alias = "NegativeZ")]
    South,
    #[serde(alias = "NegativeX")]
    West,
}

impl CardinalDirection {
    /// All directions in clockwise order starting at North.
    pub const ALL: [CardinalDirection; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this direction in the clockwise cycle (North = 0).
    pub fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Direction at `index` in the clockwise cycle, wrapping around.
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Rotate by `steps` clockwise quarter-turns.
    ///
    /// Negative values rotate counter-clockwise.
    pub fn rotate_clockwise(self, steps: i32) -> Self {
        Self::from_index(i32::from(self.index()) + steps.rem_euclid(4))
    }

    /// Number of clockwise quarter-turns (0..=3) that take `self` to `to`.
    pub fn rotation_steps_to(self, to: CardinalDirection) -> u8 {
        (i32::from(to.index()) - i32::from(self.index())).rem_euclid(4) as u8
    }

    /// The direction half a turn away.
    pub fn opposite(self) -> Self {
        self.rotate_clockwise(2)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotate `direction` by `steps` clockwise quarter-turns.
pub fn rotate_clockwise(direction: CardinalDirection, steps: i32) -> CardinalDirection {
    direction.rotate_clockwise(steps)
}

/// Clockwise quarter-turns (0..=3) separating `from` and `to`.
pub fn rotation_steps_to(from: CardinalDirection, to: CardinalDirection) -> u8 {
    from.rotation_steps_to(to)
}
