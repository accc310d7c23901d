//! Track pieces: unordered pairs of distinct directions.

use super::direction::CardinalDirection;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building a track piece.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PieceError {
    #[error("Both directions of a track piece are {direction}; they must differ")]
    InvalidConfiguration { direction: CardinalDirection },
}

/// Classification of a track piece by the angle between its legs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Legs point in opposite directions.
    Straight,
    /// Legs are a quarter-turn apart.
    Elbow,
}

/// An immutable piece of track connecting two distinct directions.
///
/// The pair is unordered: `North-East` and `East-North` are the same piece.
/// Internally the direction with the lower index is stored first, which is
/// the order reported by [`TrackPiece::directions`].
///
/// # Example
///
/// ```rust
/// use switchyard::core::{CardinalDirection::*, Shape, TrackPiece};
///
/// let elbow = TrackPiece::from_directions(East, North).unwrap();
/// assert_eq!(elbow, TrackPiece::from_directions(North, East).unwrap());
/// assert_eq!(elbow.shape(), Shape::Elbow);
/// assert_eq!(elbow.rotated_by(1), TrackPiece::from_directions(East, South).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[CardinalDirection; 2]", into = "[CardinalDirection; 2]")]
pub struct TrackPiece {
    first: CardinalDirection,
    second: CardinalDirection,
}

impl TrackPiece {
    /// Build a piece from two directions in any order.
    pub fn from_directions(
        d1: CardinalDirection,
        d2: CardinalDirection,
    ) -> Result<Self, PieceError> {
        if d1 == d2 {
            return Err(PieceError::InvalidConfiguration { direction: d1 });
        }

        let (first, second) = if d1.index() < d2.index() {
            (d1, d2)
        } else {
            (d2, d1)
        };
        Ok(Self { first, second })
    }

    /// The two legs in normalized order.
    pub fn directions(&self) -> (CardinalDirection, CardinalDirection) {
        (self.first, self.second)
    }

    pub fn contains(&self, direction: CardinalDirection) -> bool {
        self.first == direction || self.second == direction
    }

    pub fn shape(&self) -> Shape {
        if self.first.rotation_steps_to(self.second) == 2 {
            Shape::Straight
        } else {
            Shape::Elbow
        }
    }

    /// A new piece with both legs rotated by `steps` clockwise quarter-turns.
    pub fn rotated_by(&self, steps: i32) -> Self {
        let a = self.first.rotate_clockwise(steps);
        let b = self.second.rotate_clockwise(steps);
        if a.index() < b.index() {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The piece rotated by 0, 1, 2 and 3 quarter-turns.
    ///
    /// Straight pieces repeat themselves after two turns, so only two of the
    /// four entries are distinct for them.
    pub fn rotations(&self) -> [Self; 4] {
        [
            self.rotated_by(0),
            self.rotated_by(1),
            self.rotated_by(2),
            self.rotated_by(3),
        ]
    }
}

impl TryFrom<[CardinalDirection; 2]> for TrackPiece {
    type Error = PieceError;

    fn try_from([d1, d2]: [CardinalDirection; 2]) -> Result<Self, Self::Error> {
        Self::from_directions(d1, d2)
    }
}

impl From<TrackPiece> for [CardinalDirection; 2] {
    fn from(piece: TrackPiece) -> Self {
        [piece.first, piece.second]
    }
}

impl fmt::Display for TrackPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use CardinalDirection::*;

    fn piece(a: CardinalDirection, b: CardinalDirection) -> TrackPiece {
        TrackPiece::from_directions(a, b).unwrap()
    }

    #[test]
    fn equal_directions_are_rejected() {
        let result = TrackPiece::from_directions(North, North);
        assert_eq!(
            result,
            Err(PieceError::InvalidConfiguration { direction: North })
        );
    }

    #[test]
    fn equality_ignores_argument_order() {
        assert_eq!(piece(West, South), piece(South, West));

        let set: HashSet<_> = [piece(West, South), piece(South, West)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn directions_are_normalized() {
        assert_eq!(piece(West, North).directions(), (North, West));
        assert_eq!(piece(South, East).directions(), (East, South));
    }

    #[test]
    fn shape_follows_leg_angle() {
        assert_eq!(piece(North, South).shape(), Shape::Straight);
        assert_eq!(piece(East, West).shape(), Shape::Straight);
        assert_eq!(piece(North, East).shape(), Shape::Elbow);
        assert_eq!(piece(West, North).shape(), Shape::Elbow);
    }

    #[test]
    fn rotation_produces_new_piece() {
        let original = piece(North, East);
        let rotated = original.rotated_by(3);

        assert_eq!(rotated, piece(West, North));
        assert_eq!(original, piece(North, East));
        assert_eq!(rotated.shape(), original.shape());
    }

    #[test]
    fn straight_piece_has_two_distinct_rotations() {
        let distinct: HashSet<_> = piece(North, South).rotations().into_iter().collect();
        assert_eq!(distinct.len(), 2);

        let distinct: HashSet<_> = piece(North, East).rotations().into_iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn contains_checks_both_legs() {
        let p = piece(South, West);
        assert!(p.contains(South));
        assert!(p.contains(West));
        assert!(!p.contains(North));
    }

    #[test]
    fn serializes_as_direction_pair() {
        let json = serde_json::to_string(&piece(West, North)).unwrap();
        assert_eq!(json, r#"["North","West"]"#);

        let parsed: TrackPiece = serde_json::from_str(r#"["East","North"]"#).unwrap();
        assert_eq!(parsed, piece(North, East));
    }

    #[test]
    fn deserializing_equal_directions_fails() {
        let result: Result<TrackPiece, _> = serde_json::from_str(r#"["East","East"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn display_uses_normalized_order() {
        assert_eq!(piece(East, North).to_string(), "North-East");
    }
}
