//! Orientation matching between pieces of the same shape.

use super::piece::{Shape, TrackPiece};
use thiserror::Error;

/// Errors from comparing two pieces.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OrientationError {
    #[error("Cannot orient {from} onto {to}: pieces have different shapes")]
    ShapeMismatch { from: TrackPiece, to: TrackPiece },
}

/// Clockwise quarter-turns that rotate `from` onto `to`.
///
/// Straight pieces look the same after a half turn, so the result for them is
/// always 0 or 1. Elbows yield 0..=3 and satisfy
/// `from.rotated_by(steps) == to`.
///
/// Both pieces must have the same [`Shape`].
///
/// # Example
///
/// ```rust
/// use switchyard::core::{orientation_steps, CardinalDirection::*, TrackPiece};
///
/// let from = TrackPiece::from_directions(North, East).unwrap();
/// let to = TrackPiece::from_directions(North, West).unwrap();
/// assert_eq!(orientation_steps(&from, &to), Ok(3));
/// ```
pub fn orientation_steps(from: &TrackPiece, to: &TrackPiece) -> Result<u8, OrientationError> {
    let shape = from.shape();
    if shape != to.shape() {
        return Err(OrientationError::ShapeMismatch {
            from: *from,
            to: *to,
        });
    }

    let (a1, a2) = from.directions();
    let (b1, b2) = to.directions();

    let steps = match shape {
        Shape::Straight => a1.rotation_steps_to(b1) % 2,
        Shape::Elbow => {
            let r1 = a1.rotation_steps_to(b1);
            let r2 = a2.rotation_steps_to(b2);
            if r1 == r2 {
                r1
            } else {
                // The rotation swapped the legs relative to the stored order.
                a1.rotation_steps_to(b2)
            }
        }
    };

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardinalDirection::{self, *};

    fn piece(a: CardinalDirection, b: CardinalDirection) -> TrackPiece {
        TrackPiece::from_directions(a, b).unwrap()
    }

    #[test]
    fn straight_quarter_turn_is_one() {
        assert_eq!(orientation_steps(&piece(North, South), &piece(East, West)), Ok(1));
    }

    #[test]
    fn straight_half_turn_is_zero() {
        assert_eq!(orientation_steps(&piece(North, South), &piece(South, North)), Ok(0));
        assert_eq!(orientation_steps(&piece(East, West), &piece(East, West)), Ok(0));
    }

    #[test]
    fn elbow_with_consistent_legs() {
        assert_eq!(orientation_steps(&piece(North, East), &piece(East, South)), Ok(1));
        assert_eq!(orientation_steps(&piece(North, East), &piece(South, West)), Ok(2));
    }

    #[test]
    fn elbow_target_given_in_reverse_order() {
        let from = piece(North, East);
        let to = piece(South, East);
        let steps = orientation_steps(&from, &to).unwrap();

        assert_eq!(steps, 1);
        assert_eq!(from.rotated_by(i32::from(steps)), to);
    }

    #[test]
    fn elbow_tie_break_picks_alternate_pairing() {
        // North-East turned three times is West-North, stored as North-West:
        // pairing the legs in stored order gives 0 and 2.
        let from = piece(North, East);
        let to = piece(West, North);
        assert_eq!(orientation_steps(&from, &to), Ok(3));

        let from = piece(North, West);
        let to = piece(North, East);
        assert_eq!(orientation_steps(&from, &to), Ok(1));
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let from = piece(North, South);
        let to = piece(North, East);
        assert_eq!(
            orientation_steps(&from, &to),
            Err(OrientationError::ShapeMismatch { from, to })
        );
    }

    #[test]
    fn every_elbow_pair_round_trips() {
        let elbows: Vec<_> = piece(North, East).rotations().to_vec();
        for from in &elbows {
            for to in &elbows {
                let steps = orientation_steps(from, to).unwrap();
                assert!(steps < 4);
                assert_eq!(from.rotated_by(i32::from(steps)), *to);
            }
        }
    }
}
