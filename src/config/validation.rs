//! Accumulating validation checks for configuration.
//!
//! Every check returns a `Validation` so that all problems in a file are
//! reported together instead of one per attempt.

use crate::config::error::ConfigViolation;
use crate::config::{TrackConfiguration, TrackGridElement};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

pub(crate) fn distinct_directions(config: &TrackConfiguration) -> Check {
    if config.direction1 == config.direction2 {
        Validation::fail(ConfigViolation::SameDirections {
            direction: config.direction1,
        })
    } else {
        Validation::success(())
    }
}

pub(crate) fn non_empty_property(field: &'static str, value: &str) -> Check {
    if value.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptyProperty { field })
    } else {
        Validation::success(())
    }
}

pub(crate) fn usable_train_path(config: &TrackConfiguration) -> Check {
    match config.train_path.len() {
        1 => Validation::fail(ConfigViolation::TrainPathTooShort { points: 1 }),
        _ => Validation::success(()),
    }
}

/// Run every track check and collect the violations.
pub(crate) fn track_violations(config: &TrackConfiguration) -> Vec<ConfigViolation> {
    let checks = vec![
        distinct_directions(config),
        non_empty_property("highlight_prop", &config.highlight_prop),
        non_empty_property("orientation_prop", &config.orientation_prop),
        usable_train_path(config),
    ];

    into_violations(Validation::all_vec(checks).map(|_| ()))
}

/// Track checks for a placed element, tagged with its grid position.
///
/// With `fix_properties` set, equal directions are left to be repaired.
pub(crate) fn placed_track(element: &TrackGridElement, fix_properties: bool) -> Check {
    let violations: Vec<_> = track_violations(&element.track)
        .into_iter()
        .filter(|v| !(fix_properties && matches!(v, ConfigViolation::SameDirections { .. })))
        .map(|violation| ConfigViolation::Track {
            x: element.x,
            z: element.z,
            violation: Box::new(violation),
        })
        .collect();

    match NonEmptyVec::from_vec(violations) {
        Some(errors) => Validation::failure(errors),
        None => Validation::success(()),
    }
}

pub(crate) fn into_violations(result: Check) -> Vec<ConfigViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
