//! Grid composition of track pieces.
//!
//! A [`Level`] places track controllers on integer grid positions, turns
//! clicks into quarter-turn requests, and exposes read-only snapshots of the
//! grid for game logic.

use crate::config::{AnimatorProperties, ConfigError, LevelConfiguration};
use crate::core::TrackPiece;
use crate::reorient::{Completion, ReorientError};
use crate::track::{AnimationDriver, SubscriptionId, TrackController};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Position of a piece on the level grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub z: i32,
}

impl GridPosition {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("No track piece at {0}")]
    UnknownPosition(GridPosition),

    #[error(transparent)]
    Reorient(#[from] ReorientError),
}

/// Immutable snapshot of track pieces by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackGrid(BTreeMap<GridPosition, TrackPiece>);

impl TrackGrid {
    pub fn get(&self, position: GridPosition) -> Option<&TrackPiece> {
        self.0.get(&position)
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        self.0.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GridPosition, &TrackPiece)> {
        self.0.iter()
    }
}

/// Track controllers placed on a grid.
///
/// Clicking a piece requests its current orientation rotated one
/// quarter-turn clockwise.
///
/// # Example
///
/// ```rust
/// use switchyard::config::AnimatorProperties;
/// use switchyard::core::{CardinalDirection::*, TrackPiece};
/// use switchyard::level::{GridPosition, Level};
/// use switchyard::track::{RecordingDriver, TrackController};
///
/// let driver = RecordingDriver::new(AnimatorProperties {
///     highlight: "Highlight".to_string(),
///     orientation: "Orientation".to_string(),
/// });
/// let elbow = TrackPiece::from_directions(North, East).unwrap();
///
/// let mut level = Level::new();
/// let here = GridPosition::new(0, 0);
/// level.add_track(here, TrackController::new(elbow, driver));
///
/// let completion = level.click(here).unwrap();
/// assert!(level.track_grid().is_empty());
/// assert_eq!(level.target_track_grid().get(here), Some(&elbow.rotated_by(1)));
///
/// level.finish_rotating(here).unwrap();
/// assert!(completion.is_finished());
/// assert_eq!(level.track_grid().get(here), Some(&elbow.rotated_by(1)));
/// ```
#[derive(Debug)]
pub struct Level<A: AnimationDriver> {
    tracks: BTreeMap<GridPosition, TrackController<A>>,
    subscriptions: HashMap<GridPosition, SubscriptionId>,
    clicked: Rc<RefCell<Vec<GridPosition>>>,
}

impl<A: AnimationDriver> Level<A> {
    pub fn new() -> Self {
        Self {
            tracks: BTreeMap::new(),
            subscriptions: HashMap::new(),
            clicked: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Build every track in `config`, creating one driver per track.
    ///
    /// Nothing is built unless the whole level is valid.
    pub fn from_configuration<F>(
        config: &LevelConfiguration,
        fix_properties: bool,
        mut make_driver: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(GridPosition, &AnimatorProperties) -> A,
    {
        let mut level = Self::new();
        for element in config.resolve(fix_properties)? {
            let position = GridPosition::new(element.x, element.z);
            let driver = make_driver(position, &element.track.animator);
            level.add_track(position, TrackController::from_resolved(element.track, driver));
        }
        Ok(level)
    }

    /// Place `controller` at `position`, returning the one it replaces.
    pub fn add_track(
        &mut self,
        position: GridPosition,
        mut controller: TrackController<A>,
    ) -> Option<TrackController<A>> {
        let previous = self.remove_track(position);

        let clicked = Rc::clone(&self.clicked);
        let id = controller.on_click(move |_| clicked.borrow_mut().push(position));
        self.subscriptions.insert(position, id);
        self.tracks.insert(position, controller);
        previous
    }

    /// Take the controller at `position` out of the level.
    ///
    /// Clicks it queued but that were not yet handled are discarded.
    pub fn remove_track(&mut self, position: GridPosition) -> Option<TrackController<A>> {
        let mut controller = self.tracks.remove(&position)?;
        if let Some(id) = self.subscriptions.remove(&position) {
            controller.remove_click_observer(id);
        }
        self.clicked.borrow_mut().retain(|clicked| *clicked != position);
        Some(controller)
    }

    pub fn track(&self, position: GridPosition) -> Option<&TrackController<A>> {
        self.tracks.get(&position)
    }

    pub fn track_mut(&mut self, position: GridPosition) -> Option<&mut TrackController<A>> {
        self.tracks.get_mut(&position)
    }

    pub fn positions(&self) -> impl Iterator<Item = &GridPosition> {
        self.tracks.keys()
    }

    /// Click the piece at `position`.
    ///
    /// Returns the completion of the resulting rotation, or `None` if there
    /// is no piece there.
    pub fn click(&mut self, position: GridPosition) -> Option<Completion> {
        self.tracks.get_mut(&position)?.pointer_released();
        self.handle_clicks()
            .into_iter()
            .rev()
            .find(|(clicked, _)| *clicked == position)
            .map(|(_, completion)| completion)
    }

    /// Rotate every piece clicked since the last call.
    pub fn handle_clicks(&mut self) -> Vec<(GridPosition, Completion)> {
        let clicked = std::mem::take(&mut *self.clicked.borrow_mut());

        clicked
            .into_iter()
            .filter_map(|position| {
                let controller = self.tracks.get_mut(&position)?;
                let target = controller.track_piece().rotated_by(1);
                tracing::debug!(%position, %target, "track clicked");
                let completion = controller.request_orientation(target)?;
                Some((position, completion))
            })
            .collect()
    }

    /// Route a driver's rotation-finished signal to the piece at `position`.
    pub fn finish_rotating(&mut self, position: GridPosition) -> Result<(), LevelError> {
        let controller = self
            .tracks
            .get_mut(&position)
            .ok_or(LevelError::UnknownPosition(position))?;
        controller.finish_rotating()?;
        Ok(())
    }

    /// Pieces that are not currently reorienting.
    pub fn track_grid(&self) -> TrackGrid {
        TrackGrid(
            self.tracks
                .iter()
                .filter(|(_, controller)| !controller.is_reorienting())
                .map(|(position, controller)| (*position, controller.track_piece()))
                .collect(),
        )
    }

    /// Every piece at the orientation it will have once animations finish.
    pub fn target_track_grid(&self) -> TrackGrid {
        TrackGrid(
            self.tracks
                .iter()
                .map(|(position, controller)| (*position, controller.track_piece()))
                .collect(),
        )
    }

    pub fn is_settled(&self) -> bool {
        self.tracks.values().all(|c| !c.is_reorienting())
    }
}

impl<A: AnimationDriver> Default for Level<A> {
    fn default() -> Self {
        Self::new()
    }
}
