//! An in-game track piece: state machine plus animator and pointer events.

use crate::config::{ConfigError, ResolvedTrack, TrackConfiguration, TrainPath};
use crate::core::{ReorientPhase, TrackPiece};
use crate::reorient::{Completion, ReorientError, ReorientationMachine};
use crate::track::animator::AnimationDriver;
use crate::track::events::{Observers, SubscriptionId};

/// One track piece wired to its animation driver.
///
/// The controller forwards orientation deltas and highlight changes to the
/// driver and raises click and hover notifications for game logic. The
/// driver reports the end of each rotation through
/// [`finish_rotating`](Self::finish_rotating).
#[derive(Debug)]
pub struct TrackController<A: AnimationDriver> {
    machine: ReorientationMachine,
    driver: A,
    train_path: TrainPath,
    highlighted: bool,
    hovered: bool,
    on_click: Observers<()>,
    on_hover_changed: Observers<bool>,
}

impl<A: AnimationDriver> TrackController<A> {
    pub fn new(initial: TrackPiece, driver: A) -> Self {
        Self {
            machine: ReorientationMachine::new(initial),
            driver,
            train_path: TrainPath::default(),
            highlighted: false,
            hovered: false,
            on_click: Observers::new(),
            on_hover_changed: Observers::new(),
        }
    }

    pub fn from_resolved(track: ResolvedTrack, driver: A) -> Self {
        let mut controller = Self::new(track.piece, driver);
        controller.train_path = track.train_path;
        controller
    }

    /// Resolve `config` and build a controller around the resulting piece.
    pub fn from_configuration(
        config: &TrackConfiguration,
        fix_properties: bool,
        driver: A,
    ) -> Result<Self, ConfigError> {
        let track = config.resolve(fix_properties)?;
        Ok(Self::from_resolved(track, driver))
    }

    /// The target orientation; see [`is_reorienting`](Self::is_reorienting).
    pub fn track_piece(&self) -> TrackPiece {
        self.machine.current_piece()
    }

    pub fn is_reorienting(&self) -> bool {
        self.machine.is_reorienting()
    }

    pub fn phase(&self) -> ReorientPhase {
        self.machine.phase()
    }

    pub fn machine(&self) -> &ReorientationMachine {
        &self.machine
    }

    pub fn train_path(&self) -> &TrainPath {
        &self.train_path
    }

    pub fn supports_orientation(&self, piece: &TrackPiece) -> bool {
        self.machine.supports_orientation(piece)
    }

    /// Set the target orientation and start animating towards it.
    ///
    /// Returns `None` if `piece` is not supported. The returned completion is
    /// cancelled if another orientation is requested before this one
    /// finishes.
    pub fn request_orientation(&mut self, piece: TrackPiece) -> Option<Completion> {
        let reorientation = self.machine.request_orientation(piece)?;
        self.driver.set_orientation(reorientation.orientation_delta);
        Some(reorientation.completion)
    }

    /// Called by the animation driver when a rotation has played.
    pub fn finish_rotating(&mut self) -> Result<(), ReorientError> {
        self.machine.notify_rotation_finished()
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.driver.set_highlighted(highlighted);
        self.highlighted = highlighted;
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn driver(&self) -> &A {
        &self.driver
    }

    pub fn on_click<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&()) + 'static,
    {
        self.on_click.subscribe(observer)
    }

    pub fn remove_click_observer(&mut self, id: SubscriptionId) -> bool {
        self.on_click.unsubscribe(id)
    }

    pub fn on_hover_changed<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&bool) + 'static,
    {
        self.on_hover_changed.subscribe(observer)
    }

    pub fn remove_hover_observer(&mut self, id: SubscriptionId) -> bool {
        self.on_hover_changed.unsubscribe(id)
    }

    /// Pointer released over the piece.
    pub fn pointer_released(&mut self) {
        self.on_click.emit(&());
    }

    pub fn pointer_entered(&mut self) {
        self.set_hovered(true);
    }

    pub fn pointer_exited(&mut self) {
        self.set_hovered(false);
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.on_hover_changed.emit(&hovered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimatorProperties;
    use crate::core::CardinalDirection::{self, *};
    use crate::track::animator::{AnimatorWrite, RecordingDriver};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn piece(a: CardinalDirection, b: CardinalDirection) -> TrackPiece {
        TrackPiece::from_directions(a, b).unwrap()
    }

    fn driver() -> RecordingDriver {
        RecordingDriver::new(AnimatorProperties {
            highlight: "Highlight".to_string(),
            orientation: "Orientation".to_string(),
        })
    }

    #[test]
    fn request_forwards_delta_to_driver() {
        let mut controller = TrackController::new(piece(North, East), driver());

        let completion = controller.request_orientation(piece(West, North));

        assert!(completion.is_some());
        assert_eq!(controller.driver().last_orientation(), Some(3));
        assert_eq!(controller.track_piece(), piece(West, North));
        assert!(controller.is_reorienting());
    }

    #[test]
    fn unsupported_request_leaves_driver_alone() {
        let mut controller = TrackController::new(piece(North, South), driver());

        assert!(controller.request_orientation(piece(North, West)).is_none());
        assert!(controller.driver().writes().is_empty());
        assert_eq!(controller.phase(), ReorientPhase::Idle);
    }

    #[test]
    fn finish_rotating_resolves_completion() {
        let mut controller = TrackController::new(piece(North, East), driver());
        let completion = controller.request_orientation(piece(East, South)).unwrap();

        controller.finish_rotating().unwrap();

        assert!(completion.is_finished());
        assert!(!controller.is_reorienting());
        assert!(controller.finish_rotating().is_err());
    }

    #[test]
    fn highlight_is_written_to_driver() {
        let mut controller = TrackController::new(piece(North, East), driver());

        controller.set_highlighted(true);

        assert!(controller.highlighted());
        assert_eq!(
            controller.driver().writes(),
            &[AnimatorWrite::Bool {
                property: "Highlight".to_string(),
                value: true
            }]
        );
    }

    #[test]
    fn hover_changes_are_emitted_once() {
        let mut controller = TrackController::new(piece(North, East), driver());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.on_hover_changed(move |hovered| sink.borrow_mut().push(*hovered));

        controller.pointer_entered();
        controller.pointer_entered();
        controller.pointer_exited();

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!controller.hovered());
    }

    #[test]
    fn click_reaches_subscribers_until_removed() {
        let mut controller = TrackController::new(piece(North, East), driver());
        let clicks = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&clicks);
        let id = controller.on_click(move |_| *counter.borrow_mut() += 1);

        controller.pointer_released();
        assert!(controller.remove_click_observer(id));
        controller.pointer_released();

        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn builds_from_configuration() {
        let config = TrackConfiguration::new(South, South);

        assert!(TrackController::from_configuration(&config, false, driver()).is_err());

        let controller = TrackController::from_configuration(&config, true, driver()).unwrap();
        assert_eq!(controller.track_piece(), piece(North, South));
    }
}
