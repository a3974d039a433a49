//! Recording observers for tests and tools.
//!
//! Each recorder appends every event it receives to a public `events` vector, in arrival order.

use crate::observer::{InventoryObserver, NavigationObserver, RobotEngineObserver};
use crate::{Direction, HelpText, Item, PlaceView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    HeadingChanged(Direction),
    NavigationInitialized(PlaceView, Direction),
    PlaceChanged(PlaceView),
    PlaceScanned(PlaceView),
    RobotArrived(Direction, PlaceView),
}

#[derive(Debug, Default)]
pub struct RecordingNavigationObserver {
    pub events: Vec<NavigationEvent>,
}

impl NavigationObserver for RecordingNavigationObserver {
    fn heading_changed(&mut self, new_heading: Direction) {
        self.events.push(NavigationEvent::HeadingChanged(new_heading));
    }

    fn navigation_initialized(&mut self, initial_place: &PlaceView, heading: Direction) {
        self.events.push(NavigationEvent::NavigationInitialized(
            initial_place.clone(),
            heading,
        ));
    }

    fn place_changed(&mut self, place: &PlaceView) {
        self.events.push(NavigationEvent::PlaceChanged(place.clone()));
    }

    fn place_scanned(&mut self, place: &PlaceView) {
        self.events.push(NavigationEvent::PlaceScanned(place.clone()));
    }

    fn robot_arrived_at_place(&mut self, heading: Direction, place: &PlaceView) {
        self.events
            .push(NavigationEvent::RobotArrived(heading, place.clone()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    HelpRequested(HelpText),
    EngineShutDown { at_spaceship: bool },
    CommunicationEnded,
    RobotSpeaks(String),
    ErrorRaised(String),
    StateUpdated { fuel: i32, recycled_material: i32 },
}

#[derive(Debug, Default)]
pub struct RecordingEngineObserver {
    pub events: Vec<EngineEvent>,
}

impl RecordingEngineObserver {
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::ErrorRaised(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn speech(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::RobotSpeaks(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of `engine_shut_down` and `communication_ended` events.
    pub fn terminal_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    EngineEvent::EngineShutDown { .. } | EngineEvent::CommunicationEnded
                )
            })
            .count()
    }
}

impl RobotEngineObserver for RecordingEngineObserver {
    fn help_requested(&mut self, help: &HelpText) {
        self.events.push(EngineEvent::HelpRequested(help.clone()));
    }

    fn engine_shut_down(&mut self, at_spaceship: bool) {
        self.events.push(EngineEvent::EngineShutDown { at_spaceship });
    }

    fn communication_ended(&mut self) {
        self.events.push(EngineEvent::CommunicationEnded);
    }

    fn robot_speaks(&mut self, message: &str) {
        self.events.push(EngineEvent::RobotSpeaks(message.to_owned()));
    }

    fn error_raised(&mut self, message: &str) {
        self.events.push(EngineEvent::ErrorRaised(message.to_owned()));
    }

    fn state_updated(&mut self, fuel: i32, recycled_material: i32) {
        self.events.push(EngineEvent::StateUpdated {
            fuel,
            recycled_material,
        });
    }
}

/// Keeps the identifiers of every inventory snapshot received.
#[derive(Debug, Default)]
pub struct RecordingInventoryObserver {
    pub events: Vec<Vec<String>>,
}

impl InventoryObserver for RecordingInventoryObserver {
    fn inventory_changed(&mut self, inventory: &[&Item]) {
        self.events
            .push(inventory.iter().map(|i| i.id().to_owned()).collect());
    }
}
