//! Observer contracts and the listener list each stateful component owns.
//!
//! Observers are stored as `Rc<RefCell<dyn Trait>>` so a single renderer value can be registered
//! with all three event sources at once.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Direction, HelpText, Item, PlaceView};

/// Events raised by the [`NavigationModule`](crate::NavigationModule).
pub trait NavigationObserver {
    fn heading_changed(&mut self, new_heading: Direction);

    fn navigation_initialized(&mut self, initial_place: &PlaceView, heading: Direction);

    /// The current place gained or lost an item.
    fn place_changed(&mut self, place: &PlaceView);

    fn place_scanned(&mut self, place: &PlaceView);

    /// `heading` is the direction of travel; for an undone move it is the opposite of the
    /// robot's (unchanged) heading.
    fn robot_arrived_at_place(&mut self, heading: Direction, place: &PlaceView);
}

/// Events raised by the [`RobotEngine`](crate::RobotEngine).
pub trait RobotEngineObserver {
    fn help_requested(&mut self, help: &HelpText);

    /// `at_spaceship` is false when the engine stopped for lack of fuel.
    fn engine_shut_down(&mut self, at_spaceship: bool);

    fn communication_ended(&mut self);

    fn robot_speaks(&mut self, message: &str);

    fn error_raised(&mut self, message: &str);

    fn state_updated(&mut self, fuel: i32, recycled_material: i32);
}

/// Events raised by the robot's [`ItemContainer`](crate::ItemContainer).
pub trait InventoryObserver {
    /// Snapshot of the whole inventory, ordered by identifier.
    fn inventory_changed(&mut self, inventory: &[&Item]);
}

/// Additive, identity-deduplicated list of listeners.
pub struct Observers<T: ?Sized> {
    list: Vec<Rc<RefCell<T>>>,
}

impl<T: ?Sized> Default for Observers<T> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}

impl<T: ?Sized> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.list.len())
            .finish()
    }
}

impl<T: ?Sized> Observers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`. Returns `false` (and changes nothing) if this exact instance is
    /// already registered.
    pub fn add(&mut self, observer: Rc<RefCell<T>>) -> bool {
        if self.list.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            return false;
        }
        self.list.push(observer);
        true
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Call `f` on every observer in registration order.
    ///
    /// An observer that is already mutably borrowed (it re-entered the component that is
    /// notifying it) is skipped for this event.
    pub fn notify(&self, mut f: impl FnMut(&mut T)) {
        for observer in &self.list {
            match observer.try_borrow_mut() {
                Ok(mut observer) => f(&mut *observer),
                Err(_) => tracing::warn!("skipping re-entrant observer notification"),
            }
        }
    }
}
