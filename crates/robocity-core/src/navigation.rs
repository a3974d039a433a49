//! Robot position and heading over a [`City`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::observer::{NavigationObserver, Observers};
use crate::{City, Direction, ExecutionError, Item, Place, PlaceId, Rotation, Street};

#[derive(Debug)]
pub struct NavigationModule {
    city: City,
    current: PlaceId,
    heading: Direction,
    observers: Observers<dyn NavigationObserver>,
}

impl NavigationModule {
    /// An `Unknown` heading falls back to north.
    ///
    /// # Panics
    ///
    /// If `initial_place` was not handed out by `city`.
    pub fn new(city: City, initial_place: PlaceId, heading: Direction) -> Self {
        assert!(
            city.place(initial_place).is_some(),
            "initial place {initial_place} is not part of the city"
        );
        let heading = if heading.is_known() {
            heading
        } else {
            tracing::warn!("unknown initial heading, facing north");
            Direction::North
        };
        Self {
            city,
            current: initial_place,
            heading,
            observers: Observers::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Rc<RefCell<dyn NavigationObserver>>) -> bool {
        self.observers.add(observer)
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn current_place_id(&self) -> PlaceId {
        self.current
    }

    pub fn current_place(&self) -> &Place {
        &self.city[self.current]
    }

    pub fn at_spaceship(&self) -> bool {
        self.current_place().is_spaceship()
    }

    /// The street leaving the current place in the current heading.
    pub fn heading_street(&self) -> Option<&Street> {
        self.city.look_for_street(self.current, self.heading)
    }

    pub fn heading_street_mut(&mut self) -> Option<&mut Street> {
        self.city.look_for_street_mut(self.current, self.heading)
    }

    pub fn init_navigation(&self) {
        let view = self.current_place().view();
        let heading = self.heading;
        self.observers
            .notify(|o| o.navigation_initialized(&view, heading));
    }

    /// Walk the street ahead.
    pub fn move_forward(&mut self) -> Result<(), ExecutionError> {
        self.walk(self.heading)?;
        let view = self.current_place().view();
        let heading = self.heading;
        self.observers
            .notify(|o| o.robot_arrived_at_place(heading, &view));
        Ok(())
    }

    /// Walk back along the street behind the robot without turning around.
    pub fn move_undo(&mut self) -> Result<(), ExecutionError> {
        let back = self.heading.opposite();
        self.walk(back)?;
        let view = self.current_place().view();
        self.observers.notify(|o| o.robot_arrived_at_place(back, &view));
        Ok(())
    }

    fn walk(&mut self, direction: Direction) -> Result<(), ExecutionError> {
        let street = self
            .city
            .look_for_street(self.current, direction)
            .ok_or(ExecutionError::NoStreet { direction })?;
        if !street.is_open() {
            return Err(ExecutionError::StreetClosed);
        }
        let next = street
            .next_place(self.current)
            .ok_or(ExecutionError::NoStreet { direction })?;
        tracing::trace!(from = %self.current, to = %next, %direction, "robot moved");
        self.current = next;
        Ok(())
    }

    /// Turn the robot. `Rotation::Unknown` keeps the heading but still reports it.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.heading = self.heading.rotate(rotation);
        tracing::trace!(heading = %self.heading, %rotation, "robot turned");
        let heading = self.heading;
        self.observers.notify(|o| o.heading_changed(heading));
    }

    pub fn exists_at_current_place(&self, id: &str) -> bool {
        self.current_place().contains_item(id)
    }

    /// Take an item from the current place. Observers are told through
    /// [`NavigationModule::update_place`] once the caller has stored the item.
    pub fn pick_from_current_place(&mut self, id: &str) -> Option<Item> {
        let item = self.city[self.current].pick_item(id)?;
        tracing::debug!(item = item.id(), place = self.current_place().name(), "item picked");
        Some(item)
    }

    /// Leave an item at the current place. Callers check
    /// [`NavigationModule::exists_at_current_place`] first; a collision returns `false`.
    pub fn drop_at_current_place(&mut self, item: Item) -> bool {
        let id = item.id().to_owned();
        if !self.city[self.current].drop_item(item) {
            return false;
        }
        tracing::debug!(item = %id, place = self.current_place().name(), "item dropped");
        self.update_place();
        true
    }

    pub fn scan_current_place(&self) {
        let view = self.current_place().view();
        self.observers.notify(|o| o.place_scanned(&view));
    }

    /// Report the current place to observers after its contents changed.
    pub fn update_place(&self) {
        let view = self.current_place().view();
        self.observers.notify(|o| o.place_changed(&view));
    }
}
