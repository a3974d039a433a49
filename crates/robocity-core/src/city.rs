//! City graph: places, the streets joining them, and the arena that owns both.

use core::fmt;
use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Direction, Item, ItemContainer};

/// Identity of a place inside one [`City`].
///
/// Two places with the same name and description are still distinct: identity is the slot the
/// city handed out, not the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaceId(pub usize);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "place#{}", self.0)
    }
}

#[derive(Debug)]
pub struct Place {
    name: String,
    description: String,
    spaceship: bool,
    items: ItemContainer,
}

impl Place {
    pub fn new(name: impl Into<String>, is_spaceship: bool, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            spaceship: is_spaceship,
            items: ItemContainer::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_spaceship(&self) -> bool {
        self.spaceship
    }

    pub fn items(&self) -> &ItemContainer {
        &self.items
    }

    /// Returns `false` without changing anything if an item with the same identifier is already
    /// here.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.items.add(item)
    }

    /// Same as [`Place::add_item`]; named for the robot leaving something behind.
    pub fn drop_item(&mut self, item: Item) -> bool {
        self.items.add(item)
    }

    pub fn pick_item(&mut self, id: &str) -> Option<Item> {
        self.items.remove(id)
    }

    pub fn contains_item(&self, id: &str) -> bool {
        self.items.contains(id)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Read-only projection handed to observers.
    pub fn view(&self) -> PlaceView {
        PlaceView {
            name: self.name.clone(),
            description: self.description.clone(),
            is_spaceship: self.spaceship,
            items: self.items.ids().map(str::to_owned).collect(),
        }
    }
}

/// Snapshot of a place as observers see it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaceView {
    pub name: String,
    pub description: String,
    pub is_spaceship: bool,
    /// Identifiers of the items lying here, sorted case-insensitively.
    pub items: Vec<String>,
}

impl PlaceView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Edge between two places.
///
/// `target` lies in `direction` from `source`, so `source` lies in `direction.opposite()` from
/// `target`. The street can be walked both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Street {
    source: PlaceId,
    direction: Direction,
    target: PlaceId,
    open: bool,
    code: String,
}

impl Street {
    /// An open street that needs no code.
    pub fn new(source: PlaceId, direction: Direction, target: PlaceId) -> Self {
        Self {
            source,
            direction,
            target,
            open: true,
            code: String::new(),
        }
    }

    pub fn with_code(
        source: PlaceId,
        direction: Direction,
        target: PlaceId,
        open: bool,
        code: impl Into<String>,
    ) -> Self {
        Self {
            source,
            direction,
            target,
            open,
            code: code.into(),
        }
    }

    pub fn source(&self) -> PlaceId {
        self.source
    }

    pub fn target(&self) -> PlaceId {
        self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn comes_out_from(&self, place: PlaceId, direction: Direction) -> bool {
        (place == self.source && direction == self.direction)
            || (place == self.target && direction == self.direction.opposite())
    }

    /// The endpoint opposite `from`, or `None` if `from` is not on this street.
    pub fn next_place(&self, from: PlaceId) -> Option<PlaceId> {
        if from == self.source {
            Some(self.target)
        } else if from == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Opens the street if `code` matches (case-insensitive). A mismatch leaves it untouched.
    pub fn open(&mut self, code: &str) -> bool {
        if !self.code_matches(code) {
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self, code: &str) -> bool {
        if !self.code_matches(code) {
            return false;
        }
        self.open = false;
        true
    }

    fn code_matches(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.to_lowercase()
    }
}

/// Arena of places plus the street list.
#[derive(Debug, Default)]
pub struct City {
    places: Vec<Place>,
    streets: Vec<Street>,
}

impl City {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_place(&mut self, place: Place) -> PlaceId {
        self.places.push(place);
        PlaceId(self.places.len() - 1)
    }

    pub fn add_street(&mut self, street: Street) {
        self.streets.push(street);
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.0)
    }

    pub fn place_mut(&mut self, id: PlaceId) -> Option<&mut Place> {
        self.places.get_mut(id.0)
    }

    pub fn places(&self) -> impl Iterator<Item = (PlaceId, &Place)> {
        self.places.iter().enumerate().map(|(i, p)| (PlaceId(i), p))
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    /// First street, in insertion order, that leaves `place` heading `direction`.
    pub fn look_for_street(&self, place: PlaceId, direction: Direction) -> Option<&Street> {
        self.streets
            .iter()
            .find(|s| s.comes_out_from(place, direction))
    }

    pub fn look_for_street_mut(
        &mut self,
        place: PlaceId,
        direction: Direction,
    ) -> Option<&mut Street> {
        self.streets
            .iter_mut()
            .find(|s| s.comes_out_from(place, direction))
    }
}

impl Index<PlaceId> for City {
    type Output = Place;

    /// Panics if `id` was not handed out by this city.
    fn index(&self, id: PlaceId) -> &Place {
        &self.places[id.0]
    }
}

impl IndexMut<PlaceId> for City {
    fn index_mut(&mut self, id: PlaceId) -> &mut Place {
        &mut self.places[id.0]
    }
}
