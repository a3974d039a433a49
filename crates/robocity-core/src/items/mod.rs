//! Items the robot can carry, and the sorted container that holds them.

mod container;

pub use container::{ItemContainer, ItemKey};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{NavigationModule, RobotState};

/// Variant-specific payload of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemKind {
    /// Adds `power` fuel per use. Usable while `times` is not zero.
    Fuel { power: i32, times: i32 },
    /// Adds `recycled_material` once.
    Garbage { recycled_material: i32, times: i32 },
    /// Opens or closes the street in front of the robot when the codes match.
    CodeCard { code: String },
    /// Carries only an identifier and a description; never usable.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    id: String,
    description: String,
    kind: ItemKind,
}

impl Item {
    pub fn new(id: impl Into<String>, description: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn fuel(id: impl Into<String>, description: impl Into<String>, power: i32, times: i32) -> Self {
        Self::new(id, description, ItemKind::Fuel { power, times })
    }

    pub fn garbage(
        id: impl Into<String>,
        description: impl Into<String>,
        recycled_material: i32,
    ) -> Self {
        Self::new(
            id,
            description,
            ItemKind::Garbage {
                recycled_material,
                times: 1,
            },
        )
    }

    pub fn code_card(
        id: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::new(id, description, ItemKind::CodeCard { code: code.into() })
    }

    pub fn generic(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(id, description, ItemKind::Generic)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.id)
    }

    pub fn can_be_used(&self) -> bool {
        match &self.kind {
            ItemKind::Fuel { times, .. } | ItemKind::Garbage { times, .. } => *times != 0,
            ItemKind::CodeCard { .. } => true,
            ItemKind::Generic => false,
        }
    }

    /// Apply the item's effect. Returns `false` when nothing happened.
    pub fn use_item(&mut self, robot: &mut RobotState, navigation: &mut NavigationModule) -> bool {
        if !self.can_be_used() {
            return false;
        }
        match &mut self.kind {
            ItemKind::Fuel { power, times } => {
                robot.add_fuel(*power);
                *times -= 1;
                true
            }
            ItemKind::Garbage {
                recycled_material,
                times,
            } => {
                robot.add_recycled_material(*recycled_material);
                *times -= 1;
                true
            }
            ItemKind::CodeCard { code } => toggle_heading_street(navigation, code),
            ItemKind::Generic => false,
        }
    }

    /// Reverse the latest [`Item::use_item`].
    ///
    /// `self` is the instance that was used. Consumable items hand one use back: in place if the
    /// inventory still holds them, otherwise by putting `self` back into `inventory`.
    pub fn use_undo(
        &mut self,
        robot: &mut RobotState,
        navigation: &mut NavigationModule,
        inventory: &mut ItemContainer,
    ) -> bool {
        match &mut self.kind {
            ItemKind::Fuel { power, times } => {
                robot.add_fuel(-*power);
                match inventory.get_mut(&self.id) {
                    Some(Item {
                        kind: ItemKind::Fuel { times: held, .. },
                        ..
                    }) => *held += 1,
                    _ => {
                        *times += 1;
                        inventory.add(self.clone());
                        inventory.notify_changed();
                    }
                }
                true
            }
            ItemKind::Garbage {
                recycled_material,
                times,
            } => {
                robot.add_recycled_material(-*recycled_material);
                *times = 1;
                inventory.add(self.clone());
                inventory.notify_changed();
                true
            }
            ItemKind::CodeCard { code } => toggle_heading_street(navigation, code),
            ItemKind::Generic => false,
        }
    }
}

/// Close the street ahead if it is open, open it if it is closed.
fn toggle_heading_street(navigation: &mut NavigationModule, code: &str) -> bool {
    match navigation.heading_street_mut() {
        Some(street) if street.is_open() => street.close(code),
        Some(street) => street.open(code),
        None => false,
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        match &self.kind {
            ItemKind::Fuel { power, times } => write!(f, " // power = {power}, times = {times}"),
            ItemKind::Garbage {
                recycled_material, ..
            } => write!(f, " // recycled material = {recycled_material}"),
            ItemKind::CodeCard { .. } | ItemKind::Generic => Ok(()),
        }
    }
}
