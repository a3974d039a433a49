use core::fmt;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::observer::{InventoryObserver, Observers};
use crate::Item;

/// Case-insensitive identifier used for ordering and lookup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(id: &str) -> Self {
        Self(id.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Duplicate-free item collection sorted by identifier, ignoring case.
#[derive(Debug, Default)]
pub struct ItemContainer {
    items: BTreeMap<ItemKey, Item>,
    observers: Observers<dyn InventoryObserver>,
}

impl ItemContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<RefCell<dyn InventoryObserver>>) -> bool {
        self.observers.add(observer)
    }

    /// Inserts `item` unless its identifier is already present, in which case nothing changes
    /// and `false` is returned.
    pub fn add(&mut self, item: Item) -> bool {
        let key = item.key();
        if self.items.contains_key(&key) {
            return false;
        }
        tracing::trace!(item = item.id(), "item stored");
        self.items.insert(key, item);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(&ItemKey::new(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.get_mut(&ItemKey::new(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(&ItemKey::new(id))
    }

    /// Takes the item out of the container.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let removed = self.items.remove(&ItemKey::new(id));
        if removed.is_some() {
            tracing::trace!(item = id, "item removed");
        }
        removed
    }

    /// Removes the item stored under `id` once it can no longer be used, and notifies observers.
    /// Returns the removed item.
    pub fn consume_if_exhausted(&mut self, id: &str) -> Option<Item> {
        let key = ItemKey::new(id);
        if self.items.get(&key)?.can_be_used() {
            return None;
        }
        let removed = self.items.remove(&key);
        tracing::trace!(item = id, "exhausted item removed");
        self.notify_changed();
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Identifiers in sorted order, as originally spelled.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.values().map(Item::id)
    }

    pub fn snapshot(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    /// Send the current contents to every observer.
    pub fn notify_changed(&self) {
        let snapshot = self.snapshot();
        self.observers.notify(|o| o.inventory_changed(&snapshot));
    }
}

/// Sorted identifiers separated by `", "`.
impl fmt::Display for ItemContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.ids().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(id)?;
        }
        Ok(())
    }
}
