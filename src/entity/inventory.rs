use crate::game::objects::ObjectId;
use serde::{Deserialize, Serialize};

/// The items held by a living object. Every item is held at most once.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<ObjectId>,
}

impl Inventory {
    pub const fn new() -> Self {
        Inventory { items: Vec::new() }
    }

    /// Add an item. Returns `false` if the item was already held.
    pub fn insert(&mut self, item: ObjectId) -> bool {
        if self.contains(item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Remove an item. Returns `false` if the item was not held.
    pub fn remove(&mut self, item: ObjectId) -> bool {
        let len = self.items.len();
        self.items.retain(|held| *held != item);
        self.items.len() != len
    }

    pub fn contains(&self, item: ObjectId) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[ObjectId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
