use crate::entity::Object;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of an object inside the [`ObjectStore`]. Handles stay valid for the lifetime of the
/// store, objects are never removed from it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The object store owns every object of the world and offers methods to deal with them in an
/// orderly fashion.
///
/// An object that is currently acting is taken out of its slot with [`ObjectStore::extract`]
/// and put back with [`ObjectStore::replace`], which allows it to be borrowed mutably next to
/// the object it acts upon.
#[derive(Default, Debug, Serialize, Deserialize)]
pub struct ObjectStore {
    objects: Vec<Option<Object>>,
}

impl ObjectStore {
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, object: Object) -> ObjectId {
        trace!("adding {} to game objects", object.name);
        self.objects.push(Some(object));
        ObjectId(self.objects.len() - 1)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Take an object out of the store. The slot stays reserved until the object is replaced.
    pub fn extract(&mut self, id: ObjectId) -> Option<Object> {
        self.objects.get_mut(id.0).and_then(Option::take)
    }

    /// Put a previously extracted object back into its slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not exist, which means the id was not handed out by this store.
    pub fn replace(&mut self, id: ObjectId, object: Object) {
        match self.objects.get_mut(id.0) {
            Some(slot) => {
                slot.replace(object);
            }
            None => {
                panic!(
                    "Error: object {} with given index {} does not exist!",
                    object.name, id
                );
            }
        }
    }

    /// Find the first object with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|opt| opt.as_ref().map_or(false, |obj| obj.name == name))
            .map(ObjectId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().flatten()
    }
}
