//! The top level representation of the game. The world owns all locations and objects and is
//! the place where actions are performed.

pub mod consts;
pub mod env;
pub mod location;
pub mod msg;
pub mod objects;
pub mod position;

pub use env::env;
pub use location::{Location, LocationId};
pub use objects::{ObjectId, ObjectStore};
pub use position::Position;

use crate::entity::act::{self, Action, ActionResult, Ignored};
use crate::entity::Object;

use serde::{Deserialize, Serialize};

/// Arena of locations and objects. Both are addressed by handles, a location only keeps the
/// handles of the objects placed inside it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct World {
    locations: Vec<Location>,
    objects: ObjectStore,
    pub log: msg::Log,
}

impl World {
    pub const fn new() -> Self {
        World {
            locations: Vec::new(),
            objects: ObjectStore::new(),
            log: msg::Log::new(),
        }
    }

    pub fn add_location(&mut self, name: &str, width: i32, height: i32, length: i32) -> LocationId {
        let id = LocationId(self.locations.len());
        debug!("new location {} [{}x{}x{}]", name, width, height, length);
        self.locations.push(Location::new(id, name, width, height, length));
        id
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .find(|location| location.name == name)
            .map(Location::id)
    }

    /// Drop the membership records of a location. The objects themselves stay in the world.
    pub fn clear_location(&mut self, id: LocationId) -> bool {
        match self.locations.get_mut(id.0) {
            Some(location) => {
                location.clear();
                true
            }
            None => false,
        }
    }

    /// Add an object to the world and register it with its location. Returns `None` if the
    /// object was created for a location this world does not know, or for a location with the
    /// same id but different bounds.
    pub fn spawn(&mut self, object: Object) -> Option<ObjectId> {
        let location_id = object.location();
        match self.location(location_id) {
            None => {
                warn!(
                    "cannot spawn {}, unknown location {:?}",
                    object.name, location_id
                );
                return None;
            }
            Some(location) if location.extent() != object.extent() => {
                warn!(
                    "cannot spawn {}, it was built for other bounds than {}",
                    object.name, location.name
                );
                return None;
            }
            Some(_) => {}
        }
        let id = self.objects.push(object);
        if let Some(location) = self.locations.get_mut(location_id.0) {
            location.add_object(id);
        }
        Some(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects.find_by_name(name)
    }

    pub fn distance(&self, a: ObjectId, b: ObjectId) -> Option<i32> {
        Some(self.object(a)?.distance(self.object(b)?))
    }

    /// Let an object perform an action. The actor is taken out of the store for the duration of
    /// the action, hence an object can never target itself.
    pub fn perform(&mut self, actor: ObjectId, action: &dyn Action) -> ActionResult {
        match self.objects.extract(actor) {
            Some(mut owner) => {
                trace!("{} performs '{}'", owner.name, action.to_text());
                let result = action.perform(&mut self.log, &mut self.objects, &mut owner);
                self.objects.replace(actor, owner);
                result
            }
            None => ActionResult::Failure(Ignored::NoSuchObject),
        }
    }

    pub fn move_object(&mut self, id: ObjectId, dx: i32, dy: i32, dz: i32) -> ActionResult {
        self.perform(id, &act::Move { dx, dy, dz })
    }

    pub fn eat(&mut self, eater: ObjectId, target: ObjectId) -> ActionResult {
        self.perform(eater, &act::Eat { target })
    }

    pub fn pick_up_item(&mut self, holder: ObjectId, item: ObjectId) -> ActionResult {
        self.perform(holder, &act::PickUpItem { item })
    }

    pub fn use_item(&mut self, holder: ObjectId, item: ObjectId) -> ActionResult {
        self.perform(holder, &act::UseItem { item })
    }

    pub fn attack(&mut self, weapon: ObjectId, target: ObjectId) -> ActionResult {
        self.perform(weapon, &act::Attack { target })
    }

    pub fn cause_bleeding(&mut self, weapon: ObjectId, target: ObjectId) -> ActionResult {
        self.perform(weapon, &act::CauseBleeding { target })
    }

    pub fn burn(&mut self, burner: ObjectId, target: ObjectId) -> ActionResult {
        self.perform(burner, &act::Burn { target })
    }

    pub fn throw_on_direction(
        &mut self,
        weapon: ObjectId,
        angle: f64,
        radius: f64,
    ) -> ActionResult {
        self.perform(weapon, &act::Throw { angle, radius })
    }
}
