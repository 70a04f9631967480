mod location;
mod position;
mod weapon;

use crate::entity::Object;
use crate::game::{LocationId, ObjectId, World};

/// A world with a single 10x10x10 location.
fn create_minimal_world() -> (World, LocationId) {
    let mut world = World::new();
    let clearing = world.add_location("clearing", 10, 10, 10);
    (world, clearing)
}

/// Build an object for `location` and spawn it right away.
fn spawn_with(
    world: &mut World,
    location: LocationId,
    build: impl FnOnce(&crate::game::Location) -> Object,
) -> ObjectId {
    let object = build(world.location(location).expect("location exists"));
    world.spawn(object).expect("object spawns")
}
