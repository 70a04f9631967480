use super::{create_minimal_world, spawn_with};
use crate::entity::Object;
use crate::game::{Location, LocationId, ObjectId, World};

#[test]
fn test_volume_and_dimensions() {
    let location = Location::new(LocationId(0), "cellar", 2, 3, 4);
    assert_eq!(location.width(), 2);
    assert_eq!(location.height(), 3);
    assert_eq!(location.length(), 4);
    assert_eq!(location.volume(), 24);

    let plain = Location::new(LocationId(1), "plain", 3_000_000, 3_000_000, 3_000_000);
    assert_eq!(plain.volume(), 27_000_000_000_000_000_000);

    let max = i128::from(i32::MAX);
    let void = Location::new(LocationId(2), "void", i32::MAX, i32::MAX, i32::MAX);
    assert_eq!(void.volume(), max * max * max);
}

#[test]
fn test_add_object_is_idempotent() {
    let mut location = Location::new(LocationId(0), "cellar", 5, 5, 5);
    assert!(location.add_object(ObjectId(3)));
    assert!(!location.add_object(ObjectId(3)));
    assert!(location.add_object(ObjectId(4)));
    assert_eq!(location.objects(), &[ObjectId(3), ObjectId(4)]);

    location.clear();
    assert!(location.objects().is_empty());
    assert!(!location.contains(ObjectId(3)));
}

#[test]
fn test_is_inside_is_exclusive() {
    // x is bounded by the length, y by the width and z by the height
    let location = Location::new(LocationId(0), "corridor", 4, 6, 20);
    assert!(location.is_inside(1, 1, 1));
    assert!(location.is_inside(19, 3, 5));
    assert!(!location.is_inside(0, 1, 1));
    assert!(!location.is_inside(20, 1, 1));
    assert!(!location.is_inside(1, 4, 1));
    assert!(!location.is_inside(1, 1, 6));
    assert!(!location.is_inside(-1, 2, 2));
}

#[test]
fn test_clamped_object_on_the_wall_is_not_inside() {
    let (mut world, clearing) = create_minimal_world();
    let stone = spawn_with(&mut world, clearing, |loc| Object::new("stone", loc, 15, -3, 10));

    let stone = world.object(stone).unwrap();
    assert_eq!((stone.x(), stone.y(), stone.z()), (10, 0, 10));
    // clamping is inclusive while the inside check is exclusive
    let location = world.location(clearing).unwrap();
    assert!(!location.is_inside(stone.x(), stone.y(), stone.z()));
}

#[test]
fn test_spawn_registers_membership() {
    let (mut world, clearing) = create_minimal_world();
    let cellar = world.add_location("cellar", 3, 3, 3);
    let a = spawn_with(&mut world, clearing, |loc| Object::new("a", loc, 1, 1, 1));
    let b = spawn_with(&mut world, cellar, |loc| Object::new("b", loc, 1, 1, 1));

    assert!(world.location(clearing).unwrap().contains(a));
    assert!(!world.location(clearing).unwrap().contains(b));
    assert!(world.location(cellar).unwrap().contains(b));
    assert_eq!(world.object(b).unwrap().location(), cellar);

    assert!(world.clear_location(clearing));
    assert!(world.location(clearing).unwrap().objects().is_empty());
    // clearing only forgets membership, the object itself is still around
    assert!(world.object(a).is_some());
    assert!(!world.clear_location(LocationId(42)));
}

#[test]
fn test_spawn_into_foreign_location_fails() {
    let (mut world, _) = create_minimal_world();
    let foreign = Location::new(LocationId(7), "elsewhere", 3, 3, 3);
    assert!(world.spawn(Object::new("ghost", &foreign, 1, 1, 1)).is_none());
    assert_eq!(world.objects().count(), 0);
}

#[test]
fn test_spawn_rejects_object_built_for_other_bounds() {
    let mut world = World::new();
    let small = world.add_location("small", 3, 3, 3);
    let big = Location::new(small, "big", 100, 100, 100);

    let ghost = Object::new("ghost", &big, 50, 50, 50);
    assert_eq!((ghost.x(), ghost.y(), ghost.z()), (50, 50, 50));
    assert!(world.spawn(ghost).is_none());
    assert_eq!(world.objects().count(), 0);
    assert!(world.location(small).unwrap().objects().is_empty());
}

#[test]
fn test_unspawned_object_is_no_member() {
    let (mut world, clearing) = create_minimal_world();
    let rock = Object::new("rock", world.location(clearing).unwrap(), 1, 1, 1);
    assert_eq!(rock.location(), clearing);
    assert!(world.location(clearing).unwrap().objects().is_empty());

    let id = world.spawn(rock).unwrap();
    assert_eq!(world.location(clearing).unwrap().objects(), &[id]);
}
