use super::{create_minimal_world, spawn_with};
use crate::entity::Object;
use crate::game::Position;

#[test]
fn test_distance_truncates() {
    let origin = Position::new(0, 0, 0);
    assert_eq!(origin.distance(&Position::new(3, 4, 0)), 5);
    // sqrt(2) = 1.41..
    assert_eq!(origin.distance(&Position::new(1, 1, 0)), 1);
    // sqrt(3) = 1.73.., rounding would give 2
    assert_eq!(origin.distance(&Position::new(1, 1, 1)), 1);
    // sqrt(8) = 2.83..
    assert_eq!(origin.distance(&Position::new(2, 2, 0)), 2);
    assert_eq!(origin.distance(&origin), 0);
}

#[test]
fn test_distance_is_symmetric() {
    let points = [
        Position::new(0, 0, 0),
        Position::new(10, 3, 7),
        Position::new(2, 9, 1),
        Position::new(5, 5, 5),
        Position::new(10, 10, 10),
    ];
    for a in &points {
        for b in &points {
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

#[test]
fn test_coordinates_are_clamped() {
    let (mut world, _) = create_minimal_world();
    let corridor = world.add_location("corridor", 4, 6, 20);
    let id = spawn_with(&mut world, corridor, |loc| Object::new("rat", loc, 2, 2, 2));
    let rat = world.object_mut(id).unwrap();

    // x is bounded by the length, y by the width and z by the height
    rat.set_x(25);
    rat.set_y(25);
    rat.set_z(25);
    assert_eq!((rat.x(), rat.y(), rat.z()), (20, 4, 6));

    rat.set_x(-1);
    rat.set_y(i32::MIN);
    rat.set_z(0);
    assert_eq!((rat.x(), rat.y(), rat.z()), (0, 0, 0));

    rat.set_pos(20, 4, 6);
    assert_eq!((rat.x(), rat.y(), rat.z()), (20, 4, 6));
}

#[test]
fn test_clamping_holds_for_any_write() {
    let (mut world, clearing) = create_minimal_world();
    let id = spawn_with(&mut world, clearing, |loc| Object::new("fly", loc, 0, 0, 0));
    let fly = world.object_mut(id).unwrap();
    for value in [i32::MIN, -100, -1, 0, 1, 5, 9, 10, 11, 1000, i32::MAX] {
        fly.set_pos(value, value, value);
        for coord in [fly.x(), fly.y(), fly.z()] {
            assert!((0..=10).contains(&coord), "{} escaped to {}", value, coord);
        }
    }
}

#[test]
fn test_move_reclamps() {
    let (mut world, clearing) = create_minimal_world();
    let id = spawn_with(&mut world, clearing, |loc| Object::new("bird", loc, 5, 5, 5));

    assert!(world.move_object(id, 2, -3, 1).is_success());
    assert_eq!(world.object(id).unwrap().pos(), Position::new(7, 2, 6));

    world.move_object(id, 100, -100, i32::MAX);
    assert_eq!(world.object(id).unwrap().pos(), Position::new(10, 0, 10));

    world.move_object(id, -3, 4, -10);
    assert_eq!(world.object(id).unwrap().pos(), Position::new(7, 4, 0));
}

#[test]
fn test_object_distance() {
    let (mut world, clearing) = create_minimal_world();
    let a = spawn_with(&mut world, clearing, |loc| Object::new("a", loc, 1, 2, 3));
    let b = spawn_with(&mut world, clearing, |loc| Object::new("b", loc, 4, 6, 3));
    assert_eq!(world.distance(a, b), Some(5));
    assert_eq!(world.distance(b, a), Some(5));
}

#[test]
fn test_huge_distance_saturates() {
    let origin = Position::new(0, 0, 0);
    let far = Position::new(i32::MAX, i32::MAX, i32::MAX);
    assert_eq!(origin.distance(&far), i32::MAX);
    assert_eq!(far.distance(&origin), i32::MAX);

    let min = Position::new(i32::MIN, 0, 0);
    assert_eq!(min.distance(&Position::new(i32::MAX, 0, 0)), i32::MAX);
}
