use super::{create_minimal_world, spawn_with};
use crate::entity::act::{ActionResult, Ignored};
use crate::entity::Object;

#[test]
fn test_attack_radius_is_inclusive() {
    let (mut world, clearing) = create_minimal_world();
    let wolf = spawn_with(&mut world, clearing, |loc| {
        Object::living_object("wolf", loc, (5, 5, 5), 20)
    });
    let sword = spawn_with(&mut world, clearing, |loc| {
        Object::weapon("sword", loc, (5, 2, 5), 4, 3)
    });

    assert_eq!(world.distance(sword, wolf), Some(3));
    assert_eq!(world.attack(sword, wolf), ActionResult::Success);
    assert_eq!(world.object(wolf).unwrap().hp(), 16);

    world.move_object(sword, 0, -1, 0);
    assert_eq!(world.distance(sword, wolf), Some(4));
    assert_eq!(
        world.attack(sword, wolf),
        ActionResult::Failure(Ignored::OutOfRange)
    );
    assert_eq!(world.object(wolf).unwrap().hp(), 16);
}

#[test]
fn test_attack_until_dead() {
    let (mut world, clearing) = create_minimal_world();
    let wolf = spawn_with(&mut world, clearing, |loc| {
        Object::living_object("wolf", loc, (5, 5, 5), 10)
    });
    let axe = spawn_with(&mut world, clearing, |loc| Object::weapon("axe", loc, (5, 5, 6), 6, 1));

    assert!(world.attack(axe, wolf).is_success());
    assert!(world.attack(axe, wolf).is_success());
    assert_eq!(world.object(wolf).unwrap().hp(), 0);
    assert_eq!(world.attack(axe, wolf), ActionResult::Failure(Ignored::Dead));
    assert_eq!(world.object(wolf).unwrap().hp(), 0);
    assert_eq!(world.log.last(), Some("axe hits wolf, 0 hp left"));
}

#[test]
fn test_attack_requires_weapon_and_living_target() {
    let (mut world, clearing) = create_minimal_world();
    let wolf = spawn_with(&mut world, clearing, |loc| {
        Object::living_object("wolf", loc, (5, 5, 5), 10)
    });
    let stick = spawn_with(&mut world, clearing, |loc| Object::new("stick", loc, 5, 5, 5));
    let axe = spawn_with(&mut world, clearing, |loc| Object::weapon("axe", loc, (5, 5, 6), 6, 1));

    assert_eq!(world.attack(stick, wolf), ActionResult::Failure(Ignored::NotAWeapon));
    assert_eq!(world.attack(axe, stick), ActionResult::Failure(Ignored::NotLiving));
}

#[test]
fn test_cold_weapon_causes_bleeding() {
    let (mut world, clearing) = create_minimal_world();
    let wolf = spawn_with(&mut world, clearing, |loc| {
        Object::living_object("wolf", loc, (5, 5, 5), 20)
    });
    let knife = spawn_with(&mut world, clearing, |loc| {
        Object::cold_weapon("knife", loc, (6, 5, 5), 2, 1, 3)
    });

    let weapon = world.object(knife).unwrap().weapon.unwrap();
    assert_eq!(weapon.bleeding_damage(), Some(3));

    assert_eq!(world.cause_bleeding(knife, wolf), ActionResult::Success);
    let target = world.object(wolf).unwrap();
    assert_eq!(target.bleeding(), 3);
    assert_eq!(target.hp(), 17);

    // a cold weapon still attacks like any other weapon
    assert!(world.attack(knife, wolf).is_success());
    assert_eq!(world.object(wolf).unwrap().hp(), 15);

    world.move_object(knife, 2, 0, 0);
    assert_eq!(
        world.cause_bleeding(knife, wolf),
        ActionResult::Failure(Ignored::OutOfRange)
    );
    assert_eq!(world.object(wolf).unwrap().bleeding(), 3);
}

#[test]
fn test_only_cold_weapons_cause_bleeding() {
    let (mut world, clearing) = create_minimal_world();
    let wolf = spawn_with(&mut world, clearing, |loc| {
        Object::living_object("wolf", loc, (5, 5, 5), 20)
    });
    let club = spawn_with(&mut world, clearing, |loc| Object::weapon("club", loc, (5, 5, 5), 2, 1));
    assert_eq!(
        world.cause_bleeding(club, wolf),
        ActionResult::Failure(Ignored::WrongWeapon)
    );
    assert_eq!(world.object(wolf).unwrap().bleeding(), 0);
}

#[test]
fn test_throw_on_direction() {
    let (mut world, clearing) = create_minimal_world();
    let spear = spawn_with(&mut world, clearing, |loc| {
        Object::throwing_weapon("spear", loc, (2, 3, 4), 8, 6)
    });

    let heading = world
        .object(spear)
        .unwrap()
        .throw_on_direction(std::f64::consts::FRAC_PI_2, 5.0)
        .unwrap();
    assert!((heading.x - 2.0).abs() < 1e-9);
    assert!((heading.y - 8.0).abs() < 1e-9);
    assert_eq!(heading.z, 4);
    assert!((heading.degrees - 90.0).abs() < 1e-9);

    assert_eq!(
        world.throw_on_direction(spear, 0.0, 3.0),
        ActionResult::Success
    );
    // throwing only describes the throw, the spear stays where it is
    let spear = world.object(spear).unwrap();
    assert_eq!((spear.x(), spear.y(), spear.z()), (2, 3, 4));
    assert_eq!(
        world.log.last(),
        Some("spear was thrown towards 0.0 degrees, aiming at (5.0,3.0,4)")
    );
}

#[test]
fn test_only_throwing_weapons_can_be_thrown() {
    let (mut world, clearing) = create_minimal_world();
    let sword = spawn_with(&mut world, clearing, |loc| {
        Object::weapon("sword", loc, (1, 1, 1), 4, 3)
    });
    let rock = spawn_with(&mut world, clearing, |loc| Object::new("rock", loc, 1, 1, 1));

    assert!(world.object(sword).unwrap().throw_on_direction(0.0, 1.0).is_none());
    assert_eq!(
        world.throw_on_direction(sword, 0.0, 1.0),
        ActionResult::Failure(Ignored::WrongWeapon)
    );
    assert_eq!(
        world.throw_on_direction(rock, 0.0, 1.0),
        ActionResult::Failure(Ignored::NotAWeapon)
    );
}

#[test]
fn test_cutting_the_dead_still_adds_bleeding() {
    let (mut world, clearing) = create_minimal_world();
    let wolf = spawn_with(&mut world, clearing, |loc| {
        Object::living_object("wolf", loc, (5, 5, 5), 4)
    });
    let knife = spawn_with(&mut world, clearing, |loc| {
        Object::cold_weapon("knife", loc, (5, 5, 6), 1, 1, 5)
    });

    assert!(world.cause_bleeding(knife, wolf).is_success());
    assert!(!world.object(wolf).unwrap().is_alive());
    assert_eq!(
        world.cause_bleeding(knife, wolf),
        ActionResult::Failure(Ignored::Dead)
    );
    let wolf = world.object(wolf).unwrap();
    assert_eq!(wolf.bleeding(), 10);
    assert_eq!(wolf.hp(), 0);
}
