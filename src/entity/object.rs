use crate::entity::edible::{Burnable, Edible, EdibleKind};
use crate::entity::living::Living;
use crate::entity::weapon::{Weapon, WeaponKind};
use crate::game::consts;
use crate::game::location::{Extent, Location, LocationId};
use crate::game::position::Position;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An Object represents the base structure for all entities in the game.
/// Every object is placed inside exactly one location, which never changes. Everything an object
/// can do beyond being somewhere is organized in its own
///
/// ```Option<ComponentType>```
///
/// field. Food, for instance, is an object with an _edible_ component, a mushroom is an object
/// with both an _edible_ and a _burnable_ component.
///
/// Coordinates are always clamped into `[0, dimension]` of the object's location, the length
/// bounding x, the width bounding y and the height bounding z.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    location: LocationId,
    extent: Extent,
    pos: Position,
    pub living: Option<Living>,
    pub weapon: Option<Weapon>,
    pub edible: Option<Edible>,
    pub burnable: Option<Burnable>,
}

impl Object {
    /// Create a plain object for the given location, with its coordinates clamped to the
    /// location's bounds.
    ///
    /// Construction does not touch the location. The object only becomes a member once it is
    /// handed to [`crate::game::World::spawn`], an object that is never spawned belongs to no
    /// location's member list.
    pub fn new(name: &str, location: &Location, x: i32, y: i32, z: i32) -> Self {
        let mut object = Object {
            name: name.into(),
            location: location.id(),
            extent: location.extent(),
            pos: Position::default(),
            living: None,
            weapon: None,
            edible: None,
            burnable: None,
        };
        object.set_pos(x, y, z);
        object
    }

    /// Give the object health. Part of the builder pattern.
    pub fn living(mut self, hp: i32) -> Object {
        self.living = Some(Living::new(hp));
        self
    }

    /// Turn the object into a weapon. Part of the builder pattern.
    pub fn armed(mut self, weapon: Weapon) -> Object {
        self.weapon = Some(weapon);
        self
    }

    /// Make the object edible. Part of the builder pattern.
    pub fn edible(mut self, edible: Edible) -> Object {
        self.edible = Some(edible);
        self
    }

    /// Make the object burnable. Part of the builder pattern.
    pub fn burnable(mut self) -> Object {
        self.burnable = Some(Burnable::new());
        self
    }

    pub fn living_object(
        name: &str,
        location: &Location,
        (x, y, z): (i32, i32, i32),
        hp: i32,
    ) -> Self {
        Self::new(name, location, x, y, z).living(hp)
    }

    pub fn weapon(
        name: &str,
        location: &Location,
        (x, y, z): (i32, i32, i32),
        damage: i32,
        radius: i32,
    ) -> Self {
        Self::new(name, location, x, y, z).armed(Weapon::new(damage, radius, WeaponKind::Plain))
    }

    pub fn cold_weapon(
        name: &str,
        location: &Location,
        (x, y, z): (i32, i32, i32),
        damage: i32,
        radius: i32,
        bleeding_damage: i32,
    ) -> Self {
        Self::new(name, location, x, y, z).armed(Weapon::new(
            damage,
            radius,
            WeaponKind::Cold { bleeding_damage },
        ))
    }

    pub fn throwing_weapon(
        name: &str,
        location: &Location,
        (x, y, z): (i32, i32, i32),
        damage: i32,
        radius: i32,
    ) -> Self {
        Self::new(name, location, x, y, z).armed(Weapon::new(damage, radius, WeaponKind::Throwing))
    }

    pub fn food(name: &str, location: &Location, (x, y, z): (i32, i32, i32), hp: i32) -> Self {
        Self::new(name, location, x, y, z).edible(Edible::new(hp, EdibleKind::Food))
    }

    pub fn poison(name: &str, location: &Location, (x, y, z): (i32, i32, i32), hp: i32) -> Self {
        Self::new(name, location, x, y, z).edible(Edible::new(hp, EdibleKind::Poison))
    }

    /// Something that has to be burned before it can be eaten.
    pub fn cookable(name: &str, location: &Location, (x, y, z): (i32, i32, i32), hp: i32) -> Self {
        Self::new(name, location, x, y, z)
            .edible(Edible::new(hp, EdibleKind::Cookable))
            .burnable()
    }

    /// Grow a fresh mushroom at the given coordinates.
    pub fn mushroom(location: &Location, pos: (i32, i32, i32)) -> Self {
        Self::cookable(consts::MUSHROOM_NAME, location, pos, consts::MUSHROOM_HP)
    }

    pub const fn location(&self) -> LocationId {
        self.location
    }

    /// The bounds of the location this object was built for.
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Retrieve the current position of the object.
    pub const fn pos(&self) -> Position {
        self.pos
    }

    pub const fn x(&self) -> i32 {
        self.pos.x()
    }

    pub const fn y(&self) -> i32 {
        self.pos.y()
    }

    pub const fn z(&self) -> i32 {
        self.pos.z()
    }

    pub fn set_x(&mut self, x: i32) {
        self.pos.set_x(self.extent.clamp_x(x));
    }

    pub fn set_y(&mut self, y: i32) {
        self.pos.set_y(self.extent.clamp_y(y));
    }

    pub fn set_z(&mut self, z: i32) {
        self.pos.set_z(self.extent.clamp_z(z));
    }

    /// Set the current position of the object, clamped per axis.
    pub fn set_pos(&mut self, x: i32, y: i32, z: i32) {
        self.set_x(x);
        self.set_y(y);
        self.set_z(z);
    }

    /// Shift the object, the result is clamped like any other coordinate write.
    pub fn move_by(&mut self, dx: i32, dy: i32, dz: i32) {
        let target = self.pos.translated(dx, dy, dz);
        self.set_pos(target.x(), target.y(), target.z());
    }

    /// Calculate the distance of this object to another object, truncated toward zero.
    pub fn distance(&self, other: &Object) -> i32 {
        self.pos.distance(&other.pos)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.pos)?;
        if let Some(living) = &self.living {
            write!(
                f,
                ", hp: {}/{}, bleeding: {}, items: {}",
                living.hp(),
                living.max_hp(),
                living.bleeding(),
                living.inventory.len()
            )?;
        }
        if let Some(weapon) = &self.weapon {
            write!(f, ", damage: {}, radius: {}", weapon.damage(), weapon.radius())?;
        }
        if let Some(edible) = &self.edible {
            write!(f, ", eaten: {}", edible.is_eaten())?;
        }
        if let Some(burnable) = &self.burnable {
            write!(f, ", burned: {}", burnable.is_burned())?;
        }
        Ok(())
    }
}
