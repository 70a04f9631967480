//! Weapons hurt living objects within their radius. Cold weapons additionally make them bleed,
//! throwing weapons can be thrown into a direction.

use crate::entity::act::{ActionResult, Ignored};
use crate::entity::object::Object;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeaponKind {
    Plain,
    Cold { bleeding_damage: i32 },
    Throwing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Weapon {
    damage: i32,
    radius: i32,
    kind: WeaponKind,
}

impl Weapon {
    pub const fn new(damage: i32, radius: i32, kind: WeaponKind) -> Self {
        Weapon {
            damage,
            radius,
            kind,
        }
    }

    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// The radius is inclusive, a target exactly `radius` away is still hit.
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    pub const fn kind(&self) -> WeaponKind {
        self.kind
    }

    /// Only cold weapons cause bleeding.
    pub const fn bleeding_damage(&self) -> Option<i32> {
        match self.kind {
            WeaponKind::Cold { bleeding_damage } => Some(bleeding_damage),
            _ => None,
        }
    }
}

/// Where a thrown weapon is headed. The throw happens in the horizontal plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Heading {
    pub x: f64,
    pub y: f64,
    pub z: i32,
    pub degrees: f64,
}

impl Object {
    /// Damage a living target in range.
    pub fn attack(&self, target: &mut Object) -> ActionResult {
        let weapon = match &self.weapon {
            Some(weapon) => weapon,
            None => return ActionResult::Failure(Ignored::NotAWeapon),
        };
        if target.living.is_none() {
            return ActionResult::Failure(Ignored::NotLiving);
        }
        if self.distance(target) > weapon.radius {
            return ActionResult::Failure(Ignored::OutOfRange);
        }
        trace!("{} attacks {} for {}", self.name, target.name, weapon.damage);
        target.change_hp(weapon.damage.saturating_neg())
    }

    /// Make a living target in range bleed. Requires a cold weapon.
    pub fn cause_bleeding(&self, target: &mut Object) -> ActionResult {
        let weapon = match &self.weapon {
            Some(weapon) => weapon,
            None => return ActionResult::Failure(Ignored::NotAWeapon),
        };
        let bleeding_damage = match weapon.bleeding_damage() {
            Some(bleeding_damage) => bleeding_damage,
            None => return ActionResult::Failure(Ignored::WrongWeapon),
        };
        if target.living.is_none() {
            return ActionResult::Failure(Ignored::NotLiving);
        }
        if self.distance(target) > weapon.radius {
            return ActionResult::Failure(Ignored::OutOfRange);
        }
        target.change_bleeding(bleeding_damage)
    }

    /// Compute where a throw at `angle` radians over `radius` would land. Nothing moves, this
    /// only describes the throw. Returns `None` unless this is a throwing weapon.
    pub fn throw_on_direction(&self, angle: f64, radius: f64) -> Option<Heading> {
        match self.weapon.map(|weapon| weapon.kind) {
            Some(WeaponKind::Throwing) => {
                let heading = Heading {
                    x: radius.mul_add(angle.cos(), f64::from(self.x())),
                    y: radius.mul_add(angle.sin(), f64::from(self.y())),
                    z: self.z(),
                    degrees: angle.to_degrees(),
                };
                info!("{} thrown towards {} degrees", self.name, heading.degrees);
                Some(heading)
            }
            _ => None,
        }
    }
}
