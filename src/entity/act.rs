//! Module Act provides the action interface, which is used to express every interaction between
//! two objects, or between an object and itself.
//!
//! Nothing in here ever fails loudly. Out of range attacks or already eaten food are ignored, and
//! every action reports whether it had its intended effect through an [`ActionResult`].

use crate::entity::object::Object;
use crate::game::msg::{Log, MessageLog, MsgClass};
use crate::game::objects::{ObjectId, ObjectStore};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Result of performing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionResult {
    /// The action had its intended effect.
    Success,
    /// The action did not have its intended effect. This is not always a no-op: bleeding still
    /// accumulates on a dead target, and a dead eater still uses up the food, both reporting
    /// `Failure(Dead)` because the health did not change.
    Failure(Ignored),
}

impl ActionResult {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure(reason) => write!(f, "ignored: {}", reason),
        }
    }
}

/// Why an action did not have any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ignored {
    /// The target is farther away than the action reaches.
    OutOfRange,
    /// Dead objects do not change their health anymore.
    Dead,
    AlreadyEaten,
    AlreadyBurned,
    AlreadyHeld,
    NotHeld,
    /// Cookables have to be burned before they do anything when eaten.
    Raw,
    NotLiving,
    NotEdible,
    NotBurnable,
    /// Only edible things can be put into an inventory.
    NotAnItem,
    NotAWeapon,
    /// The weapon does not support this kind of action.
    WrongWeapon,
    NoSuchObject,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::OutOfRange => "out of range",
            Self::Dead => "dead",
            Self::AlreadyEaten => "already eaten",
            Self::AlreadyBurned => "already burned",
            Self::AlreadyHeld => "already held",
            Self::NotHeld => "not held",
            Self::Raw => "raw",
            Self::NotLiving => "not living",
            Self::NotEdible => "not edible",
            Self::NotBurnable => "not burnable",
            Self::NotAnItem => "not an item",
            Self::NotAWeapon => "not a weapon",
            Self::WrongWeapon => "wrong weapon",
            Self::NoSuchObject => "no such object",
        };
        write!(f, "{}", text)
    }
}

/// Interface for all actions.
/// The owner is the acting object, it has been taken out of the object store for the duration of
/// the action. Any other object is looked up in the store.
pub trait Action: Debug {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult;

    fn to_text(&self) -> String;
}

/// Shift the owner by the given deltas, clamped to its location.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Move {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

impl Action for Move {
    fn perform(
        &self,
        _log: &mut Log,
        _objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        owner.move_by(self.dx, self.dy, self.dz);
        trace!("{} moved to {}", owner.name, owner.pos());
        ActionResult::Success
    }

    fn to_text(&self) -> String {
        format!("move by ({},{},{})", self.dx, self.dy, self.dz)
    }
}

/// Eat an adjacent object.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Eat {
    pub target: ObjectId,
}

impl Action for Eat {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        let food = match objects.get_mut(self.target) {
            Some(food) => food,
            None => return ActionResult::Failure(Ignored::NoSuchObject),
        };
        let result = owner.eat(self.target, food);
        if result.is_success() {
            log.add(
                format!("{} ate {}, now at {} hp", owner.name, food.name, owner.hp()),
                MsgClass::Action,
            );
        }
        result
    }

    fn to_text(&self) -> String {
        format!("eat {}", self.target)
    }
}

/// Store an item in the owner's inventory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct PickUpItem {
    pub item: ObjectId,
}

impl Action for PickUpItem {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        let item = match objects.get_mut(self.item) {
            Some(item) => item,
            None => return ActionResult::Failure(Ignored::NoSuchObject),
        };
        let result = owner.pick_up_item(self.item, item);
        if result.is_success() {
            log.add(
                format!("{} picked up a {}", owner.name, item.name),
                MsgClass::Info,
            );
        }
        result
    }

    fn to_text(&self) -> String {
        format!("pick up {}", self.item)
    }
}

/// Use an item from the owner's inventory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct UseItem {
    pub item: ObjectId,
}

impl Action for UseItem {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        let item = match objects.get_mut(self.item) {
            Some(item) => item,
            None => return ActionResult::Failure(Ignored::NoSuchObject),
        };
        let result = owner.use_item(self.item, item);
        if result.is_success() {
            log.add(
                format!("{} used a {}, now at {} hp", owner.name, item.name, owner.hp()),
                MsgClass::Action,
            );
        }
        result
    }

    fn to_text(&self) -> String {
        format!("use {}", self.item)
    }
}

/// Hit a living object with the owner, which has to be a weapon.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Attack {
    pub target: ObjectId,
}

impl Action for Attack {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        let target = match objects.get_mut(self.target) {
            Some(target) => target,
            None => return ActionResult::Failure(Ignored::NoSuchObject),
        };
        let result = owner.attack(target);
        if result.is_success() {
            let class = if target.is_alive() {
                MsgClass::Action
            } else {
                MsgClass::Alert
            };
            log.add(
                format!(
                    "{} hits {}, {} hp left",
                    owner.name,
                    target.name,
                    target.hp()
                ),
                class,
            );
        }
        result
    }

    fn to_text(&self) -> String {
        format!("attack {}", self.target)
    }
}

/// Cut a living object with the owner, which has to be a cold weapon.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CauseBleeding {
    pub target: ObjectId,
}

impl Action for CauseBleeding {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        let target = match objects.get_mut(self.target) {
            Some(target) => target,
            None => return ActionResult::Failure(Ignored::NoSuchObject),
        };
        let result = owner.cause_bleeding(target);
        if result.is_success() {
            log.add(
                format!(
                    "{} cuts {}, bleeding {}",
                    owner.name,
                    target.name,
                    target.bleeding()
                ),
                MsgClass::Action,
            );
        }
        result
    }

    fn to_text(&self) -> String {
        format!("cut {}", self.target)
    }
}

/// Set fire to a burnable object.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Burn {
    pub target: ObjectId,
}

impl Action for Burn {
    fn perform(
        &self,
        log: &mut Log,
        objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        let target = match objects.get_mut(self.target) {
            Some(target) => target,
            None => return ActionResult::Failure(Ignored::NoSuchObject),
        };
        let result = target.burn_me();
        if result.is_success() {
            log.add(
                format!("{} burns the {}", owner.name, target.name),
                MsgClass::Info,
            );
        }
        result
    }

    fn to_text(&self) -> String {
        format!("burn {}", self.target)
    }
}

/// Throw the owner, which has to be a throwing weapon, in a direction of the horizontal plane.
/// The angle is given in radians.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Throw {
    pub angle: f64,
    pub radius: f64,
}

impl Action for Throw {
    fn perform(
        &self,
        log: &mut Log,
        _objects: &mut ObjectStore,
        owner: &mut Object,
    ) -> ActionResult {
        if owner.weapon.is_none() {
            return ActionResult::Failure(Ignored::NotAWeapon);
        }
        match owner.throw_on_direction(self.angle, self.radius) {
            Some(heading) => {
                log.add(
                    format!(
                        "{} was thrown towards {:.1} degrees, aiming at ({:.1},{:.1},{})",
                        owner.name, heading.degrees, heading.x, heading.y, heading.z
                    ),
                    MsgClass::Action,
                );
                ActionResult::Success
            }
            None => ActionResult::Failure(Ignored::WrongWeapon),
        }
    }

    fn to_text(&self) -> String {
        format!("throw at {:.2} rad over {:.1}", self.angle, self.radius)
    }
}
