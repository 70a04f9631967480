//! Health, bleeding and inventory of living objects, and the things living objects can do with
//! other objects: eat them, pick them up and use them.

use crate::entity::act::{ActionResult, Ignored};
use crate::entity::edible::Consumption;
use crate::entity::inventory::Inventory;
use crate::entity::object::Object;
use crate::game::consts;
use crate::game::objects::ObjectId;

use serde::{Deserialize, Serialize};

/// Health is kept within `[0, max_hp]`. Reaching zero is final, nothing brings the object back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Living {
    max_hp: i32,
    hp: i32,
    bleeding: i32,
    pub inventory: Inventory,
}

impl Living {
    pub const fn new(hp: i32) -> Self {
        Living {
            max_hp: hp,
            hp,
            bleeding: 0,
            inventory: Inventory::new(),
        }
    }

    pub const fn hp(&self) -> i32 {
        self.hp
    }

    pub const fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub const fn bleeding(&self) -> i32 {
        self.bleeding
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Add `delta` to the health and clamp the result. Ignored once dead.
    pub fn change_hp(&mut self, delta: i32) -> ActionResult {
        if !self.is_alive() {
            return ActionResult::Failure(Ignored::Dead);
        }
        self.hp = self.hp.saturating_add(delta).clamp(0, self.max_hp.max(0));
        if !self.is_alive() {
            debug!("health dropped to zero");
        }
        ActionResult::Success
    }

    /// Bleeding always accumulates and drains the same amount of health right away. The result
    /// reports whether the health drain had an effect.
    pub fn change_bleeding(&mut self, delta: i32) -> ActionResult {
        self.bleeding = self.bleeding.saturating_add(delta);
        self.change_hp(delta.saturating_neg())
    }
}

impl Object {
    /// Objects without a living component are never alive.
    pub fn is_alive(&self) -> bool {
        self.living.as_ref().map_or(false, Living::is_alive)
    }

    pub fn hp(&self) -> i32 {
        self.living.as_ref().map_or(0, Living::hp)
    }

    pub fn bleeding(&self) -> i32 {
        self.living.as_ref().map_or(0, Living::bleeding)
    }

    pub fn change_hp(&mut self, delta: i32) -> ActionResult {
        match &mut self.living {
            Some(living) => living.change_hp(delta),
            None => ActionResult::Failure(Ignored::NotLiving),
        }
    }

    pub fn change_bleeding(&mut self, delta: i32) -> ActionResult {
        match &mut self.living {
            Some(living) => living.change_bleeding(delta),
            None => ActionResult::Failure(Ignored::NotLiving),
        }
    }

    pub fn holds(&self, item: ObjectId) -> bool {
        self.living
            .as_ref()
            .map_or(false, |living| living.inventory.contains(item))
    }

    /// Eat an object within reach. The eaten object decides the signed amount of health that is
    /// applied to this object.
    pub fn eat(&mut self, food_id: ObjectId, food: &mut Object) -> ActionResult {
        if self.living.is_none() {
            return ActionResult::Failure(Ignored::NotLiving);
        }
        if food.edible.is_none() {
            return ActionResult::Failure(Ignored::NotEdible);
        }
        if self.distance(food) > consts::EAT_REACH {
            return ActionResult::Failure(Ignored::OutOfRange);
        }

        match food.eat_me(food_id, self) {
            Consumption::Effect(delta) => self.change_hp(delta),
            Consumption::Pocketed => ActionResult::Success,
            Consumption::Nothing(reason) => ActionResult::Failure(reason),
        }
    }

    /// Put an item into the inventory and let the item react to being picked up.
    pub fn pick_up_item(&mut self, item_id: ObjectId, item: &mut Object) -> ActionResult {
        if item.edible.is_none() {
            return ActionResult::Failure(Ignored::NotAnItem);
        }
        match &mut self.living {
            Some(living) => {
                if !living.inventory.insert(item_id) {
                    return ActionResult::Failure(Ignored::AlreadyHeld);
                }
            }
            None => return ActionResult::Failure(Ignored::NotLiving),
        }
        trace!("{} stored {} in the inventory", self.name, item.name);
        item.pick_up(item_id, self);
        ActionResult::Success
    }

    /// Use an item from the inventory. Edible items are eaten on the spot, without any range
    /// check, and leave the inventory once their effect applied.
    pub fn use_item(&mut self, item_id: ObjectId, item: &mut Object) -> ActionResult {
        if self.living.is_none() {
            return ActionResult::Failure(Ignored::NotLiving);
        }
        if !self.holds(item_id) {
            return ActionResult::Failure(Ignored::NotHeld);
        }
        if item.edible.is_none() {
            return ActionResult::Failure(Ignored::NotEdible);
        }

        match item.eat_me(item_id, self) {
            Consumption::Effect(delta) => {
                if let Some(living) = &mut self.living {
                    living.inventory.remove(item_id);
                }
                self.change_hp(delta)
            }
            // a raw cookable cannot be pocketed twice
            Consumption::Pocketed => ActionResult::Failure(Ignored::Raw),
            Consumption::Nothing(reason) => ActionResult::Failure(reason),
        }
    }
}
