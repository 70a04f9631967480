//! Things that can be eaten and things that can be burned.
//!
//! Both capabilities are one-shot: an edible yields its value once, a burnable burns once.

use crate::entity::act::{ActionResult, Ignored};
use crate::entity::object::Object;
use crate::game::objects::ObjectId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EdibleKind {
    /// Restores health.
    Food,
    /// Drains health.
    Poison,
    /// Restores health once burned, ends up in the eater's pocket otherwise.
    Cookable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edible {
    hp: i32,
    eaten: bool,
    kind: EdibleKind,
}

impl Edible {
    pub const fn new(hp: i32, kind: EdibleKind) -> Self {
        Edible {
            hp,
            eaten: false,
            kind,
        }
    }

    pub const fn hp(&self) -> i32 {
        self.hp
    }

    pub const fn kind(&self) -> EdibleKind {
        self.kind
    }

    pub const fn is_eaten(&self) -> bool {
        self.eaten
    }

    /// Hand out the stored value the first time, `None` ever after.
    pub fn try_consume(&mut self) -> Option<i32> {
        if self.eaten {
            None
        } else {
            self.eaten = true;
            Some(self.hp)
        }
    }

    /// The stored value on the first call, `0` on every later call.
    pub fn eat_me_value(&mut self) -> i32 {
        self.try_consume().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Burnable {
    burned: bool,
}

impl Burnable {
    pub const fn new() -> Self {
        Burnable { burned: false }
    }

    pub const fn is_burned(&self) -> bool {
        self.burned
    }

    pub fn burn_me(&mut self) -> ActionResult {
        if self.burned {
            ActionResult::Failure(Ignored::AlreadyBurned)
        } else {
            self.burned = true;
            ActionResult::Success
        }
    }
}

/// What eating an object amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumption {
    /// Signed amount of health the eater has to apply as is.
    Effect(i32),
    /// A raw cookable went into the eater's inventory instead of its stomach.
    Pocketed,
    Nothing(Ignored),
}

impl Consumption {
    pub const fn hp_delta(&self) -> i32 {
        match self {
            Self::Effect(delta) => *delta,
            _ => 0,
        }
    }
}

impl Object {
    pub fn is_eaten(&self) -> bool {
        self.edible.as_ref().map_or(false, Edible::is_eaten)
    }

    pub fn is_burned(&self) -> bool {
        self.burnable.as_ref().map_or(false, Burnable::is_burned)
    }

    /// Let `eater` eat this object. The eater's health is left alone, applying the returned
    /// effect is up to the caller.
    pub fn eat_me(&mut self, self_id: ObjectId, eater: &mut Object) -> Consumption {
        let is_burned = self.is_burned();
        let edible = match &mut self.edible {
            Some(edible) => edible,
            None => return Consumption::Nothing(Ignored::NotEdible),
        };

        let effect = match edible.kind {
            EdibleKind::Food => edible.try_consume(),
            EdibleKind::Poison => edible.try_consume().map(i32::saturating_neg),
            EdibleKind::Cookable if is_burned => edible.try_consume(),
            EdibleKind::Cookable => {
                return match &mut eater.living {
                    Some(living) => {
                        if living.inventory.insert(self_id) {
                            trace!("{} pocketed the raw {}", eater.name, self.name);
                            Consumption::Pocketed
                        } else {
                            Consumption::Nothing(Ignored::Raw)
                        }
                    }
                    None => Consumption::Nothing(Ignored::NotLiving),
                };
            }
        };

        effect.map_or(Consumption::Nothing(Ignored::AlreadyEaten), |delta| {
            trace!("{} was eaten by {} for {} hp", self.name, eater.name, delta);
            Consumption::Effect(delta)
        })
    }

    pub fn burn_me(&mut self) -> ActionResult {
        match &mut self.burnable {
            Some(burnable) => burnable.burn_me(),
            None => ActionResult::Failure(Ignored::NotBurnable),
        }
    }

    /// React to being put into the inventory of `holder`. Food and poison make sure they are held,
    /// which is a no-op when called from [`Object::pick_up_item`].
    pub fn pick_up(&mut self, self_id: ObjectId, holder: &mut Object) {
        let kind = self.edible.as_ref().map(Edible::kind);
        if matches!(kind, Some(EdibleKind::Food | EdibleKind::Poison)) {
            let _ = holder.pick_up_item(self_id, self);
        }
    }
}
