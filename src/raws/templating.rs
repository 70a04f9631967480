use crate::entity::act::{self, Action, ActionResult};
use crate::entity::Object;
use crate::game::{ObjectId, World};

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

/// A whole scenario: the locations, what is placed inside them and a script of actions to run
/// afterwards. Templates can be created from game data serialised with JSON.
///
/// Example:
/// ```json
/// {
///     "name": "snack",
///     "locations": [{ "name": "kitchen", "width": 10, "height": 10, "length": 10 }],
///     "objects": [
///         { "name": "cat", "location": "kitchen", "pos": [5, 5, 5], "type": "Living", "hp": 20 },
///         { "name": "fish", "location": "kitchen", "pos": [5, 5, 6], "type": "Food", "hp": 5 }
///     ],
///     "script": [{ "action": "Eat", "actor": "cat", "target": "fish" }]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Scenario {
    pub name: String,
    pub locations: Vec<LocationTemplate>,
    #[serde(default)]
    pub objects: Vec<ObjectTemplate>,
    #[serde(default)]
    pub script: Vec<StepTemplate>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocationTemplate {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub length: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ObjectTemplate {
    pub name: String,
    pub location: String,
    pub pos: (i32, i32, i32),
    #[serde(flatten)]
    pub kind: ObjectKind,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum ObjectKind {
    Plain,
    Living {
        hp: i32,
    },
    Weapon {
        damage: i32,
        radius: i32,
    },
    ColdWeapon {
        damage: i32,
        radius: i32,
        bleeding_damage: i32,
    },
    ThrowingWeapon {
        damage: i32,
        radius: i32,
    },
    Food {
        hp: i32,
    },
    Poison {
        hp: i32,
    },
    Cookable {
        hp: i32,
    },
    Mushroom,
}

/// One step of a scenario script. Objects are referred to by name.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "action")]
pub enum StepTemplate {
    Move {
        actor: String,
        dx: i32,
        dy: i32,
        dz: i32,
    },
    Eat {
        actor: String,
        target: String,
    },
    PickUpItem {
        actor: String,
        item: String,
    },
    UseItem {
        actor: String,
        item: String,
    },
    Attack {
        actor: String,
        target: String,
    },
    CauseBleeding {
        actor: String,
        target: String,
    },
    Burn {
        actor: String,
        target: String,
    },
    /// `angle` is given in radians.
    Throw {
        actor: String,
        angle: f64,
        radius: f64,
    },
}

impl ObjectTemplate {
    /// Build the object described by this template inside `world`.
    ///
    /// # Errors
    ///
    /// Fails if the template names a location that does not exist.
    pub fn instantiate(&self, world: &World) -> Result<Object> {
        let location = world
            .find_location(&self.location)
            .and_then(|id| world.location(id))
            .ok_or_else(|| eyre!("{} refers to unknown location '{}'", self.name, self.location))?;
        let name = self.name.as_str();
        let pos = self.pos;

        let object = match self.kind {
            ObjectKind::Plain => Object::new(name, location, pos.0, pos.1, pos.2),
            ObjectKind::Living { hp } => Object::living_object(name, location, pos, hp),
            ObjectKind::Weapon { damage, radius } => {
                Object::weapon(name, location, pos, damage, radius)
            }
            ObjectKind::ColdWeapon {
                damage,
                radius,
                bleeding_damage,
            } => Object::cold_weapon(name, location, pos, damage, radius, bleeding_damage),
            ObjectKind::ThrowingWeapon { damage, radius } => {
                Object::throwing_weapon(name, location, pos, damage, radius)
            }
            ObjectKind::Food { hp } => Object::food(name, location, pos, hp),
            ObjectKind::Poison { hp } => Object::poison(name, location, pos, hp),
            ObjectKind::Cookable { hp } => Object::cookable(name, location, pos, hp),
            ObjectKind::Mushroom => {
                let mut mushroom = Object::mushroom(location, pos);
                mushroom.name = self.name.clone();
                mushroom
            }
        };
        Ok(object)
    }
}

impl StepTemplate {
    pub fn actor(&self) -> &str {
        match self {
            Self::Move { actor, .. }
            | Self::Eat { actor, .. }
            | Self::PickUpItem { actor, .. }
            | Self::UseItem { actor, .. }
            | Self::Attack { actor, .. }
            | Self::CauseBleeding { actor, .. }
            | Self::Burn { actor, .. }
            | Self::Throw { actor, .. } => actor,
        }
    }

    /// Resolve the object names of this step and turn it into an action.
    ///
    /// # Errors
    ///
    /// Fails if the step names an object that does not exist.
    pub fn to_action(&self, world: &World) -> Result<Box<dyn Action>> {
        let action: Box<dyn Action> = match self {
            Self::Move { dx, dy, dz, .. } => Box::new(act::Move {
                dx: *dx,
                dy: *dy,
                dz: *dz,
            }),
            Self::Eat { target, .. } => Box::new(act::Eat {
                target: lookup(world, target)?,
            }),
            Self::PickUpItem { item, .. } => Box::new(act::PickUpItem {
                item: lookup(world, item)?,
            }),
            Self::UseItem { item, .. } => Box::new(act::UseItem {
                item: lookup(world, item)?,
            }),
            Self::Attack { target, .. } => Box::new(act::Attack {
                target: lookup(world, target)?,
            }),
            Self::CauseBleeding { target, .. } => Box::new(act::CauseBleeding {
                target: lookup(world, target)?,
            }),
            Self::Burn { target, .. } => Box::new(act::Burn {
                target: lookup(world, target)?,
            }),
            Self::Throw { angle, radius, .. } => Box::new(act::Throw {
                angle: *angle,
                radius: *radius,
            }),
        };
        Ok(action)
    }
}

fn lookup(world: &World, name: &str) -> Result<ObjectId> {
    world
        .find(name)
        .ok_or_else(|| eyre!("unknown object '{}'", name))
}

impl Scenario {
    /// Create all locations and objects of the scenario in `world`.
    ///
    /// # Errors
    ///
    /// Fails if an object refers to an unknown location.
    pub fn spawn(&self, world: &mut World) -> Result<()> {
        for location in &self.locations {
            world.add_location(
                &location.name,
                location.width,
                location.height,
                location.length,
            );
        }
        for template in &self.objects {
            let object = template.instantiate(world)?;
            world
                .spawn(object)
                .ok_or_else(|| eyre!("failed to spawn {}", template.name))?;
        }
        Ok(())
    }

    /// Spawn the scenario into `world` and perform its script step by step. Returns a textual
    /// description of every step together with its result.
    ///
    /// # Errors
    ///
    /// Fails if the scenario refers to unknown locations or objects.
    pub fn run(&self, world: &mut World) -> Result<Vec<(String, ActionResult)>> {
        self.spawn(world)?;
        let mut outcomes = Vec::with_capacity(self.script.len());
        for step in &self.script {
            let actor = lookup(world, step.actor())?;
            let action = step.to_action(world)?;
            let result = world.perform(actor, action.as_ref());
            outcomes.push((format!("{}: {}", step.actor(), action.to_text()), result));
        }
        Ok(outcomes)
    }
}
