use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

lazy_static! {
    static ref GAME_ENV: Mutex<GameEnv> = Mutex::new(GameEnv::new());
}

/// Access the process wide run configuration.
///
/// A poisoned lock still yields the configuration, it holds plain flags only.
pub fn env<'a>() -> MutexGuard<'a, GameEnv> {
    GAME_ENV
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GameEnv {
    /// if true: dump the whole world after running
    pub is_debug_mode: bool,
    /// optional path to a scenario file, the bundled one is used otherwise
    pub scenario: Option<String>,
}

impl GameEnv {
    pub const fn new() -> Self {
        GameEnv {
            is_debug_mode: false,
            scenario: None,
        }
    }

    pub fn set_debug_mode(&mut self, debug_mode: bool) {
        self.is_debug_mode = debug_mode;
    }

    pub fn set_scenario(&mut self, path: &str) {
        self.scenario = Some(path.to_string());
    }
}
