//! # Hearth - locations, creatures, weapons and things to eat
//!
//! A library of manipulable game objects. Locations are bounded 3D regions, objects live inside
//! exactly one location and carry optional capabilities: being alive, being a weapon, being
//! edible and being burnable. Interactions between objects are expressed as actions performed by
//! a [`game::World`].
//!

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::use_self,
    clippy::module_name_repetitions
)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
extern crate serde;
extern crate serde_json;

pub mod entity;
pub mod game;
pub mod raws;
#[cfg(test)]
mod test;

use std::env;

pub const VERSION: &str = "0.1.0";

/// Read the command line into the global [`game::env::GameEnv`].
pub fn parse_cmdline_flags() {
    let args: Vec<String> = env::args().collect();
    debug!("args: {:?}", args);
    for idx in 0..args.len() {
        if let Some(arg) = args.get(idx) {
            match arg.as_str() {
                "-d" | "--debug" => game::env().set_debug_mode(true),
                "-s" | "--scenario" => parse_scenario(&args, idx),
                _ => {}
            }
        }
    }
}

fn parse_scenario(args: &[String], idx: usize) {
    // try get next argument to retrieve the scenario path
    match args.get(idx + 1) {
        Some(path) if !path.starts_with('-') => game::env().set_scenario(path),
        _ => info!("no scenario path provided, fall back to the bundled scenario"),
    }
}
