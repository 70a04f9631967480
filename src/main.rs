//! # Hearth - scenario runner
//!
//! Builds a world from a raw scenario, performs its script and reports what happened.
//!

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

#[macro_use]
extern crate log;

use color_eyre::eyre::Result;
use hearth::{game, raws};

// For debugging run with `RUST_LOG=hearth=trace RUST_BACKTRACE=1 cargo run -- --debug`.

/// # Errors
/// Errors are repackaged with `color_eyre`
pub fn main() -> Result<()> {
    color_eyre::install()?;

    // init logger
    pretty_env_logger::init();

    // parse program arguments
    hearth::parse_cmdline_flags();
    let (is_debug_mode, scenario_path) = {
        let env = game::env();
        (env.is_debug_mode, env.scenario.clone())
    };

    let scenario = match scenario_path {
        Some(path) => raws::load_scenario(&path)?,
        None => raws::load_default_scenario()?,
    };
    info!("running scenario '{}'", scenario.name);

    let mut world = game::World::new();
    let outcomes = scenario.run(&mut world)?;

    println!("hearth v{} - scenario '{}'", hearth::VERSION, scenario.name);
    for (step, result) in &outcomes {
        println!("  {:<40} {}", step, result);
    }
    println!();
    for (msg, _class) in &world.log.messages {
        println!("  {}", msg);
    }
    println!();
    for object in world.objects() {
        println!("  {}", object);
    }

    if is_debug_mode {
        println!("{}", serde_json::to_string_pretty(&world)?);
    }

    Ok(())
}
