pub mod templating;

pub use templating::{LocationTemplate, ObjectKind, ObjectTemplate, Scenario, StepTemplate};

use color_eyre::eyre::{Result, WrapErr};
use std::fs;

const SCENARIO_RAW: &str = include_str!("../../raws/scenario.json");

/// Load the scenario bundled with the crate.
///
/// # Errors
///
/// Fails if the bundled `scenario.json` cannot be parsed.
pub fn load_default_scenario() -> Result<Scenario> {
    parse_scenario(SCENARIO_RAW).wrap_err("Unable to parse the bundled scenario")
}

/// Load a scenario from a JSON file.
///
/// # Errors
///
/// Fails if the file cannot be read or does not contain a valid scenario.
pub fn load_scenario(path: &str) -> Result<Scenario> {
    let raw_string =
        fs::read_to_string(path).wrap_err_with(|| format!("Unable to read scenario {}", path))?;
    parse_scenario(&raw_string).wrap_err_with(|| format!("Unable to parse scenario {}", path))
}

/// Parse a scenario from its JSON representation.
///
/// # Errors
///
/// Fails if the string is not a valid scenario.
pub fn parse_scenario(raw_string: &str) -> Result<Scenario> {
    let scenario: Scenario = serde_json::from_str(raw_string)?;
    debug!(
        "parsed scenario '{}' with {} location(s), {} object(s), {} step(s)",
        scenario.name,
        scenario.locations.len(),
        scenario.objects.len(),
        scenario.script.len()
    );
    Ok(scenario)
}
