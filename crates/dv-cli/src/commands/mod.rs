/// `delve check`.
pub mod check;
/// `delve export`.
pub mod export;
/// `delve play`.
pub mod play;

use std::path::Path;

use dv_core::{World, sample};
use log::debug;

/// Load a world from a JSON file, or the bundled white house.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let world = World::from_json(&json)
                .map_err(|e| format!("cannot load {}: {e}", path.display()))?;
            debug!("loaded \"{}\" from {}", world.meta.name, path.display());
            Ok(world)
        }
        None => sample::white_house().map_err(|e| format!("bundled world is broken: {e}")),
    }
}
