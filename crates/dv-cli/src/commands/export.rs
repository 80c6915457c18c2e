use std::path::Path;

/// Write a world as pretty JSON to a file or stdout.
pub fn run(world: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;
    let json = world
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}
