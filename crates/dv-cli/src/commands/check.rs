use std::path::Path;

/// Validate a world and report every issue.
pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;
    let issues = world.validate();

    for issue in &issues {
        eprintln!("  {issue}");
    }
    let errors = issues.iter().filter(|i| i.is_error).count();
    if errors > 0 {
        return Err(format!(
            "{errors} error{} in '{}'",
            if errors == 1 { "" } else { "s" },
            world.meta.name
        ));
    }

    println!("  All checks passed for '{}'.", world.meta.name);
    println!(
        "  {} rooms, {} items, {} actors",
        world.rooms().count(),
        world.items().count(),
        world.actors().count()
    );
    Ok(())
}
