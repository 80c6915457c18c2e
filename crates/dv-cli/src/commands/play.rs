use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use dv_fiction::{FictionSession, GameStatus, SessionConfig, Verbosity};

/// Flags for `delve play`.
pub struct PlayOptions {
    /// Combat RNG seed.
    pub seed: u64,
    /// Where save files go.
    pub save_dir: PathBuf,
    /// Start in verbose mode.
    pub verbose: bool,
    /// Start in superbrief mode.
    pub superbrief: bool,
    /// Save to load before the first prompt.
    pub restore: Option<String>,
    /// Style output with ANSI colors.
    pub color: bool,
}

impl PlayOptions {
    fn config(&self) -> SessionConfig {
        let verbosity = if self.verbose {
            Verbosity::Verbose
        } else if self.superbrief {
            Verbosity::Superbrief
        } else {
            Verbosity::Brief
        };
        SessionConfig::default()
            .with_seed(self.seed)
            .with_save_dir(&self.save_dir)
            .with_verbosity(verbosity)
    }
}

/// Run the read-eval-print loop until the game ends or input runs out.
pub fn run(world: Option<&Path>, options: PlayOptions) -> Result<(), String> {
    if !options.color {
        colored::control::set_override(false);
    }
    let world = super::load_world(world)?;
    let mut session = FictionSession::new(world, options.config())
        .map_err(|e| format!("failed to start session: {e}"))?;

    let opening = match &options.restore {
        Some(name) => session.restore(name).map_err(|e| e.to_string())?,
        None => session.intro(),
    };
    println!("{}\n", styled(&session, &opening));

    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while session.status() == GameStatus::Playing {
        if interactive {
            print!("{} ", ">".bold());
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let output = session.process(input);
        if !output.is_empty() {
            println!("{}\n", styled(&session, &output));
        }
    }

    println!("{}", session.score_line());
    Ok(())
}

/// Highlight the room heading and the end-of-game banners.
///
/// Only styling is applied; the text itself is printed unchanged.
fn styled(session: &FictionSession, text: &str) -> String {
    let heading = session
        .world()
        .current_room()
        .map(|r| r.name.as_str())
        .unwrap_or_default();
    text.lines()
        .map(|line| {
            if line == "*** You have died ***" {
                line.red().bold().to_string()
            } else if line == "*** You have won ***" {
                line.green().bold().to_string()
            } else if !heading.is_empty() && line == heading {
                line.bold().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
