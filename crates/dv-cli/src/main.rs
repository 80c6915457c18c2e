//! Command-line player for Delve.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "delve",
    about = "Delve: a text adventure in the caves beneath a white house",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure, reading commands from standard input
    Play {
        /// World file in JSON (default: the bundled white house)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// RNG seed for combat
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Directory for save files
        #[arg(long, default_value = ".")]
        save_dir: PathBuf,

        /// Always print full room descriptions
        #[arg(long, conflicts_with = "superbrief")]
        verbose: bool,

        /// Print only room names
        #[arg(long)]
        superbrief: bool,

        /// Resume from a saved game
        #[arg(short, long)]
        restore: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Check a world for broken references
    Check {
        /// World file in JSON (default: the bundled white house)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Write a world as JSON
    Export {
        /// World file in JSON (default: the bundled white house)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            world,
            seed,
            save_dir,
            verbose,
            superbrief,
            restore,
            no_color,
        } => {
            let options = commands::play::PlayOptions {
                seed,
                save_dir,
                verbose,
                superbrief,
                restore,
                color: !no_color,
            };
            commands::play::run(world.as_deref(), options)
        }
        Commands::Check { world } => commands::check::run(world.as_deref()),
        Commands::Export { world, output } => {
            commands::export::run(world.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
