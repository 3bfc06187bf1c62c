#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

mod commands;
mod logging;

use clap::Parser;
use maestro_core::Config;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "maestro")]
#[command(author, version, about = "A deterministic Composer project inspector", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Show declared requirements from composer.json
    Deps {
        /// Show require-dev instead of require
        #[arg(long)]
        dev: bool,

        /// Merge require and require-dev (dev wins on duplicates)
        #[arg(long, conflicts_with = "dev")]
        all: bool,
    },

    /// Show the declared PHP version constraint
    Php,

    /// Show native-extension constraints from the installed snapshot
    Extensions,

    /// Show per-package "extra" metadata from the installed snapshot
    Extras,

    /// List outdated packages via the composer binary
    Outdated {
        /// Path to the composer executable (defaults to the project bin
        /// dir, then PATH)
        #[arg(long, value_name = "PATH")]
        composer: Option<PathBuf>,
    },

    /// Locate a vendor binary by name
    Bin {
        /// Binary name to locate (e.g., "phpunit")
        name: String,
    },

    /// Show resolved project paths (base, vendor, bin)
    Paths,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory
    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    // Build config
    let config = Config::new(cwd)
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(cli.json),
        Some(Commands::Deps { dev, all }) => {
            commands::deps::run(&config.cwd, dev, all, cli.json)
        }
        Some(Commands::Php) => commands::php::run(&config.cwd, cli.json),
        Some(Commands::Extensions) => commands::extensions::run(&config.cwd, cli.json),
        Some(Commands::Extras) => commands::extras::run(&config.cwd, cli.json),
        Some(Commands::Outdated { composer }) => {
            commands::outdated::run(&config.cwd, composer.as_deref(), cli.json)
        }
        Some(Commands::Bin { name }) => commands::bin::run(&config.cwd, &name, cli.json),
        Some(Commands::Paths) => commands::paths::run(&config.cwd, cli.json),
    }
}
