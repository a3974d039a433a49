//! robocity - drive the robot through a city map from the terminal.
//!
//! `robocity --map madrid.txt` loads the map, places the robot on its first place facing north,
//! and reads instructions from standard input until the run is over.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use robocity_cli::{ConsoleConfig, ConsoleController};
use robocity_core::{Direction, RobotEngine};
use robocity_loader::{load_city_from_path, CityFormatError};

#[derive(Parser)]
#[command(name = "robocity")]
#[command(about = "Turn-based robot city simulation", version)]
struct Cli {
    /// File with the description of the city
    #[arg(short, long)]
    map: PathBuf,

    /// The type of interface
    #[arg(short, long, default_value = "console")]
    interface: String,

    /// YAML console configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the game on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("error")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if !cli.interface.eq_ignore_ascii_case("console") {
        eprintln!("Wrong type of interface");
        return Ok(ExitCode::from(3));
    }

    let config = ConsoleConfig::load_or_default(cli.config.as_deref())?;

    let loaded = match load_city_from_path(&cli.map) {
        Ok(loaded) => loaded,
        Err(CityFormatError::Io(err)) => {
            eprintln!("Error reading the map file: {} ({err})", cli.map.display());
            return Ok(ExitCode::from(2));
        }
        Err(err) => {
            eprintln!("Incorrect format: {err}");
            return Ok(ExitCode::from(2));
        }
    };
    tracing::info!(map = %cli.map.display(), "Starting simulation");

    let engine = RobotEngine::with_config(
        loaded.city,
        loaded.initial_place,
        Direction::North,
        config.engine,
    );
    let mut controller = ConsoleController::new(engine, std::io::stdout(), &config);
    controller.run_game(std::io::stdin().lock())?;

    Ok(ExitCode::SUCCESS)
}
