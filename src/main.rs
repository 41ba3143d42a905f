//! Map Coloring - Terminal-based graph coloring exercise
//!
//! Without a subcommand this opens the interactive map. Subcommands run the
//! same engine headlessly and exit with a status code.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mapcolor::cli::{AutoArgs, CheckArgs, CliError, CliResult, MapArgs};
use mapcolor::config::Config;
use mapcolor::constants::{APP_BINARY_NAME, APP_NAME};
use mapcolor::models::GraphModel;
use mapcolor::{logging, tui};
use std::path::PathBuf;
use tracing::{info, warn};

/// Map Coloring - color a map so that no two neighbors share a color
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Custom map definition (TOML); overrides the configured map
    #[arg(long, value_name = "FILE", global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run greedy auto-coloring and print the trace
    Auto(AutoArgs),
    /// Validate a manual coloring and compare it with the greedy baseline
    Check(CheckArgs),
    /// Show the active map
    Map(MapArgs),
}

/// Loads the map named by `--map`, the config file, or the built-in reference.
fn load_graph(override_path: Option<&PathBuf>, config: &Config) -> Result<GraphModel> {
    let graph = match override_path {
        Some(path) => GraphModel::load(path)?,
        None => config.map.load_graph()?,
    };

    for (from, to) in graph.asymmetric_edges() {
        warn!(%from, %to, "adjacency is not symmetric");
    }
    Ok(graph)
}

fn run_command(command: &Commands, map: Option<&PathBuf>) -> CliResult<()> {
    let config = Config::load().map_err(|e| CliError::io(format!("{e:#}")))?;
    let graph = load_graph(map, &config).map_err(|e| CliError::io(format!("{e:#}")))?;

    match command {
        Commands::Auto(args) => args.execute(&graph),
        Commands::Check(args) => args.execute(&graph),
        Commands::Map(args) => args.execute(&graph),
    }
}

fn run_interactive(map: Option<&PathBuf>) -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Continuing with defaults.");
            Config::default()
        }
    };

    let log_path = logging::default_log_path()?;
    if let Err(e) = logging::init_file_logging(&log_path, &config.logging.level) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting {APP_NAME}");

    // First run: write the defaults so there is a file to edit
    if !Config::exists() {
        if let Err(e) = config.save() {
            warn!("could not write default config: {e:#}");
        }
    }

    let graph = match load_graph(map, &config) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!();
            eprintln!("Run without --map to use the built-in map, or check the file:");
            eprintln!("  {APP_BINARY_NAME} map --map path/to/map.toml");
            std::process::exit(2);
        }
    };

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(graph, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    info!("session ended");
    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(command) => {
            if let Err(e) = logging::init_stderr_logging("warn") {
                eprintln!("Warning: logging disabled: {e:#}");
            }
            if let Err(e) = run_command(command, cli.map.as_ref()) {
                eprintln!("Error: {e}");
                std::process::exit(e.code.code());
            }
            Ok(())
        }
        None => run_interactive(cli.map.as_ref()),
    }
}
