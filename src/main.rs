use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use rehearsal_core::{Day, RehearsalError, ResolveStrategy, format_cell};
use rehearsal_planner::{Planner, PlannerConfig, init_tracing, report};
use rehearsal_store::{CsvStore, schema};
use tracing::info;

#[derive(Parser)]
#[command(name = "rehearsal")]
#[command(about = "Find the rehearsal windows where a whole line-up is available")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the CSV tables (overrides REHEARSAL_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Intersection strategy: seeded or sweep (overrides REHEARSAL_STRATEGY)
    #[arg(long)]
    strategy: Option<ResolveStrategy>,

    /// Merge overlapping slots of a musician before resolving
    #[arg(long)]
    merge_overlaps: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create the data directory and empty tables.
    Init,

    /// List registered musicians.
    Musicians,

    /// List the musicians assigned to a piece.
    Piece { title: String },

    /// Show the common windows of one piece.
    Windows {
        title: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the common windows of every piece.
    WindowsAll {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Register a musician.
    AddMusician {
        name: String,
        /// Instrument played (repeatable)
        #[arg(short, long = "instrument", required = true)]
        instruments: Vec<String>,
    },

    /// Replace what a musician wrote for one day, e.g. "17h-19h, 20h-21h".
    SetAvailability { name: String, day: Day, cell: String },

    /// Add a piece with its role assignments.
    AddPiece {
        title: String,
        /// Role assignment as ROLE=MUSICIAN (repeatable)
        #[arg(short, long = "role", value_parser = parse_assignment)]
        roles: Vec<(String, String)>,
    },
}

fn parse_assignment(text: &str) -> std::result::Result<(String, String), String> {
    let (role, musician) = text
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=MUSICIAN, got {text:?}"))?;
    Ok((role.trim().to_string(), musician.trim().to_string()))
}

fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // Load configuration, command line flags win
    let mut config = PlannerConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    config.merge_overlaps |= cli.merge_overlaps;

    // Initialize logging
    init_tracing(config.log_level)?;

    if let Command::Init = cli.command {
        schema::initialize_data_dir(&config.data_dir)?;
        return Ok(ExitCode::SUCCESS);
    }

    info!(data_dir = %config.data_dir.display(), "Opening session");
    let store = CsvStore::new(&config.data_dir);
    let mut planner = Planner::load(store, config.resolve_options())?;

    let outcome = match cli.command {
        Command::Init => Ok(()),
        Command::Musicians => {
            print!("{}", report::render_musicians(planner.musicians()));
            Ok(())
        }
        Command::Piece { title } => planner
            .musicians_for_piece(&title)
            .map(|musicians| print!("{}", report::render_lineup(&musicians))),
        Command::Windows { title, json } => planner.resolve_piece(&title).and_then(|piece| {
            if json {
                println!("{}", report::to_json(&piece)?);
            } else {
                print!("{}", report::render_piece(&piece));
            }
            Ok(())
        }),
        Command::WindowsAll { json } => {
            let pieces = planner.resolve_all();
            if json {
                println!("{}", report::to_json(&pieces)?);
            } else {
                print!("{}", report::render_pieces(&pieces));
            }
            Ok(())
        }
        Command::AddMusician { name, instruments } => planner.add_musician(&name, &instruments),
        Command::SetAvailability { name, day, cell } => planner
            .set_availability(&name, day, &cell)
            .map(|kept| println!("{} {}: {}", name.trim(), day, format_cell(&kept))),
        Command::AddPiece { title, roles } => planner.add_piece(&title, &roles).map(|piece| {
            println!("{} added with {} musician(s)", piece.title, piece.musicians.len())
        }),
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(
            err @ (RehearsalError::UnknownPiece(_)
            | RehearsalError::NotFound(_)
            | RehearsalError::Validation(_)),
        ) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
