//! Quantum radar command line.
//!
//! `qradar play` runs a full game of quantum battleship; `qradar scan` runs
//! the detector on a single line given on the command line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qradar::{GameConfig, Line, LineScanner, QuantumBattleship, ScanCircuit, Verdict};

/// Interaction-free detection on a simulated interference circuit
#[derive(Parser, Debug)]
#[command(name = "qradar")]
#[command(about = "Find ships without looking at them")]
struct Cli {
    /// Verbose output (debug-level logs)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a full game of quantum battleship
    Play(PlayArgs),
    /// Scan a single line, e.g. `qradar scan 0,0,1,0`
    Scan(ScanArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Board width and height
    #[arg(long, env = "QRADAR_SIZE", default_value = "8")]
    size: usize,

    /// Ship lengths, comma separated
    #[arg(long, env = "QRADAR_SHIPS", value_delimiter = ',', default_value = "4,3,3,2")]
    ships: Vec<usize>,

    /// Seed for ship placement and sampling
    #[arg(long, env = "QRADAR_SEED")]
    seed: Option<u64>,

    /// Shots per scan (default: qubits + 1)
    #[arg(long, env = "QRADAR_SHOTS")]
    shots: Option<usize>,

    /// Print the final report as JSON instead of boards
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Cells of the line, 0 or 1, comma separated
    line: String,

    /// Shots per scan (default: qubits + 1)
    #[arg(long, env = "QRADAR_SHOTS")]
    shots: Option<usize>,

    /// Seed for sampling
    #[arg(long, env = "QRADAR_SEED")]
    seed: Option<u64>,

    /// Print the circuit before scanning
    #[arg(long)]
    draw: bool,

    /// Number of independent scans to run
    #[arg(long, default_value = "1")]
    repeat: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Play(args) => run_game(args),
        Command::Scan(args) => run_scan(args),
    }
}

fn run_game(args: PlayArgs) -> Result<()> {
    let config = GameConfig { size: args.size, ship_lengths: args.ships, seed: args.seed, shots: args.shots };
    let mut rng = config.rng();

    let game = QuantumBattleship::new(&config, &mut rng).context("failed to set up the board")?;
    info!("Welcome to Quantum Battleship!");
    info!(
        "Board size: {}x{}, ship cells to find: {} (from {} ships)",
        config.size,
        config.size,
        game.board().ship_count(),
        config.ship_lengths.len()
    );

    if let Some(first_row) = game.board().row(0) {
        println!("Using Quantum Circuit :");
        println!("{}", ScanCircuit::for_line(&first_row, config.shots)?);
    }

    let report = game.play(&mut rng).context("game aborted")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.hidden_board);
    println!("{}", report.after_scans);
    println!("Identified {} candidate(s) for classical probing.", report.candidates.len());
    println!("{}", report.candidate_view);
    println!("--- GAME OVER ---");
    println!("{}", report.final_board);
    println!("{}", report);
    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<()> {
    let line: Line = args.line.parse().context("could not parse the line")?;
    let scanner = match args.shots {
        Some(k) => LineScanner::with_shots(k),
        None => LineScanner::new(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.draw && !line.is_empty() {
        println!("{}", ScanCircuit::for_line(&line, args.shots)?);
    }

    let mut detections = 0;
    for i in 0..args.repeat {
        let report = scanner.scan_detailed(&line, &mut rng)?;
        if args.repeat == 1 {
            print!("{}", report);
        } else {
            info!(scan = i, verdict = %report.verdict(), zero_count = report.zero_count(), "scan");
        }
        if report.verdict() == Verdict::Detect {
            detections += 1;
        }
    }

    if args.repeat > 1 {
        println!("{} of {} scans reported DETECT for line {}", detections, args.repeat, line);
    }
    Ok(())
}
