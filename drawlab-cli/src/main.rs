//! DrawLab CLI — weighted prize draw.
//!
//! Commands:
//! - `run` — interactive draw: collect participants, show odds, optionally
//!   simulate fairness, draw winners, append a log record
//! - `draw` — non-interactive draw from a TOML roster file
//! - `odds` — print the theoretical odds table for a roster
//! - `simulate` — run the fairness simulation against a roster
//!
//! Input validation lives entirely here: bad interactive entries are
//! recovered by re-prompting and never reach the core.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use drawlab_core::{
    compute_odds, draw_without_replacement, simulate, OddsLine, Participant, Roster, SeedTree,
    SimulationReport,
};

#[derive(Parser)]
#[command(name = "drawlab", about = "DrawLab CLI — weighted prize draw")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive draw: prompts for participants and winner count.
    Run {
        /// Roster TOML file. Skips the participant prompts.
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Number of winners. Skips the winner-count prompt.
        #[arg(long)]
        winners: Option<usize>,

        /// Master seed for a reproducible draw. Defaults to a random seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Run the fairness simulation without asking.
        #[arg(long, default_value_t = false)]
        simulate: bool,

        /// Trial count for the fairness simulation.
        #[arg(long, default_value_t = 1000)]
        trials: u64,

        /// Log file to append the draw record to.
        #[arg(long, default_value = "draw_log.txt")]
        log: PathBuf,

        /// Emit the draw record as JSON on stdout instead of the banner.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Non-interactive draw from a roster file.
    Draw {
        /// Roster TOML file.
        #[arg(long)]
        roster: PathBuf,

        /// Number of winners to draw.
        #[arg(long)]
        winners: usize,

        /// Master seed for a reproducible draw. Defaults to a random seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Log file to append the draw record to.
        #[arg(long, default_value = "draw_log.txt")]
        log: PathBuf,

        /// Emit the draw record as JSON on stdout instead of the banner.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the theoretical odds table for a roster.
    Odds {
        /// Roster TOML file.
        #[arg(long)]
        roster: PathBuf,
    },
    /// Run the fairness simulation against a roster.
    Simulate {
        /// Roster TOML file.
        #[arg(long)]
        roster: PathBuf,

        /// Trial count.
        #[arg(long, default_value_t = 1000)]
        trials: u64,

        /// Master seed. Defaults to a random seed.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Machine-readable record of one completed draw (also the `--json` output).
#[derive(Debug, Serialize)]
struct DrawRecord {
    drawn_at: String,
    master_seed: u64,
    participants: Vec<Participant>,
    winners: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            roster,
            winners,
            seed,
            simulate,
            trials,
            log,
            json,
        } => run_interactive(roster, winners, seed, simulate, trials, &log, json),
        Commands::Draw {
            roster,
            winners,
            seed,
            log,
            json,
        } => run_draw(&roster, winners, seed, &log, json),
        Commands::Odds { roster } => run_odds(&roster),
        Commands::Simulate {
            roster,
            trials,
            seed,
        } => run_simulate(&roster, trials, seed),
    }
}

// ─── Commands ────────────────────────────────────────────────────────

fn run_interactive(
    roster_path: Option<PathBuf>,
    winners_arg: Option<usize>,
    seed: Option<u64>,
    simulate_flag: bool,
    trials: u64,
    log_path: &Path,
    json: bool,
) -> Result<()> {
    if !json {
        println!("=== Weighted Prize Draw ===");
    }

    let roster = match roster_path {
        Some(path) => load_roster(&path)?,
        None => prompt_participants()?,
    };

    let winner_count = match winners_arg {
        Some(n) if n >= 1 => n,
        Some(_) => bail!("--winners must be at least 1"),
        None => prompt_winner_count()?,
    };

    let master_seed = seed.unwrap_or_else(rand::random);
    let seeds = SeedTree::new(master_seed);

    let run_simulation = simulate_flag
        || (!json && prompt_yes_no("\nRun quick fairness simulation first? (y/n): ")?);
    if run_simulation {
        let report = simulate(&roster, trials, &mut seeds.rng_for("simulation"))?;
        print_simulation(&report);
    } else if !json {
        println!("Skipping simulation.\n");
    }

    if !json {
        print_odds(&compute_odds(&roster));
        println!("Drawing winners...\n");
    }

    let winners = draw_without_replacement(&roster, winner_count, &mut seeds.rng_for("draw"));
    let record = make_record(&roster, winners, master_seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        announce_winners(&record.winners, true);
    }

    append_log(log_path, &record)
        .with_context(|| format!("failed to append to log file {}", log_path.display()))?;
    if !json {
        println!("\nResults logged to '{}'", log_path.display());
        prompt_exit()?;
    }

    Ok(())
}

fn run_draw(
    roster_path: &Path,
    winner_count: usize,
    seed: Option<u64>,
    log_path: &Path,
    json: bool,
) -> Result<()> {
    if winner_count < 1 {
        bail!("--winners must be at least 1");
    }
    let roster = load_roster(roster_path)?;

    let master_seed = seed.unwrap_or_else(rand::random);
    let seeds = SeedTree::new(master_seed);

    let winners = draw_without_replacement(&roster, winner_count, &mut seeds.rng_for("draw"));
    let record = make_record(&roster, winners, master_seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_odds(&compute_odds(&roster));
        announce_winners(&record.winners, false);
    }

    append_log(log_path, &record)
        .with_context(|| format!("failed to append to log file {}", log_path.display()))?;
    if !json {
        println!("\nResults logged to '{}'", log_path.display());
    }

    Ok(())
}

fn run_odds(roster_path: &Path) -> Result<()> {
    let roster = load_roster(roster_path)?;
    print_odds(&compute_odds(&roster));
    Ok(())
}

fn run_simulate(roster_path: &Path, trials: u64, seed: Option<u64>) -> Result<()> {
    let roster = load_roster(roster_path)?;

    let master_seed = seed.unwrap_or_else(rand::random);
    let seeds = SeedTree::new(master_seed);

    let report = simulate(&roster, trials, &mut seeds.rng_for("simulation"))?;
    print_simulation(&report);
    println!("(master seed: {master_seed})");
    Ok(())
}

// ─── Interactive prompts ─────────────────────────────────────────────

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        bail!("input stream closed");
    }
    Ok(buf.trim().to_string())
}

fn prompt_participants() -> Result<Roster> {
    let mut roster = Roster::new();
    loop {
        let name = read_line("Enter participant name (or 'done' to finish): ")?;
        if name.is_empty() {
            println!("Name cannot be blank.");
            continue;
        }
        if name.eq_ignore_ascii_case("done") {
            if roster.is_empty() {
                println!("You must enter at least one participant before finishing.");
                continue;
            }
            break;
        }

        let weight_input = read_line(&format!("How many entries for {name}? "))?;
        let weight: u64 = match weight_input.parse() {
            Ok(w) => w,
            Err(_) => {
                println!("Please enter a valid integer.");
                continue;
            }
        };

        if let Err(err) = roster.add(name, weight) {
            println!("{err}");
        }
    }
    Ok(roster)
}

fn prompt_winner_count() -> Result<usize> {
    loop {
        let input = read_line("How many winners to draw? ")?;
        match input.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            Ok(_) => println!("Must draw at least one winner."),
            Err(_) => println!("Enter a whole number."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        match read_line(prompt)?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'."),
        }
    }
}

fn prompt_exit() -> Result<()> {
    loop {
        let input = read_line("\nType 'exit' and press Enter to close the program: ")?;
        if input.eq_ignore_ascii_case("exit") {
            println!("Exiting program. Goodbye!");
            return Ok(());
        }
        println!("Invalid input. Please type 'exit' to close.");
    }
}

// ─── Output ──────────────────────────────────────────────────────────

fn print_odds(odds: &[OddsLine]) {
    println!("\n=== Odds of Winning ===");
    for line in odds {
        println!("{:<12} -> {:>6.2}%", line.name, line.percent);
    }
    println!("========================\n");
}

fn print_simulation(report: &SimulationReport) {
    println!(
        "\nSimulated win rates (approximation from {} draws):",
        report.trials
    );
    for rate in &report.rates {
        println!(
            "{:<12} -> {:>6.2}%  (expected {:>6.2}%)",
            rate.name, rate.observed_pct, rate.expected_pct
        );
    }
    println!("========================\n");
}

fn announce_winners(winners: &[String], dramatic: bool) {
    if winners.is_empty() {
        println!("No winners selected.");
        return;
    }
    for (i, winner) in winners.iter().enumerate() {
        if dramatic {
            std::thread::sleep(Duration::from_secs(2));
        }
        println!("Winner {}: {}", i + 1, winner);
    }
    println!("\nAll winners have been drawn.");
}

// ─── Roster loading and logging ──────────────────────────────────────

fn load_roster(path: &Path) -> Result<Roster> {
    let roster = Roster::from_file(path)
        .with_context(|| format!("failed to load roster from {}", path.display()))?;
    if roster.is_empty() {
        bail!("roster file {} contains no participants", path.display());
    }
    Ok(roster)
}

fn make_record(roster: &Roster, winners: Vec<String>, master_seed: u64) -> DrawRecord {
    DrawRecord {
        drawn_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        master_seed,
        participants: roster.participants().to_vec(),
        winners,
    }
}

/// Append a human-readable record of the draw. Free-form text, not meant
/// for machine parsing (use `--json` for that).
fn append_log(path: &Path, record: &DrawRecord) -> Result<()> {
    let mut block = String::new();
    block.push_str(&format!("\n=== Draw at {} ===\n", record.drawn_at));
    block.push_str(&format!("Seed: {}\n", record.master_seed));
    block.push_str("Participants:\n");
    for p in &record.participants {
        block.push_str(&format!("  - {}: {}\n", p.name, p.weight));
    }
    block.push_str("Winners:\n");
    for (i, winner) in record.winners.iter().enumerate() {
        block.push_str(&format!("  Winner {}: {}\n", i + 1, winner));
    }
    block.push_str("=============================================\n");

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(block.as_bytes())?;
    Ok(())
}
