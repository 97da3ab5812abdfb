// ABOUTME: Macro Protocol CLI - computes daily nutrition targets from the command line
// ABOUTME: Parses profile flags or JSON input, runs the lead gate, and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Headline only (macro breakdown stays locked)
//! macro-protocol calculate --sex male --age 30 --height 175 --weight 80 --activity light --goal cut
//!
//! # Unlock the breakdown with contact details
//! macro-protocol calculate --sex male --age 30 --height 175 --weight 80 \
//!     --activity light --goal cut --name "Yusuf" --email yusuf@example.com
//!
//! # JSON profile from stdin, JSON output
//! echo '{"sex":"female","ageYears":25,"heightCm":160,"weightKg":55,"activityLevel":"sedentary","goal":"bulk"}' \
//!     | macro-protocol calculate --input - --format json
//!
//! # List activity tiers
//! macro-protocol tiers
//! ```

mod commands;

use clap::{Args, Parser, Subcommand};
use macro_protocol::errors::{AppError, ErrorResponse};
use macro_protocol::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "macro-protocol",
    version,
    about = "Macro Protocol nutrition target calculator",
    long_about = "Computes maintenance calories, a goal-adjusted calorie target, and a protein-priority macro split."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a daily nutrition target
    Calculate(CalculateArgs),

    /// List activity tiers and their multipliers
    Tiers,
}

/// Profile values are taken as text so that bad input is reported by the engine
#[derive(Args)]
struct CalculateArgs {
    /// Read a JSON profile from a file, or `-` for stdin
    #[arg(long, conflicts_with_all = ["sex", "age", "height", "weight", "activity", "goal"])]
    input: Option<PathBuf>,

    /// Biological sex (male, female)
    #[arg(long)]
    sex: Option<String>,

    /// Age in whole years
    #[arg(long)]
    age: Option<String>,

    /// Height in centimeters
    #[arg(long)]
    height: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<String>,

    /// Activity tier (sedentary, light, moderate, active, athlete)
    #[arg(long)]
    activity: Option<String>,

    /// Goal (cut, maintain, bulk)
    #[arg(long)]
    goal: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Name for the lead form
    #[arg(long, requires = "email")]
    name: Option<String>,

    /// E-mail for the lead form
    #[arg(long, requires = "name")]
    email: Option<String>,

    /// Main struggle (low_energy, belly_fat, inconsistent_routine, addiction_recovery)
    #[arg(long, requires = "email")]
    struggle: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match cli.command {
        Command::Calculate(args) => commands::calculate(args),
        Command::Tiers => commands::tiers(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

fn report(error: AppError) -> ExitCode {
    let code = u8::try_from(error.code.exit_code()).unwrap_or(1);
    let response = ErrorResponse::from(error);
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => eprintln!("{}: {e}", response.error.message),
    }
    ExitCode::from(code)
}
