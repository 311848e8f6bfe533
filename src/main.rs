//! Forgerank CLI
//!
//! Usage:
//!   forgerank --weight 225 --reps 5 --bodyweight 90          # Score one set (lb)
//!   forgerank --weight 100 --reps 5 --unit kg --rpe 9 --json  # JSON breakdown
//!   forgerank --e1rm 140 --bodyweight 80                      # Score a known e1RM
//!   forgerank --session s.json --bests b.json --bodyweight 80 # Rank progression
//!   forgerank --history all.json --exercise bench             # Rank history

use clap::Parser;
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use forgerank::error::ForgerankError;
use forgerank::types::{
    PreviousBests, ScoreBreakdown, ScoringInput, Sex, UnitSystem, WorkoutSession,
};
use forgerank::{detect_rank_progress_full, rank_history, score_forgerank, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "forgerank",
    version = VERSION,
    about = "Forgerank - explainable strength score and tier for a logged set",
    long_about = "Forgerank turns a logged set into a 0-1000 strength score and one of\n\
                  seven tiers (Iron, Bronze, Silver, Gold, Platinum, Diamond, Mythic).\n\n\
                  Modes:\n  \
                  (default)   Score one set from --weight/--reps or --e1rm\n  \
                  --session   Detect rank-ups against --bests\n  \
                  --history   Per-day rank history for --exercise\n\n\
                  Set RUST_LOG=debug to see guardrail decisions."
)]
struct Args {
    /// Exercise identifier
    #[arg(short, long, default_value = "lift")]
    exercise: String,

    /// Working-set weight (in --unit)
    #[arg(short, long, default_value_t = 0.0)]
    weight: f64,

    /// Working-set reps
    #[arg(short, long, default_value_t = 1)]
    reps: u32,

    /// Perceived effort, 5-10 (default 8.5)
    #[arg(long)]
    rpe: Option<f64>,

    /// Weight unit: lb or kg
    #[arg(short, long, default_value = "lb")]
    unit: UnitSystem,

    /// Bodyweight in kg
    #[arg(short, long)]
    bodyweight: Option<f64>,

    /// Score a precomputed e1RM (kg) instead of a set, as a single at RPE 10
    #[arg(long, conflicts_with_all = ["weight", "reps", "rpe", "unit"])]
    e1rm: Option<f64>,

    /// Previous best e1RM in kg (enables PR and jump checks)
    #[arg(long)]
    prev_best: Option<f64>,

    /// Sessions with this exercise in the last 14 days
    #[arg(long)]
    sessions: Option<u32>,

    /// male, female or unspecified
    #[arg(long, default_value = "unspecified")]
    sex: Sex,

    /// Completed session JSON (progression mode)
    #[arg(long, requires = "bests")]
    session: Option<String>,

    /// Previous bests JSON object: {"exercise_id": e1rm_kg}
    #[arg(long)]
    bests: Option<String>,

    /// Session history JSON array (history mode)
    #[arg(long, conflicts_with = "session")]
    history: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show every breakdown term
    #[arg(long)]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let result = if let Some(ref path) = args.session {
        run_progression(path, &args)
    } else if let Some(ref path) = args.history {
        run_history(path, &args)
    } else {
        run_single(&args);
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Build the scoring input for single-set mode.
/// A known e1RM is always scored as a single at RPE 10.
fn single_input(args: &Args) -> ScoringInput {
    let (weight, reps, rpe, unit) = match args.e1rm {
        Some(_) => (0.0, 1, Some(10.0), UnitSystem::Kilograms),
        None => (args.weight, args.reps, args.rpe, args.unit),
    };
    ScoringInput {
        exercise_id: args.exercise.clone(),
        weight,
        reps,
        rpe,
        unit,
        bodyweight_kg: args.bodyweight,
        e1rm_kg: args.e1rm,
        previous_best_e1rm_kg: args.prev_best,
        sessions_in_last_14_days: args.sessions,
        sex: args.sex,
    }
}

/// Score a single set (or a known e1RM)
fn run_single(args: &Args) {
    let breakdown = score_forgerank(&single_input(args));

    if args.json {
        print_json(&breakdown);
    } else if args.verbose {
        print_verbose(&breakdown, args.no_color);
    } else if args.no_color {
        println!("{}", breakdown.to_parseable_string());
    } else {
        println!("{}", breakdown.to_terminal_string());
    }
}

/// Detect rank-ups for a completed session
fn run_progression(path: &str, args: &Args) -> Result<(), ForgerankError> {
    let session: WorkoutSession = load_json(path)?;
    let bests: Option<PreviousBests> = match args.bests {
        Some(ref bests_path) => Some(load_json(bests_path)?),
        None => None,
    };

    let records = detect_rank_progress_full(&session, bests.as_ref(), args.bodyweight);

    if args.json {
        print_json(&records);
        return Ok(());
    }
    if records.is_empty() {
        println!("No exercise beat its previous best.");
    }
    for record in &records {
        if args.no_color {
            println!("{}", record.to_parseable_string());
        } else {
            println!("{}", record.to_terminal_string());
        }
    }
    Ok(())
}

/// Print per-day rank history for one exercise
fn run_history(path: &str, args: &Args) -> Result<(), ForgerankError> {
    let sessions: Vec<WorkoutSession> = load_json(path)?;
    let history = rank_history(&sessions, &args.exercise, args.bodyweight);

    if args.json {
        print_json(&history);
        return Ok(());
    }
    for point in &history {
        println!(
            "{} | e1RM={:.1}kg | score={} | {}",
            point.date,
            point.e1rm_kg,
            point.score,
            point.tier.name().color(point.tier.color())
        );
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, ForgerankError> {
    let text = std::fs::read_to_string(Path::new(path)).map_err(|source| ForgerankError::CannotRead {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ForgerankError::InvalidJson {
        path: path.to_string(),
        source,
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("cannot serialize output: {}", e),
    }
}

/// Print the full breakdown, one term per line
fn print_verbose(breakdown: &ScoreBreakdown, no_color: bool) {
    println!("┌─────────────────────────────────────────────");
    if no_color {
        println!("│ {}", breakdown.to_parseable_string());
    } else {
        println!("│ {}", breakdown.to_terminal_string());
    }
    println!("├─────────────────────────────────────────────");
    for part in &breakdown.parts {
        let delta = format!("{:+5}", part.delta);
        let delta = if part.delta < 0 { delta.red() } else { delta.green() };
        println!("│ {} {:<28} {}", delta, part.reason.description(), part.note.dimmed());
    }
    if breakdown.is_capped() {
        println!("├─────────────────────────────────────────────");
        println!(
            "│ {} raw {} capped to {}",
            "capped:".yellow(),
            breakdown.raw_total(),
            breakdown.total
        );
    }
    for flag in &breakdown.flags {
        println!("│ {} {}", "!".yellow(), flag);
    }
    if let Some((next, points)) = breakdown.points_to_next_tier() {
        println!("│ {} pts to {}", points, next.name().color(next.color()));
    }
    println!("└─────────────────────────────────────────────");
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgerank::score_from_e1rm;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("forgerank").chain(argv.iter().copied()))
    }

    #[test]
    fn test_e1rm_rejects_set_flags() {
        assert!(parse(&["--e1rm", "140", "--rpe", "8"]).is_err());
        assert!(parse(&["--e1rm", "140", "--reps", "5"]).is_err());
        assert!(parse(&["--e1rm", "140", "--weight", "100"]).is_err());
        assert!(parse(&["--e1rm", "140", "--prev-best", "130"]).is_ok());
    }

    #[test]
    fn test_e1rm_scored_as_single_with_or_without_context() {
        let plain = parse(&["--e1rm", "140", "--bodyweight", "80"]).unwrap();
        let input = single_input(&plain);
        assert_eq!((input.reps, input.rpe, input.unit), (1, Some(10.0), UnitSystem::Kilograms));
        assert_eq!(
            score_forgerank(&input),
            score_from_e1rm("lift", 140.0, Some(80.0), Sex::Unspecified)
        );

        let with_prev = parse(&["--e1rm", "140", "--bodyweight", "80", "--prev-best", "130"]).unwrap();
        let input = single_input(&with_prev);
        assert_eq!((input.reps, input.rpe), (1, Some(10.0)));
        assert_eq!(input.previous_best_e1rm_kg, Some(130.0));
    }

    #[test]
    fn test_set_flags_pass_through() {
        let args = parse(&["--weight", "225", "--reps", "5", "--rpe", "8.5", "--bodyweight", "90"]).unwrap();
        let input = single_input(&args);
        assert_eq!(input.unit, UnitSystem::Pounds);
        assert_eq!(score_forgerank(&input).total, 415);
    }
}
