//! Headless lander runner: flies one or more rounds with an autopilot and
//! prints a telemetry summary for each.
//!
//! Usage:
//!   cargo run -- --preset pad-approach --rounds 5 --seed 7
//!   RUST_LOG=rocket_lander=debug cargo run -- --config lander.json

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rocket_lander::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PilotKind {
    /// PID autopilot aiming for the pad
    Guidance,
    /// Touch nothing and fall
    Idle,
}

#[derive(Parser)]
#[command(name = "rocket-lander")]
#[command(about = "Fly the rocket lander simulation without a window")]
struct Args {
    /// Built-in parameter set (classic or pad-approach)
    #[arg(long, conflicts_with = "config")]
    preset: Option<Preset>,

    /// JSON config file with environment, spawn policy and seed
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for spawn randomness, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Who flies the rocket
    #[arg(long, value_enum, default_value_t = PilotKind::Guidance)]
    pilot: PilotKind,

    /// Number of flights; each new flight starts with a reset
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Give up on a flight after this many ticks
    #[arg(long, default_value_t = MAX_TICKS_PER_ROUND)]
    max_ticks: u64,

    /// Switch the debug overlay on and print it after each flight
    #[arg(long)]
    debug_overlay: bool,

    /// Print the resolved config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::preset(args.preset.unwrap_or(Preset::Classic)),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut pilot: Box<dyn Pilot> = match args.pilot {
        PilotKind::Guidance => Box::new(GuidanceSystem::new()),
        PilotKind::Idle => Box::new(IdlePilot),
    };
    let mut rocket = Rocket::new(config.environment, config.spawn, config.seed);
    let mut landed = 0;

    for round in 1..=args.rounds {
        if round > 1 {
            if rocket.status().is_flying() {
                rocket.reset();
            } else {
                let input = pilot.controls(rocket.state(), &rocket.environment);
                rocket.update(&input);
            }
        }

        let mut telemetry = Telemetry::new();
        let mut first_tick = true;
        while rocket.status().is_flying() && telemetry.ticks() < args.max_ticks {
            let mut input = pilot.controls(rocket.state(), &rocket.environment);
            input.toggle_debug = first_tick && args.debug_overlay && !rocket.debug_overlay();
            first_tick = false;
            rocket.update(&input);
            telemetry.collect_data(&rocket, &input);
        }

        let outcome = rocket
            .outcome_label()
            .unwrap_or_else(|| format!("Still flying after {} ticks", telemetry.ticks()));
        println!("Round {round}: {outcome}");
        println!("{}", telemetry.summary());
        if rocket.debug_overlay() {
            for line in readouts(rocket.state(), &rocket.environment) {
                println!("  [{:?}] {}", line.indicator, line);
            }
        }
        if rocket.status() == FlightStatus::Landed {
            landed += 1;
        }
    }

    println!("Landed {} of {} rounds", landed, args.rounds);
    Ok(())
}
