use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use delve_core::mapgen::{GeneratedFloor, Room};
use delve_core::session::{Session, SessionHooks, TickOutcome};
use delve_core::templates::EntitySpawn;
use delve_core::{Pos, SessionConfig, TemplateCatalog, generate_floor};
use serde::Serialize;
use tools::{RandomInput, init_tracing, load_config};
use tracing::info;

const TICK_MS: f64 = 1000.0 / 60.0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML session config; stock values when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one floor and print it as ASCII
    Map {
        /// Run seed; defaults to the config seed
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, default_value_t = 1)]
        floor: u32,
        /// Emit a JSON report instead of the ASCII grid
        #[arg(long)]
        json: bool,
    },
    /// Play a headless session on random input and print a summary
    Simulate {
        /// Run seed; defaults to the config seed
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, default_value_t = 3_600)]
        ticks: u32,
        /// Seed for the random input script
        #[arg(long, default_value_t = 42)]
        input_seed: u64,
    },
}

#[derive(Serialize)]
struct FloorReport<'a> {
    seed: u64,
    floor: u32,
    width: usize,
    height: usize,
    rows: Vec<&'a str>,
    rooms: &'a [Room],
    start: Pos,
    stairs_down: Pos,
    stairs_up: Option<Pos>,
    template_spawns: &'a [EntitySpawn],
    repaired_links: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Map { seed, floor, json } => {
            let seed = seed.unwrap_or(config.seed);
            let catalog = TemplateCatalog::builtin();
            let generated = generate_floor(&catalog, config.map, seed, floor);
            if json {
                print_floor_json(seed, &generated)?;
            } else {
                print_floor_ascii(seed, &generated);
            }
        }
        Command::Simulate { seed, ticks, input_seed } => {
            let mut config = config;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            simulate(config, ticks, input_seed)?;
        }
    }
    Ok(())
}

fn print_floor_ascii(seed: u64, generated: &GeneratedFloor) {
    println!("Seed: {seed}  Floor: {}", generated.floor);
    println!(
        "Rooms: {} ({} templated)  Reconnected: {}",
        generated.rooms.len(),
        generated.templated_rooms().count(),
        generated.repaired_links
    );
    println!(
        "Start: ({}, {})  Down: ({}, {})",
        generated.start.x, generated.start.y, generated.stairs_down.x, generated.stairs_down.y
    );
    print!("{}", generated.map.render_ascii());
}

fn print_floor_json(seed: u64, generated: &GeneratedFloor) -> Result<()> {
    let ascii = generated.map.render_ascii();
    let report = FloorReport {
        seed,
        floor: generated.floor,
        width: generated.map.width(),
        height: generated.map.height(),
        rows: ascii.lines().collect(),
        rooms: &generated.rooms,
        start: generated.start,
        stairs_down: generated.stairs_down,
        stairs_up: generated.stairs_up,
        template_spawns: &generated.template_spawns,
        repaired_links: generated.repaired_links,
    };
    let json = serde_json::to_string_pretty(&report).context("failed to serialize floor report")?;
    println!("{json}");
    Ok(())
}

fn simulate(config: SessionConfig, ticks: u32, input_seed: u64) -> Result<()> {
    let seed = config.seed;
    let mut session = Session::new(config, TemplateCatalog::builtin(), SessionHooks::new())
        .context("failed to start session")?;
    let mut input = RandomInput::new(input_seed);
    session.on_enter();

    let mut played = 0;
    for _ in 0..ticks {
        played += 1;
        match session.update(TICK_MS, &input.next_snapshot()) {
            TickOutcome::GameOver { .. } | TickOutcome::Finished => break,
            TickOutcome::FloorChanged { floor } => info!(floor, "simulation changed floor"),
            TickOutcome::Inactive | TickOutcome::Paused | TickOutcome::Continued => {}
        }
    }
    session.on_exit();

    let progress = session.progress();
    println!("Simulation complete.");
    println!("Seed: {seed}");
    println!("Ticks: {played}");
    println!("Status: {:?}", session.status());
    println!("Floor: {} (deepest {})", progress.current_floor, progress.deepest_floor);
    println!("Kills: {}", progress.kills);
    println!("Score: {}", progress.score);
    let stats = session.player().stats();
    println!("Health: {}/{}", stats.health(), stats.max_health());
    println!("Snapshot Hash: {}", session.snapshot_hash());
    Ok(())
}
