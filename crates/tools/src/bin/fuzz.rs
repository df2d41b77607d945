use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use delve_core::session::{Session, SessionHooks, TickOutcome};
use delve_core::{GameRng, SessionConfig, TemplateCatalog};
use tools::{RandomInput, init_tracing, load_config};
use tracing::info;

const TICK_MS: f64 = 1000.0 / 60.0;
const DESCENT_SEED_MIX: u64 = 0xF022;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 20_000)]
    ticks: u32,
    /// Chance per tick of forcing a descent, to reach deeper floors quickly
    #[arg(long, default_value_t = 0.002)]
    descend_chance: f64,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = SessionConfig { seed: args.seed, ..load_config(args.config.as_deref())? };

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut session = Session::new(config, TemplateCatalog::builtin(), SessionHooks::new())?;
    let mut input = RandomInput::new(args.seed);
    let mut rng = descent_rng(args.seed);
    session.on_enter();

    let mut runs = 1;
    for tick in 0..args.ticks {
        let outcome = session.update(TICK_MS, &input.next_snapshot());
        check_invariants(&session, tick)?;

        match outcome {
            TickOutcome::GameOver { score } => {
                info!(score, tick, "run ended, restarting");
                session.on_exit();
                session.on_enter();
                runs += 1;
            }
            TickOutcome::Continued if rng.chance(args.descend_chance) => {
                session.descend();
                check_invariants(&session, tick)?;
            }
            _ => {}
        }
    }

    let progress = session.progress();
    println!(
        "Fuzz finished: {} runs, floor {} (deepest {}), hash {}",
        runs,
        progress.current_floor,
        progress.deepest_floor,
        session.snapshot_hash()
    );
    Ok(())
}

/// Separate stream for forced descents so they don't perturb the input script.
fn descent_rng(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed ^ DESCENT_SEED_MIX)
}

fn check_invariants(session: &Session, tick: u32) -> Result<()> {
    let map = session.map();
    let stats = session.player().stats();
    ensure!(
        (0..=stats.max_health()).contains(&stats.health()),
        "tick {tick}: player health {} outside 0..={}",
        stats.health(),
        stats.max_health()
    );
    ensure!(
        map.is_walkable_at(session.player().tile()),
        "tick {tick}: player stands on a blocked tile"
    );
    for (_, enemy) in session.enemies() {
        let stats = enemy.stats();
        ensure!(!stats.is_dead(), "tick {tick}: dead {} left in the roster", enemy.name());
        ensure!(stats.health() <= stats.max_health(), "tick {tick}: enemy over max health");
        ensure!(map.is_walkable_at(enemy.tile()), "tick {tick}: {} inside a wall", enemy.name());
    }
    for (_, item) in session.items() {
        ensure!(map.in_bounds(item.tile().x, item.tile().y), "tick {tick}: item off the grid");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descent_schedule(seed: u64, chance: f64) -> Vec<bool> {
        let mut rng = descent_rng(seed);
        (0..200).map(|_| rng.chance(chance)).collect()
    }

    #[test]
    fn forced_descents_follow_the_seed() {
        assert_eq!(descent_schedule(42, 0.1), descent_schedule(42, 0.1));
        assert!(descent_schedule(42, 0.0).iter().all(|descend| !descend));
        assert!(descent_schedule(42, 1.0).iter().all(|descend| *descend));
    }
}
