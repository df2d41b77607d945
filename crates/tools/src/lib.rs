//! Shared plumbing for the developer binaries: logging setup, config loading
//! and a seeded source of random player input.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;

use anyhow::{Context, Result};
use delve_core::SessionConfig;
use delve_core::input::{InputSnapshot, Key};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info,delve_core=debug";

static TRACING_INIT: Once = Once::new();

/// Installs the stderr subscriber. `RUST_LOG` wins over the default filter;
/// only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(true)
            .compact();
        let _ = subscriber.try_init();
    });
}

/// Reads and validates a TOML session config, or returns the stock config
/// when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config = SessionConfig::from_toml_str(&source)
        .with_context(|| format!("invalid session config: {}", path.display()))?;
    Ok(config)
}

const SCRIPT_KEYS: [Option<Key>; 8] = [
    Some(Key::KeyW),
    Some(Key::KeyA),
    Some(Key::KeyS),
    Some(Key::KeyD),
    Some(Key::ArrowRight),
    Some(Key::ArrowDown),
    Some(Key::Space),
    None,
];

/// Holds a random key (or nothing) for a random run of ticks, the way a
/// player leans on a direction.
pub struct RandomInput {
    rng: ChaCha8Rng,
    held: Option<Key>,
    remaining: u64,
}

impl RandomInput {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), held: None, remaining: 0 }
    }

    pub fn next_snapshot(&mut self) -> InputSnapshot {
        if self.remaining == 0 {
            let index = (self.rng.next_u64() % SCRIPT_KEYS.len() as u64) as usize;
            self.held = SCRIPT_KEYS[index];
            self.remaining = 5 + self.rng.next_u64() % 25;
            return self.held.map_or_else(InputSnapshot::idle, InputSnapshot::holding);
        }
        self.remaining -= 1;
        match self.held {
            Some(key) => InputSnapshot::idle().with_down(key),
            None => InputSnapshot::idle(),
        }
    }
}
