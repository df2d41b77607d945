pub mod app_loop;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Once;

use delve_core::SessionConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "Delve";
/// Optional config read from the working directory at startup.
pub const CONFIG_FILE: &str = "delve.toml";

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).compact().try_init();
    });
}

/// Loads `path` when it exists. A missing file means stock settings; a
/// broken one is reported and also falls back to stock settings so the game
/// still starts.
pub fn load_session_config(path: &Path) -> SessionConfig {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) if error.kind() == ErrorKind::NotFound => return SessionConfig::default(),
        Err(error) => {
            warn!(path = %path.display(), %error, "could not read config, using defaults");
            return SessionConfig::default();
        }
    };
    match SessionConfig::from_toml_str(&source) {
        Ok(config) => {
            info!(path = %path.display(), seed = config.seed, "loaded config");
            config
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "invalid config, using defaults");
            SessionConfig::default()
        }
    }
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
