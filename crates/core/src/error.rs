//! Recoverable construction-time failures. Runtime policy fallbacks (blocked
//! moves, rejected rooms, empty template selections) are not errors and never
//! surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse session config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("map must be at least {minimum}x{minimum} tiles, got {width}x{height}")]
    MapTooSmall { width: usize, height: usize, minimum: usize },
    #[error("tile size must be positive")]
    ZeroTileSize,
    #[error("{who} move delay must be positive, got {value}")]
    NonPositiveMoveDelay { who: &'static str, value: f64 },
    #[error("player max health must be positive, got {0}")]
    NonPositiveMaxHealth(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template `{template}` has no rows")]
    Empty { template: String },
    #[error("template `{template}` row {row} has width {actual}, expected {expected}")]
    RaggedRow { template: String, row: usize, expected: usize, actual: usize },
    #[error("template `{template}` uses unknown tile code {code:?} at ({x}, {y})")]
    UnknownTileCode { template: String, code: char, x: usize, y: usize },
    #[error("template `{template}` places a spawn outside its bounds at ({x}, {y})")]
    SpawnOutOfBounds { template: String, x: i32, y: i32 },
    #[error("template `{template}` entry point ({x}, {y}) lies outside its bounds")]
    EntryOutOfBounds { template: String, x: i32, y: i32 },
    #[error("template `{template}` has min floor {min_floor} above max floor {max_floor}")]
    InvertedFloorRange { template: String, min_floor: u32, max_floor: u32 },
}
