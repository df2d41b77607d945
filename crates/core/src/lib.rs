pub mod combat;
pub mod config;
pub mod content;
pub mod entity;
pub mod error;
pub mod input;
pub mod map;
pub mod mapgen;
pub mod render;
pub mod rng;
pub mod session;
pub mod tables;
pub mod templates;
pub mod types;

pub use config::{MapConfig, PlayerConfig, SessionConfig};
pub use entity::{Enemy, Item, Player, Stats};
pub use error::{ConfigError, TemplateError};
pub use input::{InputSnapshot, InputSource, Key, MouseButton};
pub use map::{Tile, TileKind, Tilemap};
pub use mapgen::{DungeonGenerator, GeneratedFloor, Room, generate_floor};
pub use render::{Canvas, Color, Draw, ScreenOffset};
pub use rng::GameRng;
pub use session::{Session, SessionHooks, SessionStatus, TickOutcome};
pub use templates::{FloorRules, TemplateCatalog};
pub use types::*;
