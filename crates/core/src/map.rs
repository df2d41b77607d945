//! Tile values and the per-floor grid that owns them.

mod tile;
mod tilemap;

pub use tile::{Tile, TileKind};
pub use tilemap::Tilemap;
