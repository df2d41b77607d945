//! Procedural floor generation: room placement, corridor carving, wall
//! inference, template overlay, stair placement and a final reachability pass.

mod connectivity;
mod generator;
mod layout;
mod model;
mod stamping;
mod walls;

pub use connectivity::reachable_tiles;
pub use generator::{DungeonGenerator, generate_floor};
pub use model::{GeneratedFloor, PlacedTemplate, Room};
