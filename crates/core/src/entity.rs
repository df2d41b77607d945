//! Stats and positioned bodies for the player, enemies, bosses and floor
//! items.

mod actor;
mod enemy;
mod item;
mod player;
mod stats;

pub use actor::{Appearance, Entity};
pub use enemy::{Enemy, Foe};
pub use item::{Item, ItemEffect, StatKind};
pub use player::Player;
pub use stats::Stats;
