//! Hand-authored room layouts, the catalog that serves them, and the floor
//! rules that decide when they appear.
//! The catalog is an ordinary value handed to the generator; nothing here is
//! global.

mod builtin;
mod catalog;
mod model;
mod rules;

pub use catalog::TemplateCatalog;
pub use model::{EntitySpawn, Rarity, RoomTemplate, SpawnKind, TemplateDraft};
pub use rules::FloorRules;
