use tracing::debug;

use crate::config::MapConfig;
use crate::map::{Tile, Tilemap};
use crate::rng::{GameRng, derive_floor_seed};
use crate::templates::{FloorRules, TemplateCatalog};

use super::connectivity::{Stairs, repair_connectivity};
use super::layout::place_rooms;
use super::model::GeneratedFloor;
use super::stamping::{OverlayContext, apply_template_overlay};
use super::walls::infer_walls;

/// Builds floors against an injected template catalog.
pub struct DungeonGenerator<'a> {
    catalog: &'a TemplateCatalog,
    map: MapConfig,
}

impl<'a> DungeonGenerator<'a> {
    pub fn new(catalog: &'a TemplateCatalog, map: MapConfig) -> Self {
        Self { catalog, map }
    }

    pub fn generate(&self, floor: u32, rng: &mut GameRng) -> GeneratedFloor {
        let mut map = Tilemap::new(self.map.width, self.map.height, self.map.tile_size);
        let layout = place_rooms(&mut map, rng);
        let requested = layout.requested;
        let mut rooms = layout.rooms;

        infer_walls(&mut map);

        let context =
            OverlayContext { catalog: self.catalog, floor, rules: FloorRules::for_floor(floor) };
        let template_spawns = apply_template_overlay(&mut map, &mut rooms, &context, rng);

        let start = rooms[0].center();
        let stairs_up = (floor > 1).then(|| {
            let pos = start.offset(1, 0);
            map.set_at(pos, Tile::stairs_up());
            pos
        });
        let stairs_down = rooms[rooms.len() - 1].center();
        map.set_at(stairs_down, Tile::stairs_down());

        let stairs = Stairs { up: stairs_up, down: stairs_down };
        let repaired_links = repair_connectivity(&mut map, &rooms, start, stairs, rng);

        debug!(
            floor,
            requested,
            accepted = rooms.len(),
            templates = rooms.iter().filter(|room| room.is_template()).count(),
            repaired_links,
            "generated floor"
        );

        GeneratedFloor {
            floor,
            map,
            rooms,
            start,
            stairs_down,
            stairs_up,
            template_spawns,
            repaired_links,
        }
    }

    /// Generates `floor` from its own derived seed, independent of any other
    /// floor of the run.
    pub fn generate_seeded(&self, run_seed: u64, floor: u32) -> GeneratedFloor {
        let mut rng = GameRng::seed_from_u64(derive_floor_seed(run_seed, floor));
        self.generate(floor, &mut rng)
    }
}

pub fn generate_floor(
    catalog: &TemplateCatalog,
    map: MapConfig,
    run_seed: u64,
    floor: u32,
) -> GeneratedFloor {
    DungeonGenerator::new(catalog, map).generate_seeded(run_seed, floor)
}
