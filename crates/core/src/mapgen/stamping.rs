//! Template overlay: picks boss and treasure templates for a floor and stamps
//! them over accepted rooms.

use tracing::{debug, warn};

use crate::map::{Tile, Tilemap};
use crate::rng::GameRng;
use crate::templates::{EntitySpawn, FloorRules, Rarity, RoomTemplate, TemplateCatalog};
use crate::types::Pos;

use super::model::{PlacedTemplate, Room};

pub(super) struct OverlayContext<'a> {
    pub(super) catalog: &'a TemplateCatalog,
    pub(super) floor: u32,
    pub(super) rules: FloorRules,
}

/// Applies the floor's template policy and returns every template spawn in
/// world tile coordinates.
pub(super) fn apply_template_overlay(
    map: &mut Tilemap,
    rooms: &mut [Room],
    context: &OverlayContext<'_>,
    rng: &mut GameRng,
) -> Vec<EntitySpawn> {
    let mut spawns = Vec::new();
    let mut stamped = 0_usize;

    if context.rules.boss_room && rooms.len() >= 3 {
        let candidates = context.catalog.templates_for_floor(context.floor, Some(Rarity::Boss));
        match TemplateCatalog::select_random(rng, &candidates) {
            Some(template) => {
                let last_index = rooms.len() - 1;
                spawns.extend(stamp_template(map, &mut rooms[last_index], template));
                stamped += 1;
            }
            None => warn!(floor = context.floor, "no boss template available for floor"),
        }
    }

    if stamped < context.rules.max_template_rooms
        && context.rules.treasure_chance > 0.0
        && rng.chance(context.rules.treasure_chance)
    {
        let index = (rooms.len() / 2) as i64 + i64::from(rng.range_i32(0, 1)) - 1;
        // Room 0 holds the start position and is never replaced by a treasure room.
        let usable = index >= 1
            && (index as usize) < rooms.len()
            && !rooms[index as usize].is_template();
        if !usable {
            debug!(floor = context.floor, index, "treasure slot skipped");
            return spawns;
        }
        let candidates = context.catalog.templates_for_floor(context.floor, Some(Rarity::Rare));
        match TemplateCatalog::select_random(rng, &candidates) {
            Some(template) => {
                spawns.extend(stamp_template(map, &mut rooms[index as usize], template));
            }
            None => warn!(floor = context.floor, "no treasure template available for floor"),
        }
    }

    spawns
}

/// Centers `template` on `room`, copies its tiles into the grid and returns
/// its spawns translated to world coordinates. The template may overflow the
/// room; writes outside the grid are dropped by the grid itself.
pub(super) fn stamp_template(
    map: &mut Tilemap,
    room: &mut Room,
    template: &RoomTemplate,
) -> Vec<EntitySpawn> {
    let origin = Pos {
        y: room.y + (room.height - template.height() as i32).div_euclid(2),
        x: room.x + (room.width - template.width() as i32).div_euclid(2),
    };
    for (local, kind) in template.cells() {
        map.set_at(local.offset(origin.x, origin.y), Tile::of(kind));
    }
    room.template = Some(PlacedTemplate {
        name: template.name().to_string(),
        rarity: template.rarity(),
        origin,
        entry: template.entry_point().offset(origin.x, origin.y),
        width: template.width() as i32,
        height: template.height() as i32,
    });
    debug!(template = template.name(), x = origin.x, y = origin.y, "stamped template");
    template.spawns().iter().map(|spawn| spawn.translated(origin)).collect()
}
