//! Turns a freshly generated floor into rosters: template spawns first, then
//! the random per-room enemies and items.

use tracing::{debug, info, warn};

use super::*;
use crate::content;
use crate::templates::SpawnKind;

/// Tries per entity to find a free tile in its room before giving up.
const SPAWN_ATTEMPTS: usize = 8;

impl Session {
    pub(super) fn populate_floor(&mut self, template_spawns: &[EntitySpawn]) {
        for spawn in template_spawns {
            self.install_template_spawn(spawn);
        }
        self.spawn_room_enemies();
        self.spawn_room_items();
        debug!(
            floor = self.level.floor,
            enemies = self.enemies.len(),
            items = self.items.len(),
            "floor populated"
        );
    }

    fn install_template_spawn(&mut self, spawn: &EntitySpawn) {
        if spawn.kind == SpawnKind::Npc {
            return;
        }
        if !self.level.map.is_walkable_at(spawn.pos) {
            warn!(
                kind = ?spawn.kind,
                x = spawn.pos.x,
                y = spawn.pos.y,
                "template spawn dropped, tile is off-grid or not walkable"
            );
            return;
        }
        let floor = self.level.floor;
        match spawn.kind {
            SpawnKind::Boss => {
                let name = content::boss_name(&mut self.rng);
                let boss = Enemy::boss(name, floor, spawn.pos, self.config.boss, &self.level.map);
                info!(
                    name = boss.name(),
                    floor,
                    health = boss.stats().max_health(),
                    attack = boss.stats().attack(),
                    defense = boss.stats().defense(),
                    "boss spawned"
                );
                self.enemies.insert(boss);
            }
            SpawnKind::Enemy(kind) => {
                let enemy = Enemy::regular(kind, spawn.pos, self.config.enemy, &self.level.map);
                self.enemies.insert(enemy);
            }
            SpawnKind::Item(kind) => {
                self.items.insert(Item::new(kind, spawn.pos, &self.level.map));
            }
            SpawnKind::Npc => {}
        }
    }

    /// Every room but the start room gets the same number of regular enemies.
    fn spawn_room_enemies(&mut self) {
        let floor = self.level.floor;
        let per_room = content::enemies_per_room(self.rng.range_usize(1, 2), floor);
        for room_index in 1..self.level.rooms.len() {
            for _ in 0..per_room {
                let kind = content::roll_enemy_kind(floor, &mut self.rng);
                let Some(tile) = self.find_spawn_tile(room_index) else {
                    continue;
                };
                let enemy = Enemy::regular(kind, tile, self.config.enemy, &self.level.map);
                self.enemies.insert(enemy);
            }
        }
    }

    fn spawn_room_items(&mut self) {
        let floor = self.level.floor;
        for room_index in 1..self.level.rooms.len() {
            if !self.rng.chance(content::ITEM_SPAWN_CHANCE) {
                continue;
            }
            let kind = content::roll_item_kind(floor, &mut self.rng);
            if let Some(tile) = self.find_spawn_tile(room_index) {
                self.items.insert(Item::new(kind, tile, &self.level.map));
            }
        }
    }

    fn find_spawn_tile(&mut self, room_index: usize) -> Option<Pos> {
        let room = self.level.rooms.get(room_index)?;
        let (left, top, right, bottom) = (room.x, room.y, room.right(), room.bottom());
        for _ in 0..SPAWN_ATTEMPTS {
            let y = self.rng.range_i32(top, bottom);
            let x = self.rng.range_i32(left, right);
            let tile = Pos { y, x };
            if self.level.map.is_walkable_at(tile) && !self.is_spawn_tile_taken(tile) {
                return Some(tile);
            }
        }
        None
    }

    fn is_spawn_tile_taken(&self, tile: Pos) -> bool {
        tile == self.level.start
            || self.enemies.values().any(|enemy| enemy.tile() == tile)
            || self.items.values().any(|item| item.tile() == tile)
    }
}
