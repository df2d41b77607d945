use crate::map::Tilemap;
use crate::render::Color;
use crate::types::{Pos, WorldPos};

use super::stats::Stats;

/// Cosmetic attributes. Nothing in the simulation reads these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: Color,
    pub size: f32,
}

/// A positioned combatant. The tile position is authoritative; the world
/// position is a cache refreshed on every tile change.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    tile: Pos,
    world: WorldPos,
    stats: Stats,
    appearance: Appearance,
}

impl Entity {
    pub fn new(tile: Pos, stats: Stats, appearance: Appearance, map: &Tilemap) -> Self {
        Self { tile, world: map.tile_to_world(tile.x, tile.y), stats, appearance }
    }

    pub fn tile(&self) -> Pos {
        self.tile
    }

    pub fn world(&self) -> WorldPos {
        self.world
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_tile_position(&mut self, tile: Pos, map: &Tilemap) {
        self.tile = tile;
        self.world = map.tile_to_world(tile.x, tile.y);
    }

    /// Relative step that only commits when the destination is walkable.
    pub fn move_by(&mut self, dx: i32, dy: i32, map: &Tilemap) -> bool {
        let destination = self.tile.offset(dx, dy);
        if !map.is_walkable_at(destination) {
            return false;
        }
        self.set_tile_position(destination, map);
        true
    }

    /// Strikes `target` with this entity's attack; mitigation is the
    /// target's business.
    pub fn attack(&self, target: &mut Entity) -> i32 {
        target.stats.take_damage(self.stats.attack())
    }
}
