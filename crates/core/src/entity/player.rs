use crate::config::PlayerConfig;
use crate::map::Tilemap;
use crate::render::palette;
use crate::types::Pos;

use super::actor::Entity;
use super::stats::Stats;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    entity: Entity,
    move_delay_ms: f64,
    last_move_time: f64,
}

impl Player {
    pub fn new(tile: Pos, config: &PlayerConfig, map: &Tilemap) -> Self {
        let stats = Stats::new(config.max_health, config.attack, config.defense);
        Self {
            entity: Entity::new(tile, stats, palette::player_appearance(), map),
            move_delay_ms: config.move_delay_ms,
            last_move_time: 0.0,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn tile(&self) -> Pos {
        self.entity.tile()
    }

    pub fn stats(&self) -> &Stats {
        self.entity.stats()
    }

    pub fn move_delay_ms(&self) -> f64 {
        self.move_delay_ms
    }

    pub fn last_move_time(&self) -> f64 {
        self.last_move_time
    }

    pub fn is_ready(&self, now: f64) -> bool {
        now - self.last_move_time >= self.move_delay_ms
    }

    pub(crate) fn stamp_move(&mut self, now: f64) {
        self.last_move_time = now;
    }
}
