use crate::combat::BehaviorConfig;
use crate::config::CreatureTuning;
use crate::content;
use crate::map::Tilemap;
use crate::render::palette;
use crate::types::{EnemyKind, Pos};

use super::actor::Entity;
use super::stats::Stats;

/// Which variant of enemy this is. Only rendering and scoring look at it;
/// both variants share one behavior routine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Foe {
    Regular(EnemyKind),
    Boss { name: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    entity: Entity,
    foe: Foe,
    behavior: BehaviorConfig,
    last_move_time: f64,
}

impl Enemy {
    pub fn regular(kind: EnemyKind, tile: Pos, tuning: CreatureTuning, map: &Tilemap) -> Self {
        let stats = content::enemy_stats(kind);
        Self {
            entity: Entity::new(tile, stats, palette::enemy_appearance(kind), map),
            foe: Foe::Regular(kind),
            behavior: BehaviorConfig::from_tuning(tuning, false),
            last_move_time: 0.0,
        }
    }

    pub fn boss(
        name: String,
        floor: u32,
        tile: Pos,
        tuning: CreatureTuning,
        map: &Tilemap,
    ) -> Self {
        Self {
            entity: Entity::new(tile, content::boss_stats(floor), palette::boss_appearance(), map),
            foe: Foe::Boss { name },
            behavior: BehaviorConfig::from_tuning(tuning, true),
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

    pub fn foe(&self) -> &Foe {
        &self.foe
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.foe, Foe::Boss { .. })
    }

    pub fn name(&self) -> &str {
        match &self.foe {
            Foe::Regular(kind) => content::enemy_name(*kind),
            Foe::Boss { name } => name,
        }
    }

    pub fn behavior(&self) -> BehaviorConfig {
        self.behavior
    }

    pub fn last_move_time(&self) -> f64 {
        self.last_move_time
    }

    pub(crate) fn stamp_move(&mut self, now: f64) {
        self.last_move_time = now;
    }

    /// Score bonus granted on top of the per-kill score.
    pub fn kill_bonus(&self) -> i64 {
        match self.foe {
            Foe::Regular(_) => 0,
            Foe::Boss { .. } => content::BOSS_KILL_BONUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_and_boss_variants_take_their_tuning_and_stats() {
        let map = Tilemap::new(12, 12, 32);
        let orc = Enemy::regular(EnemyKind::Orc, Pos { y: 2, x: 2 }, CreatureTuning::ENEMY, &map);
        assert_eq!(*orc.stats(), Stats::new(40, 8, 2));
        assert_eq!(orc.behavior(), BehaviorConfig::ENEMY);
        assert_eq!(orc.name(), "Orc");
        assert_eq!(orc.kill_bonus(), 0);

        let boss =
            Enemy::boss("Ancient Tyrant".into(), 5, Pos { y: 4, x: 4 }, CreatureTuning::BOSS, &map);
        assert!(boss.is_boss());
        assert_eq!(boss.name(), "Ancient Tyrant");
        assert_eq!(boss.behavior(), BehaviorConfig::BOSS);
        assert_eq!(*boss.stats(), Stats::new(100, 15, 6));
        assert!(boss.kill_bonus() > orc.kill_bonus());
    }
}
