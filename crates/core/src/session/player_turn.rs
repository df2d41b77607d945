//! Player phase of a tick: stepping, bump-to-attack melee, the area attack
//! and stair interaction. Everything here resolves before any enemy acts.

use tracing::debug;

use super::*;
use crate::combat::{adjacent_targets, area_attack_requested, read_direction};

impl Session {
    /// Returns the floor the player arrived on when a step landed on stairs.
    pub(super) fn resolve_player_turn(&mut self, input: &dyn InputSource) -> Option<u32> {
        let now = self.clock.current_time;
        if self.player.is_ready(now)
            && let Some(direction) = read_direction(input)
        {
            let (dx, dy) = direction.delta();
            let destination = self.player.tile().offset(dx, dy);
            if let Some(target) = self.live_enemy_at(destination) {
                self.player_strike(target);
                self.player.stamp_move(now);
            } else if self.player.entity_mut().move_by(dx, dy, &self.level.map) {
                self.player.stamp_move(now);
                self.collect_items_underfoot();
                if let Some(floor) = self.take_stairs() {
                    return Some(floor);
                }
            }
        }

        if area_attack_requested(input) {
            let live = self
                .enemies
                .iter()
                .filter(|(_, enemy)| !enemy.stats().is_dead())
                .map(|(id, enemy)| (id, enemy.tile()));
            for target in adjacent_targets(self.player.tile(), live) {
                self.player_strike(target);
            }
        }
        None
    }

    /// One player blow against one enemy. Dead enemies stay in the roster
    /// until the end-of-phase compaction.
    pub(super) fn player_strike(&mut self, id: EnemyId) {
        let Some(enemy) = self.enemies.get_mut(id) else {
            return;
        };
        let dealt = self.player.entity().attack(enemy.entity_mut());
        debug!(enemy = enemy.name(), dealt, health = enemy.stats().health(), "player hit");
        if enemy.stats().is_dead() {
            let bonus = enemy.kill_bonus();
            let name = enemy.name().to_owned();
            self.record_kill(&name, bonus);
        }
    }

    fn take_stairs(&mut self) -> Option<u32> {
        let here = self.player.tile();
        if here == self.level.stairs_down {
            Some(self.descend())
        } else if self.level.stairs_up == Some(here) {
            self.ascend()
        } else {
            None
        }
    }
}
