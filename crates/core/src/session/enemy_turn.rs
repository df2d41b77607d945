//! Enemy phase of a tick.
//! Enemies act one at a time in roster order and commit immediately, so a
//! later enemy sees the positions of earlier ones from this same tick.

use tracing::{debug, trace};

use super::*;
use crate::combat::{EnemyAction, Perception, decide};

impl Session {
    /// Returns `true` once the player is dead; the remaining roster does not
    /// act after that.
    pub(super) fn resolve_enemy_turn(&mut self) -> bool {
        let now = self.clock.current_time;
        let player_tile = self.player.tile();
        let roster: Vec<EnemyId> = self.enemies.keys().collect();

        for id in roster {
            let Some(enemy) = self.enemies.get(id) else {
                continue;
            };
            if enemy.stats().is_dead() {
                continue;
            }
            let view = Perception {
                position: enemy.tile(),
                last_move_time: enemy.last_move_time(),
                now,
                player: player_tile,
                map: &self.level.map,
            };
            let enemies = &self.enemies;
            let is_occupied = |pos: Pos| {
                enemies
                    .iter()
                    .any(|(other, e)| other != id && e.tile() == pos && !e.stats().is_dead())
            };
            let Some(action) = decide(&enemy.behavior(), &view, is_occupied) else {
                continue;
            };
            trace!(enemy = enemy.name(), ?action, "enemy decided");

            let Some(enemy) = self.enemies.get_mut(id) else {
                continue;
            };
            match action {
                EnemyAction::Idle => {}
                EnemyAction::Move { to } => {
                    enemy.entity_mut().set_tile_position(to, &self.level.map);
                }
                EnemyAction::Attack => {
                    let dealt = enemy.entity().attack(self.player.entity_mut());
                    debug!(
                        enemy = enemy.name(),
                        dealt,
                        health = self.player.stats().health(),
                        "player took damage"
                    );
                }
            }
            if action.stamps_cooldown() {
                enemy.stamp_move(now);
            }
            if self.player.stats().is_dead() {
                return true;
            }
        }
        false
    }
}
