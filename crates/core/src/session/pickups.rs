//! Item pickup and effect application.

use tracing::debug;

use super::*;
use crate::combat::burst_targets;
use crate::content::FIREBALL_RADIUS;
use crate::entity::{ItemEffect, StatKind};

impl Session {
    pub(super) fn collect_items_underfoot(&mut self) {
        let here = self.player.tile();
        let underfoot: Vec<ItemId> = self
            .items
            .iter()
            .filter(|(_, item)| !item.is_collected() && item.tile() == here)
            .map(|(id, _)| id)
            .collect();
        for id in underfoot {
            self.collect_item(id);
        }
    }

    /// Collects one item and applies its effect. Returns `false` without
    /// touching any state when the item is unknown or already collected.
    pub fn collect_item(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        if !item.collect() {
            return false;
        }
        let effect = item.effect();
        debug!(item = item.name(), ?effect, "item collected");
        self.apply_item_effect(effect);
        true
    }

    fn apply_item_effect(&mut self, effect: ItemEffect) {
        let stats = self.player.entity_mut().stats_mut();
        match effect {
            ItemEffect::Heal(amount) => {
                stats.heal(amount);
            }
            ItemEffect::Mana(amount) | ItemEffect::Score(amount) => {
                self.progress.bonus_score += i64::from(amount);
            }
            ItemEffect::Equipment { stat, amount } => match stat {
                StatKind::Attack => stats.raise_attack(amount),
                StatKind::Defense => stats.raise_defense(amount),
                StatKind::MaxHealth => stats.raise_max_health(amount),
            },
            ItemEffect::Damage(amount) => self.burst(amount),
        }
    }

    /// Area damage centred on the player. Goes through `take_damage`, so
    /// defense still mitigates it.
    fn burst(&mut self, amount: i32) {
        let live = self
            .enemies
            .iter()
            .filter(|(_, enemy)| !enemy.stats().is_dead())
            .map(|(id, enemy)| (id, enemy.tile()));
        let targets = burst_targets(self.player.tile(), FIREBALL_RADIUS, live);
        for id in targets {
            let Some(enemy) = self.enemies.get_mut(id) else {
                continue;
            };
            let dealt = enemy.entity_mut().stats_mut().take_damage(amount);
            debug!(enemy = enemy.name(), dealt, "burst hit");
            if enemy.stats().is_dead() {
                let bonus = enemy.kill_bonus();
                let name = enemy.name().to_owned();
                self.record_kill(&name, bonus);
            }
        }
    }
}
