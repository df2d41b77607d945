//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::entity::{Entity, Foe};

impl Session {
    /// Fingerprint of everything the simulation reads. Two sessions fed the
    /// same seed and the same inputs hash equal.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.config.seed);
        hasher.write_u64(self.clock.current_time.to_bits());
        hasher.write_u64(self.clock.game_time.to_bits());
        hasher.write_u32(self.progress.current_floor);
        hasher.write_u32(self.progress.deepest_floor);
        hasher.write_u32(self.progress.kills);
        hasher.write_i64(self.progress.bonus_score);
        hasher.write_i64(self.progress.score);
        hasher.write_u8(match self.status {
            SessionStatus::Playing => 0,
            SessionStatus::GameOver { .. } => 1,
        });

        hasher.write(&self.level.map.canonical_bytes());
        write_pos(&mut hasher, self.level.start);
        write_pos(&mut hasher, self.level.stairs_down);
        if let Some(stairs_up) = self.level.stairs_up {
            write_pos(&mut hasher, stairs_up);
        }

        write_entity(&mut hasher, self.player.entity());
        hasher.write_u64(self.player.last_move_time().to_bits());

        hasher.write_usize(self.enemies.len());
        for enemy in self.enemies.values() {
            hasher.write_u8(match enemy.foe() {
                Foe::Regular(kind) => *kind as u8,
                Foe::Boss { .. } => u8::MAX,
            });
            hasher.write(enemy.name().as_bytes());
            write_entity(&mut hasher, enemy.entity());
            hasher.write_u64(enemy.last_move_time().to_bits());
        }

        hasher.write_usize(self.items.len());
        for item in self.items.values() {
            hasher.write_u8(item.kind() as u8);
            write_pos(&mut hasher, item.tile());
            hasher.write_u8(u8::from(item.is_collected()));
        }
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.y);
    hasher.write_i32(pos.x);
}

fn write_entity(hasher: &mut Xxh3, entity: &Entity) {
    write_pos(hasher, entity.tile());
    let stats = entity.stats();
    for value in [stats.health(), stats.max_health(), stats.attack(), stats.defense()] {
        hasher.write_i32(value);
    }
}
