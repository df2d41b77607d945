//! Static game content: stat blocks, boss scaling, item catalogue and the
//! weighted spawn tables used when populating a floor.

use crate::entity::{ItemEffect, StatKind, Stats};
use crate::rng::GameRng;
use crate::tables::WeightedTable;
use crate::types::{EnemyKind, ItemKind};

pub const ITEM_SPAWN_CHANCE: f64 = 0.6;
pub const KILL_SCORE: i64 = 10;
pub const BOSS_KILL_BONUS: i64 = 100;
pub const FIREBALL_RADIUS: u32 = 3;

const BOSS_TITLES: [&str; 5] = ["Corrupted", "Ancient", "Vengeful", "Cursed", "Eternal"];
const BOSS_NAMES: [&str; 5] = ["Guardian", "Warlord", "Sorcerer", "Beast", "Tyrant"];

pub fn enemy_stats(kind: EnemyKind) -> Stats {
    match kind {
        EnemyKind::Goblin => Stats::new(20, 5, 0),
        EnemyKind::Orc => Stats::new(40, 8, 2),
        EnemyKind::Skeleton => Stats::new(15, 6, 1),
    }
}

pub fn enemy_name(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Goblin => "Goblin",
        EnemyKind::Orc => "Orc",
        EnemyKind::Skeleton => "Skeleton",
    }
}

/// Boss stats grow with depth, anchored at floor 5 where the first arena
/// can appear.
pub fn boss_stats(floor: u32) -> Stats {
    let depth = floor as i32 - 5;
    let max_health = (100 + depth * 20).max(1);
    let attack = 15 + depth.div_euclid(2) * 3;
    let defense = 5 + floor as i32 / 5;
    Stats::new(max_health, attack, defense)
}

pub fn boss_name(rng: &mut GameRng) -> String {
    let title = rng.pick(&BOSS_TITLES).copied().unwrap_or(BOSS_TITLES[0]);
    let name = rng.pick(&BOSS_NAMES).copied().unwrap_or(BOSS_NAMES[0]);
    format!("{title} {name}")
}

pub fn item_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::HealthPotion => "Health Potion",
        ItemKind::ManaPotion => "Mana Potion",
        ItemKind::Gold => "Gold Coins",
        ItemKind::Sword => "Iron Sword",
        ItemKind::Axe => "Battle Axe",
        ItemKind::Dagger => "Steel Dagger",
        ItemKind::LeatherArmor => "Leather Armor",
        ItemKind::ChainMail => "Chain Mail",
        ItemKind::PlateArmor => "Plate Armor",
        ItemKind::Key => "Golden Key",
        ItemKind::ScrollTeleport => "Scroll of Teleport",
        ItemKind::ScrollFireball => "Scroll of Fireball",
        ItemKind::RingRegeneration => "Ring of Regeneration",
        ItemKind::AmuletProtection => "Amulet of Protection",
    }
}

pub fn item_effect(kind: ItemKind) -> ItemEffect {
    use ItemEffect::{Damage, Equipment, Heal, Mana, Score};
    match kind {
        ItemKind::HealthPotion => Heal(30),
        ItemKind::ManaPotion => Mana(20),
        ItemKind::Gold => Score(50),
        ItemKind::Sword => Equipment { stat: StatKind::Attack, amount: 5 },
        ItemKind::Axe => Equipment { stat: StatKind::Attack, amount: 7 },
        ItemKind::Dagger => Equipment { stat: StatKind::Attack, amount: 3 },
        ItemKind::LeatherArmor => Equipment { stat: StatKind::Defense, amount: 2 },
        ItemKind::ChainMail => Equipment { stat: StatKind::Defense, amount: 4 },
        ItemKind::PlateArmor => Equipment { stat: StatKind::Defense, amount: 6 },
        ItemKind::Key => Score(0),
        ItemKind::ScrollTeleport => Score(20),
        ItemKind::ScrollFireball => Damage(50),
        ItemKind::RingRegeneration => Equipment { stat: StatKind::MaxHealth, amount: 20 },
        ItemKind::AmuletProtection => Equipment { stat: StatKind::Defense, amount: 3 },
    }
}

/// Enemy mix per floor, in parts per hundred.
pub fn enemy_kind_table(floor: u32) -> WeightedTable<EnemyKind> {
    let entries = match floor {
        0..=2 => vec![(50, EnemyKind::Goblin), (25, EnemyKind::Skeleton), (25, EnemyKind::Orc)],
        3..=4 => vec![(10, EnemyKind::Goblin), (65, EnemyKind::Skeleton), (25, EnemyKind::Orc)],
        _ => vec![(25, EnemyKind::Skeleton), (75, EnemyKind::Orc)],
    };
    WeightedTable::new(entries)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemTier {
    Common,
    Uncommon,
    Rare,
    Epic,
}

pub fn item_tier_table(floor: u32) -> WeightedTable<ItemTier> {
    let weights = match floor {
        0..=2 => [80, 20, 0, 0],
        3..=4 => [60, 30, 10, 0],
        _ => [45, 30, 18, 7],
    };
    let tiers = [ItemTier::Common, ItemTier::Uncommon, ItemTier::Rare, ItemTier::Epic];
    WeightedTable::new(weights.into_iter().zip(tiers).collect())
}

pub fn tier_items(tier: ItemTier) -> &'static [ItemKind] {
    match tier {
        ItemTier::Common => &[ItemKind::HealthPotion, ItemKind::ManaPotion, ItemKind::Gold],
        ItemTier::Uncommon => &[
            ItemKind::Dagger,
            ItemKind::Sword,
            ItemKind::LeatherArmor,
            ItemKind::ScrollTeleport,
            ItemKind::Key,
        ],
        ItemTier::Rare => &[
            ItemKind::Axe,
            ItemKind::ChainMail,
            ItemKind::ScrollFireball,
            ItemKind::AmuletProtection,
        ],
        ItemTier::Epic => &[ItemKind::PlateArmor, ItemKind::RingRegeneration],
    }
}

pub fn roll_enemy_kind(floor: u32, rng: &mut GameRng) -> EnemyKind {
    enemy_kind_table(floor).sample(rng).copied().unwrap_or(EnemyKind::Goblin)
}

pub fn roll_item_kind(floor: u32, rng: &mut GameRng) -> ItemKind {
    let tier = item_tier_table(floor).sample(rng).copied().unwrap_or(ItemTier::Common);
    rng.pick(tier_items(tier)).copied().unwrap_or(ItemKind::HealthPotion)
}

/// Regular enemies per non-start room: a per-floor base roll of one or two,
/// plus one more every three floors.
pub fn enemies_per_room(base_roll: usize, floor: u32) -> usize {
    base_roll + floor as usize / 3
}
