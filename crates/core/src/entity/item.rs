use std::mem;

use crate::content;
use crate::map::Tilemap;
use crate::types::{ItemKind, Pos, WorldPos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Attack,
    Defense,
    MaxHealth,
}

/// What picking an item up does. The magnitude is carried by the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemEffect {
    Heal(i32),
    Mana(i32),
    Damage(i32),
    Score(i32),
    Equipment { stat: StatKind, amount: i32 },
}

/// A floor item. Collected items stay in the roster but are inert.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    kind: ItemKind,
    tile: Pos,
    world: WorldPos,
    collected: bool,
}

impl Item {
    pub fn new(kind: ItemKind, tile: Pos, map: &Tilemap) -> Self {
        Self { kind, tile, world: map.tile_to_world(tile.x, tile.y), collected: false }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn tile(&self) -> Pos {
        self.tile
    }

    pub fn world(&self) -> WorldPos {
        self.world
    }

    pub fn name(&self) -> &'static str {
        content::item_name(self.kind)
    }

    pub fn effect(&self) -> ItemEffect {
        content::item_effect(self.kind)
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the item collected. Returns `false` when it already was, so the
    /// caller can refuse to apply the effect twice.
    pub fn collect(&mut self) -> bool {
        !mem::replace(&mut self.collected, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_is_idempotent_and_reports_only_the_first_pickup() {
        let map = Tilemap::new(12, 12, 32);
        let mut potion = Item::new(ItemKind::HealthPotion, Pos { y: 1, x: 1 }, &map);
        assert!(!potion.is_collected());
        assert!(potion.collect());
        assert!(!potion.collect());
        assert!(potion.is_collected());
        assert_eq!(potion.effect(), ItemEffect::Heal(30));
        assert_eq!(potion.name(), "Health Potion");
    }
}
