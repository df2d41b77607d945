use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
    pub struct ItemId;
}

/// Tile-space coordinate. Fields are ordered row-first so the derived `Ord`
/// matches row-major scan order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// Pixel-space coordinate derived from a tile position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

pub fn chebyshev(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Goblin,
    Orc,
    Skeleton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    HealthPotion,
    ManaPotion,
    Gold,
    Sword,
    Axe,
    Dagger,
    LeatherArmor,
    ChainMail,
    PlateArmor,
    Key,
    ScrollTeleport,
    ScrollFireball,
    RingRegeneration,
    AmuletProtection,
}

impl ItemKind {
    pub const ALL: [ItemKind; 14] = [
        ItemKind::HealthPotion,
        ItemKind::ManaPotion,
        ItemKind::Gold,
        ItemKind::Sword,
        ItemKind::Axe,
        ItemKind::Dagger,
        ItemKind::LeatherArmor,
        ItemKind::ChainMail,
        ItemKind::PlateArmor,
        ItemKind::Key,
        ItemKind::ScrollTeleport,
        ItemKind::ScrollFireball,
        ItemKind::RingRegeneration,
        ItemKind::AmuletProtection,
    ];
}
