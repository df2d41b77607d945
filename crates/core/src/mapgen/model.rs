//! Public data models for generated floors and their rooms.

use serde::Serialize;

use crate::map::Tilemap;
use crate::templates::{EntitySpawn, Rarity, SpawnKind};
use crate::types::{EnemyKind, ItemKind, Pos};

/// Record of a template stamped over a room. `origin` and `entry` are world
/// tile coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedTemplate {
    pub name: String,
    pub rarity: Rarity,
    pub origin: Pos,
    pub entry: Pos,
    pub width: i32,
    pub height: i32,
}

impl PlacedTemplate {
    /// World-space rectangle covered by the stamped template.
    pub fn footprint(&self) -> Room {
        Room::new(self.origin.x, self.origin.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub template: Option<PlacedTemplate>,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height, template: None }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn center(&self) -> Pos {
        Pos { y: self.y + self.height / 2, x: self.x + self.width / 2 }
    }

    pub fn is_template(&self) -> bool {
        self.template.is_some()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.y >= self.y && pos.y <= self.bottom()
    }

    pub(super) fn expanded(&self, margin: i32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2,
            self.height + margin * 2,
        )
    }

    pub fn intersects(&self, other: &Room) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    /// Tile a corridor should reach to join this room: the template entry
    /// when a template landed here and its entry is on the grid, otherwise
    /// the room center.
    pub(super) fn anchor(&self, map: &Tilemap) -> Pos {
        match &self.template {
            Some(placed) if map.in_bounds(placed.entry.x, placed.entry.y) => placed.entry,
            _ => self.center(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub floor: u32,
    pub map: Tilemap,
    pub rooms: Vec<Room>,
    pub start: Pos,
    pub stairs_down: Pos,
    pub stairs_up: Option<Pos>,
    pub template_spawns: Vec<EntitySpawn>,
    pub repaired_links: usize,
}

impl GeneratedFloor {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.map.canonical_bytes();
        bytes.extend(self.floor.to_le_bytes());
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            for value in [room.x, room.y, room.width, room.height] {
                bytes.extend(value.to_le_bytes());
            }
            bytes.push(u8::from(room.is_template()));
        }
        let landmarks = [Some(self.start), Some(self.stairs_down), self.stairs_up];
        for pos in landmarks.into_iter().flatten() {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }
        bytes.push(u8::from(self.stairs_up.is_some()));

        bytes.extend((self.template_spawns.len() as u32).to_le_bytes());
        for spawn in &self.template_spawns {
            let (tag, subtype) = match spawn.kind {
                SpawnKind::Enemy(kind) => (0_u8, enemy_code(kind)),
                SpawnKind::Item(kind) => (1, item_code(kind)),
                SpawnKind::Boss => (2, 0),
                SpawnKind::Npc => (3, 0),
            };
            bytes.push(tag);
            bytes.push(subtype);
            bytes.extend(spawn.pos.y.to_le_bytes());
            bytes.extend(spawn.pos.x.to_le_bytes());
        }
        bytes
    }

    pub fn templated_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_template())
    }
}

fn enemy_code(kind: EnemyKind) -> u8 {
    match kind {
        EnemyKind::Goblin => 0,
        EnemyKind::Orc => 1,
        EnemyKind::Skeleton => 2,
    }
}

fn item_code(kind: ItemKind) -> u8 {
    ItemKind::ALL.iter().position(|candidate| *candidate == kind).unwrap_or_default() as u8
}
