use serde::Serialize;

use crate::error::TemplateError;
use crate::map::TileKind;
use crate::types::{EnemyKind, ItemKind, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Boss,
    Unique,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "subtype")]
pub enum SpawnKind {
    Enemy(EnemyKind),
    Item(ItemKind),
    Boss,
    Npc,
}

/// A spawn point. Positions are template-local inside a `RoomTemplate` and
/// world tile coordinates once the template has been stamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EntitySpawn {
    pub kind: SpawnKind,
    pub pos: Pos,
}

impl EntitySpawn {
    pub fn at(kind: SpawnKind, x: i32, y: i32) -> Self {
        Self { kind, pos: Pos { y, x } }
    }

    pub fn translated(self, origin: Pos) -> Self {
        Self { kind: self.kind, pos: self.pos.offset(origin.x, origin.y) }
    }
}

/// Unvalidated template description. `RoomTemplate::parse` turns it into a
/// checked, immutable template.
#[derive(Clone, Debug)]
pub struct TemplateDraft<'a> {
    pub name: &'a str,
    pub min_floor: u32,
    pub max_floor: Option<u32>,
    pub rarity: Rarity,
    pub rows: &'a [&'a str],
    pub spawns: Vec<EntitySpawn>,
    pub entry_point: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomTemplate {
    name: String,
    width: usize,
    height: usize,
    min_floor: u32,
    max_floor: Option<u32>,
    rarity: Rarity,
    tiles: Vec<TileKind>,
    spawns: Vec<EntitySpawn>,
    entry_point: Pos,
}

impl RoomTemplate {
    pub fn parse(draft: TemplateDraft<'_>) -> Result<Self, TemplateError> {
        let template = draft.name.to_string();
        let Some(first_row) = draft.rows.first() else {
            return Err(TemplateError::Empty { template });
        };
        let width = first_row.chars().count();
        if width == 0 {
            return Err(TemplateError::Empty { template });
        }
        let height = draft.rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in draft.rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(TemplateError::RaggedRow { template, row: y, expected: width, actual });
            }
            for (x, code) in row.chars().enumerate() {
                let Some(kind) = TileKind::from_template_code(code) else {
                    return Err(TemplateError::UnknownTileCode { template, code, x, y });
                };
                tiles.push(kind);
            }
        }

        let contains = |pos: Pos| {
            pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
        };
        if let Some(spawn) = draft.spawns.iter().find(|spawn| !contains(spawn.pos)) {
            return Err(TemplateError::SpawnOutOfBounds {
                template,
                x: spawn.pos.x,
                y: spawn.pos.y,
            });
        }
        if !contains(draft.entry_point) {
            return Err(TemplateError::EntryOutOfBounds {
                template,
                x: draft.entry_point.x,
                y: draft.entry_point.y,
            });
        }
        if let Some(max_floor) = draft.max_floor
            && max_floor < draft.min_floor
        {
            return Err(TemplateError::InvertedFloorRange {
                template,
                min_floor: draft.min_floor,
                max_floor,
            });
        }

        Ok(Self {
            name: template,
            width,
            height,
            min_floor: draft.min_floor,
            max_floor: draft.max_floor,
            rarity: draft.rarity,
            tiles,
            spawns: draft.spawns,
            entry_point: draft.entry_point,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn min_floor(&self) -> u32 {
        self.min_floor
    }

    pub fn max_floor(&self) -> Option<u32> {
        self.max_floor
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn spawns(&self) -> &[EntitySpawn] {
        &self.spawns
    }

    pub fn entry_point(&self) -> Pos {
        self.entry_point
    }

    pub fn allows_floor(&self, floor: u32) -> bool {
        floor >= self.min_floor && self.max_floor.is_none_or(|max_floor| floor <= max_floor)
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<TileKind> {
        (x < self.width && y < self.height).then(|| self.tiles[y * self.width + x])
    }

    /// Row-major iteration over every template cell in template-local space.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, TileKind)> + '_ {
        self.tiles.iter().enumerate().map(|(index, kind)| {
            (Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }, *kind)
        })
    }
}
