//! Stock templates. Rows use the template tile codes: `E` empty, `F` floor,
//! `W` wall, `D` door.

use crate::types::{EnemyKind, ItemKind, Pos};

use super::model::{EntitySpawn, Rarity, RoomTemplate, SpawnKind, TemplateDraft};

const POTION: SpawnKind = SpawnKind::Item(ItemKind::HealthPotion);
const GOLD: SpawnKind = SpawnKind::Item(ItemKind::Gold);
const ORC: SpawnKind = SpawnKind::Enemy(EnemyKind::Orc);
const SKELETON: SpawnKind = SpawnKind::Enemy(EnemyKind::Skeleton);

const CIRCULAR_ARENA_ROWS: [&str; 13] = [
    "EEEEWWWWWEEEE",
    "EEWWFFFFFWWEE",
    "EWFFFFFFFFFWE",
    "EWFFFFFFFFFWE",
    "WFFFFFFFFFFFW",
    "WFFFFFFFFFFFW",
    "WFFFFFFFFFFFW",
    "WFFFFFFFFFFFW",
    "WFFFFFFFFFFFW",
    "EWFFFFFFFFFWE",
    "EWFFFFFFFFFWE",
    "EEWWFFFFFWWEE",
    "EEEEWWWWWEEEE",
];

const THRONE_ROOM_ROWS: [&str; 11] = [
    "WWWWWWWWWWWWWWW",
    "WFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFW",
    "WFFWFFFFFFFWFFW",
    "WFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFW",
    "WFFWFFFFFFFWFFW",
    "WFFFFFFFFFFFFFW",
    "WFFFFFFFFFFFFFW",
    "WWWWWWFFFWWWWWW",
];

const TREASURE_VAULT_ROWS: [&str; 9] = [
    "WWWWWWWWW",
    "WFFFFFFFW",
    "WFWWWWWFW",
    "WFWFFFWFW",
    "WFWFFFWFW",
    "WFWFFFWFW",
    "WFWWWWWFW",
    "WFFFFFFFW",
    "WWWWDDWWW",
];

const TREASURE_CHAMBER_ROWS: [&str; 8] = [
    "WWWWWWWWWWW",
    "WFFFWFFFWFW",
    "WFFFWFFFWFW",
    "WFFFFFFFFFW",
    "WFFFFFFFFFW",
    "WFWFFFFFWFW",
    "WFWFFFFFWFW",
    "WWWWWDDWWWW",
];

pub(super) fn builtin_templates() -> Vec<RoomTemplate> {
    let drafts = [
        TemplateDraft {
            name: "Boss Arena - Circular",
            min_floor: 5,
            max_floor: None,
            rarity: Rarity::Boss,
            rows: &CIRCULAR_ARENA_ROWS,
            spawns: vec![
                EntitySpawn::at(SpawnKind::Boss, 6, 6),
                EntitySpawn::at(POTION, 3, 3),
                EntitySpawn::at(POTION, 9, 9),
            ],
            entry_point: Pos { y: 11, x: 6 },
        },
        TemplateDraft {
            name: "Boss Arena - Throne Room",
            min_floor: 10,
            max_floor: None,
            rarity: Rarity::Boss,
            rows: &THRONE_ROOM_ROWS,
            spawns: vec![
                EntitySpawn::at(SpawnKind::Boss, 7, 2),
                EntitySpawn::at(ORC, 3, 5),
                EntitySpawn::at(ORC, 11, 5),
                EntitySpawn::at(POTION, 2, 2),
                EntitySpawn::at(POTION, 12, 2),
            ],
            entry_point: Pos { y: 10, x: 7 },
        },
        TemplateDraft {
            name: "Treasure Vault",
            min_floor: 3,
            max_floor: None,
            rarity: Rarity::Rare,
            rows: &TREASURE_VAULT_ROWS,
            spawns: vec![
                EntitySpawn::at(GOLD, 4, 4),
                EntitySpawn::at(GOLD, 3, 4),
                EntitySpawn::at(GOLD, 5, 4),
                EntitySpawn::at(POTION, 4, 3),
                EntitySpawn::at(ORC, 2, 2),
                EntitySpawn::at(SKELETON, 6, 6),
            ],
            entry_point: Pos { y: 8, x: 4 },
        },
        TemplateDraft {
            name: "Treasure Chamber",
            min_floor: 5,
            max_floor: None,
            rarity: Rarity::Rare,
            rows: &TREASURE_CHAMBER_ROWS,
            spawns: vec![
                EntitySpawn::at(GOLD, 5, 3),
                EntitySpawn::at(GOLD, 5, 4),
                EntitySpawn::at(POTION, 2, 2),
                EntitySpawn::at(POTION, 8, 2),
                EntitySpawn::at(SKELETON, 3, 5),
                EntitySpawn::at(SKELETON, 7, 5),
            ],
            entry_point: Pos { y: 7, x: 5 },
        },
    ];

    drafts
        .into_iter()
        .map(|draft| {
            let name = draft.name;
            RoomTemplate::parse(draft)
                .unwrap_or_else(|error| panic!("built-in template `{name}` is corrupt: {error}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileKind;

    #[test]
    fn builtin_templates_parse_with_their_authored_dimensions() {
        let templates = builtin_templates();
        let shapes: Vec<(&str, usize, usize, u32)> = templates
            .iter()
            .map(|template| {
                (template.name(), template.width(), template.height(), template.min_floor())
            })
            .collect();
        assert_eq!(
            shapes,
            vec![
                ("Boss Arena - Circular", 13, 13, 5),
                ("Boss Arena - Throne Room", 15, 11, 10),
                ("Treasure Vault", 9, 9, 3),
                ("Treasure Chamber", 11, 8, 5),
            ]
        );
    }

    #[test]
    fn each_boss_arena_carries_exactly_one_boss_spawn() {
        for template in builtin_templates().iter().filter(|t| t.rarity() == Rarity::Boss) {
            let bosses =
                template.spawns().iter().filter(|spawn| spawn.kind == SpawnKind::Boss).count();
            assert_eq!(bosses, 1, "{} should hold one boss", template.name());
        }
    }

    #[test]
    fn vault_entry_point_is_a_door() {
        let templates = builtin_templates();
        let vault = templates.iter().find(|t| t.name() == "Treasure Vault").expect("vault");
        let entry = vault.entry_point();
        assert_eq!(vault.tile(entry.x as usize, entry.y as usize), Some(TileKind::Door));
    }
}
