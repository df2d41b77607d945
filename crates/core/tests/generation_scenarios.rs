use delve_core::mapgen::reachable_tiles;
use delve_core::templates::Rarity;
use delve_core::{FloorRules, MapConfig, TemplateCatalog, TileKind, generate_floor};

#[test]
fn first_floor_on_a_stock_grid_has_start_and_stairs_in_the_end_rooms() {
    let catalog = TemplateCatalog::builtin();
    for seed in 0..25 {
        let floor = generate_floor(&catalog, MapConfig::default(), seed, 1);

        assert!(!floor.rooms.is_empty(), "seed {seed}");
        assert_eq!((floor.map.width(), floor.map.height()), (50, 40));
        let first = floor.rooms.first().expect("at least one room");
        let last = floor.rooms.last().expect("at least one room");
        assert!(first.contains(floor.start), "seed {seed}: start outside first room");
        assert!(last.contains(floor.stairs_down), "seed {seed}: stairs outside last room");
        assert_eq!(floor.stairs_up, None);
        assert_eq!(
            floor.map.tile_at(floor.stairs_down).map(|tile| tile.kind()),
            Some(TileKind::StairsDown)
        );
    }
}

#[test]
fn deeper_floors_place_stairs_up_beside_the_start() {
    let catalog = TemplateCatalog::builtin();
    let floor = generate_floor(&catalog, MapConfig::default(), 99, 2);
    let up = floor.stairs_up.expect("floor 2 has a way back");
    assert_eq!(up, floor.start.offset(1, 0));
    assert_eq!(floor.map.tile_at(up).map(|tile| tile.kind()), Some(TileKind::StairsUp));
}

#[test]
fn every_room_and_both_stairs_are_reachable_from_the_start() {
    let catalog = TemplateCatalog::builtin();
    for floor_number in [1, 3, 5, 7, 10, 15] {
        for seed in 0..10 {
            let floor = generate_floor(&catalog, MapConfig::default(), seed, floor_number);
            let reachable = reachable_tiles(&floor.map, floor.start);
            assert!(reachable.contains(&floor.stairs_down), "floor {floor_number} seed {seed}");
            if let Some(up) = floor.stairs_up {
                assert!(reachable.contains(&up));
            }
            let footprints: Vec<_> = floor
                .rooms
                .iter()
                .filter_map(|room| room.template.as_ref().map(|placed| placed.footprint()))
                .collect();
            let untouched = floor
                .rooms
                .iter()
                .filter(|room| footprints.iter().all(|footprint| !footprint.intersects(room)));
            for room in untouched {
                assert!(reachable.contains(&room.center()), "floor {floor_number} seed {seed}");
            }
        }
    }
}

#[test]
fn boss_rooms_follow_the_five_floor_cadence() {
    assert!(FloorRules::for_floor(5).boss_room);
    assert!(!FloorRules::for_floor(4).boss_room);
    assert!(FloorRules::for_floor(10).boss_room);
    assert!(!FloorRules::for_floor(0).boss_room);
}

#[test]
fn boss_floors_usually_stamp_an_arena_into_the_last_room() {
    let catalog = TemplateCatalog::builtin();
    let stamped = (0..20)
        .map(|seed| generate_floor(&catalog, MapConfig::default(), seed, 5))
        .filter(|floor| {
            floor.rooms.last().and_then(|room| room.template.as_ref()).map(|placed| placed.rarity)
                == Some(Rarity::Boss)
        })
        .count();
    assert!(stamped > 0, "no seed produced a boss arena on floor 5");
}
