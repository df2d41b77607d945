//! Shared test fixtures for the `session` submodule test suites.
//! This module exists to avoid rebuilding a hand-made arena and roster in
//! every test. It does not own production gameplay logic.

use super::*;
use crate::entity::Stats;
use crate::map::Tile;
use crate::types::{EnemyKind, ItemKind};

pub(super) const ARENA_SIDE: usize = 12;

/// Walled square with an all-floor interior, the start at (2, 2) and stairs
/// down in the far corner.
pub(super) fn arena_level(floor: u32) -> Level {
    let mut map = Tilemap::new(ARENA_SIDE, ARENA_SIDE, 32);
    let last = ARENA_SIDE as i32 - 1;
    for y in 0..=last {
        for x in 0..=last {
            let edge = x == 0 || y == 0 || x == last || y == last;
            map.set(x, y, if edge { Tile::wall() } else { Tile::floor() });
        }
    }
    let stairs_down = Pos { y: last - 2, x: last - 2 };
    map.set_at(stairs_down, Tile::stairs_down());
    let start = Pos { y: 2, x: 2 };
    Level {
        floor,
        map,
        rooms: vec![Room::new(1, 1, ARENA_SIDE as i32 - 2, ARENA_SIDE as i32 - 2)],
        start,
        stairs_down,
        stairs_up: None,
    }
}

pub(super) fn arena_session() -> Session {
    arena_session_with_hooks(SessionHooks::new())
}

/// An entered session standing on the arena with empty rosters.
pub(super) fn arena_session_with_hooks(hooks: SessionHooks) -> Session {
    let mut session =
        Session::new(SessionConfig::default(), TemplateCatalog::builtin(), hooks)
            .expect("stock config is valid");
    session.level = arena_level(1);
    session.enemies = SlotMap::with_key();
    session.items = SlotMap::with_key();
    session.player.entity_mut().set_tile_position(session.level.start, &session.level.map);
    session.on_enter();
    session
}

pub(super) fn place_player(session: &mut Session, tile: Pos) {
    session.player.entity_mut().set_tile_position(tile, &session.level.map);
}

pub(super) fn add_enemy(session: &mut Session, kind: EnemyKind, tile: Pos) -> EnemyId {
    let enemy = Enemy::regular(kind, tile, session.config.enemy, &session.level.map);
    session.enemies.insert(enemy)
}

pub(super) fn add_item(session: &mut Session, kind: ItemKind, tile: Pos) -> ItemId {
    let item = Item::new(kind, tile, &session.level.map);
    session.items.insert(item)
}

pub(super) fn player_stats(session: &mut Session) -> &mut Stats {
    session.player.entity_mut().stats_mut()
}
