//! Room placement and corridor carving for the base floor topology.

use crate::map::{Tile, Tilemap};
use crate::rng::GameRng;
use crate::types::Pos;

use super::model::Room;

pub(super) const MIN_ROOM_SIDE: i32 = 4;
pub(super) const MAX_ROOM_SIDE: i32 = 9;
const MIN_ROOM_ATTEMPTS: usize = 8;
const MAX_ROOM_ATTEMPTS: usize = 12;

pub(super) struct RoomLayout {
    pub(super) rooms: Vec<Room>,
    pub(super) requested: usize,
}

/// Samples candidate rooms, keeps the ones that clear every accepted room by
/// at least one tile, and chains each accepted room to its predecessor.
pub(super) fn place_rooms(map: &mut Tilemap, rng: &mut GameRng) -> RoomLayout {
    let requested = rng.range_usize(MIN_ROOM_ATTEMPTS, MAX_ROOM_ATTEMPTS);
    let mut rooms: Vec<Room> = Vec::with_capacity(requested);

    for _ in 0..requested {
        let width = rng.range_i32(MIN_ROOM_SIDE, MAX_ROOM_SIDE);
        let height = rng.range_i32(MIN_ROOM_SIDE, MAX_ROOM_SIDE);
        let max_x = map.width() as i32 - width - 2;
        let max_y = map.height() as i32 - height - 2;
        if max_x < 1 || max_y < 1 {
            continue;
        }

        let x = rng.range_i32(1, max_x);
        let y = rng.range_i32(1, max_y);
        let candidate = Room::new(x, y, width, height);
        let candidate_with_margin = candidate.expanded(1);
        if rooms.iter().any(|existing| candidate_with_margin.intersects(existing)) {
            continue;
        }

        carve_room(map, &candidate);
        if let Some(previous) = rooms.last() {
            let horizontal_first = rng.coin();
            carve_l_shaped_corridor(map, previous.center(), candidate.center(), horizontal_first);
        }
        rooms.push(candidate);
    }

    if rooms.is_empty() {
        let fallback = fallback_room(map);
        carve_room(map, &fallback);
        rooms.push(fallback);
    }

    RoomLayout { rooms, requested }
}

fn fallback_room(map: &Tilemap) -> Room {
    let width = (map.width() as i32 - 2).clamp(1, MIN_ROOM_SIDE);
    let height = (map.height() as i32 - 2).clamp(1, MIN_ROOM_SIDE);
    Room::new(1, 1, width, height)
}

pub(super) fn carve_room(map: &mut Tilemap, room: &Room) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            map.set(x, y, Tile::floor());
        }
    }
}

/// Carves a one-tile-wide L between two points and returns the tiles that
/// were turned into floor. Tiles that are already walkable keep their kind.
pub(super) fn carve_l_shaped_corridor(
    map: &mut Tilemap,
    start: Pos,
    end: Pos,
    horizontal_first: bool,
) -> Vec<Pos> {
    let mut carved = Vec::new();
    if horizontal_first {
        carve_horizontal_line(map, start.y, start.x, end.x, &mut carved);
        carve_vertical_line(map, end.x, start.y, end.y, &mut carved);
    } else {
        carve_vertical_line(map, start.x, start.y, end.y, &mut carved);
        carve_horizontal_line(map, end.y, start.x, end.x, &mut carved);
    }
    carved
}

fn carve_horizontal_line(map: &mut Tilemap, y: i32, from_x: i32, to_x: i32, carved: &mut Vec<Pos>) {
    for x in from_x.min(to_x)..=from_x.max(to_x) {
        carve_tile(map, Pos { y, x }, carved);
    }
}

fn carve_vertical_line(map: &mut Tilemap, x: i32, from_y: i32, to_y: i32, carved: &mut Vec<Pos>) {
    for y in from_y.min(to_y)..=from_y.max(to_y) {
        carve_tile(map, Pos { y, x }, carved);
    }
}

fn carve_tile(map: &mut Tilemap, pos: Pos, carved: &mut Vec<Pos>) {
    if map.in_bounds(pos.x, pos.y) && !map.is_walkable_at(pos) {
        map.set_at(pos, Tile::floor());
        carved.push(pos);
    }
}
