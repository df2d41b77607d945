//! Reachability checks and the repair pass that rejoins rooms cut off by a
//! template overlay.

use std::collections::{BTreeSet, VecDeque};

use crate::map::{Tile, Tilemap};
use crate::rng::GameRng;
use crate::types::Pos;

use super::layout::carve_l_shaped_corridor;
use super::model::Room;
use super::walls::wall_in;

/// Every tile reachable from `start` through cardinal steps over walkable
/// tiles. Empty when `start` itself is not walkable.
pub fn reachable_tiles(map: &Tilemap, start: Pos) -> BTreeSet<Pos> {
    let mut seen = BTreeSet::new();
    if !map.is_walkable_at(start) {
        return seen;
    }
    seen.insert(start);
    let mut open = VecDeque::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in [pos.offset(0, -1), pos.offset(1, 0), pos.offset(0, 1), pos.offset(-1, 0)] {
            if seen.contains(&next) || !map.is_walkable_at(next) {
                continue;
            }
            seen.insert(next);
            open.push_back(next);
        }
    }
    seen
}

/// Stair tiles placed after the overlay, which the repair pass must also
/// reach.
#[derive(Clone, Copy, Debug)]
pub(super) struct Stairs {
    pub(super) up: Option<Pos>,
    pub(super) down: Pos,
}

/// Walks the up stairs, the room chain and then the down stairs in order,
/// carving a corridor from the previous anchor to any target the start
/// cannot reach. Returns the number of corridors carved.
pub(super) fn repair_connectivity(
    map: &mut Tilemap,
    rooms: &[Room],
    start: Pos,
    stairs: Stairs,
    rng: &mut GameRng,
) -> usize {
    if !map.is_walkable_at(start) {
        map.set_at(start, Tile::floor());
    }

    let mut links = 0;
    let mut reached = reachable_tiles(map, start);
    let mut previous_anchor = start;
    let anchors = rooms.iter().skip(1).map(|room| room.anchor(map)).collect::<Vec<_>>();
    let targets = stairs.up.into_iter().chain(anchors).chain([stairs.down]);
    for target in targets {
        if !reached.contains(&target) {
            let carved = carve_l_shaped_corridor(map, previous_anchor, target, rng.coin());
            wall_in(map, &carved);
            links += 1;
            reached = reachable_tiles(map, start);
        }
        previous_anchor = target;
    }
    links
}
