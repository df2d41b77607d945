use crate::map::{Tile, Tilemap};
use crate::types::Pos;

/// Surrounds every walkable tile with walls on all eight sides wherever the
/// neighbor is not itself walkable.
pub(super) fn infer_walls(map: &mut Tilemap) {
    let walkable: Vec<Pos> =
        map.cells().filter(|(_, tile)| tile.is_walkable()).map(|(pos, _)| pos).collect();
    wall_in(map, &walkable);
}

pub(super) fn wall_in(map: &mut Tilemap, tiles: &[Pos]) {
    for &pos in tiles {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbor = pos.offset(dx, dy);
                if map.in_bounds(neighbor.x, neighbor.y) && !map.is_walkable_at(neighbor) {
                    map.set_at(neighbor, Tile::wall());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileKind;

    #[test]
    fn a_single_floor_tile_gets_a_full_ring_of_walls() {
        let mut map = Tilemap::new(5, 5, 32);
        map.set(2, 2, Tile::floor());
        infer_walls(&mut map);
        let walls = map.cells().filter(|(_, tile)| tile.kind() == TileKind::Wall).count();
        assert_eq!(walls, 8);
        assert_eq!(map.get(0, 0), Some(Tile::empty()));
        assert_eq!(map.get(1, 1), Some(Tile::wall()));
    }

    #[test]
    fn floor_on_the_border_only_walls_in_bounds_neighbors() {
        let mut map = Tilemap::new(4, 4, 32);
        map.set(0, 0, Tile::floor());
        map.set(1, 0, Tile::floor());
        infer_walls(&mut map);
        assert_eq!(map.get(0, 0), Some(Tile::floor()));
        assert_eq!(map.get(1, 0), Some(Tile::floor()));
        assert_eq!(map.get(2, 0), Some(Tile::wall()));
        assert_eq!(map.get(0, 1), Some(Tile::wall()));
        assert_eq!(map.get(2, 1), Some(Tile::wall()));
        assert_eq!(map.get(3, 0), Some(Tile::empty()));
    }
}
