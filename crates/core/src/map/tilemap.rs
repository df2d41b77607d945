use crate::types::{Pos, WorldPos};

use super::tile::Tile;

/// Rectangular row-major grid of tiles for one floor. Out-of-range reads are
/// absent and out-of-range writes are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tilemap {
    width: usize,
    height: usize,
    tile_size: u32,
    tiles: Vec<Tile>,
}

impl Tilemap {
    pub fn new(width: usize, height: usize, tile_size: u32) -> Self {
        debug_assert!(tile_size > 0, "tile size must be positive");
        Self { width, height, tile_size, tiles: vec![Tile::empty(); width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|index| self.tiles[index])
    }

    pub fn tile_at(&self, pos: Pos) -> Option<Tile> {
        self.get(pos.x, pos.y)
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(index) = self.index(x, y) {
            self.tiles[index] = tile;
        }
    }

    pub fn set_at(&mut self, pos: Pos, tile: Tile) {
        self.set(pos.x, pos.y, tile);
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Tile::is_walkable)
    }

    pub fn is_walkable_at(&self, pos: Pos) -> bool {
        self.is_walkable(pos.x, pos.y)
    }

    /// Pixel coordinate of a tile's center.
    pub fn tile_to_world(&self, tile_x: i32, tile_y: i32) -> WorldPos {
        let size = self.tile_size as f32;
        WorldPos { x: tile_x as f32 * size + size / 2.0, y: tile_y as f32 * size + size / 2.0 }
    }

    pub fn world_to_tile(&self, world: WorldPos) -> Pos {
        let size = self.tile_size as f32;
        Pos { y: (world.y / size).floor() as i32, x: (world.x / size).floor() as i32 }
    }

    /// Row-major iteration over every cell with its tile coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(index, tile)| {
            (Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }, *tile)
        })
    }

    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|tile| tile.kind().glyph()));
            out.push('\n');
        }
        out
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(12 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.tile_size.to_le_bytes());
        bytes.extend(self.tiles.iter().map(|tile| tile.kind().canonical_byte()));
        bytes
    }
}
