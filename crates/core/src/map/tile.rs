use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Empty,
    Floor,
    Wall,
    Door,
    StairsDown,
    StairsUp,
}

impl TileKind {
    /// Decodes the single-character codes used in authored template rows.
    pub fn from_template_code(code: char) -> Option<Self> {
        match code {
            'E' => Some(TileKind::Empty),
            'F' => Some(TileKind::Floor),
            'W' => Some(TileKind::Wall),
            'D' => Some(TileKind::Door),
            '>' => Some(TileKind::StairsDown),
            '<' => Some(TileKind::StairsUp),
            _ => None,
        }
    }

    /// Glyph used by text dumps of a floor.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Empty => ' ',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::Door => '+',
            TileKind::StairsDown => '>',
            TileKind::StairsUp => '<',
        }
    }

    pub(crate) fn canonical_byte(self) -> u8 {
        match self {
            TileKind::Empty => 0,
            TileKind::Floor => 1,
            TileKind::Wall => 2,
            TileKind::Door => 3,
            TileKind::StairsDown => 4,
            TileKind::StairsUp => 5,
        }
    }
}

/// A grid cell. Walkability and transparency are fixed by the kind, so the
/// only way to build one is through the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    kind: TileKind,
    walkable: bool,
    transparent: bool,
}

impl Tile {
    pub const fn of(kind: TileKind) -> Self {
        let (walkable, transparent) = match kind {
            TileKind::Empty => (false, true),
            TileKind::Wall => (false, false),
            TileKind::Floor | TileKind::Door | TileKind::StairsDown | TileKind::StairsUp => {
                (true, true)
            }
        };
        Self { kind, walkable, transparent }
    }

    pub const fn empty() -> Self {
        Self::of(TileKind::Empty)
    }

    pub const fn floor() -> Self {
        Self::of(TileKind::Floor)
    }

    pub const fn wall() -> Self {
        Self::of(TileKind::Wall)
    }

    pub const fn door() -> Self {
        Self::of(TileKind::Door)
    }

    pub const fn stairs_down() -> Self {
        Self::of(TileKind::StairsDown)
    }

    pub const fn stairs_up() -> Self {
        Self::of(TileKind::StairsUp)
    }

    pub fn kind(self) -> TileKind {
        self.kind
    }

    pub fn is_walkable(self) -> bool {
        self.walkable
    }

    pub fn is_transparent(self) -> bool {
        self.transparent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_produce_the_canonical_attributes_for_each_kind() {
        assert!(!Tile::empty().is_walkable() && Tile::empty().is_transparent());
        assert!(!Tile::wall().is_walkable() && !Tile::wall().is_transparent());
        for tile in [Tile::floor(), Tile::door(), Tile::stairs_down(), Tile::stairs_up()] {
            assert!(tile.is_walkable(), "{:?} should be walkable", tile.kind());
            assert!(tile.is_transparent(), "{:?} should be transparent", tile.kind());
        }
    }

    #[test]
    fn template_codes_decode_to_every_kind_and_reject_unknown_characters() {
        for (code, kind) in [
            ('E', TileKind::Empty),
            ('F', TileKind::Floor),
            ('W', TileKind::Wall),
            ('D', TileKind::Door),
            ('>', TileKind::StairsDown),
            ('<', TileKind::StairsUp),
        ] {
            assert_eq!(TileKind::from_template_code(code), Some(kind));
        }
        assert_eq!(TileKind::from_template_code('x'), None);
        assert_eq!(TileKind::from_template_code(' '), None);
    }
}
