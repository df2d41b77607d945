//! Drawing seam. Renderable values describe themselves through `Canvas`
//! calls offset by a camera translation; the core never touches pixels.

use crate::entity::{Appearance, Enemy, Item, Player};
use crate::map::{TileKind, Tilemap};
use crate::types::WorldPos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r: r as f32 / 255.0, g: g as f32 / 255.0, b: b as f32 / 255.0, a: 1.0 }
    }
}

/// Screen-space translation applied to world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenOffset {
    pub x: f32,
    pub y: f32,
}

pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        thickness: f32,
        color: Color,
    );
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas, offset: ScreenOffset);
}

pub mod palette {
    use super::Color;
    use crate::entity::Appearance;
    use crate::map::TileKind;
    use crate::types::{EnemyKind, ItemKind};

    pub const BACKGROUND: Color = Color::rgb(0x0a, 0x0a, 0x0a);
    pub const BOSS_OUTLINE: Color = Color::rgb(0xff, 0x66, 0x00);

    pub fn tile(kind: TileKind) -> Option<Color> {
        match kind {
            TileKind::Empty => None,
            TileKind::Floor => Some(Color::rgb(0x2a, 0x2a, 0x3e)),
            TileKind::Wall => Some(Color::rgb(0x4a, 0x4a, 0x6e)),
            TileKind::Door => Some(Color::rgb(0x8b, 0x69, 0x14)),
            TileKind::StairsDown => Some(Color::rgb(0xff, 0xd7, 0x00)),
            TileKind::StairsUp => Some(Color::rgb(0x00, 0xbf, 0xff)),
        }
    }

    pub fn player_appearance() -> Appearance {
        Appearance { color: Color::rgb(0x64, 0x6c, 0xff), size: 24.0 }
    }

    pub fn enemy_appearance(kind: EnemyKind) -> Appearance {
        let color = match kind {
            EnemyKind::Goblin => Color::rgb(0x00, 0xff, 0x00),
            EnemyKind::Orc => Color::rgb(0xff, 0x66, 0x00),
            EnemyKind::Skeleton => Color::rgb(0xcc, 0xcc, 0xcc),
        };
        Appearance { color, size: 24.0 }
    }

    pub fn boss_appearance() -> Appearance {
        Appearance { color: Color::rgb(0xff, 0x00, 0x00), size: 32.0 }
    }

    pub fn item(kind: ItemKind) -> Color {
        match kind {
            ItemKind::HealthPotion => Color::rgb(0xff, 0x00, 0x88),
            ItemKind::ManaPotion => Color::rgb(0x00, 0x88, 0xff),
            ItemKind::Gold => Color::rgb(0xff, 0xdd, 0x00),
            ItemKind::Sword => Color::rgb(0xc0, 0xc0, 0xc0),
            ItemKind::Axe | ItemKind::LeatherArmor => Color::rgb(0x8b, 0x45, 0x13),
            ItemKind::Dagger => Color::rgb(0xe0, 0xe0, 0xe0),
            ItemKind::ChainMail => Color::rgb(0xa0, 0xa0, 0xa0),
            ItemKind::PlateArmor => Color::rgb(0xd0, 0xd0, 0xd0),
            ItemKind::Key => Color::rgb(0xff, 0xd7, 0x00),
            ItemKind::ScrollTeleport => Color::rgb(0x93, 0x70, 0xdb),
            ItemKind::ScrollFireball => Color::rgb(0xff, 0x45, 0x00),
            ItemKind::RingRegeneration => Color::rgb(0x00, 0xff, 0x00),
            ItemKind::AmuletProtection => Color::rgb(0x41, 0x69, 0xe1),
        }
    }
}

const ITEM_SIZE: f32 = 12.0;

impl Draw for Tilemap {
    fn draw(&self, canvas: &mut dyn Canvas, offset: ScreenOffset) {
        let size = self.tile_size() as f32;
        for (pos, tile) in self.cells() {
            let Some(color) = palette::tile(tile.kind()) else {
                continue;
            };
            let x = pos.x as f32 * size + offset.x;
            let y = pos.y as f32 * size + offset.y;
            canvas.fill_rect(x, y, size, size, color);
            if tile.kind() == TileKind::StairsDown || tile.kind() == TileKind::StairsUp {
                let glyph = if tile.kind() == TileKind::StairsDown { ">" } else { "<" };
                let (glyph_x, glyph_y) = (x + size * 0.3, y + size * 0.75);
                canvas.fill_text(glyph, glyph_x, glyph_y, size * 0.6, palette::BACKGROUND);
            }
        }
    }
}

impl Draw for Item {
    fn draw(&self, canvas: &mut dyn Canvas, offset: ScreenOffset) {
        if self.is_collected() {
            return;
        }
        let world = self.world();
        canvas.fill_rect(
            world.x - ITEM_SIZE / 2.0 + offset.x,
            world.y - ITEM_SIZE / 2.0 + offset.y,
            ITEM_SIZE,
            ITEM_SIZE,
            palette::item(self.kind()),
        );
    }
}

impl Draw for Player {
    fn draw(&self, canvas: &mut dyn Canvas, offset: ScreenOffset) {
        draw_body(canvas, self.entity().world(), self.entity().appearance(), offset);
    }
}

impl Draw for Enemy {
    fn draw(&self, canvas: &mut dyn Canvas, offset: ScreenOffset) {
        let world = self.entity().world();
        let appearance = self.entity().appearance();
        draw_body(canvas, world, appearance, offset);
        if self.is_boss() {
            let half = appearance.size / 2.0;
            canvas.stroke_rect(
                world.x - half + offset.x,
                world.y - half + offset.y,
                appearance.size,
                appearance.size,
                3.0,
                palette::BOSS_OUTLINE,
            );
            canvas.fill_text(
                self.name(),
                world.x - half + offset.x,
                world.y - half - 16.0 + offset.y,
                12.0,
                Color::WHITE,
            );
        }
    }
}

fn draw_body(
    canvas: &mut dyn Canvas,
    world: WorldPos,
    appearance: Appearance,
    offset: ScreenOffset,
) {
    let half = appearance.size / 2.0;
    canvas.fill_rect(
        world.x - half + offset.x,
        world.y - half + offset.y,
        appearance.size,
        appearance.size,
        appearance.color,
    );
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Canvas, Color};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Fill { x: f32, y: f32, width: f32, height: f32, color: Color },
        Stroke { x: f32, y: f32, thickness: f32 },
        Text { text: String },
    }

    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub(crate) calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.calls.push(DrawCall::Fill { x, y, width, height, color });
        }

        fn stroke_rect(&mut self, x: f32, y: f32, _: f32, _: f32, thickness: f32, _: Color) {
            self.calls.push(DrawCall::Stroke { x, y, thickness });
        }

        fn fill_text(&mut self, text: &str, _: f32, _: f32, _: f32, _: Color) {
            self.calls.push(DrawCall::Text { text: text.to_string() });
        }
    }
}
