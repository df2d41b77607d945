//! Draws the session through the core canvas seam, plus the HUD and mode
//! overlays.

use delve_app::app_loop::AppMode;
use delve_core::render::{self, Canvas, Draw, ScreenOffset, palette};
use delve_core::session::Session;
use macroquad::prelude::{
    Color as MqColor, GRAY, WHITE, clear_background, draw_rectangle, draw_rectangle_lines,
    draw_text, measure_text, screen_height, screen_width,
};

const HUD_FONT_SIZE: f32 = 20.0;
const HUD_LINE_STEP: f32 = 22.0;
const HUD_PAD: f32 = 12.0;
const OVERLAY_SHADE: MqColor = MqColor { r: 0.0, g: 0.0, b: 0.0, a: 0.6 };

fn to_macroquad(color: render::Color) -> MqColor {
    MqColor::new(color.r, color.g, color.b, color.a)
}

/// `Canvas` over macroquad's immediate-mode shape calls.
pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: render::Color) {
        draw_rectangle(x, y, width, height, to_macroquad(color));
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        thickness: f32,
        color: render::Color,
    ) {
        draw_rectangle_lines(x, y, width, height, thickness, to_macroquad(color));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: render::Color) {
        draw_text(text, x, y, size, to_macroquad(color));
    }
}

/// Camera translation that keeps the player in the middle of the window.
fn follow_player(session: &Session) -> ScreenOffset {
    let world = session.player().entity().world();
    ScreenOffset { x: screen_width() / 2.0 - world.x, y: screen_height() / 2.0 - world.y }
}

pub fn draw_frame(session: &Session, mode: AppMode) {
    clear_background(to_macroquad(palette::BACKGROUND));
    session.draw(&mut MacroquadCanvas, follow_player(session));
    draw_hud(session);
    match mode {
        AppMode::Playing => {}
        AppMode::Paused => draw_overlay(&["PAUSED", "Esc to resume"]),
        AppMode::GameOver { score } => {
            draw_overlay(&["GAME OVER", &format!("Score: {score}"), "Enter to play again"]);
        }
    }
}

fn draw_hud(session: &Session) {
    let stats = session.player().stats();
    let progress = session.progress();
    let lines = [
        format!("Floor {} (deepest {})", progress.current_floor, progress.deepest_floor),
        format!("HP {}/{}", stats.health(), stats.max_health()),
        format!("ATK {}  DEF {}", stats.attack(), stats.defense()),
        format!("Score {}  Kills {}", progress.score, progress.kills),
    ];
    let bar_width = 160.0;
    draw_rectangle(HUD_PAD, HUD_PAD, bar_width, 8.0, GRAY);
    draw_rectangle(
        HUD_PAD,
        HUD_PAD,
        bar_width * stats.health_percentage(),
        8.0,
        to_macroquad(palette::player_appearance().color),
    );
    for (index, line) in lines.iter().enumerate() {
        let y = HUD_PAD + 8.0 + HUD_LINE_STEP * (index as f32 + 1.0);
        draw_text(line, HUD_PAD, y, HUD_FONT_SIZE, WHITE);
    }
}

fn draw_overlay(lines: &[&str]) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY_SHADE);
    let top = screen_height() / 2.0 - HUD_LINE_STEP * lines.len() as f32;
    for (index, line) in lines.iter().enumerate() {
        let size = if index == 0 { HUD_FONT_SIZE * 2.0 } else { HUD_FONT_SIZE };
        let width = measure_text(line, None, size as u16, 1.0).width;
        let y = top + HUD_LINE_STEP * 1.5 * index as f32;
        draw_text(line, (screen_width() - width) / 2.0, y, size, WHITE);
    }
}
