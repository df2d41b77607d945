mod frame_input;
mod ui_render;
mod window_config;

use std::path::Path;

use delve_app::app_loop::{AppMode, AppState};
use delve_app::{CONFIG_FILE, format_snapshot_hash, init_tracing, load_session_config};
use delve_core::TemplateCatalog;
use delve_core::session::{Session, SessionHooks};
use frame_input::{MacroquadInput, capture_frame_keys};
use macroquad::prelude::{get_frame_time, next_frame};
use tracing::{error, info};
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    init_tracing();
    let config = load_session_config(Path::new(CONFIG_FILE));
    let hooks = SessionHooks::new()
        .on_pause(|| info!("paused"))
        .on_game_over(|score| info!(score, "run over"));
    let mut session = match Session::new(config, TemplateCatalog::builtin(), hooks) {
        Ok(session) => session,
        Err(err) => {
            error!(error = %err, "could not start a session");
            return;
        }
    };
    let mut app = AppState::new();
    session.on_enter();

    loop {
        let frame_ms = f64::from(get_frame_time()) * 1000.0;
        let was_over = matches!(app.mode, AppMode::GameOver { .. });
        app.frame(&mut session, frame_ms, &MacroquadInput, capture_frame_keys());
        if !was_over && let AppMode::GameOver { score } = app.mode {
            let hash = format_snapshot_hash(session.snapshot_hash());
            info!(score, floor = session.floor(), %hash, "final snapshot");
        }
        ui_render::draw_frame(&session, app.mode);
        next_frame().await
    }
}
