//! Keyboard and mouse polling for one rendered frame.

use delve_app::app_loop::FrameKeys;
use delve_core::input::{InputSource, Key, MouseButton};
use macroquad::prelude::{
    KeyCode, MouseButton as MqMouseButton, is_key_down, is_key_pressed, is_key_released,
    is_mouse_button_pressed, mouse_position,
};

fn key_code(key: Key) -> KeyCode {
    match key {
        Key::KeyW => KeyCode::W,
        Key::KeyA => KeyCode::A,
        Key::KeyS => KeyCode::S,
        Key::KeyD => KeyCode::D,
        Key::ArrowUp => KeyCode::Up,
        Key::ArrowDown => KeyCode::Down,
        Key::ArrowLeft => KeyCode::Left,
        Key::ArrowRight => KeyCode::Right,
        Key::Space => KeyCode::Space,
        Key::Escape => KeyCode::Escape,
    }
}

fn mouse_button(button: MouseButton) -> MqMouseButton {
    match button {
        MouseButton::Left => MqMouseButton::Left,
        MouseButton::Right => MqMouseButton::Right,
        MouseButton::Middle => MqMouseButton::Middle,
    }
}

/// Live view of macroquad's input state, queried by the simulation.
pub struct MacroquadInput;

impl InputSource for MacroquadInput {
    fn is_key_down(&self, key: Key) -> bool {
        is_key_down(key_code(key))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        is_key_pressed(key_code(key))
    }

    fn is_key_released(&self, key: Key) -> bool {
        is_key_released(key_code(key))
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        is_mouse_button_pressed(mouse_button(button))
    }

    fn mouse_position(&self) -> (f32, f32) {
        mouse_position()
    }
}

pub fn capture_frame_keys() -> FrameKeys {
    FrameKeys {
        toggle_pause: is_key_pressed(KeyCode::Escape),
        restart: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
    }
}
