//! Polled input seam. The simulation reads keys through `InputSource` once
//! per tick and never talks to a windowing layer directly.

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

pub trait InputSource {
    /// Level-triggered: held this tick.
    fn is_key_down(&self, key: Key) -> bool;
    /// Edge-triggered: went down this tick.
    fn is_key_pressed(&self, key: Key) -> bool;
    /// Edge-triggered: went up this tick.
    fn is_key_released(&self, key: Key) -> bool;
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;
    fn mouse_position(&self) -> (f32, f32);
}

/// Plain-data input state for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub down: BTreeSet<Key>,
    pub pressed: BTreeSet<Key>,
    pub released: BTreeSet<Key>,
    pub mouse_pressed: BTreeSet<MouseButton>,
    pub mouse_position: (f32, f32),
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    /// A key that is held and went down this tick.
    pub fn holding(key: Key) -> Self {
        Self::default().with_down(key).with_pressed(key)
    }

    pub fn with_down(mut self, key: Key) -> Self {
        self.down.insert(key);
        self
    }

    pub fn with_pressed(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self
    }

    pub fn with_released(mut self, key: Key) -> Self {
        self.released.insert(key);
        self
    }
}

impl InputSource for InputSnapshot {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn is_key_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}
