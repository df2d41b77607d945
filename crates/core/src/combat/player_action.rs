use crate::input::{InputSource, Key};
use crate::types::{Direction, Pos, chebyshev, manhattan};

const DIRECTION_KEYS: [(Direction, Key, Key); 4] = [
    (Direction::Up, Key::KeyW, Key::ArrowUp),
    (Direction::Down, Key::KeyS, Key::ArrowDown),
    (Direction::Left, Key::KeyA, Key::ArrowLeft),
    (Direction::Right, Key::KeyD, Key::ArrowRight),
];

/// First held direction in up, down, left, right order. Diagonals are never
/// combined.
pub fn read_direction(input: &dyn InputSource) -> Option<Direction> {
    DIRECTION_KEYS
        .iter()
        .find(|(_, letter, arrow)| input.is_key_down(*letter) || input.is_key_down(*arrow))
        .map(|(direction, _, _)| *direction)
}

pub fn area_attack_requested(input: &dyn InputSource) -> bool {
    input.is_key_pressed(Key::Space)
}

/// Candidates standing on one of the eight tiles around `center`.
pub fn adjacent_targets<T: Copy>(
    center: Pos,
    candidates: impl IntoIterator<Item = (T, Pos)>,
) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|(_, pos)| chebyshev(center, *pos) == 1)
        .map(|(id, _)| id)
        .collect()
}

/// Candidates within `radius` cardinal steps of `center`, excluding nothing.
pub fn burst_targets<T: Copy>(
    center: Pos,
    radius: u32,
    candidates: impl IntoIterator<Item = (T, Pos)>,
) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|(_, pos)| manhattan(center, *pos) <= radius)
        .map(|(id, _)| id)
        .collect()
}
