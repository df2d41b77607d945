//! Enemy decision making and player action reading.
//! This module decides what should happen; applying the outcome to the
//! roster belongs to the session.

mod behavior;
mod player_action;

pub use behavior::{BehaviorConfig, EnemyAction, Perception, decide};
pub use player_action::{adjacent_targets, area_attack_requested, burst_targets, read_direction};
