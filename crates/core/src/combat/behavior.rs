use crate::config::CreatureTuning;
use crate::map::Tilemap;
use crate::types::{Pos, chebyshev, manhattan};

/// Tuning for the shared enemy routine. Regular enemies and bosses differ
/// only in these numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehaviorConfig {
    pub move_delay_ms: f64,
    pub aggro_range: u32,
    pub is_boss: bool,
}

impl BehaviorConfig {
    pub const ENEMY: Self = Self::from_tuning(CreatureTuning::ENEMY, false);
    pub const BOSS: Self = Self::from_tuning(CreatureTuning::BOSS, true);

    pub const fn from_tuning(tuning: CreatureTuning, is_boss: bool) -> Self {
        Self { move_delay_ms: tuning.move_delay_ms, aggro_range: tuning.aggro_range, is_boss }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    Idle,
    Move { to: Pos },
    Attack,
}

impl EnemyAction {
    /// Whether acting this way restarts the move cooldown.
    pub fn stamps_cooldown(self) -> bool {
        !matches!(self, EnemyAction::Idle)
    }
}

/// Everything one enemy can see when deciding.
pub struct Perception<'a> {
    pub position: Pos,
    pub last_move_time: f64,
    pub now: f64,
    pub player: Pos,
    pub map: &'a Tilemap,
}

/// Decides one enemy's action. `None` means the enemy is still cooling down
/// and does nothing at all this tick. `is_occupied` must answer for tiles
/// held by other enemies, never the deciding enemy itself.
pub fn decide(
    config: &BehaviorConfig,
    view: &Perception<'_>,
    is_occupied: impl Fn(Pos) -> bool,
) -> Option<EnemyAction> {
    if view.now - view.last_move_time < config.move_delay_ms {
        return None;
    }
    if manhattan(view.position, view.player) > config.aggro_range {
        return Some(EnemyAction::Idle);
    }
    if chebyshev(view.position, view.player) == 1 {
        return Some(EnemyAction::Attack);
    }

    let dx = (view.player.x - view.position.x).signum();
    let dy = (view.player.y - view.position.y).signum();
    let primary = (dx, dy);
    let fallbacks = [(dx, 0), (0, dy)]
        .into_iter()
        .filter(|&step| step != (0, 0) && step != primary);
    for (step_x, step_y) in [primary].into_iter().chain(fallbacks) {
        let to = view.position.offset(step_x, step_y);
        if view.map.is_walkable_at(to) && !is_occupied(to) {
            return Some(EnemyAction::Move { to });
        }
    }
    Some(EnemyAction::Idle)
}
