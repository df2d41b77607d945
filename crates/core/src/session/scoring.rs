//! Kill bookkeeping and the score formula.

use tracing::debug;

use super::*;
use crate::content::KILL_SCORE;

/// Whole seconds of play, ten points a kill, plus one-off bonuses.
pub fn compute_score(game_time_ms: f64, kills: u32, bonus: i64) -> i64 {
    (game_time_ms / 1000.0).floor() as i64 + i64::from(kills) * KILL_SCORE + bonus
}

impl Session {
    pub(super) fn record_kill(&mut self, name: &str, bonus: i64) {
        self.progress.kills += 1;
        self.progress.bonus_score += bonus;
        debug!(enemy = name, bonus, kills = self.progress.kills, "enemy defeated");
    }

    pub(super) fn refresh_score(&mut self) {
        self.progress.score =
            compute_score(self.clock.game_time, self.progress.kills, self.progress.bonus_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BOSS_KILL_BONUS;

    #[test]
    fn score_counts_whole_seconds_kills_and_bonus() {
        assert_eq!(compute_score(0.0, 0, 0), 0);
        assert_eq!(compute_score(999.9, 0, 0), 0);
        assert_eq!(compute_score(12_500.0, 3, 50), 12 + 30 + 50);
    }

    #[test]
    fn boss_bonus_stacks_on_the_per_kill_score() {
        assert_eq!(compute_score(0.0, 1, BOSS_KILL_BONUS), 110);
    }
}
