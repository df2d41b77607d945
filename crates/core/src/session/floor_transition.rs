//! Floor-change mechanics.
//! This module exists to swap floor-local state wholesale while the player's
//! stats, the run counters and the simulation clock carry over.
//! It does not own generation; the dungeon generator builds every floor.

use tracing::info;

use super::*;

impl Session {
    /// Moves one floor deeper and returns the new floor number.
    pub fn descend(&mut self) -> u32 {
        self.progress.current_floor += 1;
        self.progress.deepest_floor = self.progress.deepest_floor.max(self.progress.current_floor);
        self.enter_floor(self.progress.current_floor);
        self.progress.current_floor
    }

    /// Moves one floor up. Floor 1 has nowhere to go, so this returns `None`
    /// and leaves everything untouched.
    pub fn ascend(&mut self) -> Option<u32> {
        if self.progress.current_floor <= 1 {
            return None;
        }
        self.progress.current_floor -= 1;
        self.enter_floor(self.progress.current_floor);
        Some(self.progress.current_floor)
    }

    fn enter_floor(&mut self, floor: u32) {
        let generated =
            DungeonGenerator::new(&self.catalog, self.config.map).generate(floor, &mut self.rng);
        info!(floor, deepest_floor = self.progress.deepest_floor, "entered floor");
        self.install_floor(generated);
    }

    /// Replaces the level and both rosters. The player keeps its stats and
    /// cooldown and is placed on the new start tile.
    fn install_floor(&mut self, generated: GeneratedFloor) {
        let (level, template_spawns) = Level::split(generated);
        self.level = level;
        self.player.entity_mut().set_tile_position(self.level.start, &self.level.map);
        self.enemies = SlotMap::with_key();
        self.items = SlotMap::with_key();
        self.populate_floor(&template_spawns);
    }

    /// Starts over from floor 1 with a fresh player. The simulation clock
    /// keeps running; only game time restarts.
    pub(super) fn begin_run(&mut self) {
        self.progress = Progress::new_run();
        self.clock.game_time = 0.0;
        self.status = SessionStatus::Playing;
        let generated =
            DungeonGenerator::new(&self.catalog, self.config.map).generate(1, &mut self.rng);
        let (level, template_spawns) = Level::split(generated);
        self.player = Player::new(level.start, &self.config.player, &level.map);
        self.level = level;
        self.enemies = SlotMap::with_key();
        self.items = SlotMap::with_key();
        self.populate_floor(&template_spawns);
        info!(seed = self.config.seed, "new run started");
    }
}
