//! Floor-progression controller. A `Session` owns the current floor, its
//! rosters, the player and the run counters, and advances them one fixed
//! tick at a time.

use slotmap::SlotMap;
use tracing::info;

use crate::config::SessionConfig;
use crate::entity::{Enemy, Item, Player};
use crate::error::ConfigError;
use crate::input::{InputSource, Key};
use crate::map::Tilemap;
use crate::mapgen::{DungeonGenerator, GeneratedFloor, Room};
use crate::render::{Canvas, Draw, ScreenOffset};
use crate::rng::GameRng;
use crate::templates::{EntitySpawn, TemplateCatalog};
use crate::types::{EnemyId, ItemId, Pos};

mod enemy_turn;
mod floor_transition;
mod hash;
mod pickups;
mod player_turn;
mod scoring;
mod spawning;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use scoring::compute_score;

pub type PauseCallback = Box<dyn FnMut()>;
pub type GameOverCallback = Box<dyn FnMut(i64)>;

/// Callbacks the caller hands over at construction.
#[derive(Default)]
pub struct SessionHooks {
    on_pause: Option<PauseCallback>,
    on_game_over: Option<GameOverCallback>,
}

impl SessionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pause(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_pause = Some(Box::new(callback));
        self
    }

    pub fn on_game_over(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_game_over = Some(Box::new(callback));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session has not been entered, or has been exited.
    Inactive,
    /// The run already ended; nothing advanced.
    Finished,
    Paused,
    Continued,
    FloorChanged { floor: u32 },
    GameOver { score: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    GameOver { score: i64 },
}

/// Run counters that survive floor transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub current_floor: u32,
    pub deepest_floor: u32,
    pub kills: u32,
    pub bonus_score: i64,
    pub score: i64,
}

impl Progress {
    fn new_run() -> Self {
        Self { current_floor: 1, deepest_floor: 1, kills: 0, bonus_score: 0, score: 0 }
    }
}

/// `current_time` drives move cooldowns and is never reset. `game_time`
/// feeds the score and restarts with each new run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    pub current_time: f64,
    pub game_time: f64,
}

impl SimClock {
    fn advance(&mut self, delta_ms: f64) {
        self.current_time += delta_ms;
        self.game_time += delta_ms;
    }
}

/// Floor-local geometry, replaced wholesale on every transition.
#[derive(Clone, Debug)]
pub struct Level {
    pub floor: u32,
    pub map: Tilemap,
    pub rooms: Vec<Room>,
    pub start: Pos,
    pub stairs_down: Pos,
    pub stairs_up: Option<Pos>,
}

pub struct Session {
    config: SessionConfig,
    catalog: TemplateCatalog,
    rng: GameRng,
    hooks: SessionHooks,
    active: bool,
    status: SessionStatus,
    clock: SimClock,
    progress: Progress,
    level: Level,
    player: Player,
    enemies: SlotMap<EnemyId, Enemy>,
    items: SlotMap<ItemId, Item>,
}

impl Session {
    /// Validates the config and lays out floor 1. The session stays inactive
    /// until `on_enter`.
    pub fn new(
        config: SessionConfig,
        catalog: TemplateCatalog,
        hooks: SessionHooks,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::seed_from_u64(config.seed);
        let generated = DungeonGenerator::new(&catalog, config.map).generate(1, &mut rng);
        let (level, template_spawns) = Level::split(generated);
        let player = Player::new(level.start, &config.player, &level.map);
        let mut session = Self {
            config,
            catalog,
            rng,
            hooks,
            active: false,
            status: SessionStatus::Playing,
            clock: SimClock::default(),
            progress: Progress::new_run(),
            level,
            player,
            enemies: SlotMap::with_key(),
            items: SlotMap::with_key(),
        };
        session.populate_floor(&template_spawns);
        Ok(session)
    }

    /// Activates the session. A run that already ended is replaced by a
    /// fresh one.
    pub fn on_enter(&mut self) {
        if matches!(self.status, SessionStatus::GameOver { .. }) {
            self.begin_run();
        }
        self.active = true;
        info!(floor = self.progress.current_floor, seed = self.config.seed, "session entered");
    }

    pub fn on_exit(&mut self) {
        self.active = false;
        info!(floor = self.progress.current_floor, score = self.progress.score, "session exited");
    }

    /// Advances one simulation tick. Player actions resolve before any enemy
    /// acts, and a floor change ends the tick.
    pub fn update(&mut self, delta_ms: f64, input: &dyn InputSource) -> TickOutcome {
        if !self.active {
            return TickOutcome::Inactive;
        }
        if matches!(self.status, SessionStatus::GameOver { .. }) {
            return TickOutcome::Finished;
        }

        self.clock.advance(delta_ms);

        if input.is_key_pressed(Key::Escape) {
            if let Some(on_pause) = self.hooks.on_pause.as_mut() {
                on_pause();
            }
            return TickOutcome::Paused;
        }

        if let Some(floor) = self.resolve_player_turn(input) {
            self.refresh_score();
            return TickOutcome::FloorChanged { floor };
        }
        self.compact_dead_enemies();

        let player_died = self.resolve_enemy_turn();
        self.refresh_score();
        if player_died {
            return self.finish_run();
        }
        TickOutcome::Continued
    }

    fn finish_run(&mut self) -> TickOutcome {
        let score = self.progress.score;
        self.status = SessionStatus::GameOver { score };
        info!(
            score,
            floor = self.progress.current_floor,
            deepest_floor = self.progress.deepest_floor,
            kills = self.progress.kills,
            "game over"
        );
        if let Some(on_game_over) = self.hooks.on_game_over.as_mut() {
            on_game_over(score);
        }
        TickOutcome::GameOver { score }
    }

    fn compact_dead_enemies(&mut self) {
        self.enemies.retain(|_, enemy| !enemy.stats().is_dead());
    }

    pub(crate) fn live_enemy_at(&self, pos: Pos) -> Option<EnemyId> {
        self.enemies
            .iter()
            .find(|(_, enemy)| enemy.tile() == pos && !enemy.stats().is_dead())
            .map(|(id, _)| id)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn floor(&self) -> u32 {
        self.progress.current_floor
    }

    pub fn score(&self) -> i64 {
        self.progress.score
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn map(&self) -> &Tilemap {
        &self.level.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> {
        self.enemies.iter()
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }
}

impl Draw for Session {
    fn draw(&self, canvas: &mut dyn Canvas, offset: ScreenOffset) {
        self.level.map.draw(canvas, offset);
        for item in self.items.values() {
            item.draw(canvas, offset);
        }
        for enemy in self.enemies.values() {
            enemy.draw(canvas, offset);
        }
        self.player.draw(canvas, offset);
    }
}

impl Level {
    /// Separates the persistent geometry from the one-shot template spawns.
    fn split(generated: GeneratedFloor) -> (Self, Vec<EntitySpawn>) {
        let GeneratedFloor {
            floor,
            map,
            rooms,
            start,
            stairs_down,
            stairs_up,
            template_spawns,
            ..
        } = generated;
        (Self { floor, map, rooms, start, stairs_down, stairs_up }, template_spawns)
    }
}
