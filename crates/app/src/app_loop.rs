//! Frame pacing and the play / pause / game-over mode switch. Nothing here
//! touches the window, so the whole loop runs under plain unit tests.

use delve_core::input::{InputSource, Key, MouseButton};
use delve_core::session::{Session, TickOutcome};
use tracing::info;

/// Simulation step: sixty updates per second regardless of frame rate.
pub const TICK_MS: f64 = 1000.0 / 60.0;
/// Frames longer than this are clamped so a stall cannot queue a burst of
/// catch-up ticks.
const MAX_FRAME_MS: f64 = 250.0;

/// Fixed-timestep accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    step_ms: f64,
    accumulator_ms: f64,
}

impl FixedStep {
    pub fn new(step_ms: f64) -> Self {
        debug_assert!(step_ms > 0.0);
        Self { step_ms, accumulator_ms: 0.0 }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Banks one frame's elapsed time and returns how many whole ticks are
    /// now due.
    pub fn advance(&mut self, frame_ms: f64) -> u32 {
        self.accumulator_ms += frame_ms.clamp(0.0, MAX_FRAME_MS);
        let mut due = 0;
        while self.accumulator_ms >= self.step_ms {
            self.accumulator_ms -= self.step_ms;
            due += 1;
        }
        due
    }

    /// Fraction of a tick left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f64 {
        self.accumulator_ms / self.step_ms
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    Paused,
    GameOver {
        score: i64,
    },
}

/// App-level keys read outside the simulation's input seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameKeys {
    /// Escape went down this frame.
    pub toggle_pause: bool,
    /// Enter went down this frame.
    pub restart: bool,
}

/// Edge-triggered keys belong to the first tick of a frame only; later ticks
/// of the same frame see held keys and nothing else.
struct HeldOnly<'a>(&'a dyn InputSource);

impl InputSource for HeldOnly<'_> {
    fn is_key_down(&self, key: Key) -> bool {
        self.0.is_key_down(key)
    }

    fn is_key_pressed(&self, _: Key) -> bool {
        false
    }

    fn is_key_released(&self, _: Key) -> bool {
        false
    }

    fn is_mouse_button_pressed(&self, _: MouseButton) -> bool {
        false
    }

    fn mouse_position(&self) -> (f32, f32) {
        self.0.mouse_position()
    }
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    step: FixedStep,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(&self) -> f64 {
        self.step.alpha()
    }

    /// Handles one rendered frame: mode keys first, then every tick the
    /// accumulator owes while playing. Returns the number of ticks run.
    pub fn frame(
        &mut self,
        session: &mut Session,
        frame_ms: f64,
        input: &dyn InputSource,
        keys: FrameKeys,
    ) -> u32 {
        match self.mode {
            AppMode::Paused => {
                if keys.toggle_pause {
                    info!("resumed");
                    self.step.reset();
                    session.on_enter();
                    self.mode = AppMode::Playing;
                }
                return 0;
            }
            AppMode::GameOver { .. } => {
                if keys.restart {
                    self.step.reset();
                    session.on_exit();
                    session.on_enter();
                    self.mode = AppMode::Playing;
                }
                return 0;
            }
            AppMode::Playing => {}
        }

        let due = self.step.advance(frame_ms);
        for tick in 0..due {
            let outcome = if tick == 0 {
                session.update(self.step.step_ms(), input)
            } else {
                session.update(self.step.step_ms(), &HeldOnly(input))
            };
            match outcome {
                TickOutcome::Paused => {
                    session.on_exit();
                    self.mode = AppMode::Paused;
                    return tick + 1;
                }
                TickOutcome::GameOver { score } => {
                    self.mode = AppMode::GameOver { score };
                    return tick + 1;
                }
                TickOutcome::Continued
                | TickOutcome::FloorChanged { .. }
                | TickOutcome::Inactive
                | TickOutcome::Finished => {}
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use delve_core::input::InputSnapshot;

    use super::*;

    #[test]
    fn later_ticks_of_a_frame_see_held_keys_but_no_edges() {
        let snapshot = InputSnapshot::holding(Key::Space).with_released(Key::KeyW);
        let held = HeldOnly(&snapshot);
        assert!(held.is_key_down(Key::Space));
        assert!(!held.is_key_pressed(Key::Space));
        assert!(!held.is_key_released(Key::KeyW));
    }

    #[test]
    fn accumulator_releases_whole_ticks_and_keeps_the_remainder() {
        let mut step = FixedStep::new(10.0);
        assert_eq!(step.advance(25.0), 2);
        assert!((step.alpha() - 0.5).abs() < 1e-9);
        assert_eq!(step.advance(5.0), 1);
        assert_eq!(step.alpha(), 0.0);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut step = FixedStep::new(10.0);
        assert_eq!(step.advance(10_000.0), 25);
        assert_eq!(step.advance(-5.0), 0);
    }

    #[test]
    fn reset_drops_banked_time() {
        let mut step = FixedStep::new(10.0);
        step.advance(9.0);
        step.reset();
        assert_eq!(step.advance(9.0), 0);
    }
}
