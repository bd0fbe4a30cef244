//! The complete, self-contained state of one game session.

use std::fmt::{self, Display, Formatter};

use rand::{rngs::StdRng, SeedableRng};
use robovac_framework_common::input::InputSnapshot;

pub mod battery;
pub mod collectibles;
pub mod lamps;
pub mod robot;

pub use battery::Battery;
pub use collectibles::Collectibles;
pub use lamps::{Lamp, LAMP_COUNT, WALL_LAMPS};
pub use robot::Robot;

use collectibles::COLLECTIBLE_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    /// The battery ran out before the floor was clean.
    Depleted,
    /// Every object has been collected.
    Cleared,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver(GameOverReason),
}

/// Snapshot of everything the presentation layer reports about the
/// session. The window title is one consumer; nothing in here may
/// assume it is the only one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameStatus {
    pub phase: GamePhase,
    pub score: u32,
    pub battery_percent: f32,
}

impl Display for GameStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self.phase {
            GamePhase::Playing => write!(
                formatter,
                "Score: {} | Battery: {:.0}%",
                self.score, self.battery_percent
            ),
            GamePhase::GameOver(GameOverReason::Depleted) => write!(
                formatter,
                "Battery empty! Score: {} | Press R to restart",
                self.score
            ),
            GamePhase::GameOver(GameOverReason::Cleared) => write!(
                formatter,
                "All clean! Score: {} | Press R to restart",
                self.score
            ),
        }
    }
}

/// The world: robot, collectibles, battery, score and phase, plus the
/// static lamp setup. Mutated only through [`GameState::update`], one
/// call per game tick.
#[derive(Debug)]
pub struct GameState {
    pub robot: Robot,
    pub collectibles: Collectibles,
    pub battery: Battery,
    pub score: u32,
    pub phase: GamePhase,
    pub lamps: [Lamp; LAMP_COUNT],
    rng: StdRng,
}

impl GameState {
    /// A fresh, entropy-seeded session.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A session with a deterministic object layout.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let collectibles = Collectibles::scatter(&mut rng, COLLECTIBLE_COUNT);
        Self {
            robot: Robot::new(),
            collectibles,
            battery: Battery::new(),
            score: 0,
            phase: GamePhase::Playing,
            lamps: WALL_LAMPS,
            rng,
        }
    }

    /// Advances the world by one tick.
    ///
    /// During game over only the restart signal is honored; everything
    /// else freezes, including battery drain.
    pub fn update(&mut self, input: &InputSnapshot) {
        if let GamePhase::GameOver(_) = self.phase {
            if input.restart {
                self.restart();
            }
            return;
        }

        self.robot.apply(input);
        self.score += self.collectibles.collect_near(self.robot.position);
        self.battery.drain();

        // Both terminal conditions are checked every tick; when both
        // become true on the same tick, depletion wins.
        if self.battery.is_depleted() {
            self.phase = GamePhase::GameOver(GameOverReason::Depleted);
            log::info!("battery depleted at score {}", self.score);
        } else if self.collectibles.is_empty() {
            self.phase = GamePhase::GameOver(GameOverReason::Cleared);
            log::info!("floor cleared at score {}", self.score);
        }
    }

    fn restart(&mut self) {
        self.robot = Robot::new();
        self.collectibles = Collectibles::scatter(&mut self.rng, COLLECTIBLE_COUNT);
        self.battery.reset();
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("session restarted");
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            phase: self.phase,
            score: self.score,
            battery_percent: self.battery.percent(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
