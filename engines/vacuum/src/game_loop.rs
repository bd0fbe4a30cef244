//! Fixed-rate game loop, running on its own thread.

use std::{
    sync::{
        mpsc::{Receiver, TryRecvError},
        Arc, RwLock,
    },
    thread,
    time::{Duration, Instant},
};

use robovac_framework_common::{
    event::{ApplicationEvent, FrameworkEvent},
    input::InputState,
};

use crate::game_state::GameState;

pub const TICKS_PER_SECOND: u64 = 60;
pub const TICK_DURATION: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND);

/// Drives the [`GameState`] at a fixed tick rate.
///
/// The loop is the single writer of the shared state; the renderer only
/// ever takes read locks. Input events arrive through an mpsc channel
/// fed by the window shell.
pub struct GameLoop {
    pub game_state: Arc<RwLock<GameState>>,
    input: InputState,
}

impl GameLoop {
    #[must_use]
    pub fn new(game_state: Arc<RwLock<GameState>>) -> Self {
        Self {
            game_state,
            input: InputState::default(),
        }
    }

    /// Runs until the event source disconnects or an exit event arrives.
    pub fn run(&mut self, event_source: &Receiver<FrameworkEvent>) {
        log::info!("game loop starting at {TICKS_PER_SECOND} ticks/s");
        let mut timestamp = Instant::now();
        'game_loop: loop {
            'next_event: loop {
                match event_source.try_recv() {
                    Ok(FrameworkEvent::Window { event }) => {
                        self.input.handle_window_event(&event);
                    }
                    Ok(FrameworkEvent::Application {
                        event: ApplicationEvent::Exit,
                    }) => {
                        log::info!("game loop received exit event");
                        break 'game_loop;
                    }
                    Err(TryRecvError::Empty) => break 'next_event,
                    Err(TryRecvError::Disconnected) => {
                        log::info!("event source disconnected, stopping game loop");
                        break 'game_loop;
                    }
                }
            }

            let input = self.input.snapshot();
            {
                #[expect(
                    clippy::expect_used,
                    reason = "a poisoned lock means the render thread already panicked"
                )]
                let mut game_state = self
                    .game_state
                    .write()
                    .expect("game state lock is poisoned");
                game_state.update(&input);
            }

            timestamp += TICK_DURATION;
            if let Some(remaining) = timestamp.checked_duration_since(Instant::now()) {
                thread::sleep(remaining);
            } else {
                log::warn!("game loop is running behind");
                timestamp = Instant::now();
            }
        }
        log::debug!("game loop stopped");
    }
}
