//! Entry point: starts the game loop thread and the window shell and
//! connects them with an event channel.

mod error;

use std::{
    sync::{mpsc, Arc, RwLock},
    thread,
};

use engine_vacuum::{
    game_loop::GameLoop, game_state::GameState, renderer::VacuumRendererBuilder,
};
use robovac_framework::{application::Application, logging::init_logger};

use crate::error::ApplicationError;

const TITLE: &str = "Vacuum Cleaner Simulator";

fn main() -> Result<(), ApplicationError> {
    init_logger();

    let game_state = Arc::new(RwLock::new(GameState::new()));
    let (event_sender, event_receiver) = mpsc::channel();

    let mut game_loop = GameLoop::new(Arc::clone(&game_state));
    let game_loop_thread = thread::spawn(move || game_loop.run(&event_receiver));

    let renderer_builder = VacuumRendererBuilder { game_state };
    Application::new(TITLE, event_sender, renderer_builder).run()?;

    // The shell sends an exit event before `run` returns, so this join
    // only blocks for the remainder of the current tick.
    game_loop_thread
        .join()
        .map_err(|_| ApplicationError::GameLoopPanicked)?;
    log::info!("shut down cleanly");
    Ok(())
}
