//! A frozen copy of everything the renderer needs from the game state.
//!
//! The game loop thread owns the live [`GameState`]; the render thread
//! refreshes this snapshot under a short read lock once per drawn frame
//! and works from the copy for the rest of the frame.

use glam::Vec3;

use crate::{
    game_state::{GameState, GameStatus, Lamp, LAMP_COUNT},
    lighting::Spotlight,
};

#[derive(Clone, Debug)]
pub struct RenderState {
    pub robot_position: Vec3,
    pub robot_heading: Vec3,
    pub robot_yaw: f32,
    pub collectibles: Vec<Vec3>,
    pub lamps: [Lamp; LAMP_COUNT],
    pub spotlight: Spotlight,
    pub battery_fraction: f32,
    pub status: GameStatus,
}

impl RenderState {
    #[must_use]
    pub fn new(game_state: &GameState) -> Self {
        Self {
            robot_position: game_state.robot.position,
            robot_heading: game_state.robot.heading,
            robot_yaw: game_state.robot.yaw(),
            collectibles: game_state.collectibles.positions().to_vec(),
            lamps: game_state.lamps,
            spotlight: Spotlight::from_robot(&game_state.robot),
            battery_fraction: game_state.battery.fraction(),
            status: game_state.status(),
        }
    }

    pub fn update(&mut self, game_state: &GameState) {
        self.robot_position = game_state.robot.position;
        self.robot_heading = game_state.robot.heading;
        self.robot_yaw = game_state.robot.yaw();
        // reuses the allocation from the previous frame
        self.collectibles.clear();
        self.collectibles
            .extend_from_slice(game_state.collectibles.positions());
        self.lamps = game_state.lamps;
        self.spotlight = Spotlight::from_robot(&game_state.robot);
        self.battery_fraction = game_state.battery.fraction();
        self.status = game_state.status();
    }
}
