use glam::{Quat, Vec3};
use robovac_framework_common::input::InputSnapshot;

/// Distance travelled per tick while a movement key is held.
pub const SPEED: f32 = 0.05;

/// The floor is a 20x20 quad; the robot center stays one unit short of
/// its edge on both axes.
pub const FLOOR_BOUND: f32 = 9.0;

/// Heading rotation per tick while a turn key is held, in degrees.
const TURN_STEP_DEGREES: f32 = 1.0;

const START_POSITION: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const START_HEADING: Vec3 = Vec3::NEG_Z;

/// The player-controlled vacuum robot.
///
/// The heading is a unit vector rotated only about the vertical axis, so
/// its Y component stays zero and its length stays one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Robot {
    pub position: Vec3,
    pub heading: Vec3,
}

impl Robot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: START_POSITION,
            heading: START_HEADING,
        }
    }

    /// Applies one tick worth of movement input.
    ///
    /// Turning preserves the heading magnitude; movement translates along
    /// the heading; afterwards X and Z are clamped to the floor bounds
    /// unconditionally, so the robot can slide along a wall it is pushed
    /// into.
    pub fn apply(&mut self, input: &InputSnapshot) {
        if input.turn_left {
            self.turn(TURN_STEP_DEGREES.to_radians());
        }
        if input.turn_right {
            self.turn(-TURN_STEP_DEGREES.to_radians());
        }
        if input.forward {
            self.position += self.heading * SPEED;
        }
        if input.backward {
            self.position -= self.heading * SPEED;
        }
        self.position.x = self.position.x.clamp(-FLOOR_BOUND, FLOOR_BOUND);
        self.position.z = self.position.z.clamp(-FLOOR_BOUND, FLOOR_BOUND);
    }

    fn turn(&mut self, angle: f32) {
        self.heading = Quat::from_rotation_y(angle) * self.heading;
    }

    /// Rotation about Y that aligns a -Z-facing model with the heading.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.heading.x.atan2(self.heading.z)
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}
