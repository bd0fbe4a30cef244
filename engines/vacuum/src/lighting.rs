//! Light values derived from the world each frame.
//!
//! Purely computational; no GPU resources live here. The renderer copies
//! these values into its per-frame uniform data.

use glam::Vec3;

use crate::game_state::Robot;

/// How far in front of the robot the spotlight sits.
const FORWARD_OFFSET: f32 = 0.5;

const INNER_CUTOFF_DEGREES: f32 = 55.0;
const OUTER_CUTOFF_DEGREES: f32 = 70.0;

/// The robot's headlight cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Vec3,
    /// Cosine of the inner cone angle.
    pub cutoff_cos: f32,
    /// Cosine of the outer cone angle; intensity fades to zero between
    /// the two cones.
    pub outer_cutoff_cos: f32,
}

impl Spotlight {
    /// Recomputed every frame from the robot pose: the light points
    /// along the heading and sits slightly in front of the robot.
    #[must_use]
    pub fn from_robot(robot: &Robot) -> Self {
        let direction = robot.heading.normalize();
        Self {
            position: robot.position + direction * FORWARD_OFFSET,
            direction,
            color: Vec3::ONE,
            cutoff_cos: INNER_CUTOFF_DEGREES.to_radians().cos(),
            outer_cutoff_cos: OUTER_CUTOFF_DEGREES.to_radians().cos(),
        }
    }
}
