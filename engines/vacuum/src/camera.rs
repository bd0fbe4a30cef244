use glam::{Mat4, Vec3};

const DISTANCE_BEHIND: f32 = 5.0;
const HEIGHT_ABOVE: f32 = 10.0;

/// Third-person follow camera: behind and above the robot, looking at
/// it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Camera {
    pub(crate) position: Vec3,
    target: Vec3,
}

impl Camera {
    pub(crate) fn following(robot_position: Vec3, robot_heading: Vec3) -> Self {
        Self {
            position: robot_position - robot_heading * DISTANCE_BEHIND
                + Vec3::new(0.0, HEIGHT_ABOVE, 0.0),
            target: robot_position,
        }
    }

    pub(crate) fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}
