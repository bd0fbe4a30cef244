use glam::Vec3;

pub const LAMP_COUNT: usize = 3;

/// All wall lamps share the same warm white.
const LAMP_COLOR: Vec3 = Vec3::new(0.8, 0.7, 0.6);

/// A static point light mounted on the back wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lamp {
    pub position: Vec3,
    pub color: Vec3,
}

/// The three lamps along the back wall, evenly spaced just in front of
/// it at equal height.
pub const WALL_LAMPS: [Lamp; LAMP_COUNT] = [
    Lamp {
        position: Vec3::new(-8.0, 3.0, -9.8),
        color: LAMP_COLOR,
    },
    Lamp {
        position: Vec3::new(0.0, 3.0, -9.8),
        color: LAMP_COLOR,
    },
    Lamp {
        position: Vec3::new(8.0, 3.0, -9.8),
        color: LAMP_COLOR,
    },
];
