use glam::Vec3;
use rand::Rng;

/// How many objects a fresh round scatters on the floor.
pub const COLLECTIBLE_COUNT: usize = 20;

/// An object closer to the robot center than this is collected.
pub const CAPTURE_RADIUS: f32 = 0.6;

/// All collectibles rest on the floor at the same height.
const SPAWN_HEIGHT: f32 = 0.2;

/// Spawn coordinates come from this integer grid on X and Z.
const GRID_MIN: i8 = -9;
const GRID_MAX: i8 = 8;

/// The objects still left on the floor.
///
/// Positions are immutable once placed; collection removes the element
/// instead of flagging it, so the length is always the live count.
/// Duplicate positions are allowed and count as separate objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectibles {
    positions: Vec<Vec3>,
}

impl Collectibles {
    /// Scatters `count` objects on the integer grid.
    pub fn scatter(rng: &mut impl Rng, count: usize) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    f32::from(rng.gen_range(GRID_MIN..=GRID_MAX)),
                    SPAWN_HEIGHT,
                    f32::from(rng.gen_range(GRID_MIN..=GRID_MAX)),
                )
            })
            .collect();
        Self { positions }
    }

    /// A hand-placed layout, mainly for scripted scenarios.
    #[must_use]
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Removes every object within the capture radius of `point` and
    /// returns how many were removed. A second call with the same point
    /// removes nothing.
    #[expect(clippy::cast_possible_truncation, reason = "counts are tiny")]
    pub fn collect_near(&mut self, point: Vec3) -> u32 {
        let before = self.positions.len();
        self.positions
            .retain(|position| position.distance(point) >= CAPTURE_RADIUS);
        (before - self.positions.len()) as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}
