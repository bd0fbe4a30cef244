use glam::Mat4;

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Perspective projection; only the aspect ratio ever changes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
    aspect: f32,
}

impl Projection {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let mut projection = Self { aspect: 1.0 };
        projection.resize(width, height);
        projection
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        #[expect(clippy::cast_precision_loss, reason = "window sizes are small")]
        {
            self.aspect = width.max(1) as f32 / height.max(1) as f32;
        }
    }

    pub(crate) fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR)
    }
}
