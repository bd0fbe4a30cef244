use winit::dpi::PhysicalSize;

use crate::graphics_context::GraphicsContext;

/// Owns the presentation surface and its configuration.
///
/// Resizes are applied lazily: the shell records the new size and the
/// surface is reconfigured before the next frame is acquired.
pub(crate) struct SurfaceWrapper {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    stale: bool,
}

impl SurfaceWrapper {
    pub(crate) fn new(
        context: &GraphicsContext,
        surface: wgpu::Surface<'static>,
        size: PhysicalSize<u32>,
    ) -> Self {
        let config = surface
            .get_default_config(&context.adapter, size.width.max(1), size.height.max(1))
            .expect("the selected adapter cannot present to this surface");
        surface.configure(&context.device, &config);

        Self {
            surface,
            config,
            stale: false,
        }
    }

    pub(crate) fn config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }

    pub(crate) fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.stale = true;
    }

    /// Acquires the next frame, reconfiguring first if the window was
    /// resized or the surface was lost.
    pub(crate) fn acquire(&mut self, context: &GraphicsContext) -> wgpu::SurfaceTexture {
        if self.stale {
            self.surface.configure(&context.device, &self.config);
            self.stale = false;
        }

        match self.surface.get_current_texture() {
            Ok(frame) => frame,
            // Lost or outdated surfaces recover after a reconfigure.
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&context.device, &self.config);
                self.surface
                    .get_current_texture()
                    .expect("failed to reacquire the surface after reconfiguring")
            }
            Err(error) => panic!("failed to acquire the next frame: {error}"),
        }
    }
}
