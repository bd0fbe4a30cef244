use std::sync::Arc;

use winit::window::Window;

/// Adapter, device and queue bundled together.
///
/// Created once at startup; none of the handles are window-size
/// dependent, so resizing never touches this.
pub(crate) struct GraphicsContext {
    pub(crate) adapter: wgpu::Adapter,
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
}

impl GraphicsContext {
    /// Also returns the presentation surface: it is needed here to pick
    /// a compatible adapter, and only one surface may exist per window.
    pub(crate) async fn new(window: &Arc<Window>) -> (Self, wgpu::Surface<'static>) {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(Arc::clone(window))
            .expect("failed to create the presentation surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .expect("no compatible graphics adapter found");
        log::info!("selected adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("primary device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await
            .expect("failed to acquire a graphics device");

        // Shader or validation hiccups must not take the game down; log
        // them and keep presenting frames.
        device.on_uncaptured_error(Box::new(|error| {
            log::error!("uncaptured graphics error: {error}");
        }));

        (
            Self {
                adapter,
                device,
                queue,
            },
            surface,
        )
    }
}
