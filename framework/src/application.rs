use std::{
    sync::{mpsc::Sender, Arc},
    time::Instant,
};

use robovac_framework_common::event::{ApplicationEvent, FrameworkEvent};
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    graphics_context::GraphicsContext,
    renderer::{Renderer, RendererBuilder},
    surface_wrapper::SurfaceWrapper,
};

/// Everything that only exists while a window is open.
struct ActiveState<R> {
    window: Arc<Window>,
    context: GraphicsContext,
    surface: SurfaceWrapper,
    renderer: R,
}

/// The window shell.
///
/// Owns the event loop side of the program: it creates the window and the
/// graphics device, drives redraws, and forwards every window event into
/// the `event_sink` so the game loop thread can consume input at its own
/// pace.
pub struct Application<Builder: RendererBuilder> {
    title: String,
    event_sink: Sender<FrameworkEvent>,
    // consumed on the first `resumed`
    renderer_builder: Option<Builder>,
    state: Option<ActiveState<Builder::Renderer>>,
    frame_counter: u32,
    last_fps_update: Instant,
    fps: f32,
}

impl<Builder: RendererBuilder> Application<Builder> {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        event_sink: Sender<FrameworkEvent>,
        renderer_builder: Builder,
    ) -> Self {
        Self {
            title: title.into(),
            event_sink,
            renderer_builder: Some(renderer_builder),
            state: None,
            frame_counter: 0,
            last_fps_update: Instant::now(),
            fps: 0.0,
        }
    }

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    /// Returns an error when the windowing backend fails to start.
    pub fn run(mut self) -> Result<(), EventLoopError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)
    }

    fn forward(&self, event: FrameworkEvent) {
        // The receiver is gone once the game loop has stopped; at that
        // point dropping events is fine.
        if self.event_sink.send(event).is_err() {
            log::debug!("dropping event, the game loop is no longer listening");
        }
    }

    fn update_fps(&mut self) {
        self.frame_counter += 1;
        let elapsed = self.last_fps_update.elapsed();
        if elapsed.as_secs() >= 1 {
            #[expect(clippy::cast_precision_loss, reason = "frame counts are small")]
            {
                self.fps = self.frame_counter as f32 / elapsed.as_secs_f32();
            }
            self.frame_counter = 0;
            self.last_fps_update = Instant::now();
        }
    }

    fn refresh_title(&self) {
        let Some(state) = &self.state else {
            return;
        };
        let title = match state.renderer.status_text() {
            Some(status) => format!("{} - {status} ({:.0} fps)", self.title, self.fps),
            None => format!("{} ({:.0} fps)", self.title, self.fps),
        };
        state.window.set_title(&title);
    }

    fn redraw(&mut self) {
        self.update_fps();
        self.refresh_title();

        let Some(state) = &mut self.state else {
            return;
        };

        state.renderer.update();
        let frame = state.surface.acquire(&state.context);
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        state
            .renderer
            .render(&view, &state.context.device, &state.context.queue);
        frame.present();

        state.window.request_redraw();
    }
}

impl<Builder: RendererBuilder> ApplicationHandler for Application<Builder> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(builder) = self.renderer_builder.take() else {
            // on some platforms `resumed` fires again after a suspend
            return;
        };

        let window = Arc::new(
            event_loop
                .create_window(WindowAttributes::default().with_title(&self.title))
                .expect("failed to create the game window"),
        );

        let (context, surface) = pollster::block_on(GraphicsContext::new(&window));
        let surface = SurfaceWrapper::new(&context, surface, window.inner_size());
        let renderer = builder.build(
            &context.adapter,
            &context.device,
            &context.queue,
            surface.config(),
        );

        window.request_redraw();
        self.state = Some(ActiveState {
            window,
            context,
            surface,
            renderer,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { ref event, .. }
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                log::info!("escape pressed, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.surface.resize(size);
                    state.renderer.resize(
                        &state.context.device,
                        &state.context.queue,
                        state.surface.config(),
                    );
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => self.forward(FrameworkEvent::Window { event: other }),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // lets the game loop thread wind down instead of blocking on recv
        self.forward(ApplicationEvent::Exit.into());
        self.state = None;
    }
}
