//! The seam between the window shell and whatever draws the frame.
//!
//! The shell owns the surface and the redraw timing; a [`Renderer`] owns
//! everything scene-specific. Builders exist because most renderer state
//! can only be created once a device and surface configuration exist.

pub trait RendererBuilder {
    type Renderer: Renderer;

    fn build(
        self,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &wgpu::SurfaceConfiguration,
    ) -> Self::Renderer;
}

pub trait Renderer {
    /// Refreshes the renderer's snapshot of the game state.
    /// Called once per frame, right before [`Renderer::render`].
    fn update(&mut self);

    fn resize(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &wgpu::SurfaceConfiguration,
    );

    fn render(
        &mut self,
        texture_view: &wgpu::TextureView,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    );

    /// One-line status for the presentation layer. The shell mirrors it
    /// into the window title, but any other channel may consume it too.
    fn status_text(&self) -> Option<String> {
        None
    }
}
