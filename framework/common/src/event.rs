use winit::event::WindowEvent;

/// Events travelling from the window shell into the game loop.
#[derive(Clone, Debug)]
pub enum FrameworkEvent {
    /// A raw window event the shell did not handle itself
    /// (keyboard input, cursor movement, focus changes, …).
    Window { event: WindowEvent },
    Application { event: ApplicationEvent },
}

#[derive(Clone, Debug)]
pub enum ApplicationEvent {
    Exit,
}

impl From<ApplicationEvent> for FrameworkEvent {
    fn from(event: ApplicationEvent) -> Self {
        Self::Application { event }
    }
}
