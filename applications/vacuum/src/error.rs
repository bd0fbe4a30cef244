use std::fmt::{self, Display, Formatter};

use winit::error::EventLoopError;

#[derive(Debug)]
pub(crate) enum ApplicationError {
    /// The windowing backend failed to start or crashed.
    EventLoop(EventLoopError),
    /// The game loop thread ended with a panic.
    GameLoopPanicked,
}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(error) => write!(formatter, "event loop error: {error}"),
            Self::GameLoopPanicked => write!(formatter, "the game loop thread panicked"),
        }
    }
}

impl std::error::Error for ApplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoop(error) => Some(error),
            Self::GameLoopPanicked => None,
        }
    }
}

impl From<EventLoopError> for ApplicationError {
    fn from(error: EventLoopError) -> Self {
        Self::EventLoop(error)
    }
}
