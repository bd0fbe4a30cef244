use std::collections::HashSet;

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Which directional/restart signals are active for the current frame.
///
/// This is the entire input surface of the game core: a plain, copyable
/// value with no window or device types attached, so the core stays
/// testable without a windowing backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub restart: bool,
}

/// Tracks which keys are currently held, fed from the window events the
/// shell forwards into the game loop.
///
/// The cursor position is tracked as well; nothing consumes it yet, it is
/// a hook for aiming/debug features.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    cursor: Option<PhysicalPosition<f64>>,
}

impl InputState {
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if repeat {
                    return;
                }
                match state {
                    ElementState::Pressed => {
                        self.held.insert(code);
                    }
                    ElementState::Released => {
                        self.held.remove(&code);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            // key-release events are lost while the window is unfocused
            WindowEvent::Focused(false) => self.held.clear(),
            _ => {}
        }
    }

    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<PhysicalPosition<f64>> {
        self.cursor
    }

    /// Condenses the held keys into the per-frame signals the game core
    /// understands.
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            turn_left: self.is_held(KeyCode::KeyA),
            turn_right: self.is_held(KeyCode::KeyD),
            forward: self.is_held(KeyCode::KeyW),
            backward: self.is_held(KeyCode::KeyS),
            restart: self.is_held(KeyCode::KeyR),
        }
    }
}
