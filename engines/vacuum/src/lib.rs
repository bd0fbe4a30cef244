//! Game core and wgpu renderer of the vacuum cleaner game.
//!
//! The game core ([`game_state`]) is free of any graphics or windowing
//! types and fully deterministic for a given seed and input sequence;
//! everything visual lives in [`renderer`] behind the framework's
//! renderer traits.

#![allow(missing_docs, reason = "documented selectively, like the rest of the workspace")]

mod camera;
pub mod game_loop;
pub mod game_state;
pub mod lighting;
mod projection;
pub mod render_state;
pub mod renderer;
