#![allow(missing_docs, reason = "documented selectively, like the rest of the workspace")]
#![allow(
    clippy::expect_used,
    reason = "failures while setting up the graphics stack are fatal"
)]

pub mod application;
pub mod assets;
mod graphics_context;
pub mod logging;
pub mod renderer;
mod surface_wrapper;
