//! Trajectory engine: closed-form solver, view mapping, and the renderer that
//! draws a solved flight onto any [`surface::DrawSurface`].

pub mod ballistics;
pub mod constants;
pub mod display;
pub mod inputs;
pub mod pipeline;
pub mod plot;
pub mod render;
pub mod surface;
pub mod window;
