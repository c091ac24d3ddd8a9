//! Backend side of the GUI: command queue intake and the render bridge.

pub mod commands;
pub mod renderer;
pub mod runtime;
