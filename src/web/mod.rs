//! HTML surface: page handlers and their components.

pub mod components;
pub mod handlers;
