//! Thin adapter which exposes the registry as host sensors and actions.

pub mod actions;
pub mod entity;
pub mod platform;
