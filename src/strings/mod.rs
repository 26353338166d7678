//! # Strings Module
//!
//! Centralizes user-facing response text and log messages.
//! Keeps the framing clients parse (success/failure markers) in one place.

pub mod logs;
pub mod messages;
