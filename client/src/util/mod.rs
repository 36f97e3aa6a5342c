//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure data shaping behind the landing page so it
//! can be tested without a browser or a rendering owner.

pub mod services;
pub mod text;
