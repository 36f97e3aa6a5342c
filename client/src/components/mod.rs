//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and service tiles, reading the message
//! catalog from Leptos context when one is provided.

pub mod nav_bar;
pub mod service_card;
