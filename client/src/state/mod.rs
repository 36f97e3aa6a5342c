//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The landing page has no mutable state of its own; everything it needs
//! arrives once per request as a `PortalContext` provided by the server.

pub mod portal;
