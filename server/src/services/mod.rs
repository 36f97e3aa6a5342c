//! Background services backing the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the work that happens outside a request so route
//! handlers only read prepared snapshots.

pub mod availability;
