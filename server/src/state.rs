//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! cloned into the Leptos context closure. It holds the parsed config and the
//! latest gateway availability snapshot, which the refresh task replaces
//! wholesale. Readers take a short synchronous lock because the Leptos
//! context hook is not async.

use std::sync::{Arc, RwLock};

use client::state::portal::PortalContext;

use crate::config::PortalConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Inner fields are Arc-wrapped so clones share the snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    /// `None` while no gateway is configured; otherwise the last fetched names.
    availability: Arc<RwLock<Option<Vec<String>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        // With a gateway configured the snapshot starts empty until the first refresh.
        let initial = config.gateway.as_ref().map(|_| Vec::new());
        Self { config: Arc::new(config), availability: Arc::new(RwLock::new(initial)) }
    }

    /// Current availability snapshot.
    #[must_use]
    pub fn available_services(&self) -> Option<Vec<String>> {
        match self.availability.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the availability snapshot.
    pub fn set_available_services(&self, names: Vec<String>) {
        let mut guard = match self.availability.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(names);
    }

    /// Per-request context handed to the Leptos app.
    #[must_use]
    pub fn portal_context(&self) -> PortalContext {
        PortalContext {
            origin: self.config.public_origin.clone(),
            locale: self.config.locale.clone(),
            available_services: self.available_services(),
            asset_prefix: self.config.cdn_url.clone().unwrap_or_default(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
