//! Request-scoped portal context shared between server and browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds one `PortalContext` per page request (public origin,
//! locale, gateway availability snapshot) and provides it as Leptos context.
//! The HTML shell embeds the same value as JSON so the hydrated client sees
//! exactly what the server rendered with.

use serde::{Deserialize, Serialize};

use crate::i18n::DEFAULT_LOCALE;
use crate::util::services::{ServiceDescriptor, all_services, available_services};

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

/// DOM id of the `<script>` element carrying the serialized context.
pub const PORTAL_CONTEXT_ELEMENT_ID: &str = "portal-context";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalContext {
    /// Scheme + host prefix for generated service links. Empty means relative.
    #[serde(default)]
    pub origin: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Service names registered in the gateway, or `None` when no gateway
    /// inventory is configured.
    #[serde(default)]
    pub available_services: Option<Vec<String>>,
    /// Base URL for static assets (`/pkg`, `/icons`). Empty serves them from
    /// the portal itself.
    #[serde(default)]
    pub asset_prefix: String,
}

impl Default for PortalContext {
    fn default() -> Self {
        Self { origin: String::new(), locale: default_locale(), available_services: None, asset_prefix: String::new() }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

impl PortalContext {
    /// Tiles to show for `tenant`.
    ///
    /// Filters by the availability set when one is known, otherwise falls back
    /// to the full fixed layout.
    pub fn services_for(&self, tenant: &str) -> Vec<ServiceDescriptor> {
        let mut services = match &self.available_services {
            Some(available) => available_services(available.as_slice(), tenant, &self.origin),
            None => all_services(tenant, &self.origin),
        };
        if !self.asset_prefix.is_empty() {
            for service in &mut services {
                service.icon = service.icon.take().map(|icon| self.asset_url(&icon));
            }
        }
        services
    }

    /// `path` (absolute, e.g. `/pkg/portal.css`) under the asset prefix.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{path}", self.asset_prefix)
    }

    /// JSON suitable for embedding inside a `<script>` element.
    ///
    /// `<` is escaped so service names can never close the element early.
    pub fn to_script_payload(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    pub fn from_script_payload(raw: &str) -> Option<Self> {
        serde_json::from_str(raw.trim()).ok()
    }

    /// Context for the current render.
    ///
    /// On the server this is whatever the request handler provided. In the
    /// browser it is read back from the embedded script payload.
    pub fn current() -> Self {
        if let Some(ctx) = leptos::prelude::use_context::<Self>() {
            return ctx;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(ctx) = read_embedded() {
                return ctx;
            }
        }
        Self::default()
    }
}

#[cfg(feature = "hydrate")]
fn read_embedded() -> Option<PortalContext> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(PORTAL_CONTEXT_ELEMENT_ID)?;
    let raw = element.text_content()?;
    let parsed = PortalContext::from_script_payload(&raw);
    if parsed.is_none() {
        log::warn!("portal context payload could not be parsed");
    }
    parsed
}
