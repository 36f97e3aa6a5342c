//! Service listing routes.

use axum::extract::{Query, State};
use axum::response::Json;
use client::util::services::ServiceDescriptor;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ServicesQuery {
    #[serde(default)]
    pub tenant: Option<String>,
}

/// `GET /api/services?tenant=`: the tiles the landing page would render.
///
/// Spacer entries are layout only and are left out.
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> Json<Vec<ServiceDescriptor>> {
    let tenant = query.tenant.unwrap_or_default();
    let services = state
        .portal_context()
        .services_for(tenant.trim_matches('/'))
        .into_iter()
        .filter(|service| !service.is_spacer())
        .collect();
    Json(services)
}

#[cfg(test)]
#[path = "services_test.rs"]
mod tests;
