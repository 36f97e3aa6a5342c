//! Tenant landing page listing the services a tenant can open.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/` and `/:tenant`. The tenant is the first path segment of the
//! current location, read once per mount. Links, locale and the availability
//! set come from the request's `PortalContext`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::components::service_card::ServiceCard;
use crate::i18n::Catalog;
use crate::state::portal::PortalContext;
use crate::util::text::capitalize;

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

/// First segment of a URL path, or empty when there is none.
pub fn tenant_from_path(path: &str) -> String {
    path.split('/').nth(1).unwrap_or_default().to_owned()
}

/// Heading shown above the grid; blank without a tenant.
pub fn tenant_heading(tenant: &str) -> String {
    capitalize(tenant)
}

/// Route entry point: resolves the tenant from the location and renders it.
#[component]
pub fn LandingPage() -> impl IntoView {
    let location = use_location();
    let tenant = tenant_from_path(&location.pathname.get_untracked());
    view! { <TenantLanding tenant=tenant/> }
}

/// Landing content for an explicit tenant.
#[component]
pub fn TenantLanding(#[prop(into)] tenant: String) -> impl IntoView {
    let portal = PortalContext::current();
    let catalog = use_context::<Catalog>().unwrap_or_else(|| {
        let catalog = Catalog::for_locale(&portal.locale);
        provide_context(catalog.clone());
        catalog
    });

    // Username lookup is not wired to an identity provider yet.
    let username = String::new();

    let title = catalog.format_message("landing.page.tenant.services", "Services");
    let tiles = portal
        .services_for(&tenant)
        .into_iter()
        .map(|service| {
            view! {
                <div class="service">
                    <ServiceCard service=service/>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="landing-page">
            <NavBar username=username/>

            <div class="content">
                <div class="tenant-name">{tenant_heading(&tenant)}</div>
                <div class="title-medium">{title}</div>
                <div class="services">{tiles}</div>
            </div>
        </div>
    }
}
