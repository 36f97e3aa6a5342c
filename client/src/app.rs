//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::i18n::Catalog;
use crate::pages::landing::LandingPage;
use crate::state::portal::{PORTAL_CONTEXT_ELEMENT_ID, PortalContext};

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds the request's `PortalContext` so hydration sees the same links.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let portal = PortalContext::current();
    let lang = Catalog::for_locale(&portal.locale).locale().to_owned();
    let payload = portal.to_script_payload();

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script type="application/json" id=PORTAL_CONTEXT_ELEMENT_ID inner_html=payload></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the portal context and message catalog, then routes both `/` and
/// `/:tenant` to the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let portal = PortalContext::current();
    let stylesheet = portal.asset_url("/pkg/portal.css");
    provide_context(Catalog::for_locale(&portal.locale));
    provide_context(portal);

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text="Aether"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=ParamSegment("tenant") view=LandingPage/>
            </Routes>
        </Router>
    }
}
