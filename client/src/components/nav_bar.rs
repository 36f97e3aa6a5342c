//! Top navigation bar for the portal.

use leptos::prelude::*;

use crate::i18n::Catalog;

/// Navigation header with the product mark and the signed-in user.
///
/// The user block is omitted while `username` is empty.
#[component]
pub fn NavBar(#[prop(into, optional)] username: String) -> impl IntoView {
    let catalog = use_context::<Catalog>().unwrap_or_default();
    let brand = catalog.format_message("navbar.brand", "aether");
    let logout = catalog.format_message("navbar.logout", "Log out");
    let user = (!username.is_empty()).then(|| {
        view! {
            <div class="navbar__user">
                <span class="navbar__username">{username}</span>
                <a class="navbar__logout" href="/logout">{logout}</a>
            </div>
        }
    });

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <b>{brand}</b>
            </div>
            {user}
        </nav>
    }
}
