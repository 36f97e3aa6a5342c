//! Tile linking to one hosted service.
//!
//! DESIGN
//! ======
//! Brand treatment is table driven: each known service maps to a small
//! [`Brand`] record (bold part, plain part, accent colour, bracket glyphs)
//! and a single view renders any record. Unknown names render verbatim.

use leptos::prelude::*;

use crate::i18n::{Catalog, about_message_id};
use crate::util::services::{ServiceDescriptor, ServiceName};
use crate::util::text::capitalize;

#[cfg(test)]
#[path = "service_card_test.rs"]
mod service_card_test;

const KERNEL_ACCENT: &str = "#50aef3";
const ODK_ACCENT: &str = "#d25b69";

/// How a service name is drawn inside its tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    /// Leading text rendered bold. May be empty.
    pub strong: String,
    /// Text following the bold part.
    pub plain: String,
    /// Colour for the bracket glyphs.
    pub accent: Option<&'static str>,
    /// Wrap the label in `<` `>` glyphs.
    pub bracketed: bool,
}

impl Brand {
    fn plain(text: impl Into<String>) -> Self {
        Self { strong: String::new(), plain: text.into(), accent: None, bracketed: false }
    }

    fn bold(strong: &str, plain: &str) -> Self {
        Self { strong: strong.to_owned(), plain: plain.to_owned(), accent: None, bracketed: false }
    }

    fn bracketed(text: String, accent: &'static str) -> Self {
        Self { strong: String::new(), plain: text, accent: Some(accent), bracketed: true }
    }

    /// Brand for `name`, falling back to the raw name for unknown services.
    pub fn for_name(name: &str) -> Self {
        match name.parse::<ServiceName>() {
            Ok(ServiceName::Gather) => Self::bold("gather", ""),
            Ok(ServiceName::Aether) => Self::bold("ae", "ther"),
            Ok(ServiceName::Kernel) => Self::bracketed(capitalize("kernel"), KERNEL_ACCENT),
            Ok(ServiceName::Odk) => Self::bracketed("odk".to_ascii_uppercase(), ODK_ACCENT),
            Ok(ServiceName::Kibana) => Self::plain(capitalize("kibana")),
            Err(_) => Self::plain(name),
        }
    }

    /// Visible text with markup stripped.
    pub fn label(&self) -> String {
        let text = format!("{}{}", self.strong, self.plain);
        if self.bracketed { format!("<{text}>") } else { text }
    }
}

/// Inline style for the bracket glyphs.
pub fn glyph_style(accent: Option<&str>) -> String {
    match accent {
        Some(color) => format!("font-size: 25px; margin: 5px; color: {color}"),
        None => "font-size: 25px; margin: 5px".to_owned(),
    }
}

/// CSS class of the tile body.
pub fn card_class(name: &str) -> String {
    format!("{name}-card title-large")
}

#[component]
fn BrandLabel(brand: Brand) -> impl IntoView {
    let Brand { strong, plain, accent, bracketed } = brand;
    let glyph = bracketed.then(|| glyph_style(accent));
    let open = glyph.clone().map(|style| view! { <i style=style>"<"</i> });
    let close = glyph.map(|style| view! { <i style=style>">"</i> });
    let strong = (!strong.is_empty()).then(|| view! { <b>{strong}</b> });

    view! {
        <span class="service-brand">
            {open}
            {strong}
            {plain}
            {close}
        </span>
    }
}

/// One service tile. A spacer descriptor renders an empty placeholder.
#[component]
pub fn ServiceCard(service: ServiceDescriptor) -> impl IntoView {
    if service.is_spacer() {
        return view! { <div class="service-card"></div> }.into_any();
    }

    let catalog = use_context::<Catalog>().unwrap_or_default();
    let about = catalog.format_message(&about_message_id(&service.name), &service.about);
    let brand = Brand::for_name(&service.name);
    let class = card_class(&service.name);
    let icon = service
        .icon
        .map(|src| view! { <img class="service-icon" src=src alt="icon"/> });

    view! {
        <a href=service.link>
            <div class=class>
                {icon}
                <BrandLabel brand=brand/>
            </div>
        </a>
        <p class="service-about small">{about}</p>
    }
    .into_any()
}
