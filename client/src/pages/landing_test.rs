use super::*;

#[test]
fn tenant_from_path_takes_first_segment() {
    assert_eq!(tenant_from_path("/demo"), "demo");
    assert_eq!(tenant_from_path("/demo/"), "demo");
    assert_eq!(tenant_from_path("/demo/gather/surveys"), "demo");
}

#[test]
fn tenant_from_path_root_is_empty() {
    assert_eq!(tenant_from_path("/"), "");
    assert_eq!(tenant_from_path(""), "");
}

#[test]
fn tenant_heading_capitalizes() {
    assert_eq!(tenant_heading("demo"), "Demo");
    assert_eq!(tenant_heading(""), "");
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    fn render_for(tenant: &str, portal: PortalContext) -> String {
        let tenant = tenant.to_owned();
        Owner::new().with(|| {
            provide_context(portal);
            view! { <TenantLanding tenant=tenant/> }.to_html()
        })
    }

    #[test]
    fn landing_renders_tenant_heading_and_filtered_tiles() {
        let portal = PortalContext {
            origin: "https://portal.example".into(),
            available_services: Some(vec!["gather".into()]),
            ..PortalContext::default()
        };
        let html = render_for("demo", portal);
        assert!(html.contains("Demo"));
        assert!(html.contains("Services"));
        assert!(html.contains(r#"href="https://portal.example/demo/gather""#));
        assert!(!html.contains("kibana-app"));
    }

    #[test]
    fn landing_without_inventory_renders_full_layout() {
        let html = render_for("demo", PortalContext::default());
        assert!(html.contains("/demo/kibana/kibana-app"));
        assert!(html.contains(r#"href="/kernel""#));
        assert!(html.contains("service-card"));
        assert!(!html.contains("data-key"));
    }

    #[test]
    fn landing_uses_catalog_for_locale() {
        let portal = PortalContext { locale: "fr".into(), ..PortalContext::default() };
        let html = render_for("demo", portal);
        assert!(html.contains("Avec Gather"));
    }
}
