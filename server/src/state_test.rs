use super::test_helpers::*;
use super::*;

#[test]
fn without_gateway_availability_is_unknown() {
    let state = test_app_state();
    assert_eq!(state.available_services(), None);
    assert_eq!(state.portal_context().available_services, None);
}

#[test]
fn with_gateway_starts_empty_until_refreshed() {
    let state = AppState::new(test_config_with_gateway());
    assert_eq!(state.available_services(), Some(Vec::new()));
}

#[test]
fn set_available_services_replaces_snapshot() {
    let state = AppState::new(test_config_with_gateway());
    state.set_available_services(vec!["gather".into()]);
    state.set_available_services(vec!["odk".into(), "kernel".into()]);
    assert_eq!(state.available_services(), Some(vec!["odk".to_owned(), "kernel".to_owned()]));
}

#[test]
fn clones_share_snapshot() {
    let state = test_app_state();
    let other = state.clone();
    other.set_available_services(vec!["kibana".into()]);
    assert_eq!(state.available_services(), Some(vec!["kibana".to_owned()]));
}

#[test]
fn portal_context_carries_origin_and_locale() {
    let state = test_app_state();
    let ctx = state.portal_context();
    assert_eq!(ctx.origin, "https://portal.example");
    assert_eq!(ctx.locale, "en");
}

#[test]
fn portal_context_uses_cdn_url_as_asset_prefix() {
    assert_eq!(test_app_state().portal_context().asset_prefix, "");

    let state = AppState::new(PortalConfig { cdn_url: Some("https://cdn.example".into()), ..test_config() });
    let ctx = state.portal_context();
    assert_eq!(ctx.asset_prefix, "https://cdn.example");
    assert_eq!(ctx.services_for("demo")[0].icon.as_deref(), Some("https://cdn.example/icons/gather.svg"));
}
