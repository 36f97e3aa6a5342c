use axum::body::Body;
use axum::http;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::{test_app_state, test_config_with_gateway};

/// Full portal service as `main` builds it. cargo-leptos normally exports
/// the output name; tests set it themselves.
fn portal(state: AppState) -> PortalService {
    unsafe { std::env::set_var("LEPTOS_OUTPUT_NAME", "portal") };
    leptos_app(state).unwrap()
}

async fn get(app: PortalService, uri: &str) -> (StatusCode, String) {
    let request = http::Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_with_state() {
    let _router: Router = api_routes(test_app_state());
}

// =============================================================================
// Landing page
// =============================================================================

#[tokio::test]
async fn tenant_page_renders_with_and_without_trailing_slash() {
    for uri in ["/demo", "/demo/"] {
        let (status, body) = get(portal(test_app_state()), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(r#"href="https://portal.example/demo/gather""#), "{uri}");
        assert!(body.contains("Demo"), "{uri}");
    }
}

#[tokio::test]
async fn root_page_renders_without_tenant() {
    let (status, body) = get(portal(test_app_state()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="https://portal.example/gather""#));
}

#[tokio::test]
async fn page_uses_availability_snapshot_from_state() {
    let state = AppState::new(test_config_with_gateway());
    state.set_available_services(vec!["gather".into()]);

    let (status, body) = get(portal(state), "/demo").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="https://portal.example/demo/gather""#));
    assert!(!body.contains("kibana-app"));
}

#[tokio::test]
async fn page_embeds_portal_context_payload() {
    let state = AppState::new(test_config_with_gateway());
    state.set_available_services(vec!["odk".into()]);

    let (_, body) = get(portal(state), "/demo").await;
    assert!(body.contains(r#"id="portal-context""#));
    assert!(body.contains(r#""origin":"https://portal.example""#));
    assert!(body.contains(r#""available_services":["odk"]"#));
}

// =============================================================================
// Static and API routes
// =============================================================================

#[tokio::test]
async fn icons_are_served() {
    let (status, body) = get(portal(test_app_state()), "/icons/gather.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn healthz_route_through_full_service() {
    let (status, _) = get(portal(test_app_state()), "/healthz/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_services_returns_json_tiles() {
    let (status, body) = get(portal(test_app_state()), "/api/services?tenant=demo").await;
    assert_eq!(status, StatusCode::OK);
    let tiles: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(tiles.as_array().map(Vec::len), Some(5));
    assert_eq!(tiles[0]["link"], "https://portal.example/demo/gather");
}
