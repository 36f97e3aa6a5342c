use super::*;

#[test]
fn config_error_converts_and_keeps_variable() {
    let err: StartupError = ConfigError::Invalid { var: "PORT", value: "abc".into() }.into();
    assert!(matches!(err, StartupError::Config(_)));
    assert_eq!(err.to_string(), "configuration: invalid value for PORT: \"abc\"");
}

#[test]
fn gateway_error_converts() {
    let err: StartupError = GatewayError::HttpClientBuild("no tls".into()).into();
    assert!(matches!(err, StartupError::Gateway(_)));
    assert_eq!(err.to_string(), "gateway client: HTTP client build failed: no tls");
}

#[test]
fn bind_error_names_port() {
    let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
    let err = StartupError::Bind { port: 3000, source };
    assert_eq!(err.to_string(), "failed to bind port 3000: address in use");
}

#[test]
fn leptos_error_is_passed_through() {
    let err = StartupError::Leptos("leptos configuration: missing output name".into());
    assert_eq!(err.to_string(), "leptos configuration: missing output name");
}
