use super::*;
use crate::routes::{RouteDescriptor, paths};

fn with_manifest(raw: &str) -> AppConfig {
    AppConfig {
        route_manifest: Some(raw.to_owned()),
    }
}

#[test]
fn normalize_value_trims_and_rejects_blank() {
    assert_eq!(normalize_value(""), None);
    assert_eq!(normalize_value("   "), None);
    assert_eq!(normalize_value("  [] "), Some("[]".to_owned()));
}

#[test]
fn apply_runtime_overrides_ignores_missing_values() {
    let mut config = with_manifest("[]");
    let runtime = RuntimeConfig {
        route_manifest: normalize_value("  "),
    };
    apply_runtime_overrides(&mut config, runtime);
    assert_eq!(config, with_manifest("[]"));
}

#[test]
fn apply_runtime_overrides_overwrites_when_present() {
    let mut config = AppConfig::default();
    let runtime = RuntimeConfig {
        route_manifest: normalize_value(r#"[{ "path": "/x" }]"#),
    };
    apply_runtime_overrides(&mut config, runtime);
    assert_eq!(config, with_manifest(r#"[{ "path": "/x" }]"#));
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_uses_build_time_manifest_only() {
    let config = AppConfig::load();
    assert_eq!(
        config.route_manifest,
        option_env!("ZETA_ROUTE_MANIFEST").and_then(normalize_value)
    );
}

#[test]
fn route_table_defaults_to_app_table() {
    assert_eq!(AppConfig::default().route_table(), RouteTable::app());
}

#[test]
fn route_table_applies_manifest_without_loosening() {
    let config = with_manifest(
        r#"[{ "path": "/dashboard", "meta": { "requiresAuth": false } },
            { "path": "/rewards", "meta": { "requiresAuth": true } }]"#,
    );
    let table = config.route_table();
    assert!(table.resolve(paths::DASHBOARD).requires_auth);
    assert_eq!(table.get("/rewards"), Some(&RouteDescriptor::protected("/rewards")));
}

#[test]
fn route_table_ignores_invalid_manifest() {
    let config = with_manifest(r#"[{ "path": "card" }]"#);
    assert_eq!(config.route_table(), RouteTable::app());
}
