use super::*;

// =============================================================
// App table
// =============================================================

#[test]
fn app_table_marks_account_routes_protected() {
    let table = RouteTable::app();
    for path in [
        paths::DASHBOARD,
        paths::CARD,
        paths::APPLY_CARD,
        paths::PROFILE,
        paths::APPLICATIONS,
        paths::TRANSACTIONS,
    ] {
        assert!(table.resolve(path).requires_auth, "{path} should be protected");
    }
}

#[test]
fn app_table_leaves_entry_routes_public() {
    let table = RouteTable::app();
    for path in [paths::LANDING, paths::LOGIN, paths::TERMS, paths::REGISTER] {
        assert!(!table.resolve(path).requires_auth, "{path} should be public");
    }
}

#[test]
fn app_table_has_ten_routes() {
    assert_eq!(RouteTable::app().routes().len(), 10);
}

#[test]
fn resolve_ignores_trailing_slash() {
    let table = RouteTable::app();
    assert_eq!(table.resolve("/dashboard/"), RouteDescriptor::protected("/dashboard"));
    assert_eq!(table.resolve("/"), RouteDescriptor::public("/"));
}

#[test]
fn resolve_unknown_path_is_public() {
    let table = RouteTable::app();
    assert!(table.get("/nope").is_none());
    assert_eq!(table.resolve("/nope"), RouteDescriptor::public("/nope"));
}

// =============================================================
// JSON manifest
// =============================================================

#[test]
fn from_json_reads_router_style_records() {
    let table = RouteTable::from_json(
        r#"[
            { "path": "/", "meta": {} },
            { "path": "/login" },
            { "path": "/dashboard", "meta": { "requiresAuth": true } }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        table.routes(),
        &[
            RouteDescriptor::public("/"),
            RouteDescriptor::public("/login"),
            RouteDescriptor::protected("/dashboard"),
        ]
    );
}

#[test]
fn from_json_rejects_relative_path() {
    let err = RouteTable::from_json(r#"[{ "path": "dashboard" }]"#).unwrap_err();
    assert!(matches!(err, RouteTableError::InvalidPath(path) if path == "dashboard"));
}

#[test]
fn from_json_rejects_duplicate_after_normalizing() {
    let err = RouteTable::from_json(r#"[{ "path": "/card" }, { "path": "/card/" }]"#).unwrap_err();
    assert!(matches!(err, RouteTableError::DuplicatePath(path) if path == "/card"));
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = RouteTable::from_json("{ not json").unwrap_err();
    assert!(matches!(err, RouteTableError::Parse(_)));
}

// =============================================================
// Merging
// =============================================================

#[test]
fn merge_stricter_never_unprotects_app_routes() {
    let manifest = RouteTable::from_json(
        r#"[{ "path": "/card", "meta": { "requiresAuth": false } }, { "path": "/profile" }]"#,
    )
    .unwrap();
    let table = RouteTable::app().merge_stricter(&manifest);
    assert!(table.resolve(paths::CARD).requires_auth);
    assert!(table.resolve(paths::PROFILE).requires_auth);
    assert_eq!(table.routes().len(), 10);
}

#[test]
fn merge_stricter_can_protect_and_add_routes() {
    let manifest = RouteTable::from_json(
        r#"[{ "path": "/terms", "meta": { "requiresAuth": true } },
            { "path": "/statements", "meta": { "requiresAuth": true } }]"#,
    )
    .unwrap();
    let table = RouteTable::app().merge_stricter(&manifest);
    assert!(table.resolve(paths::TERMS).requires_auth);
    assert_eq!(table.get("/statements"), Some(&RouteDescriptor::protected("/statements")));
    assert!(!table.resolve(paths::LOGIN).requires_auth);
}
