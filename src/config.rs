//! Build-time configuration with an optional runtime override read from
//! `window.ZETA_CONFIG`, so static deployments can adjust routing without
//! rebuilding. Values are public; no secrets here.
//!
//! The only setting is an extra route manifest. It is overlaid on the
//! built-in route table with [`RouteTable::merge_stricter`], so it can protect
//! more paths but never expose a built-in protected one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routes::RouteTable;

/// Frontend configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON route manifest (`[{ "path", "meta": { "requiresAuth" } }]`).
    pub route_manifest: Option<String>,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            route_manifest: option_env!("ZETA_ROUTE_MANIFEST").and_then(normalize_value),
        };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    /// Route table the guard consults: the built-in table, tightened by the
    /// configured manifest. A manifest that fails to parse is ignored.
    pub fn route_table(&self) -> RouteTable {
        let table = RouteTable::app();
        let Some(raw) = self.route_manifest.as_deref() else {
            return table;
        };
        match RouteTable::from_json(raw) {
            Ok(manifest) => table.merge_stricter(&manifest),
            Err(e) => {
                log::warn!("ignoring route manifest: {e}");
                table
            }
        }
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    route_manifest: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.route_manifest {
        config.route_manifest = Some(value);
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ZETA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let route_manifest = Reflect::get(&config, &JsValue::from_str("routes"))
        .ok()?
        .as_string()
        .and_then(|value| normalize_value(&value));

    Some(RuntimeConfig { route_manifest })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
