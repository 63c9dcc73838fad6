//! Route table: every client route and whether it requires a signed-in user.
//!
//! DESIGN
//! ======
//! Route metadata is a typed descriptor rather than a free-form meta object,
//! so the guard reads `requires_auth` directly. A manifest can also be loaded
//! from JSON shaped like router records (`{ "path", "meta": { "requiresAuth" } }`).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::RouteTableError;

/// Client route paths.
pub mod paths {
    pub const LANDING: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const TERMS: &str = "/terms";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const CARD: &str = "/card";
    pub const APPLY_CARD: &str = "/apply-card";
    pub const PROFILE: &str = "/profile";
    pub const APPLICATIONS: &str = "/applications";
    pub const TRANSACTIONS: &str = "/transactions";
}

/// A requested route and its access metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub fn public(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            requires_auth: false,
        }
    }

    pub fn protected(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            requires_auth: true,
        }
    }
}

#[derive(Deserialize)]
struct RouteRecord {
    path: String,
    #[serde(default)]
    meta: RouteMeta,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteMeta {
    #[serde(default)]
    requires_auth: bool,
}

/// Ordered set of known routes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// The application's route table.
    pub fn app() -> Self {
        Self {
            routes: vec![
                RouteDescriptor::public(paths::LANDING),
                RouteDescriptor::public(paths::LOGIN),
                RouteDescriptor::public(paths::TERMS),
                RouteDescriptor::public(paths::REGISTER),
                RouteDescriptor::protected(paths::DASHBOARD),
                RouteDescriptor::protected(paths::CARD),
                RouteDescriptor::protected(paths::APPLY_CARD),
                RouteDescriptor::protected(paths::PROFILE),
                RouteDescriptor::protected(paths::APPLICATIONS),
                RouteDescriptor::protected(paths::TRANSACTIONS),
            ],
        }
    }

    /// Parse a JSON route manifest.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError`] for malformed JSON, a path that does not
    /// start with `/`, or a path listed twice.
    pub fn from_json(raw: &str) -> Result<Self, RouteTableError> {
        let records: Vec<RouteRecord> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(records.len());
        for record in records {
            if !record.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(record.path));
            }
            let path = normalize_path(&record.path).to_owned();
            if !seen.insert(path.clone()) {
                return Err(RouteTableError::DuplicatePath(path));
            }
            routes.push(RouteDescriptor {
                path,
                requires_auth: record.meta.requires_auth,
            });
        }
        Ok(Self { routes })
    }

    /// Overlay `manifest` on this table without loosening any route.
    ///
    /// Paths already present stay protected if either side protects them;
    /// new paths are appended as the manifest declares them.
    pub fn merge_stricter(mut self, manifest: &RouteTable) -> Self {
        for extra in &manifest.routes {
            match self.routes.iter_mut().find(|route| route.path == extra.path) {
                Some(route) => route.requires_auth |= extra.requires_auth,
                None => self.routes.push(extra.clone()),
            }
        }
        self
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Find the descriptor for `path`, ignoring a trailing slash.
    pub fn get(&self, path: &str) -> Option<&RouteDescriptor> {
        let path = normalize_path(path);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Descriptor for `path`; unknown paths carry no metadata and are public.
    pub fn resolve(&self, path: &str) -> RouteDescriptor {
        self.get(path)
            .cloned()
            .unwrap_or_else(|| RouteDescriptor::public(normalize_path(path)))
    }
}

fn normalize_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
