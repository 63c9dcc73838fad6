//! Navigation guard for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view runs [`decide`] before rendering. The router applies the
//! returned [`Decision`]: render the requested route or replace it with the
//! login route. The check is presence-only and client-side; real access
//! control lives on the API.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::credentials::CredentialStore;
use crate::routes::{RouteDescriptor, paths};

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Commit the requested navigation.
    Proceed,
    /// Replace the requested navigation with this path.
    RedirectTo(&'static str),
}

/// Decide whether navigation to `route` may proceed.
///
/// Public routes always proceed. Protected routes proceed only when
/// `credentials` reports a token; otherwise the user is sent to the login
/// route and the requested destination is dropped. Never fails: unreadable
/// storage is reported as "no token" by the store.
pub fn decide<C>(route: &RouteDescriptor, credentials: &C) -> Decision
where
    C: CredentialStore + ?Sized,
{
    let decision = if !route.requires_auth || credentials.has_token() {
        Decision::Proceed
    } else {
        Decision::RedirectTo(paths::LOGIN)
    };
    log::debug!("route guard: {} -> {decision:?}", route.path);
    decision
}
