//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::config::AppConfig;
use crate::credentials::{BrowserCredentials, CredentialStore, browser_credentials};
use crate::guard::{Decision, decide};
use crate::pages::{
    ApplicationsPage, ApplyCardPage, CardListPage, DashboardPage, LandingPage, LoginPage,
    NotFoundPage, ProfilePage, RegisterPage, TermsPage, TransactionsPage,
};
use crate::routes::{RouteTable, paths};

/// Root application component.
///
/// Provides the route table and the browser credential store as contexts,
/// and wraps every route view in [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::load().route_table());
    provide_context(browser_credentials());

    view! {
        <Title text="Zeta"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(segment(paths::LANDING)) view=|| view! {
                    <Guarded><LandingPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::LOGIN)) view=|| view! {
                    <Guarded><LoginPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::TERMS)) view=|| view! {
                    <Guarded><TermsPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::REGISTER)) view=|| view! {
                    <Guarded><RegisterPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::DASHBOARD)) view=|| view! {
                    <Guarded><DashboardPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::CARD)) view=|| view! {
                    <Guarded><CardListPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::APPLY_CARD)) view=|| view! {
                    <Guarded><ApplyCardPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::PROFILE)) view=|| view! {
                    <Guarded><ProfilePage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::APPLICATIONS)) view=|| view! {
                    <Guarded><ApplicationsPage/></Guarded>
                }/>
                <Route path=StaticSegment(segment(paths::TRANSACTIONS)) view=|| view! {
                    <Guarded><TransactionsPage/></Guarded>
                }/>
            </Routes>
        </Router>
    }
}

/// Runs the route guard for the location being rendered.
///
/// The guard resolves the router's current pathname, not a path handed in by
/// the route, so a route and its guard cannot disagree about which table
/// entry applies. `children` are only built once the decision is `Proceed`.
#[component]
pub fn Guarded(children: Children) -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    let routes = use_context::<RouteTable>().unwrap_or_else(RouteTable::app);
    let credentials = use_context::<BrowserCredentials>().unwrap_or_else(browser_credentials);

    match gate(&routes, &pathname, &credentials, children) {
        Gated::Render(view) => view.into_any(),
        Gated::Redirect(target) => {
            view! { <Redirect path=target options=redirect_options()/> }.into_any()
        }
    }
}

/// Result of gating a route view.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Gated<V> {
    Render(V),
    Redirect(&'static str),
}

/// Decide for `pathname` and build the view only when navigation may proceed.
pub(crate) fn gate<C, V>(
    routes: &RouteTable,
    pathname: &str,
    credentials: &C,
    build: impl FnOnce() -> V,
) -> Gated<V>
where
    C: CredentialStore + ?Sized,
{
    match decide(&routes.resolve(pathname), credentials) {
        Decision::Proceed => Gated::Render(build()),
        Decision::RedirectTo(target) => Gated::Redirect(target),
    }
}

/// Redirects replace the denied entry so Back does not return to it.
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Router segment for an absolute client path.
pub(crate) fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}
