//! Route-level screens.
//!
//! Pages stay thin shells; the guard in [`crate::app::Guarded`] decides
//! whether a protected page renders at all.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;

#[component]
fn PageShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <main class="page">
            <header class="page__header">
                <h1>{title}</h1>
            </header>
            <section class="page__body">{children()}</section>
        </main>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PageShell title="Zeta">
            <p>"Credit cards with buy now, pay later built in."</p>
            <nav class="page__actions">
                <A href=paths::LOGIN>"Sign in"</A>
                <A href=paths::REGISTER>"Create account"</A>
                <A href=paths::TERMS>"Terms"</A>
            </nav>
        </PageShell>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageShell title="Sign in">
            <p>"Sign in to manage your cards."</p>
            <A href=paths::REGISTER>"Need an account?"</A>
        </PageShell>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PageShell title="Create account">
            <A href=paths::LOGIN>"Already registered?"</A>
        </PageShell>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageShell title="Terms and conditions">
            <A href=paths::LANDING>"Back"</A>
        </PageShell>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <PageShell title="Dashboard">
            <nav class="page__actions">
                <A href=paths::CARD>"Cards"</A>
                <A href=paths::APPLY_CARD>"Apply for a card"</A>
                <A href=paths::APPLICATIONS>"Applications"</A>
                <A href=paths::TRANSACTIONS>"Transactions"</A>
                <A href=paths::PROFILE>"Profile"</A>
            </nav>
        </PageShell>
    }
}

#[component]
pub fn CardListPage() -> impl IntoView {
    view! {
        <PageShell title="Your cards">
            <p>"Active and blocked cards appear here."</p>
        </PageShell>
    }
}

#[component]
pub fn ApplyCardPage() -> impl IntoView {
    view! {
        <PageShell title="Apply for a card">
            <p>"Start a new card application."</p>
        </PageShell>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <PageShell title="Profile">
            <p>"Contact details and preferences."</p>
        </PageShell>
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <PageShell title="Card applications">
            <p>"Track the status of submitted applications."</p>
        </PageShell>
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    view! {
        <PageShell title="Transactions and BNPL">
            <p>"Purchases and installment plans."</p>
        </PageShell>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell title="Page not found">
            <A href=paths::LANDING>"Go home"</A>
        </PageShell>
    }
}
