// services/web-dash/src/app.rs
//
// Application shell: context wiring, auth gate, routes
//

use std::rc::Rc;
use std::sync::Arc;

use leptos::*;
use leptos_router::{Route, Router, Routes, A};

use apikit::gateway::token::TokenStore;
use apikit::{GatewayConfig, PharmClient, SessionState};

use crate::auth::{use_auth, use_client, Auth};
use crate::components::Header;
use crate::pages::{
    AlertsPage, ChatbotPage, DashboardPage, ForecastingPage, InventoryPage, LoginPage, OrdersPage,
    RegisterPage, SuppliersPage, WastePage,
};
use crate::poll::{start_polling, ALERT_POLL_MS};
use crate::state::{use_app_state, AppState};

fn token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(apikit::gateway::token::browser::BrowserTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(apikit::MemoryTokenStore::new())
    }
}

#[component]
pub fn App() -> impl IntoView {
    let client = Rc::new(PharmClient::new(GatewayConfig::default(), token_store()));
    let auth = Auth::new(client.gateway());
    let state = AppState::new();

    provide_context(client);
    provide_context(auth.clone());
    provide_context(state);

    // Confirm any persisted token before rendering the shell.
    auth.initialize();
    let session = auth.state;

    view! {
        <Show
            when=move || matches!(session.get(), SessionState::Authenticated(_))
            fallback=move || view! { <AuthGate /> }
        >
            <Shell />
        </Show>
    }
}

/// Login/register switch shown whenever there is no confirmed session.
#[component]
fn AuthGate() -> impl IntoView {
    let auth = use_auth();
    let session = auth.state;
    let show_register = create_rw_signal(false);

    view! {
        <Show
            when=move || session.get() != SessionState::Loading
            fallback=|| view! { <div class="auth-splash">"Restoring session..."</div> }
        >
            <Show
                when=move || show_register.get()
                fallback=move || view! { <LoginPage show_register=show_register /> }
            >
                <RegisterPage show_register=show_register />
            </Show>
        </Show>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let client = use_client();
    let state = use_app_state();

    // Header badge + connectivity indicator stay fresh for as long as
    // the authenticated shell is mounted.
    {
        let client = client.clone();
        start_polling(ALERT_POLL_MS, move || {
            let client = client.clone();
            spawn_local(async move {
                match client.alert_stats().await {
                    Ok(stats) => {
                        state.backend_reachable.set(true);
                        state.unread_alerts.set(stats.unacknowledged);
                    }
                    Err(err) => {
                        log::warn!("alert stats poll failed: {}", err);
                        state.backend_reachable.set(false);
                    }
                }
            });
        });
    }

    view! {
        <Router>
            <div class="app-shell">
                <Header />

                <div class="shell-body">
                    <nav class="sidenav">
                        <A href="/" exact=true>"Dashboard"</A>
                        <A href="/inventory">"Inventory"</A>
                        <A href="/forecasting">"Forecasting"</A>
                        <A href="/alerts">"Alerts"</A>
                        <A href="/suppliers">"Suppliers"</A>
                        <A href="/orders">"Orders"</A>
                        <A href="/waste">"Waste"</A>
                        <A href="/assistant">"Assistant"</A>
                    </nav>

                    <main class="content">
                        <Routes>
                            <Route path="/" view=DashboardPage />
                            <Route path="/inventory" view=InventoryPage />
                            <Route path="/forecasting" view=ForecastingPage />
                            <Route path="/alerts" view=AlertsPage />
                            <Route path="/suppliers" view=SuppliersPage />
                            <Route path="/orders" view=OrdersPage />
                            <Route path="/waste" view=WastePage />
                            <Route path="/assistant" view=ChatbotPage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
