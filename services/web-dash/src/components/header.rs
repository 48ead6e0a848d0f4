// services/web-dash/src/components/header.rs
//
// Top bar: brand, unread alert badge, session controls
//

use leptos::*;
use leptos_router::A;

use apikit::SessionState;

use crate::auth::use_auth;
use crate::state::use_app_state;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let state = use_app_state();
    let session = auth.state;

    let user_label = move || match session.get() {
        SessionState::Authenticated(profile) => profile.full_name,
        SessionState::Loading => "...".to_string(),
        SessionState::Unauthenticated => String::new(),
    };

    let logout = {
        let auth = auth.clone();
        move |_| auth.logout()
    };

    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"⚕"</span>
                <h1 class="header-title">"PHARMADASH"</h1>
                <span class="header-subtitle">"Pharmacy Inventory Control"</span>
            </div>

            <div class="header-status">
                <A href="/alerts" class="alert-badge">
                    <span class="alert-badge-icon">"🔔"</span>
                    <span class="alert-badge-count">{move || state.unread_alerts.get()}</span>
                </A>
                <ConnectionIndicator />
            </div>

            <div class="header-actions">
                <span class="header-user">{user_label}</span>
                <button class="btn btn-logout" on:click=logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

#[component]
fn ConnectionIndicator() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class=move || {
            if state.backend_reachable.get() {
                "connection-status connected"
            } else {
                "connection-status disconnected"
            }
        }>
            {move || {
                if state.backend_reachable.get() {
                    "● Connected"
                } else {
                    "● Offline"
                }
            }}
        </div>
    }
}
