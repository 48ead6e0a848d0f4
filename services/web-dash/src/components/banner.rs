// services/web-dash/src/components/banner.rs
//
// Placeholder-data banner
//

use leptos::*;

/// Raised by any view rendering placeholder data after a failed read,
/// so degraded numbers are never mistaken for live inventory.
#[component]
pub fn PlaceholderBanner(active: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || active.get() fallback=|| view! {}>
            <div class="placeholder-banner">
                <span class="placeholder-icon">"⚠"</span>
                <span class="placeholder-text">
                    "Backend unreachable — showing placeholder data, not live inventory."
                </span>
            </div>
        </Show>
    }
}
