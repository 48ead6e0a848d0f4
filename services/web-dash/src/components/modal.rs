// services/web-dash/src/components/modal.rs
//
// Modal dialog wrapper. Children render once; visibility is a class
// toggle so handlers inside the body are set up a single time.
//

use leptos::*;

#[component]
pub fn Modal(title: &'static str, open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-overlay" class:hidden=move || !open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)></div>
            <div class="modal">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" on:click=move |_| open.set(false)>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
