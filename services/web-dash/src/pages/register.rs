// services/web-dash/src/pages/register.rs
//
// Registration form; auto-logs-in on success
//

use leptos::*;

use apikit::types::NewUser;
use apikit::SessionState;

use crate::auth::use_auth;

#[component]
pub fn RegisterPage(show_register: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let session = auth.state;
    let form_error = auth.error;

    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());

    let busy = move || session.get() == SessionState::Loading;

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let phone = phone.get();
        auth.register(NewUser {
            email: email.get(),
            password: password.get(),
            full_name: full_name.get(),
            role: None,
            phone: (!phone.is_empty()).then_some(phone),
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Create account"</h1>

                <form class="auth-form" on:submit=submit>
                    <label class="field">
                        <span class="field-label">"Full name"</span>
                        <input
                            type="text"
                            prop:value=full_name
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                            required
                        />
                    </label>

                    <label class="field">
                        <span class="field-label">"Email"</span>
                        <input
                            type="email"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </label>

                    <label class="field">
                        <span class="field-label">"Password"</span>
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </label>

                    <label class="field">
                        <span class="field-label">"Phone (optional)"</span>
                        <input
                            type="tel"
                            prop:value=phone
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        form_error
                            .get()
                            .map(|message| view! { <p class="form-error">{message}</p> })
                    }}

                    <button class="btn btn-primary" type="submit" disabled=busy>
                        {move || if busy() { "Creating..." } else { "Register" }}
                    </button>
                </form>

                <button class="btn-link" on:click=move |_| show_register.set(false)>
                    "Back to sign in"
                </button>
            </div>
        </div>
    }
}
