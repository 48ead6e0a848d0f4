// services/web-dash/src/pages/login.rs
//
// Login form (OAuth2 form-encoded credentials behind the scenes)
//

use leptos::*;

use apikit::SessionState;

use crate::auth::use_auth;

#[component]
pub fn LoginPage(show_register: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let session = auth.state;
    let form_error = auth.error;
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let busy = move || session.get() == SessionState::Loading;

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        auth.login(email.get(), password.get());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"PHARMADASH"</h1>
                <p class="auth-subtitle">"Sign in to your pharmacy"</p>

                <form class="auth-form" on:submit=submit>
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

                    {move || {
                        form_error
                            .get()
                            .map(|message| view! { <p class="form-error">{message}</p> })
                    }}

                    <button class="btn btn-primary" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <button class="btn-link" on:click=move |_| show_register.set(true)>
                    "No account yet? Register"
                </button>
            </div>
        </div>
    }
}
