// services/web-dash/src/pages/orders.rs
//
// Prescription orders: list, create, prescription upload
//

use leptos::*;

use apikit::types::{NewOrder, PrescriptionOrder};

use crate::auth::use_client;
use crate::components::Modal;
use crate::pages::load;
use crate::state::use_app_state;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let client = use_client();
    let state = use_app_state();

    let orders = create_rw_signal(None::<Vec<PrescriptionOrder>>);
    let page_error = create_rw_signal(None::<String>);

    let refresh = {
        let client = client.clone();
        move || {
            let c = client.clone();
            load(orders, page_error, async move { c.orders().await });
        }
    };
    refresh();

    // New order modal
    let form_open = create_rw_signal(false);
    let customer_name = create_rw_signal(String::new());
    let contact_info = create_rw_signal(String::new());
    let notification_method = create_rw_signal("sms".to_string());
    let notes = create_rw_signal(String::new());
    let prescription = create_rw_signal(None::<gloo_file::File>);
    let form_error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);

    let pick_prescription = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        prescription.set(
            input
                .files()
                .and_then(|files| files.get(0))
                .map(gloo_file::File::from),
        );
        form_error.set(None);
    };

    let submit_order = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |_| {
            if customer_name.get_untracked().is_empty() || contact_info.get_untracked().is_empty() {
                form_error.set(Some("Customer name and contact are required".to_string()));
                return;
            }
            let client = client.clone();
            let refresh = refresh.clone();
            busy.set(true);
            form_error.set(None);
            spawn_local(async move {
                // Optional prescription file goes up first; its stored
                // path rides along on the order itself.
                let mut image_path = None;
                if let Some(file) = prescription.get_untracked() {
                    let uploaded = match gloo_file::futures::read_as_bytes(&file).await {
                        Ok(contents) => client.upload_prescription(&file.name(), contents).await,
                        Err(err) => {
                            busy.set(false);
                            form_error.set(Some(format!("Could not read file: {}", err)));
                            return;
                        }
                    };
                    match uploaded {
                        Ok(stored) => image_path = Some(stored.file_path),
                        Err(err) => {
                            busy.set(false);
                            form_error.set(Some(err.to_string()));
                            return;
                        }
                    }
                }

                let order = NewOrder {
                    customer_name: customer_name.get_untracked(),
                    contact_info: contact_info.get_untracked(),
                    notification_method: notification_method.get_untracked(),
                    prescription_image_path: image_path,
                    notes: {
                        let n = notes.get_untracked();
                        (!n.is_empty()).then_some(n)
                    },
                };
                let result = client.create_order(&order).await;
                busy.set(false);
                match result {
                    Ok(created) => {
                        state.log("info", &format!("Order #{} created", created.id));
                        form_open.set(false);
                        customer_name.set(String::new());
                        contact_info.set(String::new());
                        notes.set(String::new());
                        prescription.set(None);
                        refresh();
                    }
                    Err(err) => {
                        state.log("error", &format!("Create order failed: {}", err));
                        form_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let order_rows = move || orders.get().unwrap_or_default();

    view! {
        <div class="page orders-page">
            <div class="page-header">
                <h1 class="page-title">"Orders"</h1>
                <button class="btn btn-primary" on:click=move |_| form_open.set(true)>
                    "New order"
                </button>
            </div>

            {move || {
                page_error
                    .get()
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}

            <section class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Customer"</th>
                            <th>"Contact"</th>
                            <th>"Notify via"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=order_rows
                            key=|order| order.id
                            children=|order| {
                                view! {
                                    <tr>
                                        <td>{order.id}</td>
                                        <td>{order.customer_name.clone()}</td>
                                        <td>{order.contact_info.clone()}</td>
                                        <td>{order.notification_method.clone()}</td>
                                        <td>{order.status.clone()}</td>
                                        <td>{order.created_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <Modal title="New prescription order" open=form_open>
                <label class="field">
                    <span class="field-label">"Customer name"</span>
                    <input
                        type="text"
                        prop:value=customer_name
                        on:input=move |ev| customer_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Contact (phone or email)"</span>
                    <input
                        type="text"
                        prop:value=contact_info
                        on:input=move |ev| contact_info.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Notify via"</span>
                    <select on:change=move |ev| notification_method.set(event_target_value(&ev))>
                        <option value="sms">"SMS"</option>
                        <option value="email">"Email"</option>
                        <option value="whatsapp">"WhatsApp"</option>
                    </select>
                </label>
                <label class="field">
                    <span class="field-label">"Notes"</span>
                    <input
                        type="text"
                        prop:value=notes
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Prescription file (optional)"</span>
                    <input type="file" accept=".xlsx,.xls,.csv,.json" on:change=pick_prescription />
                </label>

                {move || {
                    form_error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                <Show when=move || busy.get() fallback=|| view! {}>
                    <div class="spinner" title="Submitting..."></div>
                </Show>

                <button class="btn btn-primary" disabled=move || busy.get() on:click=submit_order>
                    "Create order"
                </button>
            </Modal>
        </div>
    }
}
