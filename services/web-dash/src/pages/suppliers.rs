// services/web-dash/src/pages/suppliers.rs
//
// Supplier CRUD and purchase orders
//

use leptos::*;

use apikit::types::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderItem, Supplier, SupplierPayload};

use crate::auth::use_client;
use crate::components::{format_currency, format_number, Modal};
use crate::pages::load;
use crate::state::use_app_state;

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let client = use_client();
    let state = use_app_state();

    let active_only = create_rw_signal(true);
    let suppliers = create_rw_signal(None::<Vec<Supplier>>);
    let orders = create_rw_signal(None::<Vec<PurchaseOrder>>);
    let page_error = create_rw_signal(None::<String>);

    let refresh = {
        let client = client.clone();
        move || {
            let c = client.clone();
            let active = active_only.get_untracked();
            load(suppliers, page_error, async move { c.suppliers(active).await });
            let c = client.clone();
            load(orders, page_error, async move {
                c.purchase_orders(None, None).await
            });
        }
    };
    refresh();

    // Supplier form modal (create or edit)
    let form_open = create_rw_signal(false);
    let editing_id = create_rw_signal(None::<i64>);
    let name = create_rw_signal(String::new());
    let contact_person = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let form_error = create_rw_signal(None::<String>);

    let open_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        contact_person.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        form_error.set(None);
        form_open.set(true);
    };

    let open_edit = move |supplier: Supplier| {
        editing_id.set(Some(supplier.id));
        name.set(supplier.name);
        contact_person.set(supplier.contact_person.unwrap_or_default());
        email.set(supplier.email.unwrap_or_default());
        phone.set(supplier.phone.unwrap_or_default());
        form_error.set(None);
        form_open.set(true);
    };

    let save_supplier = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |_| {
            let payload = SupplierPayload {
                name: name.get_untracked(),
                contact_person: non_empty(contact_person.get_untracked()),
                email: non_empty(email.get_untracked()),
                phone: non_empty(phone.get_untracked()),
                address: None,
                is_active: true,
            };
            if payload.name.is_empty() {
                form_error.set(Some("Name is required".to_string()));
                return;
            }
            let client = client.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = match editing_id.get_untracked() {
                    Some(id) => client.update_supplier(id, &payload).await,
                    None => client.create_supplier(&payload).await,
                };
                match result {
                    Ok(saved) => {
                        state.log("info", &format!("Supplier '{}' saved", saved.name));
                        form_open.set(false);
                        refresh();
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });
        }
    };

    let deactivate = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |id: i64| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.delete_supplier(id).await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        refresh();
                    }
                    Err(err) => {
                        state.log("error", &format!("Delete supplier failed: {}", err));
                        page_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    // Purchase-order modal: one line item keeps the form honest without
    // replicating a full procurement UI.
    let po_open = create_rw_signal(false);
    let po_supplier_id = create_rw_signal(String::new());
    let po_medicine_id = create_rw_signal(String::new());
    let po_quantity = create_rw_signal(String::new());
    let po_error = create_rw_signal(None::<String>);

    let create_po = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |_| {
            let (Ok(supplier_id), Ok(medicine_id), Ok(quantity)) = (
                po_supplier_id.get_untracked().parse::<i64>(),
                po_medicine_id.get_untracked().parse::<i64>(),
                po_quantity.get_untracked().parse::<i64>(),
            ) else {
                po_error.set(Some("Supplier, medicine and quantity must be numeric".to_string()));
                return;
            };
            let order = NewPurchaseOrder {
                supplier_id,
                items: vec![PurchaseOrderItem {
                    medicine_id,
                    quantity,
                    unit_price: None,
                }],
                notes: None,
            };
            let client = client.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.create_purchase_order(&order).await {
                    Ok(created) => {
                        state.log("info", &format!("Purchase order #{} created", created.id));
                        po_open.set(false);
                        refresh();
                    }
                    Err(err) => po_error.set(Some(err.to_string())),
                }
            });
        }
    };

    let supplier_rows = move || suppliers.get().unwrap_or_default();
    let order_rows = move || orders.get().unwrap_or_default();

    let active_toggled = {
        let refresh = refresh.clone();
        move |ev: ev::Event| {
            active_only.set(event_target_checked(&ev));
            refresh();
        }
    };

    view! {
        <div class="page suppliers-page">
            <div class="page-header">
                <h1 class="page-title">"Suppliers"</h1>
                <div class="row-actions">
                    <button class="btn" on:click=move |_| po_open.set(true)>
                        "New purchase order"
                    </button>
                    <button class="btn btn-primary" on:click=open_create>
                        "Add supplier"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <label class="checkbox">
                    <input type="checkbox" prop:checked=active_only on:change=active_toggled />
                    "Active only"
                </label>
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
                            <th>"Name"</th>
                            <th>"Contact"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=supplier_rows
                            key=|supplier| supplier.id
                            children={
                                let deactivate = deactivate.clone();
                                move |supplier| {
                                    let deactivate = deactivate.clone();
                                    let row = supplier.clone();
                                    let id = supplier.id;
                                    view! {
                                        <tr>
                                            <td>{supplier.name.clone()}</td>
                                            <td>{supplier.contact_person.clone().unwrap_or_default()}</td>
                                            <td>{supplier.email.clone().unwrap_or_default()}</td>
                                            <td>{supplier.phone.clone().unwrap_or_default()}</td>
                                            <td>{if supplier.is_active { "active" } else { "inactive" }}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| open_edit(row.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn-small btn-danger"
                                                    on:click=move |_| deactivate(id)
                                                >
                                                    "Deactivate"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Purchase Orders"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Supplier"</th>
                            <th>"Status"</th>
                            <th>"Items"</th>
                            <th>"Total"</th>
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
                                        <td>
                                            {order
                                                .supplier_name
                                                .clone()
                                                .unwrap_or_else(|| order.supplier_id.to_string())}
                                        </td>
                                        <td>{order.status.clone()}</td>
                                        <td>{format_number(order.items.len() as i64)}</td>
                                        <td>{order.total_amount.map(format_currency).unwrap_or_default()}</td>
                                        <td>{order.created_at.format("%Y-%m-%d").to_string()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <Modal title="Supplier" open=form_open>
                <label class="field">
                    <span class="field-label">"Name"</span>
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Contact person"</span>
                    <input
                        type="text"
                        prop:value=contact_person
                        on:input=move |ev| contact_person.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Phone"</span>
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

                <button class="btn btn-primary" on:click=save_supplier>
                    "Save"
                </button>
            </Modal>

            <Modal title="New purchase order" open=po_open>
                <label class="field">
                    <span class="field-label">"Supplier id"</span>
                    <input
                        type="number"
                        prop:value=po_supplier_id
                        on:input=move |ev| po_supplier_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Medicine id"</span>
                    <input
                        type="number"
                        prop:value=po_medicine_id
                        on:input=move |ev| po_medicine_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Quantity"</span>
                    <input
                        type="number"
                        prop:value=po_quantity
                        on:input=move |ev| po_quantity.set(event_target_value(&ev))
                    />
                </label>

                {move || {
                    po_error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                <button class="btn btn-primary" on:click=create_po>
                    "Create order"
                </button>
            </Modal>
        </div>
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
