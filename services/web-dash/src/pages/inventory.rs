// services/web-dash/src/pages/inventory.rs
//
// Medicine catalogue, stock levels, batch detail, bulk upload
//

use leptos::*;

use apikit::types::{AnalysisReport, Batch, Medicine, MedicineFilter, PriceComparison, StockLevel};

use crate::auth::use_client;
use crate::components::{format_currency, format_number, Modal, PlaceholderBanner};
use crate::mock;
use crate::pages::{load, load_best_effort};
use crate::state::use_app_state;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let client = use_client();
    let state = use_app_state();

    let search = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());

    let medicines = create_rw_signal(None::<Vec<Medicine>>);
    let stock = create_rw_signal(None::<Vec<StockLevel>>);
    let categories = create_rw_signal(None::<Vec<String>>);
    let placeholder = create_rw_signal(false);
    let page_error = create_rw_signal(None::<String>);

    let refresh = {
        let client = client.clone();
        move || {
            let filter = MedicineFilter {
                search: {
                    let s = search.get_untracked();
                    (!s.is_empty()).then_some(s)
                },
                category: {
                    let c = category.get_untracked();
                    (!c.is_empty()).then_some(c)
                },
            };
            let c = client.clone();
            load_best_effort(medicines, placeholder, mock::medicines, async move {
                c.medicines(&filter).await
            });
            let c = client.clone();
            load_best_effort(stock, placeholder, mock::stock_levels, async move {
                c.stock_levels(false).await
            });
            let c = client.clone();
            load(categories, page_error, async move { c.categories().await });
        }
    };
    refresh();

    // Margin view and the server's free-text analysis, loaded once.
    let prices = create_rw_signal(None::<Vec<PriceComparison>>);
    let analysis = create_rw_signal(None::<AnalysisReport>);
    {
        let c = client.clone();
        load(prices, page_error, async move { c.price_comparison().await });
        let c = client.clone();
        load(analysis, page_error, async move { c.analysis_report().await });
    }

    // Upload modal state
    let upload_open = create_rw_signal(false);
    let upload_file = create_rw_signal(None::<gloo_file::File>);
    let upload_busy = create_rw_signal(false);
    let upload_error = create_rw_signal(None::<String>);

    let pick_file = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .map(gloo_file::File::from);
        upload_file.set(file);
        upload_error.set(None);
    };

    let do_upload = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |_| {
            let Some(file) = upload_file.get_untracked() else {
                upload_error.set(Some("Choose a file first".to_string()));
                return;
            };
            let client = client.clone();
            let refresh = refresh.clone();
            upload_busy.set(true);
            upload_error.set(None);
            spawn_local(async move {
                let result = match gloo_file::futures::read_as_bytes(&file).await {
                    Ok(contents) => client.upload_inventory(&file.name(), contents).await,
                    Err(err) => {
                        upload_busy.set(false);
                        upload_error.set(Some(format!("Could not read file: {}", err)));
                        return;
                    }
                };
                upload_busy.set(false);
                match result {
                    Ok(report) => {
                        state.log(
                            "info",
                            &format!(
                                "Upload completed: {} rows imported, {} errors",
                                report.success_count, report.error_count
                            ),
                        );
                        for row_error in &report.errors {
                            state.log("warn", row_error);
                        }
                        upload_open.set(false);
                        upload_file.set(None);
                        refresh();
                    }
                    // Mutations never degrade silently; the failure is
                    // shown in the modal and logged.
                    Err(err) => {
                        state.log("error", &format!("Inventory upload failed: {}", err));
                        upload_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    // Batch detail modal
    let batch_open = create_rw_signal(false);
    let batch_medicine = create_rw_signal(None::<Medicine>);
    let batches = create_rw_signal(None::<Vec<Batch>>);

    let open_batches = {
        let client = client.clone();
        move |medicine: Medicine| {
            let id = medicine.id;
            batch_medicine.set(Some(medicine));
            batches.set(None);
            batch_open.set(true);
            let c = client.clone();
            load(batches, page_error, async move { c.batches(id).await });
        }
    };

    let reload_batches = {
        let client = client.clone();
        move || {
            if let Some(medicine) = batch_medicine.get_untracked() {
                let c = client.clone();
                load(batches, page_error, async move { c.batches(medicine.id).await });
            }
        }
    };

    let mark_expired = {
        let client = client.clone();
        let reload_batches = reload_batches.clone();
        move |batch_id: i64| {
            let client = client.clone();
            let reload_batches = reload_batches.clone();
            spawn_local(async move {
                match client.mark_batch_expired(batch_id).await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        reload_batches();
                    }
                    Err(err) => state.log("error", &format!("Mark expired failed: {}", err)),
                }
            });
        }
    };

    let mark_damaged = {
        let client = client.clone();
        let reload_batches = reload_batches.clone();
        move |batch_id: i64| {
            let client = client.clone();
            let reload_batches = reload_batches.clone();
            spawn_local(async move {
                match client.mark_batch_damaged(batch_id).await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        reload_batches();
                    }
                    Err(err) => state.log("error", &format!("Mark damaged failed: {}", err)),
                }
            });
        }
    };

    let delete_medicine = {
        let client = client.clone();
        let refresh = refresh.clone();
        move |id: i64| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match client.delete_medicine(id).await {
                    Ok(outcome) => {
                        state.log("info", &outcome.message);
                        refresh();
                    }
                    Err(err) => state.log("error", &format!("Delete failed: {}", err)),
                }
            });
        }
    };

    let medicine_rows = move || medicines.get().unwrap_or_default();
    let stock_rows = move || stock.get().unwrap_or_default();
    let category_options = move || categories.get().unwrap_or_default();

    let search_changed = {
        let refresh = refresh.clone();
        move |ev: ev::Event| {
            search.set(event_target_value(&ev));
            refresh();
        }
    };
    let category_changed = {
        let refresh = refresh.clone();
        move |ev: ev::Event| {
            category.set(event_target_value(&ev));
            refresh();
        }
    };

    view! {
        <div class="page inventory-page">
            <PlaceholderBanner active=placeholder.into() />

            <div class="page-header">
                <h1 class="page-title">"Inventory"</h1>
                <button class="btn btn-primary" on:click=move |_| upload_open.set(true)>
                    "Upload spreadsheet"
                </button>
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search by name or SKU"
                    prop:value=search
                    on:input=search_changed
                />
                <select on:change=category_changed>
                    <option value="">"All categories"</option>
                    <For
                        each=category_options
                        key=|name| name.clone()
                        children=|name| {
                            view! { <option value=name.clone()>{name.clone()}</option> }
                        }
                    />
                </select>
            </div>

            {move || {
                page_error
                    .get()
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}

            <section class="panel">
                <h2 class="panel-title">"Medicines"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"MRP"</th>
                            <th>"Cost"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=medicine_rows
                            key=|medicine| medicine.id
                            children={
                                let open_batches = open_batches.clone();
                                let delete_medicine = delete_medicine.clone();
                                move |medicine| {
                                    let open_batches = open_batches.clone();
                                    let delete_medicine = delete_medicine.clone();
                                    let row = medicine.clone();
                                    let id = medicine.id;
                                    view! {
                                        <tr>
                                            <td>{medicine.sku.clone()}</td>
                                            <td>{medicine.name.clone()}</td>
                                            <td>{medicine.category.clone().unwrap_or_default()}</td>
                                            <td>{medicine.mrp.map(format_currency).unwrap_or_default()}</td>
                                            <td>{medicine.cost.map(format_currency).unwrap_or_default()}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| open_batches(row.clone())
                                                >
                                                    "Batches"
                                                </button>
                                                <button
                                                    class="btn btn-small btn-danger"
                                                    on:click=move |_| delete_medicine(id)
                                                >
                                                    "Delete"
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
                <h2 class="panel-title">"Stock Levels"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"Units"</th>
                            <th>"Nearest Expiry"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=stock_rows
                            key=|row| row.medicine_id
                            children=|row| {
                                let low = row.total_quantity < 15;
                                view! {
                                    <tr class=if low { "row-low-stock" } else { "" }>
                                        <td>{row.sku.clone()}</td>
                                        <td>{row.name.clone()}</td>
                                        <td>{format_number(row.total_quantity)}</td>
                                        <td>
                                            {row.nearest_expiry
                                                .map(|d| d.format("%Y-%m-%d").to_string())
                                                .unwrap_or_default()}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Price Comparison"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"Cost"</th>
                            <th>"MRP"</th>
                            <th>"Margin"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || prices.get().unwrap_or_default()
                            key=|row| row.medicine_id
                            children=|row| {
                                view! {
                                    <tr>
                                        <td>{row.sku.clone()}</td>
                                        <td>{row.name.clone()}</td>
                                        <td>{row.cost.map(format_currency).unwrap_or_default()}</td>
                                        <td>{row.mrp.map(format_currency).unwrap_or_default()}</td>
                                        <td>
                                            {row.margin_percent
                                                .map(|m| format!("{:.1}%", m))
                                                .unwrap_or_default()}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            {move || {
                analysis.get().map(|report| {
                    view! {
                        <section class="panel">
                            <h2 class="panel-title">"Analysis Report"</h2>
                            <p class="forecast-reasoning">{report.analysis}</p>
                        </section>
                    }
                })
            }}

            <Modal title="Upload inventory" open=upload_open>
                <p class="modal-hint">
                    "Accepted: .xlsx, .xls, .csv, .json up to 10 MB. Columns: SKU, \
                     Medicine Name, Batch No, Quantity, Expiry Date."
                </p>
                <input type="file" accept=".xlsx,.xls,.csv,.json" on:change=pick_file />

                {move || {
                    upload_error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                // Indeterminate busy state; the transport gives no
                // usable progress events, so no percentage is claimed.
                <Show when=move || upload_busy.get() fallback=|| view! {}>
                    <div class="spinner" title="Uploading..."></div>
                </Show>

                <button
                    class="btn btn-primary"
                    disabled=move || upload_busy.get()
                    on:click=do_upload
                >
                    "Upload"
                </button>
            </Modal>

            <Modal title="Batches" open=batch_open>
                <p class="modal-hint">
                    {move || {
                        batch_medicine
                            .get()
                            .map(|m| format!("{} ({})", m.name, m.sku))
                            .unwrap_or_default()
                    }}
                </p>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Batch"</th>
                            <th>"Qty"</th>
                            <th>"Expiry"</th>
                            <th>"State"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || batches.get().unwrap_or_default()
                            key=|batch| batch.id
                            children={
                                let mark_expired = mark_expired.clone();
                                let mark_damaged = mark_damaged.clone();
                                move |batch| {
                                    let mark_expired = mark_expired.clone();
                                    let mark_damaged = mark_damaged.clone();
                                    let id = batch.id;
                                    let flag = if batch.is_expired {
                                        "expired"
                                    } else if batch.is_damaged {
                                        "damaged"
                                    } else {
                                        "ok"
                                    };
                                    view! {
                                        <tr>
                                            <td>{batch.batch_number.clone()}</td>
                                            <td>{format_number(batch.quantity)}</td>
                                            <td>{batch.expiry_date.format("%Y-%m-%d").to_string()}</td>
                                            <td class=format!("batch-{}", flag)>{flag}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| mark_expired(id)
                                                >
                                                    "Mark expired"
                                                </button>
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| mark_damaged(id)
                                                >
                                                    "Mark damaged"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>
            </Modal>
        </div>
    }
}
