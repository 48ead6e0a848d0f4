// services/web-dash/src/pages/waste.rs
//
// Waste analytics: expiry/damage buckets, top items, category split
//

use leptos::*;

use apikit::types::{CategoryWaste, WasteAnalytics, WasteItem};

use crate::auth::use_client;
use crate::components::{format_currency, format_number, BarChart, PlaceholderBanner, StatCard};
use crate::mock;
use crate::pages::{load, load_best_effort};

#[component]
pub fn WastePage() -> impl IntoView {
    let client = use_client();

    let analytics = create_rw_signal(None::<WasteAnalytics>);
    let top_items = create_rw_signal(None::<Vec<WasteItem>>);
    let by_category = create_rw_signal(None::<Vec<CategoryWaste>>);
    let placeholder = create_rw_signal(false);
    let page_error = create_rw_signal(None::<String>);

    {
        let c = client.clone();
        load_best_effort(analytics, placeholder, mock::waste_analytics, async move {
            c.waste_analytics(None).await
        });
        let c = client.clone();
        load(top_items, page_error, async move { c.top_waste_items(10).await });
        let c = client.clone();
        load(by_category, page_error, async move { c.waste_by_category().await });
    }

    let summary = move || analytics.get().unwrap_or_default();

    let category_bars = Signal::derive(move || {
        by_category
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|row| (row.category, row.value))
            .collect::<Vec<_>>()
    });

    let item_rows = move || top_items.get().unwrap_or_default();

    view! {
        <div class="page waste-page">
            <PlaceholderBanner active=placeholder.into() />

            <div class="page-header">
                <h1 class="page-title">"Waste Analytics"</h1>
            </div>

            {move || {
                page_error
                    .get()
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}

            <div class="stats-grid">
                <StatCard
                    label="Expired"
                    value=move || format_currency(summary().expired.value)
                    icon="⏱"
                    class_name="stat-error"
                />
                <StatCard
                    label="Damaged"
                    value=move || format_currency(summary().damaged.value)
                    icon="✗"
                    class_name="stat-warning"
                />
                <StatCard
                    label="Recalled"
                    value=move || format_currency(summary().recalled.value)
                    icon="↩"
                    class_name="stat-warning"
                />
                <StatCard
                    label="Total Waste"
                    value=move || format_currency(summary().total.value)
                    icon="⊘"
                    class_name="stat-error"
                />
                <StatCard
                    label="Wastage Rate"
                    value=move || format!("{:.2}%", summary().total.wastage_rate_percent)
                    icon="%"
                    class_name="stat-neutral"
                />
            </div>

            <div class="dashboard-grid">
                <section class="panel">
                    <h2 class="panel-title">"Waste by Category"</h2>
                    <BarChart bars=category_bars fill="#ef4444" />
                </section>

                <section class="panel">
                    <h2 class="panel-title">"Top Waste Items"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Medicine"</th>
                                <th>"Category"</th>
                                <th>"Units"</th>
                                <th>"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=item_rows
                                key=|item| item.medicine_name.clone()
                                children=|item| {
                                    view! {
                                        <tr>
                                            <td>{item.medicine_name.clone()}</td>
                                            <td>{item.category.clone().unwrap_or_default()}</td>
                                            <td>{format_number(item.quantity)}</td>
                                            <td>{format_currency(item.value)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}
